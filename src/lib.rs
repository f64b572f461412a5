//! # nmlgraph
//!
//! Connectivity diagrams for NeuroML connectome descriptions.
//!
//! This library provides:
//! - Discovery of `.nml` model files in a directory tree
//! - A parser-independent element tree for the XML models
//! - Extraction of neuron populations and their electrical and chemical
//!   projections, with muscle populations left out
//! - Graphviz DOT output and image rendering through an external layout
//!   program
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`discover`] - Finding model files
//! - [`model`] - XML parsing into an [`Element`](model::Element) tree
//! - [`graph`] - Population and projection extraction
//! - [`dot`] - DOT serialization
//! - [`render`] - External renderer invocation
//! - [`pipeline`] - Per-file orchestration
//!
//! ## Usage
//!
//! ```bash
//! nmlgraph models/ connectome.gv connectome.png          # top level only
//! nmlgraph models/ connectome.gv connectome.png recurse  # whole tree
//! ```
//!
//! ## Drawing conventions
//!
//! Every non-muscle population becomes a node. Electrical projections are
//! drawn with a tee arrowhead. Chemical projections get one edge per synapse
//! instance, red when the synapse component is inhibitory.

pub mod discover;
pub mod dot;
pub mod error;
pub mod graph;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export main types for convenience
pub use error::{NmlGraphError, Result};
pub use graph::Connectome;
pub use pipeline::{Config, Pipeline};

/// Process exit status for an incomplete command line
pub const USAGE_EXIT_CODE: i32 = -1;
