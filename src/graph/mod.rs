//! Connectome graph extraction.
//!
//! This module turns a parsed model tree into the nodes and edges that get
//! drawn. The [`Connectome`] struct holds one file's graph in the order the
//! elements appear in the document.

mod connectome;
mod extract;
mod types;

pub use connectome::Connectome;
pub use extract::{
    extract_chemical, extract_electrical, extract_populations, CHEMICAL_PROJECTION_TAG,
    ELECTRICAL_PROJECTION_TAG, POPULATION_TAG,
};
pub use types::*;
