//! Error types for nmlgraph.
//!
//! This module provides a unified error type [`NmlGraphError`] that covers
//! all error conditions that can occur during file discovery, model parsing,
//! graph extraction, graph writing and rendering.

use std::path::Path;

use thiserror::Error;

/// Result type alias using [`NmlGraphError`].
pub type Result<T> = std::result::Result<T, NmlGraphError>;

/// Origin reported for models parsed from an in-memory string.
pub const STRING_ORIGIN: &str = "<string>";

/// Unified error type for all nmlgraph operations.
#[derive(Error, Debug)]
pub enum NmlGraphError {
    // ============ Invocation Errors ============
    /// Insufficient or malformed command line
    #[error("Usage error: {message}")]
    UsageError { message: String },

    // ============ Model Errors ============
    /// Model file is not well-formed XML
    #[error("Failed to parse model file '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: roxmltree::Error,
    },

    /// Matched element lacks an attribute the extractor needs
    #[error("Element <{tag}> in '{path}' is missing required attribute '{attribute}'")]
    MissingAttributeError {
        path: String,
        tag: String,
        attribute: String,
    },

    // ============ Rendering Errors ============
    /// External layout program missing or failed
    #[error("Renderer '{program}' failed: {message}")]
    RendererError { program: String, message: String },

    // ============ I/O Errors ============
    /// Error walking or listing the input directory
    #[error("Failed to scan directory '{path}': {message}")]
    DiscoveryError { path: String, message: String },

    /// Error reading a model file
    #[error("Failed to read model file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a graph or image file
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl NmlGraphError {
    /// Create a missing attribute error for an element of an in-memory model
    pub fn missing_attribute(tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttributeError {
            path: STRING_ORIGIN.to_string(),
            tag: tag.into(),
            attribute: attribute.into(),
        }
    }

    /// Create a renderer error
    pub fn renderer(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RendererError {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Create a discovery error
    pub fn discovery(path: &Path, message: impl ToString) -> Self {
        Self::DiscoveryError {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// Attach the model file a missing attribute was found in.
    ///
    /// Other variants already carry their path and are returned unchanged.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Self::MissingAttributeError { tag, attribute, .. } => Self::MissingAttributeError {
                path: file.display().to_string(),
                tag,
                attribute,
            },
            other => other,
        }
    }
}
