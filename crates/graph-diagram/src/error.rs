//! Error types for graph diagram operations.
//!
//! This module provides the main error type [`GraphDiagramError`] which wraps
//! the error conditions that can occur while reading and rendering diagrams.
//! Binding itself cannot fail.

use std::io;

use thiserror::Error;

use graph_diagram_markup::ParseError;

/// The main error type for graph diagram operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the markup source next to the structured
/// diagnostics so that callers can render labeled source snippets.
#[derive(Debug, Error)]
pub enum GraphDiagramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl GraphDiagramError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
