//! Error and diagnostic system for the markup reader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. All diagnostics raised while reading a document
//! are wrapped in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use graph_diagram_markup::error::{Diagnostic, ErrorCode};
//! # use graph_diagram_markup::Span;
//!
//! let reference = Span::new(100..140);
//! let declaration = Span::new(20..60);
//!
//! let diag = Diagnostic::error("relationship refers to undeclared node `c`")
//!     .with_code(ErrorCode::E201)
//!     .with_label(reference, "referenced here")
//!     .with_secondary_label(declaration, "nodes are declared like this")
//!     .with_help("add an element with class `graph-diagram-node` and `data-node-id=\"c\"`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
