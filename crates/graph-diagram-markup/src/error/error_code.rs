//! Error codes for the markup diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Document errors
//! - `E2xx` - Declaration errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E1xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The source is not well-formed XML, or it does not have a single root
    /// element.
    E100,

    // =========================================================================
    // Declaration Errors (E2xx)
    // =========================================================================
    /// Missing relationship endpoint.
    ///
    /// An element declaring a relationship lacks `data-from` or `data-to`.
    E200,

    /// Undeclared node reference.
    ///
    /// A relationship endpoint names a node that no element declares.
    E201,

    /// Invalid scale.
    ///
    /// A `data-internal-scale` or `data-external-scale` value is not a
    /// positive finite number.
    E202,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Document errors
            ErrorCode::E100 => "E100",
            // Declaration errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "malformed document",
            ErrorCode::E200 => "missing relationship endpoint",
            ErrorCode::E201 => "undeclared node",
            ErrorCode::E202 => "invalid scale",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
