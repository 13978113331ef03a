//! Unified error types for odsgrid.
//!
//! Fatal errors (container, content type, malformed XML) abort a parse and are
//! reported through [`Error`]. Malformed style literals are not fatal; they are
//! reported through [`LiteralError`] and collected as diagnostics by the grid
//! materializer.
use thiserror::Error;

/// Main error type for odsgrid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The package is a valid OpenDocument container, but not a spreadsheet
    #[error("Not a spreadsheet: MIME type is '{mime_type}'")]
    NotSpreadsheet { mime_type: String },

    /// Package part not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),
}

/// Result type for odsgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A malformed unit, size, or color literal in a style attribute.
///
/// These never abort a parse: the attribute falls back to its zero value and the
/// error is surfaced as a [`Diagnostic`](crate::common::Diagnostic).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Length literal with a unit other than `cm` or `pt`
    #[error("unknown unit in length '{0}'")]
    UnknownUnit(String),

    /// Numeric part of a length or size literal does not parse
    #[error("invalid number in '{0}'")]
    InvalidNumber(String),

    /// Color literal is not `#RGB` or `#RRGGBB`
    #[error("invalid hex color '{0}'")]
    InvalidColor(String),
}

impl LiteralError {
    /// The offending literal, as it appeared in the document.
    pub fn literal(&self) -> &str {
        match self {
            Self::UnknownUnit(s) | Self::InvalidNumber(s) | Self::InvalidColor(s) => s,
        }
    }
}
