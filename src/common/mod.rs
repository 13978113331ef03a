//! Common types and utilities shared across the spreadsheet pipeline.
//!
//! This module holds the pieces that do not depend on the OpenDocument schema:
//! error types, unit and color literal parsing, and style diagnostics.

// Submodule declarations
pub mod color;
pub mod diagnostics;
pub mod error;
pub mod unit;

// Re-exports for convenience
pub use color::{Rgba, parse_hex_color};
pub use diagnostics::{AttributeIssue, Diagnostic, StyleAttribute};
pub use error::{Error, LiteralError, Result};
pub use unit::{size_to_points, to_mm};
