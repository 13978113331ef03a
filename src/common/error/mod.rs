//! Unified error types for odsgrid.
//!
//! This module provides the crate error type for fatal failures and the literal
//! error type for recoverable style-attribute failures.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, LiteralError, Result};
