//! Non-fatal problems found while resolving cell styles.

use super::error::LiteralError;
use std::fmt;

/// The resolved attribute a malformed literal was destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttribute {
    Width,
    Height,
    BackgroundColor,
    FontColor,
    FontSize,
    Padding,
}

impl StyleAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::BackgroundColor => "background-color",
            Self::FontColor => "font-color",
            Self::FontSize => "font-size",
            Self::Padding => "padding",
        }
    }
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute that fell back to its zero value during style resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeIssue {
    pub attribute: StyleAttribute,
    pub error: LiteralError,
}

impl AttributeIssue {
    #[inline]
    pub fn new(attribute: StyleAttribute, error: LiteralError) -> Self {
        Self { attribute, error }
    }
}

/// An [`AttributeIssue`] located in the materialized grid.
///
/// `row` and `column` are 0-based logical positions of the first materialized
/// copy of the affected cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub row: usize,
    pub column: usize,
    pub attribute: StyleAttribute,
    pub error: LiteralError,
}

impl Diagnostic {
    pub fn at(row: usize, column: usize, issue: AttributeIssue) -> Self {
        Self {
            row,
            column,
            attribute: issue.attribute,
            error: issue.error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}, column {}: {}: {}",
            self.row, self.column, self.attribute, self.error
        )
    }
}
