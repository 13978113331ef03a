//! Unit conversion utilities.
//!
//! OpenDocument stores lengths as literals with a unit suffix (`"2.258cm"`,
//! `"10pt"`). The grid works in millimeters for distances and points for font
//! sizes; this module converts between the two.

use super::error::LiteralError;
use std::fmt;

/// Millimeters per centimeter.
pub const MM_PER_CM: f64 = 10.0;
/// Millimeters per typographic point (1/72 inch).
pub const MM_PER_PT: f64 = 0.3527777778;

/// Length units accepted in distance literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    /// Centimeter
    Centimeter,
    /// Point (1/72 inch)
    Point,
}

impl LengthUnit {
    /// Get the unit abbreviation
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Point => "pt",
        }
    }

    /// Millimeters per one unit
    #[inline]
    pub fn mm_factor(&self) -> f64 {
        match self {
            Self::Centimeter => MM_PER_CM,
            Self::Point => MM_PER_PT,
        }
    }

    /// Split a literal into its numeric prefix and unit.
    fn split(literal: &str) -> Option<(&str, Self)> {
        [Self::Centimeter, Self::Point]
            .into_iter()
            .find_map(|unit| literal.strip_suffix(unit.as_str()).map(|num| (num, unit)))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
fn parse_number(number: &str, literal: &str) -> Result<f64, LiteralError> {
    fast_float2::parse::<f64, _>(number).map_err(|_| LiteralError::InvalidNumber(literal.to_string()))
}

/// Convert a distance literal to millimeters.
///
/// An empty literal is an unset distance and converts to `0.0`.
///
/// # Examples
///
/// ```
/// use odsgrid::common::unit::to_mm;
///
/// assert_eq!(to_mm("2cm").unwrap(), 20.0);
/// assert!((to_mm("72pt").unwrap() - 25.4).abs() < 1e-6);
/// assert_eq!(to_mm("").unwrap(), 0.0);
/// assert!(to_mm("5in").is_err());
/// ```
pub fn to_mm(literal: &str) -> Result<f64, LiteralError> {
    if literal.is_empty() {
        return Ok(0.0);
    }
    let (number, unit) =
        LengthUnit::split(literal).ok_or_else(|| LiteralError::UnknownUnit(literal.to_string()))?;
    Ok(parse_number(number, literal)? * unit.mm_factor())
}

/// Convert a font-size literal (`"10pt"` or a bare number) to points.
///
/// An empty literal converts to `0.0`.
pub fn size_to_points(literal: &str) -> Result<f64, LiteralError> {
    if literal.is_empty() {
        return Ok(0.0);
    }
    let number = literal.strip_suffix("pt").unwrap_or(literal);
    parse_number(number, literal)
}
