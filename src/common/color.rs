use super::error::LiteralError;
use serde::Serialize;
use std::fmt;

/// RGBA color representation.
///
/// Colors parsed from a document are always fully opaque; the alpha channel
/// is kept so renderers can composite without a conversion step.
///
/// # Examples
///
/// ```rust
/// use odsgrid::common::Rgba;
///
/// let red = Rgba::new(255, 0, 0, 255);
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Rgba {
    /// Opaque black, the value of an unspecified color literal.
    pub const OPAQUE_BLACK: Self = Self::new(0, 0, 0, 0xff);

    /// Create a new RGBA color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to hex string (without # prefix and alpha).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[inline]
fn hex_nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse a `#RRGGBB` or `#RGB` color literal.
///
/// The empty literal, and `#`-prefixed literals shorter than four bytes, are
/// treated as unspecified and yield [`Rgba::OPAQUE_BLACK`] without an error.
/// A non-empty literal without the leading `#` is always an error.
///
/// # Examples
///
/// ```rust
/// use odsgrid::common::{Rgba, parse_hex_color};
///
/// assert_eq!(parse_hex_color("#ff0000").unwrap(), Rgba::new(255, 0, 0, 255));
/// assert_eq!(parse_hex_color("#f00").unwrap(), Rgba::new(255, 0, 0, 255));
/// assert_eq!(parse_hex_color("").unwrap(), Rgba::OPAQUE_BLACK);
/// assert!(parse_hex_color("bad").is_err());
/// ```
pub fn parse_hex_color(literal: &str) -> Result<Rgba, LiteralError> {
    let bytes = literal.as_bytes();
    let invalid = || LiteralError::InvalidColor(literal.to_string());
    match bytes.first() {
        None => return Ok(Rgba::OPAQUE_BLACK),
        Some(b'#') => {},
        Some(_) => return Err(invalid()),
    }
    if bytes.len() < 4 {
        return Ok(Rgba::OPAQUE_BLACK);
    }

    let mut nibbles = [0u8; 6];
    let digits = &bytes[1..];
    if digits.len() != 3 && digits.len() != 6 {
        return Err(invalid());
    }
    for (slot, &b) in nibbles.iter_mut().zip(digits) {
        *slot = hex_nibble(b).ok_or_else(invalid)?;
    }

    let color = if digits.len() == 6 {
        Rgba::new(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
            0xff,
        )
    } else {
        Rgba::new(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17, 0xff)
    };
    Ok(color)
}
