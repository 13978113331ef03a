//! Materialized cell structures.

use crate::common::Rgba;
use serde::Serialize;

/// Horizontal text alignment (`fo:text-align`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Unset,
    Start,
    Center,
    End,
}

impl HorizontalAlign {
    /// Parse an ODF `fo:text-align` value.
    ///
    /// `left` and `justify` read as `Start`, `right` as `End`; unknown values are `Unset`.
    pub fn from_odf(value: &str) -> Self {
        match value {
            "start" | "left" | "justify" => Self::Start,
            "center" => Self::Center,
            "end" | "right" => Self::End,
            _ => Self::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Vertical text alignment (`style:vertical-align`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Unset,
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    /// Parse an ODF `style:vertical-align` value; `automatic` and unknown values are `Unset`.
    pub fn from_odf(value: &str) -> Self {
        match value {
            "top" => Self::Top,
            "middle" => Self::Middle,
            "bottom" => Self::Bottom,
            _ => Self::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// A materialized cell: displayed text plus resolved layout attributes.
///
/// Distances are in millimeters, the font size in points. Colors and font
/// attributes are `None` when no style in the cascade sets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cell {
    /// Displayed text; empty for covered cells
    pub value: String,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub font_name: Option<String>,
    pub font_size: f64,
    pub font_weight: Option<String>,
    pub font_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
}

impl Cell {
    /// Check if the cell has no displayed text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_parsing() {
        assert_eq!(HorizontalAlign::from_odf("center"), HorizontalAlign::Center);
        assert_eq!(HorizontalAlign::from_odf("right"), HorizontalAlign::End);
        assert_eq!(HorizontalAlign::from_odf("bogus"), HorizontalAlign::Unset);
        assert_eq!(VerticalAlign::from_odf("middle"), VerticalAlign::Middle);
        assert_eq!(VerticalAlign::from_odf("automatic"), VerticalAlign::Unset);
    }

    #[test]
    fn test_empty() {
        assert!(Cell::default().is_empty());
        let cell = Cell {
            value: "x".into(),
            ..Cell::default()
        };
        assert!(!cell.is_empty());
    }
}
