//! Style cascade for a single cell.
//!
//! Every attribute group is resolved on its own:
//!
//! - width comes from the column style only, height from the row style only;
//! - colors, alignment and padding come from the cell style when it sets them,
//!   otherwise from the column's default cell style;
//! - font name, weight and size travel together, taken from whichever of the
//!   two cell styles names a font first.
//!
//! A malformed literal only zeroes its own attribute and is reported back as an
//! [`AttributeIssue`]; the rest of the cell still resolves.

use super::cell::{Cell, HorizontalAlign, VerticalAlign};
use super::style::StyleDefinition;
use crate::common::{AttributeIssue, Rgba, StyleAttribute, parse_hex_color, size_to_points, to_mm};
use smallvec::SmallVec;

/// `fo:background-color` / `fo:color` value meaning "no color".
const TRANSPARENT: &str = "transparent";

/// The four styles that contribute to one cell.
#[derive(Debug, Clone, Copy)]
pub struct CascadeInput<'a> {
    pub row: &'a StyleDefinition,
    pub column: &'a StyleDefinition,
    pub cell: &'a StyleDefinition,
    /// Style named by the column's `table:default-cell-style-name`
    pub column_default: &'a StyleDefinition,
}

/// A resolved cell style, with an empty value, and any literals that failed.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub cell: Cell,
    pub issues: SmallVec<[AttributeIssue; 2]>,
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[inline]
fn cell_then_default<'a>(cell: &'a Option<String>, default: &'a Option<String>) -> Option<&'a str> {
    non_empty(cell).or_else(|| non_empty(default))
}

impl Resolution {
    fn length(&mut self, literal: Option<&str>, attribute: StyleAttribute) -> f64 {
        to_mm(literal.unwrap_or_default()).unwrap_or_else(|err| {
            self.issues.push(AttributeIssue::new(attribute, err));
            0.0
        })
    }

    fn color(&mut self, literal: Option<&str>, attribute: StyleAttribute) -> Option<Rgba> {
        let literal = literal.filter(|s| !s.eq_ignore_ascii_case(TRANSPARENT))?;
        match parse_hex_color(literal) {
            Ok(color) => Some(color),
            Err(err) => {
                self.issues.push(AttributeIssue::new(attribute, err));
                None
            },
        }
    }

    fn font_size(&mut self, literal: Option<&str>) -> f64 {
        size_to_points(literal.unwrap_or_default()).unwrap_or_else(|err| {
            self.issues
                .push(AttributeIssue::new(StyleAttribute::FontSize, err));
            0.0
        })
    }
}

/// Resolve the visual attributes of one cell.
///
/// The returned cell has an empty `value`; the caller fills it in.
pub fn resolve(input: CascadeInput<'_>) -> Resolution {
    let CascadeInput {
        row,
        column,
        cell,
        column_default,
    } = input;
    let mut res = Resolution::default();

    let width = res.length(non_empty(&column.column.width), StyleAttribute::Width);
    let height = res.length(non_empty(&row.row.height), StyleAttribute::Height);

    let background_color = res.color(
        cell_then_default(&cell.cell.background_color, &column_default.cell.background_color),
        StyleAttribute::BackgroundColor,
    );
    let font_color = res.color(
        cell_then_default(&cell.text.color, &column_default.text.color),
        StyleAttribute::FontColor,
    );

    let font_source = if non_empty(&cell.text.font_name).is_some() {
        &cell.text
    } else {
        &column_default.text
    };
    let font_size = res.font_size(non_empty(&font_source.font_size));

    let align = cell_then_default(&cell.paragraph.text_align, &column_default.paragraph.text_align)
        .map(HorizontalAlign::from_odf)
        .unwrap_or_default();
    let vertical_align =
        cell_then_default(&cell.cell.vertical_align, &column_default.cell.vertical_align)
            .map(VerticalAlign::from_odf)
            .unwrap_or_default();
    let padding = res.length(
        cell_then_default(&cell.cell.padding, &column_default.cell.padding),
        StyleAttribute::Padding,
    );

    res.cell = Cell {
        value: String::new(),
        width,
        height,
        padding,
        font_name: non_empty(&font_source.font_name).map(str::to_string),
        font_size,
        font_weight: non_empty(&font_source.font_weight).map(str::to_string),
        font_color,
        background_color,
        align,
        vertical_align,
    };
    res
}
