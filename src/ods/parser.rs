//! Decoding of `content.xml` / `styles.xml` into compressed tables and styles.
//!
//! Elements and attributes are matched by local name, so documents using
//! non-standard namespace prefixes decode the same way. Paragraph content is
//! kept as raw markup; text extraction happens at materialization time.

use super::model::{CellKind, CompressedCell, CompressedColumn, CompressedRow, Paragraph, Table};
use super::style::StyleDefinition;
use crate::common::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parser for spreadsheet content parts.
pub(crate) struct ContentParser;

/// Tables and styles decoded from one XML part.
#[derive(Debug, Default)]
pub(crate) struct ParsedPart {
    pub tables: Vec<Table>,
    pub styles: Vec<StyleDefinition>,
}

#[inline]
fn parse_count(value: &[u8]) -> u32 {
    atoi_simd::parse::<u32, false, false>(value).unwrap_or(0)
}

fn xml_error(reader: &Reader<&[u8]>, err: quick_xml::Error) -> Error {
    Error::XmlError(format!(
        "XML parsing error at position {}: {}",
        reader.error_position(),
        err
    ))
}

impl ContentParser {
    /// Parse every table and named style in an XML part.
    pub fn parse(xml: &str) -> Result<ParsedPart> {
        let mut reader = Reader::from_str(xml);
        let mut part = ParsedPart::default();

        // Parser state
        let mut current_style: Option<StyleDefinition> = None;
        let mut current_table: Option<Table> = None;
        let mut current_row: Option<CompressedRow> = None;
        let mut current_cell: Option<CompressedCell> = None;

        loop {
            let event = reader.read_event().map_err(|e| xml_error(&reader, e))?;
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    match e.local_name().as_ref() {
                        b"style" => {
                            let style = Self::parse_style(e)?;
                            if is_empty {
                                part.styles.push(style);
                            } else {
                                current_style = Some(style);
                            }
                        },
                        b"table-column-properties"
                        | b"table-row-properties"
                        | b"table-cell-properties"
                        | b"text-properties"
                        | b"paragraph-properties" => {
                            if let Some(ref mut style) = current_style {
                                Self::apply_properties(style, e)?;
                            }
                        },
                        b"table" if current_cell.is_some() => {
                            // Sub-tables are not part of the grid.
                            if !is_empty {
                                reader
                                    .read_to_end(e.name())
                                    .map_err(|err| xml_error(&reader, err))?;
                            }
                        },
                        b"table" => {
                            let table = Table::new(Self::table_name(e)?);
                            if is_empty {
                                part.tables.push(table);
                            } else {
                                current_table = Some(table);
                            }
                        },
                        b"table-column" => {
                            if let Some(ref mut table) = current_table {
                                table.columns.push(Self::parse_column(e)?);
                            }
                        },
                        b"table-row" => {
                            if let Some(ref mut table) = current_table {
                                let row = Self::parse_row(e)?;
                                if is_empty {
                                    table.rows.push(row);
                                } else {
                                    current_row = Some(row);
                                }
                            }
                        },
                        name @ (b"table-cell" | b"covered-table-cell") => {
                            if let Some(ref mut row) = current_row {
                                let kind = if name == b"covered-table-cell" {
                                    CellKind::Covered
                                } else {
                                    CellKind::Cell
                                };
                                let cell = Self::parse_cell(e, kind)?;
                                if is_empty {
                                    row.cells.push(cell);
                                } else {
                                    current_cell = Some(cell);
                                }
                            }
                        },
                        b"p" => {
                            if let Some(ref mut cell) = current_cell {
                                let raw = if is_empty {
                                    String::new()
                                } else {
                                    reader
                                        .read_text(e.name())
                                        .map_err(|err| xml_error(&reader, err))?
                                        .into_owned()
                                };
                                cell.paragraphs.push(Paragraph::new(raw));
                            }
                        },
                        b"annotation" => {
                            // Comments carry their own paragraphs; they are not cell text.
                            if current_cell.is_some() && !is_empty {
                                reader
                                    .read_to_end(e.name())
                                    .map_err(|err| xml_error(&reader, err))?;
                            }
                        },
                        _ => {},
                    }
                },
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"style" => {
                        if let Some(style) = current_style.take() {
                            part.styles.push(style);
                        }
                    },
                    b"table-cell" | b"covered-table-cell" => {
                        if let (Some(cell), Some(row)) = (current_cell.take(), current_row.as_mut()) {
                            row.cells.push(cell);
                        }
                    },
                    b"table-row" => {
                        if let (Some(row), Some(table)) = (current_row.take(), current_table.as_mut()) {
                            table.rows.push(row);
                        }
                    },
                    b"table" => {
                        if let Some(table) = current_table.take() {
                            part.tables.push(table);
                        }
                    },
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(part)
    }

    /// Extract table name from table:table element
    fn table_name(e: &BytesStart) -> Result<String> {
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.local_name().as_ref() == b"name" {
                return Ok(attr.unescape_value()?.into_owned());
            }
        }
        Ok(String::new())
    }

    fn parse_style(e: &BytesStart) -> Result<StyleDefinition> {
        let mut style = StyleDefinition::default();
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"name" => style.name = attr.unescape_value()?.into_owned(),
                b"family" => style.family = Some(attr.unescape_value()?.into_owned()),
                _ => {},
            }
        }
        Ok(style)
    }

    /// Copy the attributes of one property element into the style.
    fn apply_properties(style: &mut StyleDefinition, e: &BytesStart) -> Result<()> {
        let element = e.local_name();
        let mut border_all = None;
        for attr in e.attributes() {
            let attr = attr?;
            let value = Some(attr.unescape_value()?.into_owned());
            let key = attr.key.local_name();
            match (element.as_ref(), key.as_ref()) {
                (b"table-column-properties", b"column-width") => style.column.width = value,
                (b"table-column-properties", b"break-before") => style.column.break_before = value,
                (b"table-row-properties", b"row-height") => style.row.height = value,
                (b"table-row-properties", b"break-before") => style.row.break_before = value,
                (b"table-row-properties", b"use-optimal-row-height") => {
                    style.row.use_optimal_height = value.map(|v| v == "true");
                },
                (b"table-cell-properties", b"background-color") => {
                    style.cell.background_color = value;
                },
                (b"table-cell-properties", b"vertical-align") => style.cell.vertical_align = value,
                (b"table-cell-properties", b"padding") => style.cell.padding = value,
                (b"table-cell-properties", b"border") => border_all = value,
                (b"table-cell-properties", b"border-top") => style.cell.border_top = value,
                (b"table-cell-properties", b"border-bottom") => style.cell.border_bottom = value,
                (b"table-cell-properties", b"border-left") => style.cell.border_left = value,
                (b"table-cell-properties", b"border-right") => style.cell.border_right = value,
                (b"text-properties", b"font-name") => style.text.font_name = value,
                (b"text-properties", b"font-size") => style.text.font_size = value,
                (b"text-properties", b"font-weight") => style.text.font_weight = value,
                (b"text-properties", b"color") => style.text.color = value,
                (b"paragraph-properties", b"text-align") => style.paragraph.text_align = value,
                (b"paragraph-properties", b"margin-left") => style.paragraph.margin_left = value,
                _ => {},
            }
        }

        // `fo:border` sets every side not given explicitly.
        if let Some(border) = border_all {
            let cell = &mut style.cell;
            for side in [
                &mut cell.border_top,
                &mut cell.border_bottom,
                &mut cell.border_left,
                &mut cell.border_right,
            ] {
                if side.is_none() {
                    *side = Some(border.clone());
                }
            }
        }
        Ok(())
    }

    fn parse_column(e: &BytesStart) -> Result<CompressedColumn> {
        let mut column = CompressedColumn::default();
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"number-columns-repeated" => column.repeat = parse_count(&attr.value),
                b"style-name" => column.style_name = Some(attr.unescape_value()?.into_owned()),
                b"default-cell-style-name" => {
                    column.default_cell_style_name = Some(attr.unescape_value()?.into_owned());
                },
                _ => {},
            }
        }
        Ok(column)
    }

    fn parse_row(e: &BytesStart) -> Result<CompressedRow> {
        let mut row = CompressedRow::default();
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"number-rows-repeated" => row.repeat = parse_count(&attr.value),
                b"style-name" => row.style_name = Some(attr.unescape_value()?.into_owned()),
                _ => {},
            }
        }
        Ok(row)
    }

    /// Parse cell attributes
    fn parse_cell(e: &BytesStart, kind: CellKind) -> Result<CompressedCell> {
        let mut cell = CompressedCell {
            kind,
            ..CompressedCell::default()
        };
        for attr in e.attributes() {
            let attr = attr?;
            match attr.key.local_name().as_ref() {
                b"value-type" => cell.value_type = Some(attr.unescape_value()?.into_owned()),
                b"value" => cell.value = Some(attr.unescape_value()?.into_owned()),
                b"formula" => cell.formula = Some(attr.unescape_value()?.into_owned()),
                b"number-columns-repeated" => cell.repeat = parse_count(&attr.value),
                b"number-columns-spanned" => cell.columns_spanned = parse_count(&attr.value),
                b"number-rows-spanned" => cell.rows_spanned = parse_count(&attr.value),
                b"style-name" => cell.style_name = Some(attr.unescape_value()?.into_owned()),
                _ => {},
            }
        }
        Ok(cell)
    }
}
