//! Delimited text (CSV/TSV) output for materialized text grids.

use crate::common::Result;
use std::io::Write;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    pub delimiter: u8,
    pub quote: u8,
    /// Written between rows, never after the last one
    pub line_terminator: &'static str,
    pub write_bom: bool,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: "\n",
            write_bom: false,
        }
    }
}

impl DelimitedConfig {
    pub fn csv() -> Self {
        Self::default()
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_line_terminator(mut self, terminator: &'static str) -> Self {
        self.line_terminator = terminator;
        self
    }

    #[inline]
    pub fn with_write_bom(mut self, write_bom: bool) -> Self {
        self.write_bom = write_bom;
        self
    }

    fn needs_quote(&self, field: &str) -> bool {
        field
            .bytes()
            .any(|b| b == self.delimiter || b == self.quote || b == b'\n' || b == b'\r')
    }
}

/// Write a text grid, such as the output of [`Table::strings`](crate::ods::Table::strings).
pub fn write_delimited<W: Write>(
    data: &[Vec<String>],
    writer: &mut W,
    config: &DelimitedConfig,
) -> Result<()> {
    if config.write_bom {
        writer.write_all(UTF8_BOM)?;
    }

    let quote = char::from(config.quote);
    let doubled = format!("{0}{0}", quote);

    for (row_idx, row) in data.iter().enumerate() {
        if row_idx > 0 {
            writer.write_all(config.line_terminator.as_bytes())?;
        }
        for (col_idx, field) in row.iter().enumerate() {
            if col_idx > 0 {
                writer.write_all(&[config.delimiter])?;
            }
            if config.needs_quote(field) {
                let escaped = field.replace(quote, &doubled);
                write!(writer, "{0}{1}{0}", quote, escaped)?;
            } else {
                writer.write_all(field.as_bytes())?;
            }
        }
    }

    Ok(())
}
