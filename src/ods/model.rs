//! Compressed table structures as decoded from `content.xml`.
//!
//! These mirror the run-length encoded layout of an OpenDocument table: one
//! declared row, column or cell may stand for many consecutive identical ones
//! through its repeat count. They are built once by the decoder and only read
//! afterwards; see [`crate::ods::grid`] for expansion into an explicit grid.

/// Interpret a decoded repeat or span attribute: 0 means unspecified.
#[inline]
pub(crate) fn at_least_one(count: u32) -> usize {
    count.max(1) as usize
}

/// Raw inline markup of one `text:p` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    raw: String,
}

impl Paragraph {
    /// Wrap the raw inner XML of a paragraph, exactly as it appears in the document.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw inner XML.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Whether a cell slot holds its own content or is absorbed by a neighbour's span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    /// `table:table-cell`
    #[default]
    Cell,
    /// `table:covered-table-cell`
    Covered,
}

/// A declared `table:table-cell` or `table:covered-table-cell`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedCell {
    pub kind: CellKind,
    /// `office:value-type`
    pub value_type: Option<String>,
    /// `office:value`
    pub value: Option<String>,
    /// `table:formula`
    pub formula: Option<String>,
    /// `table:number-columns-repeated`, 0 if absent
    pub repeat: u32,
    /// `table:number-columns-spanned`, 0 if absent
    pub columns_spanned: u32,
    /// `table:number-rows-spanned`, 0 if absent
    pub rows_spanned: u32,
    /// `table:style-name`
    pub style_name: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

impl CompressedCell {
    /// Create a cell holding a single paragraph of plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::new(text)],
            ..Self::default()
        }
    }

    /// Number of consecutive grid slots this cell occupies.
    #[inline]
    pub fn repeat_count(&self) -> usize {
        at_least_one(self.repeat)
    }

    /// Number of columns this cell visually spans.
    #[inline]
    pub fn column_span(&self) -> usize {
        at_least_one(self.columns_spanned)
    }

    /// Number of rows this cell visually spans.
    #[inline]
    pub fn row_span(&self) -> usize {
        at_least_one(self.rows_spanned)
    }

    #[inline]
    pub fn is_covered(&self) -> bool {
        self.kind == CellKind::Covered
    }

    /// A cell is empty when it has no paragraphs, or a single empty one.
    pub fn is_empty(&self) -> bool {
        match self.paragraphs.as_slice() {
            [] => true,
            [only] => only.raw.is_empty(),
            _ => false,
        }
    }
}

/// A declared `table:table-row`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedRow {
    /// `table:number-rows-repeated`, 0 if absent
    pub repeat: u32,
    /// `table:style-name`
    pub style_name: Option<String>,
    pub cells: Vec<CompressedCell>,
}

impl CompressedRow {
    #[inline]
    pub fn repeat_count(&self) -> usize {
        at_least_one(self.repeat)
    }

    /// A row is empty when every one of its cells is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(CompressedCell::is_empty)
    }

    /// Cells up to and including the last non-empty one.
    pub fn content_cells(&self) -> &[CompressedCell] {
        let end = self
            .cells
            .iter()
            .rposition(|c| !c.is_empty())
            .map_or(0, |i| i + 1);
        &self.cells[..end]
    }
}

/// A declared `table:table-column`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedColumn {
    /// `table:number-columns-repeated`, 0 if absent
    pub repeat: u32,
    /// `table:style-name`
    pub style_name: Option<String>,
    /// `table:default-cell-style-name`
    pub default_cell_style_name: Option<String>,
}

impl CompressedColumn {
    #[inline]
    pub fn repeat_count(&self) -> usize {
        at_least_one(self.repeat)
    }
}

/// A decoded `table:table`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<CompressedColumn>,
    pub rows: Vec<CompressedRow>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The table name (`table:name`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared column definitions, before repeat expansion.
    pub fn declared_width(&self) -> usize {
        self.columns.len()
    }

    /// Number of declared row definitions, before repeat expansion.
    pub fn declared_height(&self) -> usize {
        self.rows.len()
    }

    /// Declared rows up to and including the last non-empty one.
    pub fn content_rows(&self) -> &[CompressedRow] {
        let end = self
            .rows
            .iter()
            .rposition(|r| !r.is_empty())
            .map_or(0, |i| i + 1);
        &self.rows[..end]
    }

    /// Expanded row count once the trailing run of empty rows is dropped.
    pub fn content_height(&self) -> usize {
        self.content_rows()
            .iter()
            .map(CompressedRow::repeat_count)
            .sum()
    }
}
