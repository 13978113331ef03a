//! Decoded spreadsheet document.

use super::grid::Grid;
use super::model::Table;
use super::options::MaterializeOptions;
use super::parser::ContentParser;
use super::style::{StyleDefinition, StyleTable};
use crate::common::Result;

/// The tables and styles of a spreadsheet.
///
/// Built once from the document XML and read-only afterwards; any number of
/// tables can be materialized from it independently.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tables: Vec<Table>,
    styles: StyleTable,
}

impl Document {
    pub fn new(tables: Vec<Table>, styles: Vec<StyleDefinition>) -> Self {
        Self {
            tables,
            styles: StyleTable::new(styles),
        }
    }

    /// Decode a document from its `content.xml` and, optionally, `styles.xml`.
    ///
    /// Styles declared in `content.xml` take precedence over same-named styles
    /// from `styles.xml`.
    pub fn from_xml(content_xml: &str, styles_xml: Option<&str>) -> Result<Self> {
        let content = ContentParser::parse(content_xml)?;
        let mut styles = content.styles;
        if let Some(xml) = styles_xml {
            styles.extend(ContentParser::parse(xml)?.styles);
        }
        log::debug!(
            "decoded spreadsheet content: {} tables, {} styles",
            content.tables.len(),
            styles.len()
        );
        Ok(Self::new(content.tables, styles))
    }

    /// All tables in document order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name() == name)
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    /// Materialize the table at `index` into styled rows.
    pub fn rows(&self, index: usize, options: &MaterializeOptions) -> Option<Grid> {
        let table = self.tables.get(index)?;
        let grid = table.rows(&self.styles, options);
        log::trace!(
            "materialized table '{}': {} rows x {} columns",
            table.name(),
            grid.height(),
            grid.width()
        );
        if let Some(first) = grid.diagnostics.first() {
            log::warn!(
                "table '{}': {} style attributes fell back to defaults (first: {})",
                table.name(),
                grid.diagnostics.len(),
                first
            );
        }
        Some(grid)
    }

    /// Materialize the text of the table at `index`.
    pub fn strings(&self, index: usize, options: &MaterializeOptions) -> Option<Vec<Vec<String>>> {
        self.tables.get(index).map(|t| t.strings(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = r##"<office:document-content>
  <office:automatic-styles>
    <style:style style:name="ce1" style:family="table-cell">
      <style:table-cell-properties fo:background-color="#0000ff"/>
    </style:style>
  </office:automatic-styles>
  <office:body><office:spreadsheet>
    <table:table table:name="First">
      <table:table-column table:default-cell-style-name="Default"/>
      <table:table-row><table:table-cell><text:p>one</text:p></table:table-cell></table:table-row>
    </table:table>
    <table:table table:name="Second">
      <table:table-column table:default-cell-style-name="ce1"/>
      <table:table-row><table:table-cell><text:p>two</text:p></table:table-cell></table:table-row>
    </table:table>
  </office:spreadsheet></office:body>
</office:document-content>"##;

    const STYLES: &str = r##"<office:document-styles><office:styles>
    <style:style style:name="Default" style:family="table-cell">
      <style:text-properties style:font-name="Liberation Sans" fo:font-size="10pt"/>
    </style:style>
    <style:style style:name="ce1" style:family="table-cell">
      <style:table-cell-properties fo:background-color="#ff0000"/>
    </style:style>
</office:styles></office:document-styles>"##;

    #[test]
    fn test_tables_by_name() {
        let doc = Document::from_xml(CONTENT, None).unwrap();
        assert_eq!(doc.tables().len(), 2);
        assert_eq!(doc.table("Second").map(|t| t.declared_height()), Some(1));
        assert!(doc.table("Third").is_none());
        assert_eq!(
            doc.strings(1, &MaterializeOptions::default()),
            Some(vec![vec!["two".to_string()]])
        );
        assert!(doc.rows(2, &MaterializeOptions::default()).is_none());
    }

    #[test]
    fn test_common_styles_from_styles_part() {
        let doc = Document::from_xml(CONTENT, Some(STYLES)).unwrap();
        let grid = doc.rows(0, &MaterializeOptions::default()).unwrap();
        let cell = &grid.rows[0].cells()[0];
        assert_eq!(cell.font_name.as_deref(), Some("Liberation Sans"));
        assert_eq!(cell.font_size, 10.0);

        // The automatic ce1 from content.xml wins over the common one.
        let grid = doc.rows(1, &MaterializeOptions::default()).unwrap();
        assert_eq!(
            grid.rows[0].cells()[0].background_color.map(|c| c.to_string()),
            Some("#0000FF".to_string())
        );
    }
}
