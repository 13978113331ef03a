//! Grid materialization.
//!
//! Turns a compressed [`Table`] into explicit rows of cells: repeats are
//! expanded, every base cell gets its style resolved once through the cascade,
//! spanned cells get the summed width of the columns they cover, and the
//! trailing run of empty rows (and empty cells per row) is dropped.

use super::cascade::{self, CascadeInput};
use super::columns::ColumnMap;
use super::model::{CompressedCell, CompressedRow, Table};
use super::options::MaterializeOptions;
use super::style::StyleTable;
use super::text::TextExtractor;
use super::{Cell, Row};
use crate::common::{AttributeIssue, Diagnostic, StyleAttribute, to_mm};
use smallvec::SmallVec;
use std::iter;

/// A materialized table and the style literals that could not be resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub rows: Vec<Row>,
    /// Attributes that fell back to their zero value, in grid order
    pub diagnostics: Vec<Diagnostic>,
}

impl Grid {
    /// Number of materialized rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The displayed text of every cell.
    pub fn values(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells().iter().map(|c| c.value.clone()).collect())
            .collect()
    }
}

fn declared_rows<'t>(table: &'t Table, options: &MaterializeOptions) -> &'t [CompressedRow] {
    if options.trim_trailing_rows {
        table.content_rows()
    } else {
        &table.rows
    }
}

fn declared_cells<'r>(row: &'r CompressedRow, options: &MaterializeOptions) -> &'r [CompressedCell] {
    if options.trim_trailing_cells {
        row.content_cells()
    } else {
        &row.cells
    }
}

/// Push `count` copies of `row`, stopping at `limit` rows in total.
fn push_repeated<T: Clone>(out: &mut Vec<T>, row: T, count: usize, limit: usize) {
    let count = count.min(limit.saturating_sub(out.len()));
    if count > 0 {
        out.extend(iter::repeat_n(row, count));
    }
}

/// Per-table materialization state.
struct Materializer<'a> {
    styles: &'a StyleTable,
    columns: ColumnMap<'a>,
    options: &'a MaterializeOptions,
    text: TextExtractor,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Materializer<'a> {
    fn new(table: &'a Table, styles: &'a StyleTable, options: &'a MaterializeOptions) -> Self {
        Self {
            styles,
            columns: ColumnMap::new(&table.columns),
            options,
            text: TextExtractor::new(),
            diagnostics: Vec::new(),
        }
    }

    fn row(&mut self, declared: &CompressedRow, row_index: usize) -> Row {
        let styles = self.styles;
        let row_style = styles.lookup(declared.style_name.as_deref());
        let limit = self.options.column_limit();

        let mut cells = Vec::new();
        let mut col = 0usize;
        for compressed in declared_cells(declared, self.options) {
            if col >= limit {
                break;
            }
            let column = self.columns.get(col);
            let mut res = cascade::resolve(CascadeInput {
                row: row_style,
                column: styles.lookup(column.and_then(|c| c.style_name.as_deref())),
                cell: styles.lookup(compressed.style_name.as_deref()),
                column_default: styles
                    .lookup(column.and_then(|c| c.default_cell_style_name.as_deref())),
            });

            let span = compressed.column_span();
            if span > 1 {
                res.issues.retain(|i| i.attribute != StyleAttribute::Width);
                res.cell.width = self.spanned_width(col, span, &mut res.issues);
            }
            if !compressed.is_covered() {
                res.cell.value = self.text.cell_text(compressed);
            }
            self.diagnostics.extend(
                res.issues
                    .into_iter()
                    .map(|issue| Diagnostic::at(row_index, col, issue)),
            );

            let repeat = compressed.repeat_count();
            push_repeated(&mut cells, res.cell, repeat, limit);
            col = col.saturating_add(repeat);
        }
        Row::new(cells)
    }

    /// Sum of the resolved widths of `span` logical columns starting at `start`.
    fn spanned_width(
        &self,
        start: usize,
        span: usize,
        issues: &mut SmallVec<[AttributeIssue; 2]>,
    ) -> f64 {
        (start..start.saturating_add(span))
            .map(|index| {
                let column = self.columns.get(index);
                let style = self
                    .styles
                    .lookup(column.and_then(|c| c.style_name.as_deref()));
                to_mm(style.column.width.as_deref().unwrap_or_default()).unwrap_or_else(|err| {
                    issues.push(AttributeIssue::new(StyleAttribute::Width, err));
                    0.0
                })
            })
            .sum()
    }

    fn grid(mut self, table: &Table) -> Grid {
        let limit = self.options.row_limit();
        let declared = declared_rows(table, self.options);
        let mut rows = Vec::with_capacity(table.content_height().min(limit).min(1 << 16));
        let mut row_index = 0usize;
        for compressed in declared {
            if rows.len() >= limit {
                break;
            }
            let row = self.row(compressed, row_index);
            let repeat = compressed.repeat_count();
            push_repeated(&mut rows, row, repeat, limit);
            row_index = row_index.saturating_add(repeat);
        }
        Grid {
            rows,
            diagnostics: self.diagnostics,
        }
    }
}

impl Table {
    /// Materialize the table into styled rows.
    ///
    /// Never fails: unknown style names resolve to defaults and malformed
    /// literals are returned in [`Grid::diagnostics`].
    pub fn rows(&self, styles: &StyleTable, options: &MaterializeOptions) -> Grid {
        Materializer::new(self, styles, options).grid(self)
    }

    /// Materialize only the displayed text of every cell.
    ///
    /// Covered cells appear as empty strings.
    pub fn strings(&self, options: &MaterializeOptions) -> Vec<Vec<String>> {
        let row_limit = options.row_limit();
        let column_limit = options.column_limit();
        let mut text = TextExtractor::new();
        let mut out = Vec::new();

        for declared in declared_rows(self, options) {
            if out.len() >= row_limit {
                break;
            }
            let mut row = Vec::new();
            for cell in declared_cells(declared, options) {
                if row.len() >= column_limit {
                    break;
                }
                let value = if cell.is_covered() {
                    String::new()
                } else {
                    text.cell_text(cell)
                };
                push_repeated(&mut row, value, cell.repeat_count(), column_limit);
            }
            push_repeated(&mut out, row, declared.repeat_count(), row_limit);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{LiteralError, Rgba};
    use crate::ods::model::{CellKind, CompressedColumn, Paragraph};
    use crate::ods::style::StyleDefinition;

    fn text_cell(text: &str) -> CompressedCell {
        CompressedCell::with_text(text)
    }

    fn row_of(cells: Vec<CompressedCell>) -> CompressedRow {
        CompressedRow {
            cells,
            ..CompressedRow::default()
        }
    }

    fn empty_row(repeat: u32) -> CompressedRow {
        CompressedRow {
            repeat,
            cells: vec![CompressedCell {
                repeat: 1024,
                ..CompressedCell::default()
            }],
            ..CompressedRow::default()
        }
    }

    fn column(style: &str, repeat: u32) -> CompressedColumn {
        CompressedColumn {
            repeat,
            style_name: Some(style.to_string()),
            default_cell_style_name: Some("Default".to_string()),
        }
    }

    fn column_style(name: &str, width: &str) -> StyleDefinition {
        let mut style = StyleDefinition::new(name);
        style.column.width = Some(width.to_string());
        style
    }

    fn styles() -> StyleTable {
        let mut default = StyleDefinition::new("Default");
        default.cell.background_color = Some("#00ff00".to_string());
        let mut row = StyleDefinition::new("ro1");
        row.row.height = Some("0.5cm".to_string());
        StyleTable::new(vec![
            column_style("co1", "1cm"),
            column_style("co2", "1.5cm"),
            column_style("co3", "2cm"),
            default,
            row,
        ])
    }

    #[test]
    fn test_trailing_empty_rows_dropped() {
        let table = Table {
            rows: vec![
                row_of(vec![text_cell("a"), text_cell("b")]),
                row_of(vec![text_cell("")]),
                row_of(vec![CompressedCell::default(), text_cell("c")]),
                empty_row(1),
                empty_row(1048570),
            ],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&StyleTable::default(), &MaterializeOptions::default());
        assert_eq!(grid.height(), 3);
        assert!(grid.rows[1].is_empty());
        assert_eq!(grid.rows[2].cell(1).map(|c| c.value.as_str()), Some("c"));
        assert_eq!(grid.rows[2].cell(0).map(|c| c.value.as_str()), Some(""));
    }

    #[test]
    fn test_repeats_expand_and_share() {
        let table = Table {
            columns: vec![column("co1", 4)],
            rows: vec![CompressedRow {
                repeat: 3,
                style_name: Some("ro1".to_string()),
                cells: vec![CompressedCell {
                    repeat: 2,
                    ..text_cell("same content")
                }],
            }],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles(), &MaterializeOptions::default());
        assert_eq!(grid.height(), 3);
        for row in &grid.rows {
            assert_eq!(row.len(), 2);
            assert_eq!(row.cells()[0], row.cells()[1]);
            assert_eq!(row.cells()[0].height, 5.0);
            assert_eq!(row.cells()[0].width, 10.0);
        }
        assert!(grid.rows[0].shares_cells_with(&grid.rows[2]));
    }

    #[test]
    fn test_columns_follow_repeated_cells() {
        // Two repeated cells occupy columns 0-1; the next cell sits in column 2.
        let table = Table {
            columns: vec![column("co1", 2), column("co3", 1)],
            rows: vec![row_of(vec![
                CompressedCell {
                    repeat: 2,
                    ..text_cell("x")
                },
                text_cell("y"),
            ])],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles(), &MaterializeOptions::default());
        let widths: Vec<f64> = grid.rows[0].cells().iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![10.0, 10.0, 20.0]);
        assert_eq!(
            grid.rows[0].cells()[2].background_color,
            Some(Rgba::new(0, 255, 0, 255))
        );
    }

    #[test]
    fn test_span_width_is_sum_of_columns() {
        let table = Table {
            columns: vec![column("co1", 0), column("co2", 0)],
            rows: vec![row_of(vec![
                CompressedCell {
                    columns_spanned: 2,
                    ..text_cell("cell spanning two columns")
                },
                CompressedCell {
                    kind: CellKind::Covered,
                    ..text_cell("hidden")
                },
            ])],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles(), &MaterializeOptions::default());
        let row = &grid.rows[0];
        assert!((row.cells()[0].width - 25.0).abs() < 1e-9);
        assert_eq!(row.cells()[0].value, "cell spanning two columns");
        // Covered cells keep their slot and style but carry no text.
        assert_eq!(row.len(), 2);
        assert_eq!(row.cells()[1].value, "");
        assert!((row.cells()[1].width - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_crosses_repeat_groups() {
        // Span starts in the middle of the co1 group and runs through co2 into co3.
        let table = Table {
            columns: vec![column("co1", 2), column("co2", 1), column("co3", 3)],
            rows: vec![row_of(vec![
                text_cell("a"),
                CompressedCell {
                    columns_spanned: 3,
                    ..text_cell("wide")
                },
            ])],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles(), &MaterializeOptions::default());
        assert!((grid.rows[0].cells()[1].width - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_past_declared_columns() {
        let table = Table {
            columns: vec![column("co2", 1)],
            rows: vec![row_of(vec![CompressedCell {
                columns_spanned: 3,
                ..text_cell("wide")
            }])],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles(), &MaterializeOptions::default());
        assert!((grid.rows[0].cells()[0].width - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagnostics_are_located() {
        let mut bad = StyleDefinition::new("ce1");
        bad.cell.background_color = Some("#zzz".to_string());
        let styles = StyleTable::new(vec![bad, column_style("co1", "3in")]);
        let table = Table {
            columns: vec![column("co1", 3)],
            rows: vec![
                row_of(vec![text_cell("ok")]),
                row_of(vec![
                    text_cell("a"),
                    CompressedCell {
                        style_name: Some("ce1".to_string()),
                        ..text_cell("b")
                    },
                ]),
            ],
            ..Table::new("Sheet1")
        };
        let grid = table.rows(&styles, &MaterializeOptions::default());
        assert_eq!(grid.rows[1].cells()[1].value, "b");
        assert_eq!(grid.rows[1].cells()[1].background_color, None);
        let located: Vec<(usize, usize, StyleAttribute)> = grid
            .diagnostics
            .iter()
            .map(|d| (d.row, d.column, d.attribute))
            .collect();
        assert_eq!(
            located,
            vec![
                (0, 0, StyleAttribute::Width),
                (1, 0, StyleAttribute::Width),
                (1, 1, StyleAttribute::Width),
                (1, 1, StyleAttribute::BackgroundColor),
            ]
        );
        assert_eq!(
            grid.diagnostics[3].error,
            LiteralError::InvalidColor("#zzz".to_string())
        );
    }

    #[test]
    fn test_strings_trims_and_expands() {
        let table = Table {
            rows: vec![
                row_of(vec![
                    text_cell("A"),
                    text_cell("1"),
                    CompressedCell {
                        paragraphs: vec![
                            Paragraph::new("A cell containing"),
                            Paragraph::new("more than one line."),
                        ],
                        ..CompressedCell::default()
                    },
                ]),
                row_of(vec![text_cell("B"), text_cell("foo"), CompressedCell::default()]),
                CompressedRow {
                    repeat: 2,
                    cells: vec![
                        CompressedCell {
                            repeat: 3,
                            ..text_cell("same content")
                        },
                        CompressedCell {
                            repeat: 1021,
                            ..CompressedCell::default()
                        },
                    ],
                    ..CompressedRow::default()
                },
                empty_row(3),
            ],
            ..Table::new("Sheet1")
        };
        let strings = table.strings(&MaterializeOptions::default());
        assert_eq!(
            strings,
            vec![
                vec!["A", "1", "A cell containing\nmore than one line."],
                vec!["B", "foo"],
                vec!["same content"; 3],
                vec!["same content"; 3],
            ]
        );
    }

    #[test]
    fn test_untrimmed_and_capped() {
        let table = Table {
            rows: vec![row_of(vec![text_cell("a"), CompressedCell::default()]), empty_row(1000)],
            ..Table::new("Sheet1")
        };
        let options = MaterializeOptions::new()
            .with_trim_trailing_rows(false)
            .with_trim_trailing_cells(false)
            .with_max_rows(Some(10))
            .with_max_columns(Some(4));
        let strings = table.strings(&options);
        assert_eq!(strings.len(), 10);
        assert_eq!(strings[0], vec!["a", ""]);
        assert_eq!(strings[1].len(), 4);

        let grid = table.rows(&StyleTable::default(), &options);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new("Empty");
        assert!(table.rows(&StyleTable::default(), &MaterializeOptions::default()).is_empty());
        assert!(table.strings(&MaterializeOptions::default()).is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn cell_strategy() -> impl Strategy<Value = CompressedCell> {
            (prop_oneof![Just(""), Just("x"), Just("a<text:s/>b")], 0u32..4).prop_map(
                |(text, repeat)| CompressedCell {
                    repeat,
                    ..CompressedCell::with_text(text)
                },
            )
        }

        fn row_strategy() -> impl Strategy<Value = CompressedRow> {
            (prop::collection::vec(cell_strategy(), 0..5), 0u32..4).prop_map(|(cells, repeat)| {
                CompressedRow {
                    repeat,
                    cells,
                    ..CompressedRow::default()
                }
            })
        }

        fn table_strategy() -> impl Strategy<Value = Table> {
            prop::collection::vec(row_strategy(), 0..8).prop_map(|rows| Table {
                rows,
                ..Table::new("Sheet1")
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_row_repeats_expand_to_equal_rows(table in table_strategy()) {
                let grid = table.rows(&StyleTable::default(), &MaterializeOptions::default());
                prop_assert_eq!(grid.height(), table.content_height());

                let mut offset = 0;
                for declared in table.content_rows() {
                    let copies = &grid.rows[offset..offset + declared.repeat_count()];
                    for copy in copies {
                        prop_assert_eq!(copy, &copies[0]);
                    }
                    offset += declared.repeat_count();
                }
            }

            #[test]
            fn prop_cell_repeats_expand(row in row_strategy()) {
                let table = Table { rows: vec![row.clone()], ..Table::new("Sheet1") };
                let options = MaterializeOptions::new().with_trim_trailing_cells(false).with_trim_trailing_rows(false);
                let strings = table.strings(&options);
                let expected: usize = row.cells.iter().map(CompressedCell::repeat_count).sum();
                prop_assert_eq!(strings.len(), row.repeat_count());
                prop_assert_eq!(strings[0].len(), expected);
            }

            #[test]
            fn prop_trimming_is_idempotent(table in table_strategy()) {
                let once = Table { rows: table.content_rows().to_vec(), ..Table::new("Sheet1") };
                prop_assert_eq!(once.content_rows(), table.content_rows());
                prop_assert_eq!(once.strings(&MaterializeOptions::default()), table.strings(&MaterializeOptions::default()));
            }
        }
    }
}
