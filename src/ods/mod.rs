//! OpenDocument Spreadsheet (.ods) support.
//!
//! The pipeline runs in two stages. Decoding turns the package's XML into a
//! [`Document`] of compressed [`Table`]s and a [`StyleTable`]; materialization
//! turns one table into an explicit grid of [`Row`]s and [`Cell`]s with
//! resolved layout attributes.
//!
//! ```no_run
//! use odsgrid::ods::{MaterializeOptions, OdsFile};
//!
//! let file = OdsFile::open("report.ods")?;
//! let doc = file.parse_content()?;
//! let options = MaterializeOptions::default();
//! for table in doc.tables() {
//!     let grid = table.rows(doc.styles(), &options);
//!     for row in &grid.rows {
//!         for cell in row.cells() {
//!             print!("{} ({:.1}mm)\t", cell.value, cell.width);
//!         }
//!         println!();
//!     }
//! }
//! # Ok::<(), odsgrid::Error>(())
//! ```

mod cascade;
mod cell;
mod columns;
mod document;
mod grid;
mod model;
mod options;
mod package;
mod parser;
mod row;
mod style;
mod text;

pub use cascade::{CascadeInput, Resolution, resolve};
pub use cell::{Cell, HorizontalAlign, VerticalAlign};
pub use columns::ColumnMap;
pub use document::Document;
pub use grid::Grid;
pub use model::{CellKind, CompressedCell, CompressedColumn, CompressedRow, Paragraph, Table};
pub use options::MaterializeOptions;
pub use package::{OdsFile, SPREADSHEET_MIME_TYPES};
pub use row::Row;
pub use style::{
    CellProperties, ColumnProperties, ParagraphProperties, RowProperties, StyleDefinition,
    StyleTable, TextProperties,
};
pub use text::{TextExtractor, write_plain_text};
