//! Odsgrid - style-cascade resolution and grid materialization for OpenDocument spreadsheets
//!
//! ODS files store tables in a compressed form: runs of identical columns, rows
//! and cells are written once with a repeat count, and visual attributes live in
//! named styles attached at the column, row and cell level. This library decodes
//! that representation and expands it into an explicit rectangular grid where
//! every cell carries its text and a fully resolved set of layout attributes
//! (sizes in millimeters, font, colors, alignment).
//!
//! # Features
//!
//! - **Package access**: Open `.ods` / `.ots` ZIP containers and validate the MIME type
//! - **Decoding**: Parse `content.xml` and `styles.xml` with `quick-xml`
//! - **Style cascade**: Resolve column, row, cell and column-default styles per cell
//! - **Repeat expansion**: Materialize repeated rows and cells, sharing repeated rows
//! - **Diagnostics**: Report malformed size and color literals by cell position
//! - **Text export**: Write the text grid as CSV or TSV
//!
//! # Example - Text of every table
//!
//! ```no_run
//! use odsgrid::{MaterializeOptions, OdsFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = OdsFile::open("budget.ods")?;
//! let doc = file.parse_content()?;
//!
//! for table in doc.tables() {
//!     println!("== {} ==", table.name());
//!     for row in table.strings(&MaterializeOptions::default()) {
//!         println!("{}", row.join(" | "));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Resolved layout
//!
//! ```no_run
//! use odsgrid::{MaterializeOptions, OdsFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = OdsFile::open("budget.ods")?.parse_content()?;
//! let options = MaterializeOptions::new().with_max_rows(Some(100));
//!
//! if let Some(grid) = doc.rows(0, &options) {
//!     for row in &grid.rows {
//!         println!("row height {:?}mm, width {:.1}mm", row.height_mm(), row.width_mm());
//!     }
//!     for diagnostic in &grid.diagnostics {
//!         eprintln!("{}", diagnostic);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - CSV export
//!
//! ```no_run
//! use odsgrid::export::{DelimitedConfig, write_delimited};
//! use odsgrid::{MaterializeOptions, OdsFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = OdsFile::open("budget.ods")?.parse_content()?;
//! if let Some(strings) = doc.strings(0, &MaterializeOptions::default()) {
//!     let mut out = std::io::stdout().lock();
//!     write_delimited(&strings, &mut out, &DelimitedConfig::csv())?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod export;
pub mod ods;

pub use common::{Error, Result};
pub use ods::{Cell, Document, Grid, MaterializeOptions, OdsFile, Row, StyleTable, Table};
