//! Export of materialized grids to plain-text formats.

mod delimited;

pub use delimited::{DelimitedConfig, write_delimited};
