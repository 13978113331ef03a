//! Row structures for materialized grids.

use super::Cell;
use serde::Serialize;
use std::sync::Arc;

/// A materialized row.
///
/// Position `n` in every row of a grid refers to the same logical column.
/// Copies produced by row repetition share one cell buffer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    cells: Arc<[Cell]>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells: cells.into(),
        }
    }

    /// Get all cells in the row.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column index.
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if every cell in the row is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Total width in millimeters, not counting the run of empty cells that
    /// leads the row.
    pub fn width_mm(&self) -> f64 {
        self.cells
            .iter()
            .skip_while(|c| c.is_empty())
            .map(|c| c.width)
            .sum()
    }

    /// Row height in millimeters, taken from the first cell.
    pub fn height_mm(&self) -> Option<f64> {
        self.cells.first().map(|c| c.height)
    }

    /// Whether two rows share the same cell buffer.
    pub fn shares_cells_with(&self, other: &Row) -> bool {
        Arc::ptr_eq(&self.cells, &other.cells)
    }
}
