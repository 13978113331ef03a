/// Configuration types for grid materialization.
///
/// # Examples
///
/// ```rust
/// use odsgrid::ods::MaterializeOptions;
///
/// // Create with defaults
/// let options = MaterializeOptions::default();
///
/// // Or customize
/// let options = MaterializeOptions::new()
///     .with_trim_trailing_cells(false)
///     .with_max_rows(Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Drop the trailing run of rows whose cells are all empty
    pub trim_trailing_rows: bool,
    /// Drop the trailing run of empty cells in every row
    pub trim_trailing_cells: bool,
    /// Stop expanding after this many rows
    pub max_rows: Option<usize>,
    /// Stop expanding after this many cells per row
    pub max_columns: Option<usize>,
}

impl Default for MaterializeOptions {
    fn default() -> Self {
        Self {
            trim_trailing_rows: true,
            trim_trailing_cells: true,
            max_rows: None,
            max_columns: None,
        }
    }
}

impl MaterializeOptions {
    /// Create a new `MaterializeOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether trailing empty rows are dropped.
    ///
    /// Spreadsheet applications commonly pad a sheet with one huge repeated
    /// empty row; keeping it expands to a million rows.
    #[inline]
    pub fn with_trim_trailing_rows(mut self, trim: bool) -> Self {
        self.trim_trailing_rows = trim;
        self
    }

    /// Set whether trailing empty cells in each row are dropped.
    #[inline]
    pub fn with_trim_trailing_cells(mut self, trim: bool) -> Self {
        self.trim_trailing_cells = trim;
        self
    }

    /// Cap the number of materialized rows.
    #[inline]
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Cap the number of materialized cells per row.
    #[inline]
    pub fn with_max_columns(mut self, max_columns: Option<usize>) -> Self {
        self.max_columns = max_columns;
        self
    }

    #[inline]
    pub(crate) fn row_limit(&self) -> usize {
        self.max_rows.unwrap_or(usize::MAX)
    }

    #[inline]
    pub(crate) fn column_limit(&self) -> usize {
        self.max_columns.unwrap_or(usize::MAX)
    }
}
