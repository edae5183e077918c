use crate::address::CellRange;
use crate::error::Result;

/// Handle to a remote table whose first row is the header.
///
/// Rows and columns are 1-based, as in a spreadsheet. Each call is a single
/// request: a failed write leaves the table as it was before the call.
pub trait TableStore {
    /// Cells of row 1.
    fn read_header_row(&self) -> Result<Vec<String>>;

    /// Cells of one column for every row below the header.
    fn read_column(&self, column: usize) -> Result<Vec<String>>;

    /// Cells of one row. Rows past the end of the table are empty.
    fn read_row(&self, row: usize) -> Result<Vec<String>>;

    /// Every row below the header.
    fn read_all_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Overwrites a rectangular block. `rows` must match the range's shape.
    fn write_range(&mut self, range: CellRange, rows: &[Vec<String>]) -> Result<()>;

    /// Adds a row after the last row; the store decides the final index.
    fn append_row(&mut self, row: &[String]) -> Result<()>;

    /// Removes every row, header included.
    fn clear_all(&mut self) -> Result<()>;

    /// Replaces the whole table, header included, with `rows`.
    fn write_all(&mut self, rows: &[Vec<String>]) -> Result<()>;
}
