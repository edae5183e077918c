//! A1-style cell addressing.
//!
//! Adapters use these to name ranges in requests and error messages. The
//! upsert logic addresses cells only by numeric row and column.

use std::fmt;

/// Spreadsheet column letters for a 1-based column index (1 -> `A`, 27 -> `AA`).
///
/// Returns an empty string for column 0.
pub fn column_letters(column: usize) -> String {
    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A1 address of a 1-based `(row, column)` cell.
pub fn cell_address(row: usize, column: usize) -> String {
    format!("{}{row}", column_letters(column))
}

/// Rectangular block of cells, 1-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub row_start: usize,
    pub row_end: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl CellRange {
    pub fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Columns `1..=columns` of a single row.
    pub fn full_row(row: usize, columns: usize) -> Self {
        Self::new(row, row, 1, columns)
    }

    /// True when both ends are 1-based and not inverted.
    pub fn is_valid(&self) -> bool {
        self.row_start >= 1
            && self.col_start >= 1
            && self.row_start <= self.row_end
            && self.col_start <= self.col_end
    }

    pub fn height(&self) -> usize {
        (self.row_end + 1).saturating_sub(self.row_start)
    }

    pub fn width(&self) -> usize {
        (self.col_end + 1).saturating_sub(self.col_start)
    }

    /// A1 notation, e.g. `A3:C3`.
    pub fn to_a1(&self) -> String {
        format!(
            "{}:{}",
            cell_address(self.row_start, self.col_start),
            cell_address(self.row_end, self.col_end)
        )
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_roll_over() {
        assert_eq!(column_letters(0), "");
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(52), "AZ");
        assert_eq!(column_letters(53), "BA");
        assert_eq!(column_letters(702), "ZZ");
        assert_eq!(column_letters(703), "AAA");
    }

    #[test]
    fn range_renders_a1() {
        let range = CellRange::full_row(3, 3);
        assert_eq!(range.to_a1(), "A3:C3");
        assert_eq!(cell_address(10, 28), "AB10");
        assert_eq!(range.height(), 1);
        assert_eq!(range.width(), 3);
    }

    #[test]
    fn range_validity() {
        assert!(CellRange::new(2, 4, 1, 3).is_valid());
        assert!(!CellRange::new(0, 1, 1, 1).is_valid());
        assert!(!CellRange::new(3, 2, 1, 1).is_valid());
        assert_eq!(CellRange::new(3, 2, 1, 1).height(), 0);
    }
}
