//! Row-major cell grid shared by the bundled adapters.

use crate::address::CellRange;
use crate::error::{Result, StoreError};

/// Cells as rows of text. Row 0 is the header row; rows may be ragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub(crate) fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub(crate) fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub(crate) fn header(&self) -> Vec<String> {
        self.rows.first().cloned().unwrap_or_default()
    }

    /// Cells of a 1-based column below the header; short rows yield "".
    pub(crate) fn column(&self, column: usize) -> Vec<String> {
        if column == 0 {
            return Vec::new();
        }
        self.rows
            .iter()
            .skip(1)
            .map(|row| row.get(column - 1).cloned().unwrap_or_default())
            .collect()
    }

    /// A 1-based row; rows past the end are empty.
    pub(crate) fn row(&self, row: usize) -> Vec<String> {
        row.checked_sub(1)
            .and_then(|idx| self.rows.get(idx))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn data_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().skip(1).cloned().collect()
    }

    /// Overwrites a block, growing the grid with empty cells as needed.
    pub(crate) fn write_range(&mut self, range: CellRange, block: &[Vec<String>]) -> Result<()> {
        check_block(range, block)?;
        if self.rows.len() < range.row_end {
            self.rows.resize_with(range.row_end, Vec::new);
        }
        for (offset, values) in block.iter().enumerate() {
            let row = &mut self.rows[range.row_start - 1 + offset];
            if row.len() < range.col_end {
                row.resize(range.col_end, String::new());
            }
            for (col_offset, value) in values.iter().enumerate() {
                row[range.col_start - 1 + col_offset] = value.clone();
            }
        }
        Ok(())
    }

    pub(crate) fn append(&mut self, row: &[String]) {
        self.rows.push(row.to_vec());
    }

    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    pub(crate) fn replace(&mut self, rows: &[Vec<String>]) {
        self.rows = rows.to_vec();
    }
}

/// Rejects blocks whose shape does not match the range.
pub(crate) fn check_block(range: CellRange, block: &[Vec<String>]) -> Result<()> {
    if !range.is_valid() {
        return Err(StoreError::new(
            "write_range",
            format!("invalid range {range}"),
        ));
    }
    if block.len() != range.height() {
        return Err(StoreError::new(
            "write_range",
            format!(
                "range {range} spans {} rows but {} were supplied",
                range.height(),
                block.len()
            ),
        ));
    }
    if let Some(values) = block.iter().find(|values| values.len() != range.width()) {
        return Err(StoreError::new(
            "write_range",
            format!(
                "range {range} spans {} columns but a row has {}",
                range.width(),
                values.len()
            ),
        ));
    }
    Ok(())
}
