//! In-memory table.

use tracing::debug;

use crate::address::CellRange;
use crate::error::Result;
use crate::grid::Grid;
use crate::table::TableStore;

/// A table held in memory. Counts mutating calls so callers can check how
/// many requests an operation issued.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    grid: Grid,
    write_calls: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the given rows; the first row is the header.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::<String>::into).collect())
            .collect();
        Self {
            grid: Grid::from_rows(rows),
            write_calls: 0,
        }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        self.grid.rows()
    }

    /// Number of mutating calls served.
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }
}

impl TableStore for MemoryTable {
    fn read_header_row(&self) -> Result<Vec<String>> {
        Ok(self.grid.header())
    }

    fn read_column(&self, column: usize) -> Result<Vec<String>> {
        Ok(self.grid.column(column))
    }

    fn read_row(&self, row: usize) -> Result<Vec<String>> {
        Ok(self.grid.row(row))
    }

    fn read_all_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.grid.data_rows())
    }

    fn write_range(&mut self, range: CellRange, rows: &[Vec<String>]) -> Result<()> {
        self.write_calls += 1;
        debug!(range = %range, "memory write_range");
        self.grid.write_range(range, rows)
    }

    fn append_row(&mut self, row: &[String]) -> Result<()> {
        self.write_calls += 1;
        self.grid.append(row);
        Ok(())
    }

    fn clear_all(&mut self) -> Result<()> {
        self.write_calls += 1;
        self.grid.clear();
        Ok(())
    }

    fn write_all(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.write_calls += 1;
        self.grid.replace(rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_empty_header() {
        let table = MemoryTable::new();
        assert!(table.read_header_row().unwrap().is_empty());
        assert!(table.read_all_rows().unwrap().is_empty());
        assert!(table.read_column(1).unwrap().is_empty());
    }

    #[test]
    fn append_then_read() {
        let mut table = MemoryTable::from_rows([["date", "note"]]);
        table
            .append_row(&["2025/01/10".to_string(), "test".to_string()])
            .unwrap();
        assert_eq!(table.read_column(1).unwrap(), vec!["2025/01/10"]);
        assert_eq!(table.read_row(2).unwrap(), vec!["2025/01/10", "test"]);
        assert_eq!(table.write_calls(), 1);
    }

    #[test]
    fn clear_and_rewrite() {
        let mut table = MemoryTable::from_rows([["date"], ["2025/01/10"]]);
        table.clear_all().unwrap();
        assert!(table.rows().is_empty());
        table
            .write_all(&[vec!["date".to_string()], vec!["2025/01/05".to_string()]])
            .unwrap();
        assert_eq!(table.read_all_rows().unwrap(), vec![vec!["2025/01/05"]]);
    }
}
