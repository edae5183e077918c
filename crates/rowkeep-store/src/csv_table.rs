//! CSV file adapter.
//!
//! The file is the table: line 1 is the header row. A missing file reads as
//! an empty table and is created on the first write. Every mutating call
//! loads the file, applies the change, writes the result to a temporary file
//! in the same directory and renames it over the original, so a failed call
//! leaves the previous contents untouched.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::address::CellRange;
use crate::error::{Result, StoreError};
use crate::grid::Grid;
use crate::table::TableStore;

/// A table stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
}

impl CsvTable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self, operation: &'static str) -> Result<Grid> {
        if !self.path.exists() {
            trace!(path = %self.path.display(), "table file absent, reading as empty");
            return Ok(Grid::default());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| StoreError::new(operation, e))?;
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| StoreError::new(operation, e))?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }
        Ok(Grid::from_rows(rows))
    }

    fn persist(&self, grid: &Grid, operation: &'static str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::new(operation, e))?;
        let mut file = NamedTempFile::new_in(&dir).map_err(|e| StoreError::new(operation, e))?;
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(&mut file);
            for row in grid.rows() {
                // A zero-field record would be written as a blank line, which
                // readers skip; keep one empty field so row indices hold.
                let written = if row.is_empty() {
                    writer.write_record([""])
                } else {
                    writer.write_record(row)
                };
                written.map_err(|e| StoreError::new(operation, e))?;
            }
            writer.flush().map_err(|e| StoreError::new(operation, e))?;
        }
        file.flush().map_err(|e| StoreError::new(operation, e))?;
        file.persist(&self.path)
            .map_err(|e| StoreError::new(operation, e.error))?;
        debug!(
            path = %self.path.display(),
            rows = grid.rows().len(),
            operation,
            "table file written"
        );
        Ok(())
    }

    fn modify(
        &self,
        operation: &'static str,
        apply: impl FnOnce(&mut Grid) -> Result<()>,
    ) -> Result<()> {
        let mut grid = self.load(operation)?;
        apply(&mut grid)?;
        self.persist(&grid, operation)
    }
}

impl TableStore for CsvTable {
    fn read_header_row(&self) -> Result<Vec<String>> {
        Ok(self.load("read_header_row")?.header())
    }

    fn read_column(&self, column: usize) -> Result<Vec<String>> {
        Ok(self.load("read_column")?.column(column))
    }

    fn read_row(&self, row: usize) -> Result<Vec<String>> {
        Ok(self.load("read_row")?.row(row))
    }

    fn read_all_rows(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.load("read_all_rows")?.data_rows())
    }

    fn write_range(&mut self, range: CellRange, rows: &[Vec<String>]) -> Result<()> {
        debug!(path = %self.path.display(), range = %range, "csv write_range");
        self.modify("write_range", |grid| grid.write_range(range, rows))
    }

    fn append_row(&mut self, row: &[String]) -> Result<()> {
        self.modify("append_row", |grid| {
            grid.append(row);
            Ok(())
        })
    }

    fn clear_all(&mut self) -> Result<()> {
        self.persist(&Grid::default(), "clear_all")
    }

    fn write_all(&mut self, rows: &[Vec<String>]) -> Result<()> {
        self.persist(&Grid::from_rows(rows.to_vec()), "write_all")
    }
}
