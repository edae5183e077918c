//! Tabular store boundary.
//!
//! The engine reads and writes a remote table only through [`TableStore`].
//! Two adapters ship with the crate:
//!
//! - [`MemoryTable`]: rows held in memory, for tests and embedding
//! - [`CsvTable`]: a CSV file rewritten atomically on every write
//!
//! A1 addressing ([`CellRange::to_a1`]) is available to adapters that talk to
//! spreadsheet APIs.

pub mod address;
mod csv_table;
mod error;
mod grid;
mod memory;
mod table;

pub use address::{CellRange, cell_address, column_letters};
pub use csv_table::CsvTable;
pub use error::{Result, StoreError};
pub use memory::MemoryTable;
pub use table::TableStore;
