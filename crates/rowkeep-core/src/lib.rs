//! Keyed row upsert engine.
//!
//! Sits between a header-first tabular store and one user's form values:
//!
//! 1. [`read_schema`] reads the header row once per session and assigns each
//!    column its configured role.
//! 2. [`prepare_row`] normalizes the key and coerces every other field,
//!    collecting all field errors before anything is written.
//! 3. [`write_row`] overwrites the first row with the same canonical key in a
//!    single range write, or appends.
//! 4. [`resort`] optionally rewrites the table ordered by canonical key.
//!
//! [`Engine`] ties these together for a session.
//!
//! # Example
//!
//! ```
//! use rowkeep_core::{Engine, SchemaConfig, UpsertOptions};
//! use rowkeep_model::{ColumnRole, FormValues, UpsertStatus};
//! use rowkeep_store::MemoryTable;
//!
//! let config = SchemaConfig::new("date").with_role("age", ColumnRole::Integer);
//! let store = MemoryTable::from_rows([["date", "age", "note"]]);
//! let mut engine = Engine::open(store, config, UpsertOptions::default())?;
//!
//! let form = FormValues::new().with("date", "2025-01-10").with("age", "12");
//! let result = engine.submit(form)?;
//! assert_eq!(result.status, UpsertStatus::Inserted);
//! assert_eq!(result.key.as_str(), "20250110");
//! # Ok::<(), rowkeep_core::EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod schema_reader;
pub mod sort;
pub mod upsert;

pub use config::{Config, SchemaConfig, TableConfig, UpsertOptions, load_config};
pub use engine::Engine;
pub use error::{ConfigError, EngineError, Result};
pub use schema_reader::read_schema;
pub use sort::resort;
pub use upsert::{PreparedRow, find_key_row, prepare_row, write_row};
