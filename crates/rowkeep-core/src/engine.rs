//! Session facade over a table store.

use rowkeep_model::{
    CellValue, ColumnRole, FormValue, FormValues, Row, Schema, SortOutcome, UpsertResult,
};
use rowkeep_normalization::{interpret_stored, normalize_key};
use rowkeep_store::TableStore;
use tracing::{info, info_span};

use crate::config::{SchemaConfig, UpsertOptions};
use crate::error::{EngineError, Result};
use crate::schema_reader::read_schema;
use crate::sort::{resort, sort_by_canonical_key, stored_row_key};
use crate::upsert::{find_key_row, prepare_row, write_row};

/// Keyed upsert engine for one session.
///
/// The schema is read once in [`Engine::open`] and reused for every
/// submission. Every call blocks on the store and completes, or fails,
/// before returning. A single writer is assumed: two concurrent submissions
/// for a new key can both append.
#[derive(Debug)]
pub struct Engine<S> {
    store: S,
    config: SchemaConfig,
    schema: Schema,
    options: UpsertOptions,
}

impl<S: TableStore> Engine<S> {
    /// Reads (or initializes) the header row and builds the schema.
    pub fn open(mut store: S, config: SchemaConfig, options: UpsertOptions) -> Result<Self> {
        let schema = read_schema(&mut store, &config)?;
        Ok(Self {
            store,
            config,
            schema,
            options,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn set_sort_after_write(&mut self, enabled: bool) {
        self.options.sort_after_write = enabled;
    }

    /// Re-reads the header row after it was changed outside this session.
    pub fn refresh_schema(&mut self) -> Result<&Schema> {
        self.schema = read_schema(&mut self.store, &self.config)?;
        Ok(&self.schema)
    }

    /// Validates a submission, then updates the row with the same key or
    /// appends a new one. Optionally re-sorts the table afterwards.
    pub fn submit(&mut self, form: FormValues) -> Result<UpsertResult> {
        let span = info_span!("submit", fields = form.len());
        let _guard = span.enter();

        let prepared = prepare_row(&self.schema, form)?;
        let status = write_row(&mut self.store, &self.schema, &prepared)?;
        info!(key = %prepared.key.canonical, status = %status, "row saved");

        if self.options.sort_after_write {
            resort(&mut self.store, &self.schema)?;
        }
        Ok(UpsertResult {
            status,
            key: prepared.key.canonical,
        })
    }

    /// The stored row for a key, if one exists.
    pub fn find(&self, raw_key: &FormValue) -> Result<Option<Row>> {
        let key_column = self.schema.key_column();
        let key = normalize_key(self.schema.key_format(), raw_key).map_err(|source| {
            EngineError::Key {
                column: key_column.name.clone(),
                source,
            }
        })?;
        let Some(index) = find_key_row(&self.store, &self.schema, &key.canonical)? else {
            return Ok(None);
        };
        let record = self.store.read_row(index)?;
        Ok(Some(self.typed_row(&record)))
    }

    /// Every data row, typed by column role. With `sorted_by_key`, rows are
    /// ordered by canonical key with unreadable keys last; the store is not
    /// modified either way.
    pub fn list_all(&self, sorted_by_key: bool) -> Result<Vec<Row>> {
        let mut records = self.store.read_all_rows()?;
        if sorted_by_key {
            sort_by_canonical_key(&mut records, |record| stored_row_key(&self.schema, record));
        }
        Ok(records.iter().map(|record| self.typed_row(record)).collect())
    }

    /// Re-sorts the table by key now, regardless of the write policy.
    pub fn resort(&mut self) -> Result<SortOutcome> {
        let span = info_span!("resort");
        let _guard = span.enter();
        resort(&mut self.store, &self.schema)
    }

    /// Removes every data row and keeps the header, in one write.
    pub fn clear_rows(&mut self) -> Result<()> {
        self.store.write_all(&[self.schema.header()])?;
        info!("cleared all data rows");
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn typed_row(&self, record: &[String]) -> Row {
        let values = self
            .schema
            .columns()
            .iter()
            .map(|column| {
                let cell = record
                    .get(column.position - 1)
                    .map(String::as_str)
                    .unwrap_or_default();
                match column.role {
                    ColumnRole::Key if cell.trim().is_empty() => CellValue::Empty,
                    ColumnRole::Key => CellValue::Text(cell.to_string()),
                    role => interpret_stored(role, cell),
                }
            })
            .collect();
        Row::from_values(&self.schema, values)
    }
}
