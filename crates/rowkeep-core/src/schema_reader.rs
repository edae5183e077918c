//! Builds the session schema from the store's header row.

use rowkeep_model::{ColumnDescriptor, Schema, SchemaError};
use rowkeep_store::{CellRange, TableStore};
use tracing::{debug, info, warn};

use crate::config::SchemaConfig;
use crate::error::Result;

/// Reads the header row and assigns each column its configured role.
///
/// An empty header row is initialized with `[key_column, default_text_column]`
/// and written back before the schema is returned.
pub fn read_schema<S>(store: &mut S, config: &SchemaConfig) -> Result<Schema>
where
    S: TableStore + ?Sized,
{
    config.validate()?;

    let mut headers = store.read_header_row()?;
    // Spreadsheet rows often carry trailing blank cells past the last label.
    while headers.last().is_some_and(|cell| cell.trim().is_empty()) {
        headers.pop();
    }

    let healed = headers.is_empty();
    if healed {
        headers = vec![
            config.key_column.clone(),
            config.default_text_column.clone(),
        ];
    }

    if !headers.iter().any(|name| *name == config.key_column) {
        return Err(SchemaError::MissingKeyColumn {
            column: config.key_column.clone(),
            headers,
        }
        .into());
    }

    for column in config.roles.keys() {
        if !headers.contains(column) {
            warn!(column = %column, "configured column not present in header row");
        }
    }

    let columns = headers
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, name)| {
            let role = config.role_for(&name);
            ColumnDescriptor::new(name, role, idx + 1)
        })
        .collect();
    let schema = Schema::new(columns, config.key_format)?;

    // Only a header that forms a valid schema is written back.
    if healed {
        store.write_range(CellRange::full_row(1, headers.len()), &[headers])?;
        info!(columns = schema.len(), "initialized empty header row");
    }
    debug!(
        columns = schema.len(),
        key_column = %schema.key_column().name,
        key_position = schema.key_column().position,
        "schema read"
    );
    Ok(schema)
}
