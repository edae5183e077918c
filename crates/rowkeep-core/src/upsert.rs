//! Row preparation and the lookup-then-write upsert.

use rowkeep_model::{
    CanonicalKey, CellValue, FormValues, NormalizationError, NormalizedKey, Schema, UpsertStatus,
    ValidationErrors,
};
use rowkeep_normalization::{coerce, normalize_key, normalize_stored_key};
use rowkeep_store::{CellRange, TableStore};
use tracing::{debug, warn};

use crate::error::{EngineError, Result};

/// A submission that passed key normalization and value coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRow {
    pub key: NormalizedKey,
    /// One value per schema column, in column order. The key column holds
    /// the display key.
    pub values: Vec<CellValue>,
}

impl PreparedRow {
    pub fn to_record(&self) -> Vec<String> {
        self.values.iter().map(CellValue::to_storage).collect()
    }
}

/// Normalizes the key and coerces every other field.
///
/// All field errors are collected; any of them blocks the write.
pub fn prepare_row(schema: &Schema, mut form: FormValues) -> Result<PreparedRow> {
    let key_column = schema.key_column();
    let key = form
        .remove(&key_column.name)
        .ok_or(NormalizationError::EmptyKey)
        .and_then(|raw| normalize_key(schema.key_format(), &raw))
        .map_err(|source| EngineError::Key {
            column: key_column.name.clone(),
            source,
        })?;

    let mut errors = ValidationErrors::default();
    let mut values = Vec::with_capacity(schema.len());
    for column in schema.columns() {
        if column.is_key() {
            values.push(CellValue::Text(key.display.as_str().to_string()));
            continue;
        }
        let raw = form
            .remove(&column.name)
            .map(|value| value.raw_text())
            .unwrap_or_default();
        match coerce(column.role, &column.name, &raw) {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }

    for column in form.columns() {
        warn!(column = %column, "ignoring form field with no matching column");
    }

    if !errors.is_empty() {
        return Err(EngineError::Validation(errors));
    }
    Ok(PreparedRow { key, values })
}

/// Store row (1-based, header is row 1) of the first data row whose key
/// normalizes to `key`. Cells that fail normalization never match.
pub fn find_key_row<S>(store: &S, schema: &Schema, key: &CanonicalKey) -> Result<Option<usize>>
where
    S: TableStore + ?Sized,
{
    let cells = store.read_column(schema.key_column().position)?;
    let mut matches = cells.iter().enumerate().filter(|(_, cell)| {
        normalize_stored_key(schema.key_format(), cell).is_ok_and(|stored| stored == *key)
    });
    let found = matches.next().map(|(idx, _)| idx + 2);
    if found.is_some() {
        let duplicates = matches.count();
        if duplicates > 0 {
            warn!(key = %key, duplicates, "key appears more than once, using first match");
        }
    }
    debug!(key = %key, scanned = cells.len(), row = ?found, "key lookup");
    Ok(found)
}

/// Overwrites the matching row in one range write, or appends a new row.
pub fn write_row<S>(store: &mut S, schema: &Schema, row: &PreparedRow) -> Result<UpsertStatus>
where
    S: TableStore + ?Sized,
{
    let record = row.to_record();
    match find_key_row(store, schema, &row.key.canonical)? {
        Some(index) => {
            store.write_range(CellRange::full_row(index, schema.len()), &[record])?;
            Ok(UpsertStatus::Updated)
        }
        None => {
            store.append_row(&record)?;
            Ok(UpsertStatus::Inserted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowkeep_model::{ColumnDescriptor, ColumnRole, FormValue, KeyFormat, ValidationReason};
    use rowkeep_store::MemoryTable;

    fn schema() -> Schema {
        Schema::new(
            vec![
                ColumnDescriptor::new("date", ColumnRole::Key, 1),
                ColumnDescriptor::new("age", ColumnRole::Integer, 2),
                ColumnDescriptor::new("weight", ColumnRole::Decimal, 3),
                ColumnDescriptor::new("note", ColumnRole::Text, 4),
            ],
            KeyFormat::Date,
        )
        .unwrap()
    }

    #[test]
    fn prepares_values_in_column_order() {
        let form = FormValues::new()
            .with("note", " felt good ")
            .with("date", "2025-01-10")
            .with("age", "12.0");
        let row = prepare_row(&schema(), form).unwrap();
        assert_eq!(row.key.canonical.as_str(), "20250110");
        assert_eq!(row.to_record(), vec!["2025/01/10", "12", "", "felt good"]);
    }

    #[test]
    fn collects_every_field_error() {
        let form = FormValues::new()
            .with("date", "2025-01-10")
            .with("age", "12.3")
            .with("weight", "heavy");
        let Err(EngineError::Validation(errors)) = prepare_row(&schema(), form) else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.for_field("age").map(|e| e.reason),
            Some(ValidationReason::NotAnInteger)
        );
        assert_eq!(
            errors.for_field("weight").map(|e| e.reason),
            Some(ValidationReason::NotANumber)
        );
    }

    #[test]
    fn missing_key_is_a_key_error() {
        let form = FormValues::new().with("age", "3");
        let err = prepare_row(&schema(), form).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Key {
                source: NormalizationError::EmptyKey,
                ..
            }
        ));
    }

    #[test]
    fn ignores_unknown_fields() {
        let form = FormValues::new()
            .with("date", FormValue::Text("20250110".to_string()))
            .with("mood", "great");
        let row = prepare_row(&schema(), form).unwrap();
        assert_eq!(row.values.len(), 4);
    }

    #[test]
    fn lookup_matches_on_canonical_key_and_first_wins() {
        let store = MemoryTable::from_rows([
            ["date", "age", "weight", "note"],
            ["garbage", "", "", ""],
            ["2025-01-10", "1", "", ""],
            ["2025/01/10", "2", "", ""],
        ]);
        let key = CanonicalKey::new("20250110");
        assert_eq!(find_key_row(&store, &schema(), &key).unwrap(), Some(3));
        let other = CanonicalKey::new("20250111");
        assert_eq!(find_key_row(&store, &schema(), &other).unwrap(), None);
    }
}
