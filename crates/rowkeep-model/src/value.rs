use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::Schema;

/// A typed cell, as written to or read from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Not entered. Distinct from zero.
    Empty,
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Storage representation of the cell.
    pub fn to_storage(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(value) => write!(f, "{value}"),
            // f64 Display never emits exponents or trailing zeros.
            CellValue::Decimal(value) => write!(f, "{value}"),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

/// A record holding one value for every schema column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<(String, CellValue)>,
}

impl Row {
    /// Pairs `values` with the schema's columns. Missing trailing values
    /// become [`CellValue::Empty`]; extra values are dropped.
    pub fn from_values(schema: &Schema, values: Vec<CellValue>) -> Self {
        let mut values = values.into_iter();
        let cells = schema
            .columns()
            .iter()
            .map(|column| {
                let value = values.next().unwrap_or(CellValue::Empty);
                (column.name.clone(), value)
            })
            .collect();
        Self { cells }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().map(|(_, value)| value)
    }

    /// Storage strings in column order.
    pub fn to_record(&self) -> Vec<String> {
        self.values().map(CellValue::to_storage).collect()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnDescriptor, ColumnRole, KeyFormat};

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
    fn storage_rendering() {
        assert_eq!(CellValue::Empty.to_storage(), "");
        assert_eq!(CellValue::Integer(12).to_storage(), "12");
        assert_eq!(CellValue::Decimal(41.5).to_storage(), "41.5");
        assert_eq!(CellValue::Decimal(10.0).to_storage(), "10");
        assert_eq!(CellValue::text("ok").to_storage(), "ok");
    }

    #[test]
    fn row_pads_missing_values() {
        let row = Row::from_values(
            &schema(),
            vec![CellValue::text("2025/01/10"), CellValue::Integer(12)],
        );
        assert_eq!(row.len(), 4);
        assert_eq!(row.get("age"), Some(&CellValue::Integer(12)));
        assert_eq!(row.get("note"), Some(&CellValue::Empty));
        assert_eq!(row.get("missing"), None);
        assert_eq!(row.to_record(), vec!["2025/01/10", "12", "", ""]);
    }

    #[test]
    fn row_serializes_in_column_order() {
        let row = Row::from_values(
            &schema(),
            vec![
                CellValue::text("2025/01/10"),
                CellValue::Integer(12),
                CellValue::Decimal(41.5),
                CellValue::Empty,
            ],
        );
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2025/01/10","age":12,"weight":41.5,"note":null}"#
        );
    }
}
