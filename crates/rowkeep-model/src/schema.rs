//! Ordered column descriptors with exactly one key column.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{ColumnDescriptor, KeyFormat, SchemaError};

/// Immutable description of the table's columns for one session.
///
/// Invariants, checked by [`Schema::new`]:
/// - exactly one column has [`ColumnRole::Key`](crate::ColumnRole::Key)
/// - names are non-blank and unique
/// - positions run 1..=N in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnDescriptor>,
    #[serde(skip)]
    key_index: usize,
    key_format: KeyFormat,
}

impl Schema {
    pub fn new(columns: Vec<ColumnDescriptor>, key_format: KeyFormat) -> Result<Self, SchemaError> {
        let mut seen = BTreeSet::new();
        let mut key_index = None;
        let mut key_count = 0usize;
        for (idx, column) in columns.iter().enumerate() {
            let expected = idx + 1;
            if column.position != expected {
                return Err(SchemaError::PositionGap {
                    name: column.name.clone(),
                    expected,
                    found: column.position,
                });
            }
            if column.name.trim().is_empty() {
                return Err(SchemaError::BlankColumn {
                    position: column.position,
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
            if column.is_key() {
                key_count += 1;
                key_index.get_or_insert(idx);
            }
        }
        match (key_index, key_count) {
            (Some(key_index), 1) => Ok(Self {
                columns,
                key_index,
                key_format,
            }),
            (_, count) => Err(SchemaError::KeyCount { count }),
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn key_column(&self) -> &ColumnDescriptor {
        &self.columns[self.key_index]
    }

    pub fn key_format(&self) -> KeyFormat {
        self.key_format
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Header labels in position order.
    pub fn header(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }
}
