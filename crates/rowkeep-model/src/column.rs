use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared semantic type of a schema column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// The unique identity of a row.
    Key,
    /// Free text, stored trimmed.
    Text,
    /// Whole numbers.
    Integer,
    /// Real numbers.
    Decimal,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Key => "key",
            ColumnRole::Text => "text",
            ColumnRole::Integer => "integer",
            ColumnRole::Decimal => "decimal",
        }
    }

    /// Returns true for roles whose stored values are numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnRole::Integer | ColumnRole::Decimal)
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How values of the key column are canonicalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    /// Calendar dates, compared as `YYYYMMDD` and displayed as `YYYY/MM/DD`.
    #[default]
    Date,
    /// Free text, compared and displayed trimmed.
    Text,
}

impl KeyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Date => "date",
            KeyFormat::Text => "text",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of a [`crate::Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Header label as read from the store.
    pub name: String,
    pub role: ColumnRole,
    /// 1-based column index in the store.
    pub position: usize,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, role: ColumnRole, position: usize) -> Self {
        Self {
            name: name.into(),
            role,
            position,
        }
    }

    pub fn is_key(&self) -> bool {
        self.role == ColumnRole::Key
    }
}
