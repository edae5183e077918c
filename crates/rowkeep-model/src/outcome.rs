use serde::Serialize;
use std::fmt;

use crate::CanonicalKey;

/// Whether an upsert overwrote an existing row or appended a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertStatus {
    Inserted,
    Updated,
}

impl fmt::Display for UpsertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertStatus::Inserted => f.write_str("inserted"),
            UpsertStatus::Updated => f.write_str("updated"),
        }
    }
}

/// Result of one successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsertResult {
    pub status: UpsertStatus,
    pub key: CanonicalKey,
}

/// Result of a full-table re-sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SortOutcome {
    /// Data rows in the table.
    pub rows: usize,
    /// Rows whose key failed normalization and were placed last.
    pub unkeyed: usize,
    /// False when the table was already in order and nothing was written.
    pub rewritten: bool,
}
