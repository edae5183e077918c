//! Comparison keys and their display renderings.

use serde::Serialize;
use std::fmt;

/// Comparison-safe form of a key value (`YYYYMMDD` for dates).
///
/// Two rows with equal canonical keys are the same logical record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Wraps an already-normalized key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable rendering of a canonical key (`YYYY/MM/DD` for dates).
///
/// Stored in the key column, never compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayKey(String);

impl DisplayKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Both renderings of one key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedKey {
    pub canonical: CanonicalKey,
    pub display: DisplayKey,
}
