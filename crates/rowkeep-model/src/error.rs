//! Field-level and schema error types.

use std::fmt;

use thiserror::Error;

use crate::ColumnRole;

/// A key value that cannot be turned into a canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// Date keys must reduce to exactly eight digits.
    #[error("not an 8-digit date: '{raw}' contains {digits} digits")]
    NotEightDigitDate { raw: String, digits: usize },

    /// Native dates must fall in years 0000 through 9999.
    #[error("year {year} does not fit an 8-digit date")]
    YearOutOfRange { year: i32 },

    /// Text keys must not be blank.
    #[error("empty key")]
    EmptyKey,
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    NotAnInteger,
    NotANumber,
    OutOfRange,
}

impl ValidationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationReason::NotAnInteger => "not an integer",
            ValidationReason::NotANumber => "not a number",
            ValidationReason::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-key field value that does not fit its column role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} in field '{field}': '{raw}'")]
pub struct ValidationError {
    pub reason: ValidationReason,
    pub field: String,
    pub raw: String,
}

impl ValidationError {
    pub fn new(reason: ValidationReason, field: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            reason,
            field: field.into(),
            raw: raw.into(),
        }
    }
}

/// Every rejected field of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns the error for a field, if that field was rejected.
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The header row cannot form a valid schema. Fatal for the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("key column '{column}' not found in header row [{}]", headers.join(", "))]
    MissingKeyColumn {
        column: String,
        headers: Vec<String>,
    },

    #[error("duplicate column name '{name}' in header row")]
    DuplicateColumn { name: String },

    #[error("blank column name at position {position}")]
    BlankColumn { position: usize },

    #[error("schema must have exactly one key column, found {count}")]
    KeyCount { count: usize },

    #[error("column '{name}' is at position {found}, expected {expected}")]
    PositionGap {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("key column '{column}' cannot also be declared as {role}")]
    ConflictingRole { column: String, role: ColumnRole },

    #[error("column '{column}' is declared as the key role but is not the key column")]
    StrayKeyRole { column: String },

    #[error("default text column '{name}' must be non-blank and differ from the key column")]
    InvalidDefaultColumn { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field_and_raw_text() {
        let err = ValidationError::new(ValidationReason::NotAnInteger, "age", "12.3");
        assert_eq!(err.to_string(), "not an integer in field 'age': '12.3'");
    }

    #[test]
    fn validation_errors_join_messages() {
        let mut errors = ValidationErrors::default();
        errors.push(ValidationError::new(ValidationReason::NotAnInteger, "age", "x"));
        errors.push(ValidationError::new(ValidationReason::NotANumber, "weight", "y"));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "not an integer in field 'age': 'x'; not a number in field 'weight': 'y'"
        );
        assert_eq!(errors.for_field("weight").map(|e| e.raw.as_str()), Some("y"));
        assert!(errors.for_field("note").is_none());
    }

    #[test]
    fn missing_key_column_lists_headers() {
        let err = SchemaError::MissingKeyColumn {
            column: "date".to_string(),
            headers: vec!["day".to_string(), "note".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "key column 'date' not found in header row [day, note]"
        );
    }
}
