//! Conversion of raw field text into stored cell values.

use rowkeep_model::{CellValue, ColumnRole, ValidationError, ValidationReason};

use crate::numeric::{parse_f64, parse_whole};
use crate::width::fold_numeric;

/// Coerces raw text for a column of the given role.
///
/// Blank input is valid for every role and yields [`CellValue::Empty`].
/// Rejected input carries the field name and the raw text as entered.
pub fn coerce(role: ColumnRole, field: &str, raw: &str) -> Result<CellValue, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(CellValue::Empty);
    }
    match role {
        ColumnRole::Key | ColumnRole::Text => Ok(CellValue::Text(raw.trim().to_string())),
        ColumnRole::Integer => parse_whole(&fold_numeric(raw))
            .map(CellValue::Integer)
            .map_err(|reason| ValidationError::new(reason, field, raw)),
        ColumnRole::Decimal => parse_f64(&fold_numeric(raw))
            .map(CellValue::Decimal)
            .ok_or_else(|| ValidationError::new(ValidationReason::NotANumber, field, raw)),
    }
}

/// Reads a stored cell for display, falling back to text when the stored
/// value does not fit the column role. Never fails.
pub fn interpret_stored(role: ColumnRole, stored: &str) -> CellValue {
    if stored.trim().is_empty() {
        return CellValue::Empty;
    }
    coerce(role, "", stored).unwrap_or_else(|_| CellValue::Text(stored.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_never_zero() {
        assert_eq!(coerce(ColumnRole::Integer, "age", ""), Ok(CellValue::Empty));
        assert_eq!(coerce(ColumnRole::Decimal, "weight", "  "), Ok(CellValue::Empty));
        assert_eq!(coerce(ColumnRole::Text, "note", "\u{3000}"), Ok(CellValue::Empty));
    }

    #[test]
    fn integer_role() {
        assert_eq!(coerce(ColumnRole::Integer, "age", "12.0"), Ok(CellValue::Integer(12)));
        assert_eq!(coerce(ColumnRole::Integer, "age", "１２"), Ok(CellValue::Integer(12)));
        let err = coerce(ColumnRole::Integer, "age", "12.3").unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotAnInteger);
        assert_eq!(err.field, "age");
        assert_eq!(err.raw, "12.3");
    }

    #[test]
    fn decimal_role() {
        assert_eq!(
            coerce(ColumnRole::Decimal, "weight", "４１．５"),
            Ok(CellValue::Decimal(41.5))
        );
        let err = coerce(ColumnRole::Decimal, "weight", "heavy").unwrap_err();
        assert_eq!(err.reason, ValidationReason::NotANumber);
    }

    #[test]
    fn text_role_trims() {
        assert_eq!(
            coerce(ColumnRole::Text, "note", "  good session "),
            Ok(CellValue::text("good session"))
        );
    }

    #[test]
    fn stored_values_fall_back_to_text() {
        assert_eq!(interpret_stored(ColumnRole::Integer, "13"), CellValue::Integer(13));
        assert_eq!(interpret_stored(ColumnRole::Integer, "n/a"), CellValue::text("n/a"));
        assert_eq!(interpret_stored(ColumnRole::Decimal, ""), CellValue::Empty);
    }
}
