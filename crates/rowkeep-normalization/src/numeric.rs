//! Numeric parsing for integer and decimal columns.

use rowkeep_model::ValidationReason;

/// Parses a string as f64, returning None for invalid, empty or non-finite input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a whole number. Integral decimals such as `12.0` or `1e3` are
/// accepted and truncated; fractional values are rejected.
pub fn parse_whole(value: &str) -> Result<i64, ValidationReason> {
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<i64>() {
        return Ok(parsed);
    }
    let parsed = parse_f64(trimmed).ok_or(ValidationReason::NotAnInteger)?;
    if parsed.fract() != 0.0 {
        return Err(ValidationReason::NotAnInteger);
    }
    // i64::MAX is not representable; 2^63 is the first value out of range.
    if parsed < i64::MIN as f64 || parsed >= i64::MAX as f64 {
        return Err(ValidationReason::OutOfRange);
    }
    Ok(parsed as i64)
}
