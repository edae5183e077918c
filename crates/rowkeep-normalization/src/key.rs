//! Key normalization.
//!
//! Date keys accept a native date or free text in any of `YYYY/MM/DD`,
//! `YYYYMMDD`, `YYYY-MM-DD`, with full-width or half-width digits. Every
//! non-digit character is dropped and exactly eight digits must remain.
//! Text keys are trimmed and must not be blank.
//!
//! The canonical key is what rows are matched and sorted on. The display key
//! is what gets stored; it always normalizes back to the same canonical key.

use chrono::{Datelike, NaiveDate};
use rowkeep_model::{
    CanonicalKey, DisplayKey, FormValue, KeyFormat, NormalizationError, NormalizedKey,
};

use crate::width::ascii_digits;

const DATE_DIGITS: usize = 8;
const MAX_YEAR: i32 = 9999;

/// Normalizes a raw key value for the given key format.
pub fn normalize_key(
    format: KeyFormat,
    raw: &FormValue,
) -> Result<NormalizedKey, NormalizationError> {
    match (format, raw) {
        (KeyFormat::Date, FormValue::Date(date)) => normalize_date(*date),
        (KeyFormat::Date, FormValue::Text(text)) => normalize_date_text(text),
        (KeyFormat::Text, FormValue::Date(date)) => normalize_text_key(&slash_date(*date)),
        (KeyFormat::Text, FormValue::Text(text)) => normalize_text_key(text),
    }
}

/// Normalizes a stored cell of the key column.
pub fn normalize_stored_key(
    format: KeyFormat,
    stored: &str,
) -> Result<CanonicalKey, NormalizationError> {
    match format {
        KeyFormat::Date => normalize_date_text(stored).map(|key| key.canonical),
        KeyFormat::Text => normalize_text_key(stored).map(|key| key.canonical),
    }
}

/// Canonical form of a native date. Years outside 0000..=9999 have no
/// eight-digit form.
pub fn normalize_date(date: NaiveDate) -> Result<NormalizedKey, NormalizationError> {
    let year = date.year();
    if !(0..=MAX_YEAR).contains(&year) {
        return Err(NormalizationError::YearOutOfRange { year });
    }
    let digits = date.format("%Y%m%d").to_string();
    Ok(from_date_digits(digits))
}

/// Canonical form of a date typed as text.
pub fn normalize_date_text(raw: &str) -> Result<NormalizedKey, NormalizationError> {
    let digits = ascii_digits(raw);
    if digits.len() != DATE_DIGITS {
        return Err(NormalizationError::NotEightDigitDate {
            raw: raw.to_string(),
            digits: digits.len(),
        });
    }
    Ok(from_date_digits(digits))
}

/// Canonical form of a free-text key.
pub fn normalize_text_key(raw: &str) -> Result<NormalizedKey, NormalizationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizationError::EmptyKey);
    }
    Ok(NormalizedKey {
        canonical: CanonicalKey::new(trimmed),
        display: DisplayKey::new(trimmed),
    })
}

/// Display rendering derived from a canonical key.
pub fn display_form(format: KeyFormat, key: &CanonicalKey) -> DisplayKey {
    let value = key.as_str();
    match format {
        KeyFormat::Date if value.len() == DATE_DIGITS && value.is_ascii() => DisplayKey::new(
            format!("{}/{}/{}", &value[0..4], &value[4..6], &value[6..8]),
        ),
        _ => DisplayKey::new(value),
    }
}

fn from_date_digits(digits: String) -> NormalizedKey {
    let canonical = CanonicalKey::new(digits);
    let display = display_form(KeyFormat::Date, &canonical);
    NormalizedKey { canonical, display }
}

fn slash_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_date_is_zero_padded() {
        let key = normalize_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()).unwrap();
        assert_eq!(key.canonical.as_str(), "20250105");
        assert_eq!(key.display.as_str(), "2025/01/05");
    }

    #[test]
    fn native_dates_beyond_four_digit_years_are_rejected() {
        for year in [10_000, -1] {
            let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            assert_eq!(
                normalize_key(KeyFormat::Date, &FormValue::Date(date)),
                Err(NormalizationError::YearOutOfRange { year })
            );
        }
        let first = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();
        assert_eq!(normalize_date(first).unwrap().canonical.as_str(), "00000101");
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(normalize_date(last).unwrap().canonical.as_str(), "99991231");
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        assert_eq!(
            normalize_date_text("2025/7/15"),
            Err(NormalizationError::NotEightDigitDate {
                raw: "2025/7/15".to_string(),
                digits: 7,
            })
        );
        assert!(normalize_date_text("").is_err());
        assert!(normalize_date_text("2025-07-15 10:00").is_err());
    }

    #[test]
    fn text_keys_are_trimmed() {
        let key = normalize_text_key("  lap-3 ").unwrap();
        assert_eq!(key.canonical.as_str(), "lap-3");
        assert_eq!(key.display.as_str(), "lap-3");
        assert_eq!(normalize_text_key(" \t"), Err(NormalizationError::EmptyKey));
    }

    #[test]
    fn text_format_accepts_native_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
        let key = normalize_key(KeyFormat::Text, &FormValue::Date(date)).unwrap();
        assert_eq!(key.canonical.as_str(), "2025/07/15");
    }
}
