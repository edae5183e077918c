//! Form building from command-line arguments.

use chrono::NaiveDate;
use rowkeep_cli::form_args::{build_form, parse_assignment};
use rowkeep_model::{ColumnDescriptor, ColumnRole, FormValue, KeyFormat, Schema};

fn schema(key_format: KeyFormat) -> Schema {
    Schema::new(
        vec![
            ColumnDescriptor::new("date", ColumnRole::Key, 1),
            ColumnDescriptor::new("age", ColumnRole::Integer, 2),
            ColumnDescriptor::new("note", ColumnRole::Text, 3),
        ],
        key_format,
    )
    .unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

fn assignments(raw: &[&str]) -> Vec<(String, String)> {
    raw.iter().map(|item| parse_assignment(item).unwrap()).collect()
}

#[test]
fn date_key_defaults_to_today() {
    let form = build_form(&schema(KeyFormat::Date), None, &assignments(&["age=12"]), today());
    assert_eq!(form.get("date"), Some(&FormValue::Date(today())));
    assert_eq!(form.get("age"), Some(&FormValue::from("12")));
}

#[test]
fn explicit_key_wins_over_assignment() {
    let form = build_form(
        &schema(KeyFormat::Date),
        Some("2025-01-05"),
        &assignments(&["date=2024/12/31"]),
        today(),
    );
    assert_eq!(form.get("date"), Some(&FormValue::from("2025-01-05")));
}

#[test]
fn key_assignment_is_kept_without_explicit_key() {
    let form = build_form(
        &schema(KeyFormat::Date),
        None,
        &assignments(&["date=2024/12/31"]),
        today(),
    );
    assert_eq!(form.get("date"), Some(&FormValue::from("2024/12/31")));
}

#[test]
fn text_key_has_no_default() {
    let form = build_form(&schema(KeyFormat::Text), None, &assignments(&["note=x"]), today());
    assert!(!form.contains("date"));
    assert_eq!(form.len(), 1);
}

#[test]
fn later_assignment_replaces_earlier() {
    let form = build_form(
        &schema(KeyFormat::Date),
        Some("20250110"),
        &assignments(&["note=first", "note=second"]),
        today(),
    );
    assert_eq!(form.get("note"), Some(&FormValue::from("second")));
}
