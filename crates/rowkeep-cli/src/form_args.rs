//! Turns `--key` and `--set COLUMN=VALUE` arguments into form values.

use chrono::NaiveDate;
use rowkeep_model::{FormValue, FormValues, KeyFormat, Schema};

/// Parses one `COLUMN=VALUE` assignment. The value may be empty or contain
/// further `=` characters; the column name may not be blank.
pub fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let Some((column, value)) = raw.split_once('=') else {
        return Err(format!("expected COLUMN=VALUE, got '{raw}'"));
    };
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{raw}'"));
    }
    Ok((column.to_string(), value.to_string()))
}

/// Builds a submission.
///
/// An explicit `key` wins over a `--set` on the key column. With neither and
/// a date-keyed schema, `today` is used. Later assignments to the same column
/// replace earlier ones.
pub fn build_form(
    schema: &Schema,
    key: Option<&str>,
    assignments: &[(String, String)],
    today: NaiveDate,
) -> FormValues {
    let key_column = schema.key_column().name.as_str();
    let mut form: FormValues = assignments
        .iter()
        .map(|(column, value)| (column.clone(), value.clone()))
        .collect();
    if let Some(key) = key {
        form.insert(key_column, key);
    } else if !form.contains(key_column) && schema.key_format() == KeyFormat::Date {
        form.insert(key_column, FormValue::Date(today));
    }
    form
}
