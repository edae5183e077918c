//! Values collected from one form submission.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// A raw field value as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Free text from a text widget.
    Text(String),
    /// A native date from a date picker.
    Date(NaiveDate),
}

impl FormValue {
    /// Text as entered, or the ISO rendering of a date.
    pub fn raw_text(&self) -> String {
        match self {
            FormValue::Text(text) => text.clone(),
            FormValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<NaiveDate> for FormValue {
    fn from(value: NaiveDate) -> Self {
        FormValue::Date(value)
    }
}

/// Field values keyed by column name, valid for a single submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, FormValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FormValue>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&FormValue> {
        self.values.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<FormValue> {
        self.values.remove(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormValues::new();
        for (column, value) in iter {
            form.insert(column, value);
        }
        form
    }
}
