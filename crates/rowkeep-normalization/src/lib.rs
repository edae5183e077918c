//! Normalization functions for keyed row upserts.
//!
//! - **key**: canonical and display forms of key column values
//! - **coerce**: raw field text to typed cell values, per column role
//! - **numeric**: integer and decimal parsing
//! - **width**: full-width digit folding
//!
//! Everything here is pure: no I/O, same input, same output.

pub mod coerce;
pub mod key;
pub mod numeric;
pub mod width;

pub use coerce::{coerce, interpret_stored};
pub use key::{
    display_form, normalize_date, normalize_date_text, normalize_key, normalize_stored_key,
    normalize_text_key,
};
