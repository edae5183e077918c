//! Data model for keyed row upserts.
//!
//! Types shared by the normalizer, the store adapters and the engine:
//! the [`Schema`] read from a table's header row, typed [`CellValue`]s and
//! [`Row`]s, per-submission [`FormValues`], and the canonical/display key
//! pair every write is keyed on.

pub mod column;
pub mod error;
pub mod form;
pub mod key;
pub mod outcome;
pub mod schema;
pub mod value;

pub use column::{ColumnDescriptor, ColumnRole, KeyFormat};
pub use error::{
    NormalizationError, SchemaError, ValidationError, ValidationErrors, ValidationReason,
};
pub use form::{FormValue, FormValues};
pub use key::{CanonicalKey, DisplayKey, NormalizedKey};
pub use outcome::{SortOutcome, UpsertResult, UpsertStatus};
pub use schema::Schema;
pub use value::{CellValue, Row};
