//! Full-table re-sort by canonical key.

use std::cmp::Ordering;

use rowkeep_model::{CanonicalKey, Schema, SortOutcome};
use rowkeep_normalization::normalize_stored_key;
use rowkeep_store::TableStore;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Ascending by key; rows without a valid key sort after all keyed rows.
pub fn compare_keys(a: Option<&CanonicalKey>, b: Option<&CanonicalKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Canonical key of a stored row, if its key cell normalizes.
pub fn stored_row_key(schema: &Schema, row: &[String]) -> Option<CanonicalKey> {
    let cell = row
        .get(schema.key_column().position - 1)
        .map(String::as_str)
        .unwrap_or_default();
    normalize_stored_key(schema.key_format(), cell).ok()
}

/// Stable-sorts items by an optional key. Returns the number of items
/// without a key and whether any item changed position.
pub fn sort_by_canonical_key<T>(
    items: &mut Vec<T>,
    key_of: impl Fn(&T) -> Option<CanonicalKey>,
) -> (usize, bool) {
    let mut keyed: Vec<(usize, Option<CanonicalKey>, T)> = items
        .drain(..)
        .enumerate()
        .map(|(idx, item)| {
            let key = key_of(&item);
            (idx, key, item)
        })
        .collect();
    let unkeyed = keyed.iter().filter(|(_, key, _)| key.is_none()).count();
    keyed.sort_by(|a, b| compare_keys(a.1.as_ref(), b.1.as_ref()));
    let moved = keyed
        .iter()
        .enumerate()
        .any(|(position, (original, _, _))| position != *original);
    items.extend(keyed.into_iter().map(|(_, _, item)| item));
    (unkeyed, moved)
}

/// Reads every data row, sorts by key and rewrites header plus rows in one
/// bulk write. Nothing is written when the table is already in order.
pub fn resort<S>(store: &mut S, schema: &Schema) -> Result<SortOutcome>
where
    S: TableStore + ?Sized,
{
    let mut rows = store.read_all_rows()?;
    let (unkeyed, moved) = sort_by_canonical_key(&mut rows, |row| stored_row_key(schema, row));
    if unkeyed > 0 {
        warn!(unkeyed, "rows with unreadable keys placed last");
    }
    let outcome = SortOutcome {
        rows: rows.len(),
        unkeyed,
        rewritten: moved,
    };
    if !moved {
        debug!(rows = rows.len(), "table already sorted");
        return Ok(outcome);
    }

    let mut table = Vec::with_capacity(rows.len() + 1);
    table.push(schema.header());
    table.extend(rows);
    store.write_all(&table)?;
    info!(rows = outcome.rows, unkeyed, "table re-sorted");
    Ok(outcome)
}
