//! Opaque store failure.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Any failure reported by a table store. The engine does not retry.
#[derive(Debug, Error)]
#[error("store {operation} failed: {source}")]
pub struct StoreError {
    operation: &'static str,
    #[source]
    source: BoxError,
}

impl StoreError {
    pub fn new(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }

    /// Name of the store call that failed (e.g. `write_range`).
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn wraps_message_and_io_causes() {
        let err = StoreError::new("append_row", "quota exceeded");
        assert_eq!(err.to_string(), "store append_row failed: quota exceeded");
        assert_eq!(err.operation(), "append_row");

        let io = std::io::Error::other("disk full");
        let err = StoreError::new("write_all", io);
        assert!(err.source().is_some());
    }
}
