use gamevault_core::{RecordId, ValidationError};
use thiserror::Error;

/// Errors returned by record store operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// The input failed field validation; nothing was changed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this id in either collection
    #[error("No game with id {0}")]
    NotFound(RecordId),

    /// The id high-water mark is at `RecordId::MAX`; nothing was added
    #[error("No record ids left after {0}")]
    IdsExhausted(RecordId),
}

/// Errors from the persistence gateway.
///
/// A failed save never rolls back the in-memory collections; callers get the
/// error back as a warning alongside the successful result.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error for '{key}': {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    #[error("Saved '{key}' is not a valid collection: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    #[error("Could not serialize '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error("Storage quota exceeded writing '{key}' ({size} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        size: usize,
        available: usize,
    },
}

/// Errors from CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No games to export")]
    NothingToExport,
}
