//! Errors shared by every string store

use thiserror::Error;

/// Failure of a store operation, independent of the backend.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The id or the raw value is already stored
    #[error("string already exists: {0}")]
    AlreadyExists(String),

    #[error("string not found: {0}")]
    NotFound(String),

    /// A stored row could not be turned back into a record
    #[error("invalid string data: {0}")]
    InvalidData(String),

    /// The backend itself failed (database, filesystem)
    #[error("store backend failed: {0}")]
    Backend(String),

    /// Properties could not be encoded or decoded
    #[error("properties (de)serialization failed: {0}")]
    Serialization(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
