//! SQLite backend errors

use strand_core::storage::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SqliteError>;

#[derive(Debug, Error)]
pub enum SqliteError {
    #[error("sqlite: {0}")]
    Database(#[from] rusqlite::Error),

    /// The `properties` column held malformed JSON
    #[error("properties json: {0}")]
    Json(#[from] serde_json::Error),

    /// The `created_at` column is not RFC 3339
    #[error("invalid timestamp '{0}'")]
    Timestamp(String),
}

impl From<SqliteError> for StoreError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Json(e) => Self::Serialization(e.to_string()),
            SqliteError::Timestamp(raw) => Self::InvalidData(format!("created_at {}", raw)),
            SqliteError::Database(e) => Self::Backend(e.to_string()),
        }
    }
}
