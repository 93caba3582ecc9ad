//! Stored string type definitions

use serde::{Deserialize, Serialize};

use crate::analyze::{analyze, analyze_value, AnalyzeError, PropertyRecord};

/// A string as kept by a store: the raw value, its derived properties and
/// when it was first stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredString {
    /// Content hash of `value` (lowercase hex SHA-256)
    pub id: String,

    /// The raw string
    pub value: String,

    /// Derived properties, computed once on ingestion
    pub properties: PropertyRecord,

    /// Creation time (Unix timestamp milliseconds)
    pub created_at: i64,
}

impl StoredString {
    /// Analyze `value` and wrap it for storage.
    pub fn new(value: impl Into<String>, created_at: i64) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.content_hash().to_string(),
            value,
            properties,
            created_at,
        }
    }

    /// Wrap a dynamically typed value, rejecting anything that is not a string.
    pub fn from_json_value(
        value: &serde_json::Value,
        created_at: i64,
    ) -> Result<Self, AnalyzeError> {
        let properties = analyze_value(value)?;
        let value = value.as_str().unwrap_or_default().to_string();
        Ok(Self {
            id: properties.content_hash().to_string(),
            value,
            properties,
            created_at,
        })
    }
}
