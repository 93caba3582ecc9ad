//! JSON and timestamp helpers for SQLite storage
//!
//! Properties live in a JSON text column; creation times are RFC 3339 text
//! with fixed millisecond precision so that lexical order is time order.

use chrono::{DateTime, SecondsFormat};
use strand_core::{analyze, PropertyRecord};

use crate::error::{Result, SqliteError};

/// Serialize a property record for the `properties` column
pub fn serialize_properties(properties: &PropertyRecord) -> Result<String> {
    Ok(serde_json::to_string(properties)?)
}

/// Deserialize the `properties` column.
///
/// Rows written before the column existed hold NULL; their properties are
/// recomputed from the raw value.
pub fn deserialize_properties(json: Option<&str>, value: &str) -> Result<PropertyRecord> {
    match json {
        Some(json_str) => Ok(serde_json::from_str(json_str)?),
        None => Ok(analyze(value)),
    }
}

/// Convert Unix timestamp milliseconds to an RFC 3339 string
pub fn timestamp_to_sql(timestamp_ms: i64) -> Result<String> {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| SqliteError::Timestamp(timestamp_ms.to_string()))
}

/// Convert an RFC 3339 string to Unix timestamp milliseconds
pub fn sql_to_timestamp(datetime_str: &str) -> Result<i64> {
    let dt = DateTime::parse_from_rfc3339(datetime_str)
        .map_err(|_| SqliteError::Timestamp(datetime_str.to_string()))?;

    Ok(dt.timestamp_millis())
}
