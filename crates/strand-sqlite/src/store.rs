//! SQLite storage backend implementing StringStore and QueryStore

use rusqlite::{types::Value as SqlValue, Connection, OptionalExtension, Row};
use strand_core::{
    filter::{matches, FilterSet},
    storage::{QueryStore, StoreError, StringStore},
    StoredString,
};
use tracing::debug;

use crate::json::{deserialize_properties, serialize_properties, sql_to_timestamp, timestamp_to_sql};

type StoreResult<T> = Result<T, StoreError>;

const SELECT_COLUMNS: &str = "SELECT id, value, properties, created_at FROM strings";

/// Raw column values of one `strings` row
struct StringRow {
    id: String,
    value: String,
    properties: Option<String>,
    created_at: Option<String>,
}

impl StringRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            value: row.get(1)?,
            properties: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn into_stored(self) -> crate::error::Result<StoredString> {
        let properties = deserialize_properties(self.properties.as_deref(), &self.value)?;
        let created_at = match self.created_at.as_deref() {
            Some(raw) => sql_to_timestamp(raw)?,
            None => 0,
        };
        Ok(StoredString {
            id: self.id,
            value: self.value,
            properties,
            created_at,
        })
    }
}

/// SQLite-backed string store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SQLite store from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Create a new in-memory SQLite store (for testing)
    pub fn in_memory() -> crate::error::Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Create a new file-backed SQLite store
    pub fn open(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let conn = Connection::open(path)?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn fetch_one(&self, sql: &str, key: &str) -> StoreResult<Option<StoredString>> {
        let row = self
            .conn
            .query_row(sql, [key], StringRow::from_row)
            .optional()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match row {
            None => Ok(None),
            Some(row) => Ok(Some(row.into_stored()?)),
        }
    }

    fn fetch_all(&self, sql: &str, params: &[SqlValue]) -> StoreResult<Vec<StoredString>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let rows = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), StringRow::from_row)
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .collect::<Result<Vec<StringRow>, rusqlite::Error>>()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        rows.into_iter()
            .map(|row| row.into_stored().map_err(StoreError::from))
            .collect()
    }
}

impl StringStore for SqliteStore {
    fn put(&mut self, record: StoredString) -> StoreResult<()> {
        if self.exists(&record.id)? || self.get_by_value(&record.value)?.is_some() {
            return Err(StoreError::AlreadyExists(record.id));
        }

        let properties_json = serialize_properties(&record.properties)?;
        let created_at_sql = timestamp_to_sql(record.created_at)?;

        self.conn
            .execute(
                "INSERT INTO strings (id, value, properties, created_at) VALUES (?, ?, ?, ?)",
                rusqlite::params![record.id, record.value, properties_json, created_at_sql],
            )
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<StoredString>> {
        self.fetch_one(&format!("{SELECT_COLUMNS} WHERE id = ?"), id)
    }

    fn get_by_value(&self, value: &str) -> StoreResult<Option<StoredString>> {
        self.fetch_one(&format!("{SELECT_COLUMNS} WHERE value = ?"), value)
    }

    fn exists(&self, id: &str) -> StoreResult<bool> {
        self.conn
            .prepare("SELECT 1 FROM strings WHERE id = ?")
            .and_then(|mut stmt| stmt.exists([id]))
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn delete_by_value(&mut self, value: &str) -> StoreResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM strings WHERE value = ?", [value])
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(rows_affected > 0)
    }

    fn list(&self) -> StoreResult<Vec<StoredString>> {
        self.fetch_all(
            &format!("{SELECT_COLUMNS} ORDER BY created_at DESC, rowid DESC"),
            &[],
        )
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM strings", [], |row| row.get(0))
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM strings", [])
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }
}

impl QueryStore for SqliteStore {
    /// Narrows candidates in SQL on the scalar properties, then applies the
    /// evaluator to every candidate so results match the in-memory semantics
    /// exactly (including character presence).
    fn query(&self, filters: &FilterSet) -> StoreResult<Vec<StoredString>> {
        let (clause, params) = where_clause(filters);
        let sql = format!("{SELECT_COLUMNS}{clause} ORDER BY created_at DESC, rowid DESC");
        debug!(%sql, params = params.len(), "querying strings");

        Ok(self
            .fetch_all(&sql, &params)?
            .into_iter()
            .filter(|s| matches(&s.properties, filters))
            .collect())
    }
}

/// Build a WHERE clause over `json_extract(properties, ...)`.
///
/// Rows with NULL properties always pass; their properties are recomputed on
/// read and checked by the evaluator.
fn where_clause(filters: &FilterSet) -> (String, Vec<SqlValue>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    let mut push = |expr: &str, value: SqlValue| {
        conditions.push(format!("(properties IS NULL OR {expr})"));
        params.push(value);
    };

    if let Some(p) = filters.is_palindrome {
        push("json_extract(properties, '$.is_palindrome') = ?", SqlValue::Integer(p.into()));
    }
    if let Some(min) = filters.min_length {
        push("json_extract(properties, '$.length') >= ?", SqlValue::Integer(min));
    }
    if let Some(max) = filters.max_length {
        push("json_extract(properties, '$.length') <= ?", SqlValue::Integer(max));
    }
    if let Some(count) = filters.word_count {
        push("json_extract(properties, '$.word_count') = ?", SqlValue::Integer(count));
    }

    if conditions.is_empty() {
        (String::new(), params)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_clause_empty() {
        let (clause, params) = where_clause(&FilterSet::new());
        assert!(clause.is_empty());
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_clause_ignores_character_filter() {
        let (clause, params) = where_clause(
            &FilterSet::new()
                .palindrome(true)
                .min_length(2)
                .contains_character('z'),
        );
        assert_eq!(params.len(), 2);
        assert!(clause.starts_with(" WHERE "));
        assert!(clause.contains("$.is_palindrome"));
        assert!(clause.contains("$.length"));
        assert!(!clause.contains("character_frequency_map"));
    }

    #[test]
    fn test_null_properties_row_is_queryable() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO strings (id, value, properties, created_at) VALUES ('x', 'level', NULL, '2024-01-01T00:00:00.000Z')",
                [],
            )
            .unwrap();

        let found = store.query(&FilterSet::new().palindrome(true)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value, "level");
        assert_eq!(found[0].created_at, 1704067200000);
    }
}
