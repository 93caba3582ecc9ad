//! Storage trait definitions

use crate::filter::{matches, FilterSet};
use crate::record::StoredString;
use crate::storage::error::StoreResult;

/// Core storage operations for analyzed strings.
///
/// Identity is the content hash, so a value can only be stored once.
/// Implementations must reject a second `put` of the same id *or* value.
pub trait StringStore {
    /// Store a string.
    ///
    /// If the id or value is already present, returns `StoreError::AlreadyExists`.
    fn put(&mut self, record: StoredString) -> StoreResult<()>;

    /// Retrieve a string by id (content hash).
    fn get(&self, id: &str) -> StoreResult<Option<StoredString>>;

    /// Retrieve a string by its raw value.
    fn get_by_value(&self, value: &str) -> StoreResult<Option<StoredString>>;

    /// Check if a string with this id exists.
    fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }

    /// Delete a string by its raw value.
    ///
    /// Returns `true` if it was deleted, `false` if it didn't exist.
    fn delete_by_value(&mut self, value: &str) -> StoreResult<bool>;

    /// All stored strings, newest first.
    fn list(&self) -> StoreResult<Vec<StoredString>>;

    /// Get the total count of stored strings.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    /// Remove every stored string.
    fn clear(&mut self) -> StoreResult<()>;
}

/// Filtered retrieval.
pub trait QueryStore: StringStore {
    /// Stored strings whose properties satisfy `filters`, newest first.
    fn query(&self, filters: &FilterSet) -> StoreResult<Vec<StoredString>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| matches(&s.properties, filters))
            .collect())
    }
}
