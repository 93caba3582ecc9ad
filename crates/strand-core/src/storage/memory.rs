//! In-memory string store
//!
//! Backs the server's `--in-memory` mode and the HTTP tests. Nothing survives
//! a restart.

use std::collections::HashMap;

use crate::record::StoredString;
use crate::storage::error::{StoreError, StoreResult};
use crate::storage::traits::{QueryStore, StringStore};

/// In-memory string store.
///
/// Stores records in a HashMap keyed by id, plus insertion order so that
/// records with equal timestamps still list newest first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, StoredString>,
    order: Vec<String>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory store with initial records. Duplicates are skipped.
    pub fn with_records(records: Vec<StoredString>) -> Self {
        let mut store = Self::new();
        for record in records {
            let _ = store.put(record);
        }
        store
    }

    fn find_by_value(&self, value: &str) -> Option<&StoredString> {
        self.records.values().find(|r| r.value == value)
    }
}

impl StringStore for MemoryStore {
    fn put(&mut self, record: StoredString) -> StoreResult<()> {
        if self.records.contains_key(&record.id) || self.find_by_value(&record.value).is_some() {
            return Err(StoreError::AlreadyExists(record.id));
        }
        self.order.push(record.id.clone());
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<StoredString>> {
        Ok(self.records.get(id).cloned())
    }

    fn get_by_value(&self, value: &str) -> StoreResult<Option<StoredString>> {
        Ok(self.find_by_value(value).cloned())
    }

    fn delete_by_value(&mut self, value: &str) -> StoreResult<bool> {
        let id = match self.find_by_value(value) {
            Some(record) => record.id.clone(),
            None => return Ok(false),
        };
        self.records.remove(&id);
        self.order.retain(|i| *i != id);
        Ok(true)
    }

    fn list(&self) -> StoreResult<Vec<StoredString>> {
        let mut all: Vec<StoredString> = self
            .order
            .iter()
            .rev()
            .filter_map(|id| self.records.get(id).cloned())
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.records.clear();
        self.order.clear();
        Ok(())
    }
}

impl QueryStore for MemoryStore {}
