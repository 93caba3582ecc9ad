//! Shared application state.

use std::sync::Arc;

use parking_lot::Mutex;
use strand_core::{MemoryStore, QueryStore, Translator};
use strand_sqlite::SqliteStore;
use tracing::info;

use crate::config::StorageConfig;
use crate::error::{ApiError, Result};
use crate::tracing::prefix;

/// Store handle shared across requests.
pub type SharedStore = Arc<Mutex<Box<dyn QueryStore + Send>>>;

/// State handed to every handler.
///
/// All store access goes through one mutex; the analyzer and translator are
/// pure and need no coordination.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    translator: Arc<Translator>,
}

impl AppState {
    pub fn new(store: Box<dyn QueryStore + Send>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            translator: Arc::new(Translator::new()),
        }
    }

    /// Open the configured store.
    pub fn open(storage: &StorageConfig) -> Result<Self> {
        let store: Box<dyn QueryStore + Send> = match storage {
            StorageConfig::Memory => {
                info!("{} using in-memory store", prefix::DB);
                Box::new(MemoryStore::new())
            }
            StorageConfig::Sqlite(path) => {
                info!("{} opening SQLite store at {}", prefix::DB, path.display());
                Box::new(SqliteStore::open(path)?)
            }
        };
        Ok(Self::new(store))
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Run `f` against the store on the blocking thread pool.
    pub async fn with_store<T, F>(&self, f: F) -> std::result::Result<T, ApiError>
    where
        F: FnOnce(&mut dyn QueryStore) -> std::result::Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || {
            let mut guard = store.lock();
            f(&mut **guard)
        })
        .await
        .map_err(|e| ApiError::internal(format!("task failed: {e}")))?
    }
}
