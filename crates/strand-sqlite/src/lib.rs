//! SQLite storage backend for Strand analyzed strings
//!
//! This crate provides a persistent SQLite implementation of the strand-core
//! storage traits, so the server can keep analyzed strings on disk.
//!
//! # Features
//!
//! - Implements `StringStore` and `QueryStore` traits
//! - Embedded, versioned migrations plus repair of legacy `strings` tables
//! - Supports in-memory databases for testing
//! - Filters pushed down into SQL via `json_extract` where possible
//!
//! # Example
//!
//! ```rust,no_run
//! use strand_sqlite::SqliteStore;
//! use strand_core::{storage::{QueryStore, StringStore}, FilterSet, StoredString};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::in_memory()?;
//!
//! store.put(StoredString::new("racecar", 1704067200000))?;
//!
//! let retrieved = store.get_by_value("racecar")?;
//! assert!(retrieved.is_some());
//!
//! let palindromes = store.query(&FilterSet::new().palindrome(true))?;
//! assert_eq!(palindromes.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod json;
pub mod migrate;
pub mod store;

// Re-export main types
pub use error::{Result, SqliteError};
pub use store::SqliteStore;
