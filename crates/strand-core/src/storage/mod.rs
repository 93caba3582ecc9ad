//! Storage abstraction for analyzed strings
//!
//! This module defines the `StringStore` trait that abstracts over different
//! storage backends. Implementations exist for:
//!
//! - **Memory**: In-memory storage for testing (`MemoryStore`)
//! - **SQLite**: Native SQLite via rusqlite (`strand-sqlite` crate)
//!
//! The core never calls a store itself; the HTTP layer wires analyzer,
//! translator and store together.
//!
//! # Example
//!
//! ```rust
//! use strand_core::storage::{MemoryStore, QueryStore, StringStore};
//! use strand_core::{FilterSet, StoredString};
//!
//! let mut store = MemoryStore::new();
//! store.put(StoredString::new("racecar", 0)).unwrap();
//!
//! let palindromes = store.query(&FilterSet::new().palindrome(true)).unwrap();
//! assert_eq!(palindromes.len(), 1);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{QueryStore, StringStore};
