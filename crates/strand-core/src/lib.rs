//! Strand Core Engine
//!
//! This crate provides the computational kernel for Strand: everything that
//! derives facts from text or decides whether text matches a query. It does no
//! I/O; storage backends and the HTTP service build on top of it.
//!
//! # Components
//!
//! - [`analyze`] - string -> [`PropertyRecord`] (length, palindrome flag,
//!   unique characters, word count, SHA-256 identity, character frequency)
//! - [`query`] - free-text query -> [`FilterSet`], with conflict detection
//! - [`filter`] - [`FilterSet`] evaluation against a [`PropertyRecord`]
//! - [`storage`] - store traits and an in-memory backend
//!
//! # Example
//!
//! ```rust
//! use strand_core::{analyze, matches, translate};
//!
//! let record = analyze("Race Car");
//! let query = translate("palindromes longer than 3").unwrap();
//! assert!(matches(&record, &query.parsed_filters));
//! ```

pub mod analyze;
pub mod filter;
pub mod query;
pub mod record;
pub mod storage;

// Re-export main types at crate root
pub use analyze::{analyze, analyze_value, AnalyzeError, CharacterFrequency, PropertyRecord};
pub use filter::{matches, FilterSet};
pub use query::{translate, InterpretedQuery, TranslateError, Translator};
pub use record::StoredString;
pub use storage::{MemoryStore, QueryStore, StoreError, StoreResult, StringStore};
