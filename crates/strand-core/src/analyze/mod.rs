//! String property analyzer
//!
//! Computes the fixed set of derived facts for a raw string: length, palindrome
//! flag, unique-character count, word count, content hash and character
//! frequency. Pure and deterministic; linear in the input length.
//!
//! # Example
//!
//! ```rust
//! use strand_core::analyze::analyze;
//!
//! let props = analyze("Race Car");
//! assert!(props.is_palindrome());
//! assert_eq!(props.word_count(), 2);
//! assert_eq!(props.length(), 8);
//! ```

mod content;
mod frequency;

pub use content::{content_hash, content_hash_hex};
pub use frequency::CharacterFrequency;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analyzer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("value must be a string, found {found}")]
    InvalidInput { found: &'static str },
}

/// Derived properties of one string.
///
/// Produced once by [`analyze`] and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    length: usize,
    is_palindrome: bool,
    unique_characters: usize,
    word_count: usize,
    #[serde(rename = "sha256_hash")]
    content_hash: String,
    #[serde(rename = "character_frequency_map")]
    character_frequency: CharacterFrequency,
}

impl PropertyRecord {
    /// Number of characters (code points), not bytes.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn is_palindrome(&self) -> bool {
        self.is_palindrome
    }

    pub fn unique_characters(&self) -> usize {
        self.unique_characters
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Lowercase hex SHA-256 of the input bytes; the string's identity.
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    pub fn character_frequency(&self) -> &CharacterFrequency {
        &self.character_frequency
    }
}

/// Analyze a string.
pub fn analyze(input: &str) -> PropertyRecord {
    let character_frequency = CharacterFrequency::of(input);

    PropertyRecord {
        length: input.chars().count(),
        is_palindrome: is_palindrome(input),
        unique_characters: character_frequency.len(),
        word_count: word_count(input),
        content_hash: content_hash_hex(input),
        character_frequency,
    }
}

/// Analyze a dynamically typed value, rejecting anything that is not a string.
pub fn analyze_value(value: &serde_json::Value) -> Result<PropertyRecord, AnalyzeError> {
    match value {
        serde_json::Value::String(s) => Ok(analyze(s)),
        other => Err(AnalyzeError::InvalidInput {
            found: json_type_name(other),
        }),
    }
}

/// Palindrome check with whitespace removed and case folded, compared by code point.
pub fn is_palindrome(input: &str) -> bool {
    let normalized: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    normalized.iter().eq(normalized.iter().rev())
}

/// Number of maximal whitespace-delimited runs.
pub fn word_count(input: &str) -> usize {
    input.split_whitespace().count()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
