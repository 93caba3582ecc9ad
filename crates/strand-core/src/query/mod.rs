//! Natural-language query translator
//!
//! Maps a small, fixed English vocabulary onto a [`FilterSet`]. There is no
//! grammar: every rule scans the lowercased query on its own and all fragments
//! are merged. A result that no record could ever satisfy is an error, never an
//! empty filter.
//!
//! # Vocabulary
//!
//! ```text
//! "single word"                         word_count = 1
//! "palindrom…"                          is_palindrome = true
//! "longer than N"                       min_length = N + 1
//! "shorter than N"                      max_length = N - 1
//! "contain[s|ing] [the] letter C"       contains_character = C
//! "first vowel"                         contains_character = 'a' (if unset)
//! ```
//!
//! # Example
//!
//! ```rust
//! use strand_core::query::translate;
//!
//! let interpreted = translate("single word palindromes containing letter a").unwrap();
//! assert_eq!(interpreted.parsed_filters.word_count, Some(1));
//! assert_eq!(interpreted.parsed_filters.is_palindrome, Some(true));
//! assert_eq!(interpreted.parsed_filters.contains_character, Some('a'));
//! ```

mod rules;
mod scanner;

pub use rules::{
    default_rules, ContainsLetter, FirstVowel, LongerThan, Palindrome, Rule, ShorterThan,
    SingleWord,
};
pub use scanner::Scanner;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::filter::FilterSet;

/// Translation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unable to parse natural language query: '{query}'")]
    Unparseable { query: String },

    #[error("query parsed but resulted in conflicting filters: min_length {min_length} > max_length {max_length}")]
    ConflictingFilters { min_length: i64, max_length: i64 },
}

/// A translated query, paired with the text it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Rule-driven translator.
pub struct Translator {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Translator with the standard vocabulary.
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Translator with a custom rule list, applied in order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn translate(&self, query: &str) -> Result<InterpretedQuery, TranslateError> {
        let normalized = query.trim().to_lowercase();
        let mut filters = FilterSet::new();

        for rule in &self.rules {
            if rule.apply(&normalized, &mut filters) {
                debug!(rule = rule.name(), "query rule matched");
            }
        }

        if filters.has_conflict() {
            return Err(TranslateError::ConflictingFilters {
                min_length: filters.min_length.unwrap_or_default(),
                max_length: filters.max_length.unwrap_or_default(),
            });
        }

        if filters.is_empty() {
            return Err(TranslateError::Unparseable {
                query: query.to_string(),
            });
        }

        Ok(InterpretedQuery {
            original: query.to_string(),
            parsed_filters: filters,
        })
    }
}

/// Translate with the standard vocabulary.
pub fn translate(query: &str) -> Result<InterpretedQuery, TranslateError> {
    Translator::new().translate(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_combined_rules() {
        let result = translate("single word palindromes containing letter a").unwrap();
        assert_eq!(
            result.parsed_filters,
            FilterSet::new()
                .word_count(1)
                .palindrome(true)
                .contains_character('a')
        );
        assert_eq!(result.original, "single word palindromes containing letter a");
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let result = translate("  Strings LONGER THAN 3 Containing The Letter Q ").unwrap();
        assert_eq!(result.parsed_filters.min_length, Some(4));
        assert_eq!(result.parsed_filters.contains_character, Some('q'));
        assert_eq!(result.original, "  Strings LONGER THAN 3 Containing The Letter Q ");
    }

    #[test]
    fn test_conflicting_bounds() {
        let err = translate("strings longer than 5 and shorter than 3").unwrap_err();
        assert_eq!(
            err,
            TranslateError::ConflictingFilters {
                min_length: 6,
                max_length: 2
            }
        );
    }

    #[test]
    fn test_oversized_lower_bound_still_conflicts() {
        for query in [
            "longer than 99999999999999999999 and shorter than 5",
            "longer than 9223372036854775807 and shorter than 5",
        ] {
            let err = translate(query).unwrap_err();
            assert_eq!(
                err,
                TranslateError::ConflictingFilters {
                    min_length: i64::MAX,
                    max_length: 4
                },
                "{query}"
            );
        }
    }

    #[test]
    fn test_oversized_number_keeps_first_bound() {
        let result = translate("longer than 99999999999999999999 or longer than 3").unwrap();
        assert_eq!(result.parsed_filters.min_length, Some(i64::MAX));
    }

    #[test]
    fn test_touching_bounds_are_not_conflicting() {
        let result = translate("longer than 4 and shorter than 6").unwrap();
        assert_eq!(result.parsed_filters.min_length, Some(5));
        assert_eq!(result.parsed_filters.max_length, Some(5));
    }

    #[test]
    fn test_conflict_with_zero_bound() {
        let err = translate("longer than 0 and shorter than 1").unwrap_err();
        assert!(matches!(
            err,
            TranslateError::ConflictingFilters {
                min_length: 1,
                max_length: 0
            }
        ));
    }

    #[test]
    fn test_unparseable() {
        assert!(matches!(
            translate("banana"),
            Err(TranslateError::Unparseable { .. })
        ));
        assert!(matches!(translate(""), Err(TranslateError::Unparseable { .. })));
        assert!(matches!(
            translate("longer than many"),
            Err(TranslateError::Unparseable { .. })
        ));
    }

    #[test]
    fn test_first_vowel() {
        let result = translate("palindromic strings that contain the first vowel").unwrap();
        assert_eq!(result.parsed_filters.contains_character, Some('a'));
        assert_eq!(result.parsed_filters.is_palindrome, Some(true));
    }

    #[test]
    fn test_explicit_letter_wins_over_first_vowel() {
        let result = translate("first vowel or containing the letter e").unwrap();
        assert_eq!(result.parsed_filters.contains_character, Some('e'));
    }

    #[test]
    fn test_custom_rules() {
        let translator = Translator::with_rules(vec![Box::new(Palindrome)]);
        assert!(translator.translate("single word palindromes").is_ok());
        assert!(translator.translate("single word").is_err());
    }

    #[test]
    fn test_interpreted_query_json() {
        let result = translate("single word").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "original": "single word",
                "parsed_filters": {"word_count": 1}
            })
        );
    }
}
