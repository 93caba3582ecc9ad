//! Structured filters over property records
//!
//! A [`FilterSet`] is a sparse conjunction of predicates. Absent fields are
//! wildcards, so the empty set matches every record. The same type is built
//! from explicit query parameters and from natural-language translation.

use serde::{Deserialize, Serialize};

use crate::analyze::PropertyRecord;

/// Optional predicates over a [`PropertyRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    /// Inclusive lower bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    /// Inclusive upper bound on length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    pub fn min_length(mut self, min: i64) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: i64) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn word_count(mut self, count: i64) -> Self {
        self.word_count = Some(count);
        self
    }

    pub fn contains_character(mut self, c: char) -> Self {
        self.contains_character = Some(c);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// True when both bounds are set and no length can satisfy them.
    pub fn has_conflict(&self) -> bool {
        matches!((self.min_length, self.max_length), (Some(min), Some(max)) if min > max)
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        matches(record, self)
    }
}

/// Check whether a record satisfies every present predicate.
pub fn matches(record: &PropertyRecord, filters: &FilterSet) -> bool {
    if let Some(expected) = filters.is_palindrome {
        if record.is_palindrome() != expected {
            return false;
        }
    }

    let length = as_i64(record.length());
    if let Some(min) = filters.min_length {
        if length < min {
            return false;
        }
    }
    if let Some(max) = filters.max_length {
        if length > max {
            return false;
        }
    }

    if let Some(expected) = filters.word_count {
        if as_i64(record.word_count()) != expected {
            return false;
        }
    }

    if let Some(c) = filters.contains_character {
        if !record.character_frequency().contains(c) {
            return false;
        }
    }

    true
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filters = FilterSet::new();
        assert!(filters.is_empty());
        for s in ["", "racecar", "two words", "   "] {
            assert!(matches(&analyze(s), &filters));
        }
    }

    #[test]
    fn test_palindrome_equality() {
        let record = analyze("level");
        assert!(matches(&record, &FilterSet::new().palindrome(true)));
        assert!(!matches(&record, &FilterSet::new().palindrome(false)));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let record = analyze("hello");
        assert!(matches(&record, &FilterSet::new().min_length(5)));
        assert!(matches(&record, &FilterSet::new().max_length(5)));
        assert!(!matches(&record, &FilterSet::new().min_length(6)));
        assert!(!matches(&record, &FilterSet::new().max_length(4)));
        assert!(matches(&record, &FilterSet::new().min_length(-3)));
    }

    #[test]
    fn test_word_count_equality() {
        let record = analyze("  hello   world ");
        assert!(matches(&record, &FilterSet::new().word_count(2)));
        assert!(!matches(&record, &FilterSet::new().word_count(1)));
    }

    #[test]
    fn test_contains_character_is_presence() {
        let record = analyze("xx");
        assert!(matches(&record, &FilterSet::new().contains_character('x')));
        assert!(!matches(&record, &FilterSet::new().contains_character('y')));
        assert!(!matches(&record, &FilterSet::new().contains_character('X')));
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let record = analyze("noon");
        let filters = FilterSet::new()
            .palindrome(true)
            .word_count(1)
            .contains_character('n')
            .min_length(4)
            .max_length(4);
        assert!(filters.matches(&record));
        assert!(!filters.word_count(2).matches(&record));
    }

    #[test]
    fn test_conflict_detection() {
        assert!(FilterSet::new().min_length(6).max_length(2).has_conflict());
        assert!(!FilterSet::new().min_length(2).max_length(2).has_conflict());
        assert!(!FilterSet::new().min_length(6).has_conflict());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let filters = FilterSet::new().word_count(1).contains_character('a');
        let json = serde_json::to_value(filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word_count": 1, "contains_character": "a"})
        );
    }
}
