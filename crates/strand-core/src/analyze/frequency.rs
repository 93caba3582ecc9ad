//! Character frequency mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence count of every character (code point) in a string.
///
/// Built once from the original, untrimmed input: whitespace and case variants
/// are distinct keys. Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterFrequency {
    counts: BTreeMap<char, usize>,
}

impl CharacterFrequency {
    /// Count every character in `input`.
    pub fn of(input: &str) -> Self {
        let mut counts = BTreeMap::new();
        for c in input.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `c`, zero when absent.
    pub fn get(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Whether `c` occurs at least once. Case-sensitive.
    pub fn contains(&self, c: char) -> bool {
        self.counts.contains_key(&c)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(character, count)` pairs in code point order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(c, n)| (*c, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_original_characters() {
        let freq = CharacterFrequency::of("Aa a");
        assert_eq!(freq.get('A'), 1);
        assert_eq!(freq.get('a'), 2);
        assert_eq!(freq.get(' '), 1);
        assert_eq!(freq.get('b'), 0);
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn presence_is_case_sensitive() {
        let freq = CharacterFrequency::of("Xylophone");
        assert!(freq.contains('X'));
        assert!(!freq.contains('x'));
    }

    #[test]
    fn multibyte_characters_are_single_keys() {
        let freq = CharacterFrequency::of("ééa");
        assert_eq!(freq.get('é'), 2);
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn serializes_as_object() {
        let freq = CharacterFrequency::of("aab");
        let json = serde_json::to_value(&freq).unwrap();
        assert_eq!(json, serde_json::json!({"a": 2, "b": 1}));

        let back: CharacterFrequency = serde_json::from_value(json).unwrap();
        assert_eq!(back, freq);
    }
}
