//! Lexical rules mapping query phrases to filter fragments
//!
//! Each rule inspects the whole normalized query independently and may set
//! one field of the filter set. Rules run in the order returned by
//! [`default_rules`]; [`FirstVowel`] reads what [`ContainsLetter`] wrote, so
//! it must come after it.

use super::scanner::Scanner;
use crate::filter::FilterSet;

/// A single try-match rule.
pub trait Rule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Inspect `query` (lowercased, trimmed) and add to `filters`.
    /// Returns whether the rule fired.
    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool;
}

/// "single word" -> `word_count = 1`
pub struct SingleWord;

impl Rule for SingleWord {
    fn name(&self) -> &'static str {
        "single_word"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        if !query.contains("single word") {
            return false;
        }
        filters.word_count = Some(1);
        true
    }
}

/// "palindrome", "palindromic" -> `is_palindrome = true`
pub struct Palindrome;

impl Rule for Palindrome {
    fn name(&self) -> &'static str {
        "palindrome"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        if !query.contains("palindrom") {
            return false;
        }
        filters.is_palindrome = Some(true);
        true
    }
}

/// "longer than N" -> `min_length = N + 1`
pub struct LongerThan;

impl Rule for LongerThan {
    fn name(&self) -> &'static str {
        "longer_than"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        match number_after(query, "longer than ").map(|n| n.saturating_add(1)) {
            Some(min) => {
                filters.min_length = Some(min);
                true
            }
            None => false,
        }
    }
}

/// "shorter than N" -> `max_length = N - 1`
pub struct ShorterThan;

impl Rule for ShorterThan {
    fn name(&self) -> &'static str {
        "shorter_than"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        match number_after(query, "shorter than ") {
            Some(n) => {
                filters.max_length = Some(n - 1);
                true
            }
            None => false,
        }
    }
}

/// "contain[s|ing] [the] letter C" -> `contains_character = C`
pub struct ContainsLetter;

impl ContainsLetter {
    const SUFFIXES: [&'static str; 3] = ["s", "ing", ""];
    const ARTICLES: [&'static str; 2] = [" the", ""];

    fn letter_at(start: Scanner<'_>) -> Option<char> {
        for suffix in Self::SUFFIXES {
            for article in Self::ARTICLES {
                let mut s = start;
                if s.eat(suffix) && s.eat(article) && s.eat(" letter ") {
                    if let Some(c) = s.alphanumeric() {
                        return Some(c);
                    }
                }
            }
        }
        None
    }
}

impl Rule for ContainsLetter {
    fn name(&self) -> &'static str {
        "contains_letter"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        match Scanner::after_each(query, "contain").find_map(Self::letter_at) {
            Some(c) => {
                filters.contains_character = Some(c);
                true
            }
            None => false,
        }
    }
}

/// "first vowel" -> `contains_character = 'a'` unless a letter was already named.
pub struct FirstVowel;

impl Rule for FirstVowel {
    fn name(&self) -> &'static str {
        "first_vowel"
    }

    fn apply(&self, query: &str, filters: &mut FilterSet) -> bool {
        if !query.contains("first vowel") {
            return false;
        }
        if filters.contains_character.is_none() {
            filters.contains_character = Some('a');
        }
        true
    }
}

/// The standard rule list, in application order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(SingleWord),
        Box::new(Palindrome),
        Box::new(LongerThan),
        Box::new(ShorterThan),
        Box::new(ContainsLetter),
        Box::new(FirstVowel),
    ]
}

/// First decimal number directly following an occurrence of `phrase`.
fn number_after(query: &str, phrase: &str) -> Option<i64> {
    Scanner::after_each(query, phrase).find_map(|mut s| s.digits())
}
