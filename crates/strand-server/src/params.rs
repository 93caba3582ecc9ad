//! Query-parameter coercion into filter sets.

use serde::Deserialize;
use strand_core::FilterSet;

use crate::error::ApiError;

const INVALID: &str = "Invalid query parameter values or types.";

/// Raw `GET /strings` query parameters, before type coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl FilterParams {
    /// Coerce every present parameter, failing on the first invalid one.
    pub fn into_filters(self) -> Result<FilterSet, ApiError> {
        let mut filters = FilterSet::new();

        if let Some(raw) = self.is_palindrome {
            filters.is_palindrome = Some(match raw.as_str() {
                "true" => true,
                "false" => false,
                _ => return Err(invalid("is_palindrome must be true/false")),
            });
        }
        if let Some(raw) = self.min_length {
            filters.min_length = Some(integer(&raw, "min_length")?);
        }
        if let Some(raw) = self.max_length {
            filters.max_length = Some(integer(&raw, "max_length")?);
        }
        if let Some(raw) = self.word_count {
            filters.word_count = Some(integer(&raw, "word_count")?);
        }
        if let Some(raw) = self.contains_character {
            filters.contains_character = Some(single_char(&raw)?);
        }

        Ok(filters)
    }
}

fn invalid(detail: &str) -> ApiError {
    ApiError::bad_request(format!("{} {}", INVALID, detail))
}

fn integer(raw: &str, name: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(&format!("{} must be integer", name)))
}

fn single_char(raw: &str) -> Result<char, ApiError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(invalid("contains_character must be a single character")),
    }
}
