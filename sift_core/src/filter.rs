//! Structured filtering over stored records.
//!
//! Both the query-parameter listing and the natural-language listing reduce to
//! a [`FilterSet`], so matching semantics live in exactly one place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;
use crate::record::AnalyzedString;

/// Optional criteria a record must all satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    /// A single character the value must contain, compared case-sensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<String>,
}

/// Reasons a filter set cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("contains_character must be a single character")]
    NotSingleCharacter,

    #[error("Conflicting filters: min_length {min} greater than max_length {max}")]
    LengthConflict { min: usize, max: usize },
}

impl FilterSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check the set for values that can never be applied.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self
            .contains_character
            .as_deref()
            .is_some_and(|ch| ch.chars().count() != 1)
        {
            return Err(FilterError::NotSingleCharacter);
        }
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Err(FilterError::LengthConflict { min, max }),
            _ => Ok(()),
        }
    }

    /// Whether `record` satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, record: &AnalyzedString) -> bool {
        self.is_palindrome
            .is_none_or(|expected| record.is_palindrome() == expected)
            && self.min_length.is_none_or(|min| record.length() >= min)
            && self.max_length.is_none_or(|max| record.length() <= max)
            && self
                .word_count
                .is_none_or(|expected| record.word_count() == expected)
            && self
                .contains_character
                .as_deref()
                .is_none_or(|ch| record.value().contains(ch))
    }
}

/// Filters as they arrive in a query string, before any parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

/// Collect raw query pairs. A repeated key keeps its last value and unknown
/// keys are ignored.
impl FromIterator<(String, String)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "is_palindrome" => &mut params.is_palindrome,
                "min_length" => &mut params.min_length,
                "max_length" => &mut params.max_length,
                "word_count" => &mut params.word_count,
                "contains_character" => &mut params.contains_character,
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }
}

fn parse_bool(raw: &str) -> Result<bool, Error> {
    match raw.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::InvalidInput(
            "Invalid is_palindrome value".to_string(),
        )),
    }
}

fn parse_count(name: &str, raw: Option<String>) -> Result<Option<usize>, Error> {
    raw.map(|raw| {
        raw.trim().parse::<usize>().map_err(|_| {
            Error::InvalidInput(format!("Invalid numeric filter value for {name}: {raw}"))
        })
    })
    .transpose()
}

impl TryFrom<FilterParams> for FilterSet {
    type Error = Error;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        let filters = Self {
            is_palindrome: params.is_palindrome.as_deref().map(parse_bool).transpose()?,
            min_length: parse_count("min_length", params.min_length)?,
            max_length: parse_count("max_length", params.max_length)?,
            word_count: parse_count("word_count", params.word_count)?,
            contains_character: params.contains_character,
        };
        filters
            .validate()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        Ok(filters)
    }
}
