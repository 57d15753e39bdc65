//! Heuristic translation of natural-language phrases into filter sets.
//!
//! Only a fixed handful of phrasings is understood. Rules run in a fixed order
//! over the lowercased phrase and their results are merged.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::FilterSet;

#[allow(clippy::unwrap_used)]
static LONGER_THAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"longer than (\d+)").unwrap());

#[allow(clippy::unwrap_used)]
static CONTAINING_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"containing the letter ([a-z])").unwrap());

/// Character assumed when a phrase asks for "the first vowel".
pub const FIRST_VOWEL: &str = "a";

/// A phrase together with the filters it was translated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Translate a phrase into filters.
///
/// Fails with [`Error::Parse`] when the phrase is empty or when no rule
/// recognizes it. The result is not validated; callers do that before
/// applying it.
pub fn translate(phrase: &str) -> Result<FilterSet> {
    if phrase.is_empty() {
        return Err(Error::Parse("Empty query".to_string()));
    }

    let q = phrase.to_lowercase();
    let mut parsed = FilterSet::default();

    if q.contains("single word") {
        parsed.word_count = Some(1);
    }
    // "palindrome" and "palindromic"
    if q.contains("palindrom") {
        parsed.is_palindrome = Some(true);
    }
    if let Some(caps) = LONGER_THAN.captures(&q) {
        // strictly longer than N
        let min_length = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| Error::Parse(format!("Length out of range: {}", &caps[1])))?;
        parsed.min_length = Some(min_length);
    }
    if let Some(caps) = CONTAINING_LETTER.captures(&q) {
        parsed.contains_character = Some(caps[1].to_string());
    }
    if q.contains("first vowel") && parsed.contains_character.is_none() {
        parsed.contains_character = Some(FIRST_VOWEL.to_string());
    }

    if parsed.is_empty() {
        return Err(Error::Parse(
            "Unable to parse natural language query".to_string(),
        ));
    }

    debug!("Translated {:?} into {:?}", phrase, parsed);
    Ok(parsed)
}

/// Translate a phrase and keep the original text alongside the result.
pub fn interpret(phrase: &str) -> Result<InterpretedQuery> {
    Ok(InterpretedQuery {
        original: phrase.to_string(),
        parsed_filters: translate(phrase)?,
    })
}
