//! Deterministic string analysis.
//!
//! Every derived property of an analyzed string is computed here and nowhere
//! else. The functions are pure: the same input always yields the same
//! [`Analysis`], including its content hash.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::util::content_hash;

/// Properties derived from a single input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of Unicode code points.
    pub length: usize,
    /// Case-insensitive comparison against the reversed string, no stripping.
    pub is_palindrome: bool,
    /// Number of distinct code points, case-sensitive.
    pub unique_characters: usize,
    /// Number of maximal runs of non-whitespace characters.
    pub word_count: usize,
    /// Hex SHA-256 digest of the UTF-8 bytes.
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    /// Exact occurrence count of every code point.
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// Analyze a string.
#[must_use]
pub fn analyze(value: &str) -> Analysis {
    Analysis {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: value.chars().collect::<BTreeSet<_>>().len(),
        word_count: word_count(value),
        content_hash: content_hash(value),
        character_frequency_map: character_frequency(value),
    }
}

/// Analyze a possibly absent string; absence is analyzed as `""`.
#[must_use]
pub fn analyze_optional(value: Option<&str>) -> Analysis {
    analyze(value.unwrap_or_default())
}

/// Lowercase of the value equals lowercase of its reversal.
///
/// Reversal happens on code points before lowercasing, so characters whose
/// lowercase form expands to several code points compare the same way on both
/// sides.
#[must_use]
pub fn is_palindrome(value: &str) -> bool {
    let reversed: String = value.chars().rev().collect();
    value.to_lowercase() == reversed.to_lowercase()
}

#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

#[must_use]
pub fn character_frequency(value: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for ch in value.chars() {
        *freq.entry(ch).or_insert(0) += 1;
    }
    freq
}
