use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{Analysis, analyze};

/// Longest accepted value, in characters, unless configured otherwise.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 255;

/// A stored, content-addressed analysis of one string.
///
/// The only way to obtain a record is to construct it from its value, which
/// runs the analyzer. Fields are read-only, so `id` always equals the hash of
/// `value` and every derived property agrees with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedString {
    id: String,
    value: String,
    #[serde(flatten)]
    analysis: Analysis,
    created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Analyze `value` and stamp the record with the current time.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_created_at(value, Utc::now())
    }

    /// Analyze `value` and keep an existing creation time.
    ///
    /// Used when rebuilding records that were read back from storage.
    #[must_use]
    pub fn with_created_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let analysis = analyze(&value);
        Self {
            id: analysis.content_hash.clone(),
            value,
            analysis,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.analysis.length
    }

    #[must_use]
    pub const fn is_palindrome(&self) -> bool {
        self.analysis.is_palindrome
    }

    #[must_use]
    pub const fn unique_characters(&self) -> usize {
        self.analysis.unique_characters
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.analysis.word_count
    }

    /// Same as [`Self::id`]; kept under its serialized name.
    #[must_use]
    pub fn sha256_hash(&self) -> &str {
        &self.analysis.content_hash
    }

    #[must_use]
    pub const fn character_frequency_map(&self) -> &BTreeMap<char, usize> {
        &self.analysis.character_frequency_map
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl std::fmt::Display for AnalyzedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AnalyzedString(id={}, value={})", self.id, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::content_hash;

    #[test]
    fn test_id_is_content_hash() {
        let record = AnalyzedString::new("abc cba");
        assert_eq!(record.id(), content_hash("abc cba"));
        assert_eq!(record.id(), record.sha256_hash());
    }

    #[test]
    fn test_fields_match_analysis() {
        let record = AnalyzedString::new("racecar");
        assert_eq!(record.analysis(), &analyze("racecar"));
        assert_eq!(record.length(), 7);
        assert!(record.is_palindrome());
        assert_eq!(record.word_count(), 1);
        assert_eq!(record.unique_characters(), 4);
    }

    #[test]
    fn test_with_created_at_keeps_timestamp() {
        let ts = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        let record = AnalyzedString::with_created_at("dup", ts);
        assert_eq!(record.created_at(), ts);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_serialized_shape() {
        let record = AnalyzedString::new("aba");
        let json = serde_json::to_value(&record).expect("record should serialize");
        let obj = json.as_object().expect("record should serialize as an object");

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "character_frequency_map",
                "created_at",
                "id",
                "is_palindrome",
                "length",
                "sha256_hash",
                "unique_characters",
                "value",
                "word_count",
            ]
        );
        assert_eq!(json["id"], json["sha256_hash"]);
        assert_eq!(json["character_frequency_map"]["a"], 2);
    }
}
