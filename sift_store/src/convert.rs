use sea_orm::Set;
use sift_core::AnalyzedString;
use sift_entities::analyzed_strings;
use tracing::warn;

fn to_column(n: usize) -> anyhow::Result<i64> {
    Ok(i64::try_from(n)?)
}

/// Rebuild a record from its row.
///
/// Only `value` and `created_at` are trusted; every derived field, the id
/// included, is recomputed by the analyzer.
pub fn analyzed_string_from_model(m: analyzed_strings::Model) -> AnalyzedString {
    let record = AnalyzedString::with_created_at(m.value, m.created_at);
    if record.id() != m.id {
        warn!(
            "Stored id {} disagrees with content hash {}; using the recomputed hash",
            m.id,
            record.id()
        );
    }
    record
}

pub fn active_model_from_record(
    record: &AnalyzedString,
) -> anyhow::Result<analyzed_strings::ActiveModel> {
    Ok(analyzed_strings::ActiveModel {
        id: Set(record.id().to_string()),
        value: Set(record.value().to_string()),
        length: Set(to_column(record.length())?),
        is_palindrome: Set(record.is_palindrome()),
        unique_characters: Set(to_column(record.unique_characters())?),
        word_count: Set(to_column(record.word_count())?),
        sha256_hash: Set(record.sha256_hash().to_string()),
        character_frequency_map: Set(serde_json::to_value(record.character_frequency_map())?),
        created_at: Set(record.created_at()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_active_model_carries_derived_columns() {
        let record = AnalyzedString::new("abc cba");
        let model = active_model_from_record(&record).expect("record should convert");

        assert!(matches!(&model.id, ActiveValue::Set(id) if id == record.id()));
        assert!(matches!(model.length, ActiveValue::Set(7)));
        assert!(matches!(model.word_count, ActiveValue::Set(2)));
        assert!(matches!(model.is_palindrome, ActiveValue::Set(true)));
        assert!(matches!(
            &model.character_frequency_map,
            ActiveValue::Set(freq) if *freq == serde_json::json!({" ": 1, "a": 2, "b": 2, "c": 2})
        ));
    }

    #[test]
    fn test_model_round_trip_recomputes_fields() {
        let record = AnalyzedString::new("racecar");
        let model = analyzed_strings::Model {
            id: record.id().to_string(),
            value: "racecar".to_string(),
            // stale denormalized columns are ignored
            length: 0,
            is_palindrome: false,
            unique_characters: 0,
            word_count: 0,
            sha256_hash: record.id().to_string(),
            character_frequency_map: serde_json::json!({}),
            created_at: record.created_at(),
        };
        assert_eq!(analyzed_string_from_model(model), record);
    }

    #[test]
    fn test_model_with_wrong_id_gets_recomputed_id() {
        let model = analyzed_strings::Model {
            id: "deadbeef".to_string(),
            value: "abc".to_string(),
            length: 3,
            is_palindrome: false,
            unique_characters: 3,
            word_count: 1,
            sha256_hash: "deadbeef".to_string(),
            character_frequency_map: serde_json::json!({"a": 1, "b": 1, "c": 1}),
            created_at: chrono::Utc::now(),
        };
        let record = analyzed_string_from_model(model);
        assert_eq!(record.id(), sift_core::content_hash("abc"));
    }
}
