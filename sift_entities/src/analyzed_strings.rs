use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One analyzed string, keyed by the SHA-256 hex digest of `value`.
///
/// The derived columns are denormalized copies kept for ad-hoc SQL queries;
/// the application rebuilds them from `value` when loading a row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "analyzed_strings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub value: String,
    pub length: i64,
    pub is_palindrome: bool,
    pub unique_characters: i64,
    pub word_count: i64,
    pub sha256_hash: String,
    pub character_frequency_map: Json,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
