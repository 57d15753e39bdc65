mod repository;
mod types;

pub use repository::{AnalyzedStringRepo, RecordPredicate};
pub use types::{AnalyzedString, DEFAULT_MAX_VALUE_LENGTH};
