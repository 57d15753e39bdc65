use async_trait::async_trait;

use super::types::AnalyzedString;
use crate::error::Result;

/// Caller-supplied selection used by [`AnalyzedStringRepo::list`].
pub type RecordPredicate<'a> = &'a (dyn Fn(&AnalyzedString) -> bool + Send + Sync);

/// Content-addressed store of analyzed strings keyed by their hash.
///
/// There is no update operation. A record is immutable from the
/// moment it is inserted until it is deleted.
#[async_trait]
pub trait AnalyzedStringRepo: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool>;

    /// Store a record.
    ///
    /// The existence check and the write are one atomic step: of two racing
    /// inserts with the same id, exactly one succeeds and the other fails with
    /// [`crate::Error::AlreadyExists`].
    async fn insert(&self, record: &AnalyzedString) -> Result<()>;

    async fn get(&self, id: &str) -> Result<Option<AnalyzedString>>;

    /// Remove a record, failing with [`crate::Error::NotFound`] when absent.
    async fn delete(&self, id: &str) -> Result<()>;

    /// All records satisfying `predicate`, in insertion order.
    async fn list(&self, predicate: RecordPredicate<'_>) -> Result<Vec<AnalyzedString>>;

    async fn count(&self) -> Result<usize>;
}
