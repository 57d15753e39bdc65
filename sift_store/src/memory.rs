//! In-process repository backed by a sequenced map.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use rayon::prelude::*;
use sift_core::{AnalyzedString, AnalyzedStringRepo, Error, RecordPredicate, Result};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Rows {
    next_seq: u64,
    /// id -> insertion sequence number
    index: HashMap<String, u64>,
    rows: BTreeMap<u64, AnalyzedString>,
}

/// Repository that keeps every record in memory.
///
/// A single write lock guards the id index and the rows together, which makes
/// check-and-insert atomic. Listing walks rows by sequence number, so results
/// come back in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Rows>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalyzedStringRepo for MemoryStore {
    async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.inner.read().await.index.contains_key(id))
    }

    async fn insert(&self, record: &AnalyzedString) -> Result<()> {
        let mut guard = self.inner.write().await;
        if guard.index.contains_key(record.id()) {
            return Err(Error::AlreadyExists);
        }
        let seq = guard.next_seq;
        guard.next_seq += 1;
        guard.index.insert(record.id().to_string(), seq);
        guard.rows.insert(seq, record.clone());
        debug!("Stored {} at sequence {}", record.id(), seq);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<AnalyzedString>> {
        let guard = self.inner.read().await;
        Ok(guard
            .index
            .get(id)
            .and_then(|seq| guard.rows.get(seq))
            .cloned())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut guard = self.inner.write().await;
        let seq = guard.index.remove(id).ok_or(Error::NotFound)?;
        guard.rows.remove(&seq);
        Ok(())
    }

    async fn list(&self, predicate: RecordPredicate<'_>) -> Result<Vec<AnalyzedString>> {
        let snapshot: Vec<AnalyzedString> = self.inner.read().await.rows.values().cloned().collect();
        Ok(snapshot
            .into_par_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.inner.read().await.index.len())
    }
}
