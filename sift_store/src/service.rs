use std::sync::Arc;

use serde::Serialize;
use sift_core::{
    AnalyzedString, AnalyzedStringRepo, DEFAULT_MAX_VALUE_LENGTH, Error, FilterSet,
    InterpretedQuery, Result, content_hash, interpret,
};
use tracing::{debug, info};

/// Result of a structured listing.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// Result of a natural-language listing.
#[derive(Debug, Clone, Serialize)]
pub struct NaturalLanguageListing {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Orchestrates analysis, storage and filtering for the request handlers.
///
/// This struct provides:
/// - Content-addressed creation with duplicate detection
/// - Lookup and deletion keyed by the raw value
/// - Filtered listing, either structured or from a natural-language phrase
///
/// Every validation step runs before the repository is touched.
#[derive(Clone)]
pub struct StringService {
    repo: Arc<dyn AnalyzedStringRepo>,
    max_value_length: usize,
}

impl StringService {
    #[must_use]
    pub fn new(repo: Arc<dyn AnalyzedStringRepo>) -> Self {
        Self {
            repo,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }

    #[must_use]
    pub const fn with_max_value_length(mut self, max_value_length: usize) -> Self {
        self.max_value_length = max_value_length;
        self
    }

    /// Analyze and store a new value.
    ///
    /// The record is fully built before it reaches the repository; the
    /// repository's atomic insert settles races between identical values.
    #[tracing::instrument(skip(self, value), fields(len = value.len()))]
    pub async fn create(&self, value: &str) -> Result<AnalyzedString> {
        if value.chars().count() > self.max_value_length {
            return Err(Error::InvalidType(format!(
                "\"value\" exceeds {} characters",
                self.max_value_length
            )));
        }

        let record = AnalyzedString::new(value);
        if self.repo.exists(record.id()).await? {
            debug!("Rejected duplicate {}", record.id());
            return Err(Error::AlreadyExists);
        }
        self.repo.insert(&record).await?;
        info!("Created analyzed string: {}", record.id());
        Ok(record)
    }

    pub async fn retrieve(&self, value: &str) -> Result<AnalyzedString> {
        let id = content_hash(value);
        debug!("Looking up {}", id);
        self.repo.get(&id).await?.ok_or(Error::NotFound)
    }

    pub async fn delete(&self, value: &str) -> Result<()> {
        let id = content_hash(value);
        self.repo.delete(&id).await?;
        info!("Deleted analyzed string: {}", id);
        Ok(())
    }

    /// List records matching structured filters.
    pub async fn list(&self, filters: FilterSet) -> Result<Listing> {
        filters
            .validate()
            .map_err(|e| Error::InvalidInput(e.to_string()))?;

        let data = self.select(&filters).await?;
        Ok(Listing {
            count: data.len(),
            data,
            filters_applied: filters,
        })
    }

    /// List records matching a natural-language phrase.
    ///
    /// Unparseable phrases fail with [`Error::Parse`]; translations that do not
    /// validate fail with [`Error::FilterConflict`].
    pub async fn list_by_natural_language(&self, phrase: &str) -> Result<NaturalLanguageListing> {
        let interpreted_query = interpret(phrase)?;
        interpreted_query
            .parsed_filters
            .validate()
            .map_err(|e| Error::FilterConflict(e.to_string()))?;

        let data = self.select(&interpreted_query.parsed_filters).await?;
        Ok(NaturalLanguageListing {
            count: data.len(),
            data,
            interpreted_query,
        })
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<usize> {
        self.repo.count().await
    }

    async fn select(&self, filters: &FilterSet) -> Result<Vec<AnalyzedString>> {
        debug!("Listing with filters {:?}", filters);
        let predicate = |record: &AnalyzedString| filters.matches(record);
        self.repo.list(&predicate).await
    }
}
