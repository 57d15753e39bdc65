use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by analysis, storage and query operations.
///
/// Every variant is deterministic for a given input and store state, so none
/// of them is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed request data, e.g. a missing field or an unparseable filter.
    #[error("{0}")]
    InvalidInput(String),

    /// Well-formed request data of the wrong type or out of bounds.
    #[error("{0}")]
    InvalidType(String),

    #[error("String already exists in the system")]
    AlreadyExists,

    #[error("String does not exist in the system")]
    NotFound,

    /// A natural-language phrase none of the heuristics understand.
    #[error("{0}")]
    Parse(String),

    /// Filters produced by translation that contradict each other or are invalid.
    #[error("{0}")]
    FilterConflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl Error {
    /// Short machine-readable kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::InvalidType(_) => "invalid_type",
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
            Self::Parse(_) => "parse_error",
            Self::FilterConflict(_) => "filter_conflict",
            Self::Storage(_) => "storage",
        }
    }
}
