#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod analysis;
pub mod error;
pub mod filter;
pub mod query;
pub mod record;
mod util;

pub use analysis::{Analysis, analyze, analyze_optional};
pub use error::{Error, Result};
pub use filter::{FilterError, FilterParams, FilterSet};
pub use query::{InterpretedQuery, interpret, translate};
pub use record::{AnalyzedString, AnalyzedStringRepo, DEFAULT_MAX_VALUE_LENGTH, RecordPredicate};
pub use util::content_hash;
