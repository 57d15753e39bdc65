#![warn(
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

mod convert;
mod database;
mod memory;
mod service;

pub use database::DatabaseStore;
pub use memory::MemoryStore;
pub use service::{Listing, NaturalLanguageListing, StringService};

// Re-export the repository trait so callers can hold stores behind it
pub use sift_core::AnalyzedStringRepo;
