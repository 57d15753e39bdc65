//! Natural-language query support.

pub mod translator;

pub use translator::{InterpretedQuery, interpret, translate};
