//! Database entities for sift.

pub mod analyzed_strings;
