//! Concrete scalar value parsers, organized by category:
//! - strings: non-empty string checks
//! - integers: bounded integer ranges
//! - pattern: regex-shaped literals (durations)
//! - unique: document-scoped uniqueness constraints

pub mod integers;
pub mod pattern;
pub mod strings;
pub mod unique;

pub use integers::{IntegerRange, integer_at_least, integer_range, pos_integer};
pub use pattern::{PatternParser, duration};
pub use strings::{NonEmptyString, has_text};
pub use unique::{
    DeclaredNames, UniqueNames, accept_only_unique_names, job_name_def, resource_name_def,
};
