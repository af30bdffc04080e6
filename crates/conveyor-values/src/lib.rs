//! # conveyor-values
//!
//! Scalar value validation for pipeline document diagnostics.
//!
//! Given the raw text of a YAML scalar, decide whether it conforms to a named
//! semantic type (non-empty string, bounded integer, duration literal, or a
//! document-scoped uniqueness constraint), and if not, produce a precise
//! human-readable error for the diagnostics layer to attach to the node.
//!
//! ## Design
//!
//! Two cooperating abstractions:
//!
//! - [`ValueParser`]: a pure transformation from raw scalar text to a
//!   [`ParsedValue`]. Stateless, shareable across threads and validation
//!   passes.
//! - [`ContextualValueParser`]: a resolver from document state to a
//!   `ValueParser`, for checks that need whole-document information (e.g.
//!   name uniqueness). Resolution snapshots that information, so the returned
//!   parser is tied to one document revision.
//!
//! The schema engine owns parser selection and document traversal; this crate
//! only validates individual scalars and never looks at positions. Failure
//! messages carry a [category](ErrorCategory) so the caller can distinguish
//! format errors from range violations.
//!
//! ## Example
//!
//! ```rust
//! use conveyor_values::{ValueParser, pos_integer};
//!
//! let workers = pos_integer();
//! assert!(workers.parse("3").is_ok());
//! assert_eq!(
//!     workers.parse("-1").unwrap_err().message(),
//!     "Value must be positive"
//! );
//! ```

mod error;
mod names;
mod parser;
mod parsers;

pub use error::{ErrorCategory, ValueError, ValueErrorKind, ValueResult};
pub use names::NameCounts;
pub use parser::{ContextualValueParser, ParsedValue, ValueParser};
pub use parsers::{
    DeclaredNames, IntegerRange, NonEmptyString, PatternParser, UniqueNames,
    accept_only_unique_names, duration, has_text, integer_at_least, integer_range, job_name_def,
    pos_integer, resource_name_def,
};
