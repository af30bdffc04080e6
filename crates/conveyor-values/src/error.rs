// Error types for scalar value parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for value parsing operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Broad failure taxonomy
///
/// Useful upstream for diagnostic severity and quick-fix decisions; the
/// detailed data lives in [`ValueErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Input is not syntactically the expected shape
    Format,
    /// Syntactically valid but outside allowed bounds
    Range,
    /// Required non-empty string absent
    Empty,
    /// Name declared more than once
    Duplicate,
}

/// Structured value parsing error kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValueErrorKind {
    /// Required string is empty or whitespace-only
    EmptyString,

    /// Not a syntactically valid base-10 integer
    InvalidInteger { value: String },

    /// Integer below the configured lower bound
    BelowMinimum { value: i64, minimum: i64 },

    /// Integer above the configured upper bound
    AboveMaximum { value: i64, maximum: i64 },

    /// String does not match a named pattern type
    PatternMismatch {
        value: String,
        type_name: String,
        documentation: String,
    },

    /// Name declared more than once in the document
    DuplicateName { type_name: String, name: String },
}

impl ValueErrorKind {
    /// Get the failure category for this error kind
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValueErrorKind::EmptyString => ErrorCategory::Empty,
            ValueErrorKind::InvalidInteger { .. } | ValueErrorKind::PatternMismatch { .. } => {
                ErrorCategory::Format
            }
            ValueErrorKind::BelowMinimum { .. } | ValueErrorKind::AboveMaximum { .. } => {
                ErrorCategory::Range
            }
            ValueErrorKind::DuplicateName { .. } => ErrorCategory::Duplicate,
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValueErrorKind::EmptyString => "String should not be empty".to_string(),
            ValueErrorKind::InvalidInteger { value } => {
                format!("'{}' is not a valid integer", value)
            }
            ValueErrorKind::BelowMinimum { minimum, .. } => {
                // Non-negative bounds are common enough to deserve
                // friendlier wording than "at least 0".
                if *minimum == 0 {
                    "Value must be positive".to_string()
                } else {
                    format!("Value must be at least {}", minimum)
                }
            }
            ValueErrorKind::AboveMaximum { maximum, .. } => {
                format!("Value must be at most {}", maximum)
            }
            ValueErrorKind::PatternMismatch {
                value,
                type_name,
                documentation,
            } => {
                format!("'{}' is not a valid {}. {}", value, type_name, documentation)
            }
            ValueErrorKind::DuplicateName { type_name, name } => {
                format!("Duplicate {} '{}'", type_name, name)
            }
        }
    }
}

/// Value parsing failure surfaced to the schema engine
///
/// Carries no source position; the calling diagnostics layer attaches
/// line/column information when converting this into a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct ValueError {
    /// The structured error kind
    pub kind: ValueErrorKind,
}

impl ValueError {
    /// Create a new value error with a structured kind
    pub fn new(kind: ValueErrorKind) -> Self {
        Self { kind }
    }

    /// Get the human-readable message for this error
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Get the failure category for this error
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<ValueErrorKind> for ValueError {
    fn from(kind: ValueErrorKind) -> Self {
        Self::new(kind)
    }
}
