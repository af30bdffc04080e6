//! Document-scoped uniqueness constraints
//!
//! The only parsers in this crate that need whole-document information: a
//! name is a duplicate only relative to every other declaration of the same
//! kind. The document model supplies a fresh [`NameCounts`] tally at
//! resolution time; the resolved parser is a pure snapshot of it.

use crate::error::{ValueError, ValueErrorKind, ValueResult};
use crate::names::NameCounts;
use crate::parser::{ContextualValueParser, ParsedValue, ValueParser};

/// Snapshot parser rejecting names declared more than once
///
/// The tally includes the declaration under validation, so a count of one
/// means the name is unique by construction; the test is `count <= 1`, not
/// `count == 0`.
#[derive(Debug, Clone)]
pub struct UniqueNames {
    counts: NameCounts,
    type_name: String,
}

impl UniqueNames {
    /// Parser over an already-computed tally; `type_name` labels the
    /// identifier kind in failure messages (e.g. "resource name")
    pub fn new(counts: NameCounts, type_name: impl Into<String>) -> Self {
        Self {
            counts,
            type_name: type_name.into(),
        }
    }
}

impl ValueParser for UniqueNames {
    fn parse(&self, input: &str) -> ValueResult<ParsedValue> {
        if self.counts.count(input) <= 1 {
            Ok(ParsedValue::Names(self.counts.clone()))
        } else {
            Err(ValueError::new(ValueErrorKind::DuplicateName {
                type_name: self.type_name.clone(),
                name: input.to_string(),
            }))
        }
    }
}

/// Uniqueness constraint over whatever identifier kind `get_name_counts`
/// tallies
///
/// Resolution invokes the supplier once and closes the returned parser over
/// that snapshot. No caching across calls: each validation pass re-resolves
/// from fresh document state, since the document may have changed between
/// passes.
pub fn accept_only_unique_names<D, F>(
    get_name_counts: F,
    type_name: impl Into<String>,
) -> impl ContextualValueParser<D>
where
    F: Fn(&D) -> NameCounts,
{
    let type_name = type_name.into();
    move |document: &D| -> Box<dyn ValueParser> {
        Box::new(UniqueNames::new(
            get_name_counts(document),
            type_name.clone(),
        ))
    }
}

/// Name inventories the document model exposes to the value-parsing layer
///
/// Each method returns a fresh tally of every declaration of that identifier
/// kind in the current document revision. How the tally is computed (full
/// re-scan vs. incremental) is the model's business.
pub trait DeclaredNames {
    /// All resource names currently declared
    fn resource_names(&self) -> NameCounts;

    /// All job names currently declared
    fn job_names(&self) -> NameCounts;
}

/// Uniqueness check for resource name definitions
pub fn resource_name_def<D: DeclaredNames>() -> impl ContextualValueParser<D> {
    accept_only_unique_names(D::resource_names, "resource name")
}

/// Uniqueness check for job name definitions
pub fn job_name_def<D: DeclaredNames>() -> impl ContextualValueParser<D> {
    accept_only_unique_names(D::job_names, "job name")
}
