// Parser abstraction shared by all scalar value parsers

use crate::error::ValueResult;
use crate::names::NameCounts;

/// A successfully parsed scalar value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    /// Validated string, returned unchanged
    Str(String),
    /// Validated integer
    Int(i64),
    /// Name tally returned as an existence witness by uniqueness checks;
    /// callers normally only care about the success signal
    Names(NameCounts),
}

impl ParsedValue {
    /// Get the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParsedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParsedValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the name tally, if this is a uniqueness witness
    pub fn as_name_counts(&self) -> Option<&NameCounts> {
        match self {
            ParsedValue::Names(counts) => Some(counts),
            _ => None,
        }
    }
}

/// A stateless transformation from raw scalar text to a parsed value
///
/// Implementations are pure: no mutable state, safe to share across threads,
/// and calling `parse` twice with the same input yields the same result.
pub trait ValueParser: Send + Sync {
    /// Parse the raw text of a scalar, total over any input string
    fn parse(&self, input: &str) -> ValueResult<ParsedValue>;
}

/// A parser whose behavior depends on whole-document state
///
/// `resolve` snapshots whatever it needs from `document` and returns a pure
/// [`ValueParser`] closed over that snapshot. The snapshot is tied to one
/// document revision: resolve again after an edit rather than reusing a
/// previously resolved parser.
pub trait ContextualValueParser<D> {
    /// Resolve against the current document state
    fn resolve(&self, document: &D) -> Box<dyn ValueParser>;
}

impl<D, F> ContextualValueParser<D> for F
where
    F: Fn(&D) -> Box<dyn ValueParser>,
{
    fn resolve(&self, document: &D) -> Box<dyn ValueParser> {
        self(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_value_accessors() {
        assert_eq!(ParsedValue::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(ParsedValue::Str("x".to_string()).as_integer(), None);
        assert_eq!(ParsedValue::Int(7).as_integer(), Some(7));
        assert_eq!(ParsedValue::Int(7).as_str(), None);
        assert!(
            ParsedValue::Names(NameCounts::new())
                .as_name_counts()
                .is_some()
        );
    }
}
