//! Non-empty string validation

use crate::error::{ValueError, ValueErrorKind, ValueResult};
use crate::parser::{ParsedValue, ValueParser};

/// True when `s` contains at least one non-whitespace character.
///
/// The "has meaningful text" predicate shared across the diagnostics engine.
pub fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Accepts any string with meaningful text, returning it unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyString;

impl ValueParser for NonEmptyString {
    fn parse(&self, input: &str) -> ValueResult<ParsedValue> {
        if has_text(input) {
            Ok(ParsedValue::Str(input.to_string()))
        } else {
            Err(ValueError::new(ValueErrorKind::EmptyString))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_input_unchanged() {
        let result = NonEmptyString.parse("my-resource").unwrap();
        assert_eq!(result.as_str(), Some("my-resource"));
    }

    #[test]
    fn test_inner_whitespace_is_meaningful() {
        assert!(NonEmptyString.parse("  padded  ").is_ok());
    }

    #[test]
    fn test_empty_string_fails() {
        let err = NonEmptyString.parse("").unwrap_err();
        assert_eq!(err.message(), "String should not be empty");
    }

    #[test]
    fn test_whitespace_only_fails() {
        assert!(NonEmptyString.parse("   \t\n").is_err());
    }

    #[test]
    fn test_predicate_agrees_with_parser() {
        for input in ["", "  ", "\t", "x", " x ", "300ms"] {
            assert_eq!(has_text(input), NonEmptyString.parse(input).is_ok());
        }
    }
}
