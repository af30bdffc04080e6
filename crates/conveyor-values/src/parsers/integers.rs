//! Bounded integer validation

use crate::error::{ValueError, ValueErrorKind, ValueResult};
use crate::parser::{ParsedValue, ValueParser};

/// Integer parser with optional inclusive bounds
///
/// Construct through [`integer_range`], [`integer_at_least`] or
/// [`pos_integer`].
#[derive(Debug, Clone, Copy)]
pub struct IntegerRange {
    lower: Option<i64>,
    upper: Option<i64>,
}

/// Integer parser accepting values in `[lower, upper]`, either side optional
///
/// A syntactically invalid integer is a [format](crate::ErrorCategory::Format)
/// failure; a valid integer outside the bounds is a
/// [range](crate::ErrorCategory::Range) failure.
///
/// # Panics
///
/// Panics when both bounds are given and `lower > upper`. That is a
/// programming error in the caller, not a runtime validation failure.
pub fn integer_range(lower: Option<i64>, upper: Option<i64>) -> IntegerRange {
    if let (Some(lo), Some(hi)) = (lower, upper) {
        assert!(
            lo <= hi,
            "integer_range: lower bound {} exceeds upper bound {}",
            lo,
            hi
        );
    }
    IntegerRange { lower, upper }
}

/// Integer parser accepting values at or above `lower`
pub fn integer_at_least(lower: i64) -> IntegerRange {
    integer_range(Some(lower), None)
}

/// Non-negative integer parser
///
/// The zero lower bound gets the friendlier "Value must be positive" wording
/// on failure.
pub fn pos_integer() -> IntegerRange {
    integer_range(Some(0), None)
}

impl ValueParser for IntegerRange {
    fn parse(&self, input: &str) -> ValueResult<ParsedValue> {
        let value: i64 = input.parse().map_err(|_| {
            ValueError::new(ValueErrorKind::InvalidInteger {
                value: input.to_string(),
            })
        })?;

        if let Some(minimum) = self.lower
            && value < minimum
        {
            return Err(ValueError::new(ValueErrorKind::BelowMinimum {
                value,
                minimum,
            }));
        }

        if let Some(maximum) = self.upper
            && value > maximum
        {
            return Err(ValueError::new(ValueErrorKind::AboveMaximum {
                value,
                maximum,
            }));
        }

        Ok(ParsedValue::Int(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_in_range_succeeds() {
        let result = integer_range(Some(0), Some(10)).parse("7").unwrap();
        assert_eq!(result.as_integer(), Some(7));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let parser = integer_range(Some(0), Some(10));
        assert_eq!(parser.parse("0").unwrap().as_integer(), Some(0));
        assert_eq!(parser.parse("10").unwrap().as_integer(), Some(10));
    }

    #[test]
    fn test_below_zero_lower_bound_friendly_message() {
        let err = integer_range(Some(0), None).parse("-1").unwrap_err();
        assert_eq!(err.message(), "Value must be positive");
        assert_eq!(err.category(), ErrorCategory::Range);
    }

    #[test]
    fn test_below_nonzero_lower_bound_names_bound() {
        let err = integer_range(Some(5), None).parse("3").unwrap_err();
        assert_eq!(err.message(), "Value must be at least 5");
    }

    #[test]
    fn test_above_upper_bound() {
        let err = integer_range(None, Some(10)).parse("11").unwrap_err();
        assert_eq!(err.message(), "Value must be at most 10");
        assert_eq!(err.category(), ErrorCategory::Range);
    }

    #[test]
    fn test_non_numeric_is_format_error_never_range() {
        for parser in [
            integer_range(Some(0), Some(10)),
            integer_at_least(5),
            pos_integer(),
        ] {
            let err = parser.parse("abc").unwrap_err();
            assert_eq!(err.category(), ErrorCategory::Format);
        }
    }

    #[test]
    fn test_unbounded_accepts_anything_numeric() {
        let parser = integer_range(None, None);
        assert!(parser.parse("-9000").is_ok());
        assert!(parser.parse("9000").is_ok());
    }

    #[test]
    fn test_integer_at_least_matches_integer_range() {
        let err = integer_at_least(5).parse("3").unwrap_err();
        assert_eq!(err, integer_range(Some(5), None).parse("3").unwrap_err());
    }

    #[test]
    fn test_pos_integer_accepts_zero() {
        assert_eq!(pos_integer().parse("0").unwrap().as_integer(), Some(0));
    }

    #[test]
    #[should_panic(expected = "lower bound 5 exceeds upper bound 3")]
    fn test_inverted_bounds_panic_at_construction() {
        integer_range(Some(5), Some(3));
    }
}
