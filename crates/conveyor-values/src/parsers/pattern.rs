//! Pattern-shaped literal validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValueError, ValueErrorKind, ValueResult};
use crate::parser::{ParsedValue, ValueParser};

/// Validates that a scalar matches a named, anchored pattern
///
/// `documentation` describes the accepted grammar in prose. It doubles as
/// on-hover documentation and as the failure explanation, so a user who has
/// never seen the format can self-correct from the message alone.
#[derive(Debug, Clone)]
pub struct PatternParser {
    regex: Regex,
    type_name: String,
    documentation: String,
}

impl PatternParser {
    /// Create a parser for `pattern`, labeled `type_name` in failure messages
    pub fn new(
        pattern: &str,
        type_name: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            type_name: type_name.into(),
            documentation: documentation.into(),
        })
    }

    /// The semantic type this pattern validates (e.g. "Duration")
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Prose description of the accepted grammar, suitable for hover text
    pub fn documentation(&self) -> &str {
        &self.documentation
    }
}

impl ValueParser for PatternParser {
    fn parse(&self, input: &str) -> ValueResult<ParsedValue> {
        if self.regex.is_match(input) {
            Ok(ParsedValue::Str(input.to_string()))
        } else {
            Err(ValueError::new(ValueErrorKind::PatternMismatch {
                value: input.to_string(),
                type_name: self.type_name.clone(),
                documentation: self.documentation.clone(),
            }))
        }
    }
}

/// Duration literal parser: one or more adjacent `<number><unit>` groups
///
/// Accepts e.g. `300ms`, `1.5h`, `2h45m`. The grammar only requires the whole
/// string to be consumed by the groups, so repeated units (`1h1h`) pass.
/// There is no numeric bounds check beyond lexical shape.
pub fn duration() -> &'static PatternParser {
    static DURATION: Lazy<PatternParser> = Lazy::new(|| {
        PatternParser::new(
            r"^(([0-9]+(\.[0-9]+)?)(ns|us|µs|ms|s|h|m))+$",
            "Duration",
            "A duration string is a sequence of decimal numbers, each with \
             optional fraction and a unit suffix, such as '300ms', '1.5h' or \
             '2h45m'. Valid time units are 'ns', 'us' (or 'µs'), 'ms', 's', \
             'm', 'h'.",
        )
        .expect("duration pattern compiles")
    });
    &DURATION
}
