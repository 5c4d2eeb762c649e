//! Integer parsing with optional bounds.

use parlance_foundation::Value;

use crate::output::{Output, ParseFailure, ParseResult};
use crate::spec::Parse;

/// An optionally negative decimal integer at the very start of the input.
///
/// Leading whitespace is not skipped. Bounds are inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Integer {
    /// Lowest accepted value.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min: Option<i64>,
    /// Highest accepted value.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max: Option<i64>,
}

impl Integer {
    /// Creates an integer parser with the given bounds.
    #[must_use]
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Describes the accepted range.
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("number between {min} and {max}"),
            (Some(min), None) => format!("number {min} or higher"),
            (None, Some(max)) => format!("number {max} or lower"),
            (None, None) => "number".to_string(),
        }
    }

    fn failure(&self) -> ParseFailure {
        ParseFailure::expecting(vec![self.describe()])
    }
}

/// Byte length of a leading `-?[0-9]+`, if there is one.
fn scan(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(sign + digits)
}

impl Parse for Integer {
    fn parse<'a>(&self, input: &'a str, _players: &[String]) -> ParseResult<'a> {
        let len = scan(input).ok_or_else(|| self.failure())?;
        // Digits that overflow i64 are treated like no digits at all.
        let parsed: i64 = input[..len].parse().map_err(|_| self.failure())?;

        if self.min.is_some_and(|min| parsed < min) {
            return Err(self.failure().with_message(format!("{parsed} is too low")));
        }
        if self.max.is_some_and(|max| parsed > max) {
            return Err(self.failure().with_message(format!("{parsed} is too high")));
        }

        Ok(Output::split(Value::Int(parsed), input, len))
    }

    fn expected(&self, _players: &[String]) -> Vec<String> {
        vec![self.describe()]
    }
}
