//! Delimited repetition.

use parlance_foundation::Value;

use crate::output::{Output, ParseFailure, ParseResult};
use crate::spec::{Parse, Spec};
use crate::text::char_len;

/// Repeats an item, separated by a delimiter that may be padded with
/// whitespace on either side.
///
/// Parsing stops at the first delimiter or item that does not match, or once
/// `max` items have been read. Fewer than `min` items is a failure reported
/// at the end of what was read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Repetition {
    /// The repeated node.
    pub item: Box<Spec>,
    /// Fewest items accepted.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub min: Option<usize>,
    /// Most items read.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub max: Option<usize>,
    /// Text between items. Empty means items follow each other directly.
    #[cfg_attr(feature = "serde", serde(default))]
    pub delimiter: String,
}

impl Repetition {
    /// Any number of `item` with no delimiter.
    #[must_use]
    pub fn new(item: Spec) -> Self {
        Self {
            item: Box::new(item),
            min: None,
            max: None,
            delimiter: String::new(),
        }
    }

    /// Requires at least `min` items.
    #[must_use]
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Reads at most `max` items.
    #[must_use]
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Separates items with `delimiter`.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Describes the bounds, e.g. "between 2 and 4".
    #[must_use]
    pub fn describe_bounds(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {min} and {max}"),
            (Some(min), None) => format!("{min} or more"),
            (None, Some(max)) => format!("up to {max}"),
            (None, None) => "any number of".to_string(),
        }
    }

    /// Bounds that can never be met by a positive count.
    fn reads_nothing(&self) -> bool {
        match (self.min, self.max) {
            (_, Some(0)) => true,
            (Some(min), Some(max)) => min > max,
            _ => false,
        }
    }

    fn delimiter_spec(&self) -> Spec {
        Spec::sequence(vec![
            Spec::optional(Spec::Whitespace),
            Spec::literal(self.delimiter.as_str()),
            Spec::optional(Spec::Whitespace),
        ])
    }
}

impl Parse for Repetition {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        let mut items = Vec::new();
        if self.reads_nothing() {
            return Ok(Output::empty(Value::List(items), input));
        }

        let delimiter = self.delimiter_spec();
        let mut offset = 0;

        loop {
            let mut item_start = offset;
            if !items.is_empty() {
                let Ok(delimited) = delimiter.parse(&input[offset..], players) else {
                    break;
                };
                item_start += delimited.consumed.len();
            }

            let Ok(item) = self.item.parse(&input[item_start..], players) else {
                break;
            };
            items.push(item.value);
            let item_end = item_start + item.consumed.len();
            let progressed = item_end > offset;
            offset = item_end;

            match self.max {
                Some(max) if items.len() >= max => break,
                // Unbounded, an item that matches without consuming would match forever.
                None if !progressed => break,
                _ => {}
            }
        }

        if let Some(min) = self.min {
            if items.len() < min {
                return Err(ParseFailure::message(format!(
                    "expected at least {min} items but could only parse {}",
                    items.len()
                ))
                .at(char_len(&input[..offset])));
            }
        }

        Ok(Output::split(Value::List(items), input, offset))
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        let bounds = self.describe_bounds();
        self.item
            .expected(players)
            .into_iter()
            .map(|expected| format!("{bounds} {expected}"))
            .collect()
    }
}
