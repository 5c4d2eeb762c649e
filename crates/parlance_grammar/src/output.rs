//! Parse outcomes.
//!
//! Every grammar node returns either an [`Output`] that splits its input into
//! consumed and remaining text, or a [`ParseFailure`] describing how far it
//! got and what it would have accepted.

use parlance_foundation::{Value, comma_list_or};
use thiserror::Error;

/// Result of running a grammar node over some input.
pub type ParseResult<'a> = Result<Output<'a>, ParseFailure>;

/// A successful parse step.
///
/// `consumed` and `remaining` borrow from the input the node was given and
/// always concatenate back to exactly that input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output<'a> {
    /// The parsed value.
    pub value: Value,
    /// The prefix of the input that was matched.
    pub consumed: &'a str,
    /// The input left over for whatever parses next.
    pub remaining: &'a str,
}

impl<'a> Output<'a> {
    /// Splits `input` after `len` bytes.
    ///
    /// `len` must lie on a character boundary.
    #[must_use]
    pub fn split(value: Value, input: &'a str, len: usize) -> Self {
        let (consumed, remaining) = input.split_at(len);
        Self {
            value,
            consumed,
            remaining,
        }
    }

    /// An output that consumes nothing.
    #[must_use]
    pub fn empty(value: Value, input: &'a str) -> Self {
        Self::split(value, input, 0)
    }

    /// Number of characters consumed.
    #[must_use]
    pub fn consumed_chars(&self) -> usize {
        self.consumed.chars().count()
    }
}

/// Why a grammar node rejected its input.
///
/// `offset` counts the characters into the node's input at which the failure
/// happened. It starts at zero where a node was entered and grows as
/// enclosing sequences add what they had already consumed, so alternation can
/// prefer the branch that got furthest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{}", describe(.message, .expected))]
pub struct ParseFailure {
    /// Human-readable explanation, if the node has more to say than
    /// "expected …".
    pub message: Option<String>,
    /// Descriptions of what would have been accepted.
    pub expected: Vec<String>,
    /// Characters into the attempted input where parsing failed.
    pub offset: usize,
}

impl ParseFailure {
    /// A failure at offset zero expecting the given descriptions.
    #[must_use]
    pub fn expecting(expected: Vec<String>) -> Self {
        Self {
            message: None,
            expected,
            offset: 0,
        }
    }

    /// A failure at offset zero with only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            expected: Vec::new(),
            offset: 0,
        }
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Moves the offset forward by `chars`, for a failure that happened after
    /// an enclosing node already consumed that much.
    #[must_use]
    pub fn advanced_by(mut self, chars: usize) -> Self {
        self.offset += chars;
        self
    }
}

fn describe(message: &Option<String>, expected: &[String]) -> String {
    match (message, expected.is_empty()) {
        (Some(message), true) => message.clone(),
        (Some(message), false) => format!("{message}, expected {}", comma_list_or(expected)),
        (None, false) => format!("expected {}", comma_list_or(expected)),
        (None, true) => "invalid input".to_string(),
    }
}
