//! Fixed tokens.

use parlance_foundation::Value;

use crate::output::{Output, ParseFailure, ParseResult};
use crate::spec::Parse;
use crate::text::{char_len, shared_prefix};

/// A token matched case-insensitively against the start of the input.
///
/// The parsed value is the token as declared, not as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal(pub String);

impl Literal {
    /// Creates a token parser.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token text.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl Parse for Literal {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        // Input shorter than the token simply yields a shorter shared prefix.
        let prefix = shared_prefix(input, &self.0);
        if prefix.chars < char_len(&self.0) {
            return Err(ParseFailure::expecting(self.expected(players)).at(prefix.chars));
        }
        Ok(Output::split(Value::from(self.0.as_str()), input, prefix.bytes))
    }

    fn expected(&self, _players: &[String]) -> Vec<String> {
        vec![self.0.clone()]
    }
}
