//! Whitespace runs.

use parlance_foundation::Value;

use crate::output::{Output, ParseFailure, ParseResult};
use crate::spec::Parse;

/// One or more leading whitespace characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Whitespace;

impl Parse for Whitespace {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        let len = input
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(input.len(), |(i, _)| i);
        if len == 0 {
            return Err(ParseFailure::expecting(self.expected(players)));
        }
        Ok(Output::split(Value::from(&input[..len]), input, len))
    }

    fn expected(&self, _players: &[String]) -> Vec<String> {
        vec!["whitespace".to_string()]
    }
}
