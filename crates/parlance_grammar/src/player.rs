//! Player name resolution.

use parlance_foundation::Value;

use crate::enumerated::match_candidates;
use crate::output::{Output, ParseResult};
use crate::spec::Parse;

/// A player's name, abbreviated like any enumerated choice, resolved to the
/// player's zero-based position in the roster.
///
/// The index comes from the position of the winning candidate, so it always
/// refers to the name that was matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerName;

impl Parse for PlayerName {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        let (index, prefix) = match_candidates(players, false, input)?;
        Ok(Output::split(Value::Player(index), input, prefix.bytes))
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        players.to_vec()
    }
}
