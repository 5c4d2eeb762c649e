//! One-of choice between alternatives.

use parlance_foundation::comma_list_or;
use tracing::trace;

use crate::output::{ParseFailure, ParseResult};
use crate::spec::{Parse, Spec};

/// Tries each alternative in order and returns the first success.
///
/// When every alternative fails, the failures that got furthest into the
/// input are merged: their messages joined with "or", their expectations
/// concatenated. The branch that consumed more before failing is the one the
/// player most likely meant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternation(pub Vec<Spec>);

impl Parse for Alternation {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        let mut furthest: Vec<ParseFailure> = Vec::new();
        let mut furthest_offset = 0;

        for alternative in &self.0 {
            let failure = match alternative.parse(input, players) {
                Ok(output) => return Ok(output),
                Err(failure) => failure,
            };
            if failure.offset > furthest_offset {
                furthest_offset = failure.offset;
                furthest.clear();
            }
            if failure.offset == furthest_offset {
                furthest.push(failure);
            }
        }

        trace!(
            alternatives = self.0.len(),
            kept = furthest.len(),
            offset = furthest_offset,
            "all alternatives failed"
        );

        let messages: Vec<String> = furthest
            .iter()
            .filter_map(|failure| failure.message.clone())
            .filter(|message| !message.is_empty())
            .collect();
        let expected = furthest
            .into_iter()
            .flat_map(|failure| failure.expected)
            .collect();

        Err(ParseFailure {
            message: (!messages.is_empty()).then(|| comma_list_or(&messages)),
            expected,
            offset: furthest_offset,
        })
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|alternative| alternative.expected(players))
            .collect()
    }
}
