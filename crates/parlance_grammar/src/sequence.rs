//! Chains of nodes parsed one after another.

use parlance_foundation::Value;

use crate::output::{Output, ParseResult};
use crate::spec::{Parse, Spec};

/// Parses each step against what the previous steps left over.
///
/// The value is the list of step values. A failure at some step is reported
/// at an offset relative to the sequence's own input, so enclosing
/// alternations can compare it with their other branches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sequence(pub Vec<Spec>);

impl Parse for Sequence {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        let mut values = Vec::with_capacity(self.0.len());
        let mut consumed_bytes = 0;
        let mut consumed_chars = 0;

        for step in &self.0 {
            let output = step
                .parse(&input[consumed_bytes..], players)
                .map_err(|failure| failure.advanced_by(consumed_chars))?;
            consumed_bytes += output.consumed.len();
            consumed_chars += output.consumed_chars();
            values.push(output.value);
        }

        Ok(Output::split(Value::List(values), input, consumed_bytes))
    }

    /// What the first step accepts.
    fn expected(&self, players: &[String]) -> Vec<String> {
        self.0
            .first()
            .map(|step| step.expected(players))
            .unwrap_or_default()
    }
}
