//! Elements that may be left out.

use parlance_foundation::Value;

use crate::output::{Output, ParseResult};
use crate::spec::{Parse, Spec};

/// Wraps a node so that its failure becomes an absent value.
///
/// Never fails: when the inner node rejects the input, the result is
/// [`Value::Absent`] with nothing consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Optional(pub Box<Spec>);

impl Optional {
    /// Makes `inner` optional.
    #[must_use]
    pub fn new(inner: Spec) -> Self {
        Self(Box::new(inner))
    }

    /// The wrapped node.
    #[must_use]
    pub fn inner(&self) -> &Spec {
        &self.0
    }
}

impl Parse for Optional {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        Ok(self
            .0
            .parse(input, players)
            .unwrap_or_else(|_| Output::empty(Value::Absent, input)))
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        self.0
            .expected(players)
            .into_iter()
            .map(|expected| format!("optional {expected}"))
            .collect()
    }
}
