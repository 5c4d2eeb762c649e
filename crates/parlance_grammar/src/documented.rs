//! Help annotations.

use crate::output::ParseResult;
use crate::spec::{Parse, Spec};

/// Attaches a name and description to a node for help output.
///
/// Parsing and expectations pass straight through to the inner node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Documented {
    /// Short name, e.g. a command word.
    pub name: String,
    /// What the annotated part of the command does.
    pub description: String,
    /// The annotated node.
    pub inner: Box<Spec>,
}

impl Documented {
    /// Annotates `inner`.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, inner: Spec) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inner: Box::new(inner),
        }
    }

    /// The annotation on its own.
    #[must_use]
    pub fn entry(&self) -> DocEntry {
        DocEntry {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl Parse for Documented {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        self.inner.parse(input, players)
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        self.inner.expected(players)
    }
}

/// A name and description collected from a [`Documented`] node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocEntry {
    /// Short name.
    pub name: String,
    /// Description.
    pub description: String,
}
