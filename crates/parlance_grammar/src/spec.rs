//! The grammar tree.
//!
//! A [`Spec`] is both the description of a command's grammar and its own
//! interpreter: every node implements [`Parse`], and combinator nodes hold
//! child `Spec`s, so a whole command grammar is one recursive value. Trees
//! are immutable once built and can be shared freely between threads.

use crate::alternation::Alternation;
use crate::documented::{DocEntry, Documented};
use crate::enumerated::Enumerated;
use crate::integer::Integer;
use crate::literal::Literal;
use crate::optional::Optional;
use crate::output::ParseResult;
use crate::player::PlayerName;
use crate::repetition::Repetition;
use crate::sequence::Sequence;
use crate::whitespace::Whitespace;

/// Capability shared by every grammar node.
///
/// `players` is the current roster of player display names. Only
/// [`PlayerName`] looks at it; every other node ignores it.
pub trait Parse {
    /// Attempts to match a prefix of `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`](crate::ParseFailure) when the input does
    /// not start with something this node accepts.
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a>;

    /// Human-readable descriptions of what this node accepts.
    fn expected(&self, players: &[String]) -> Vec<String>;
}

/// A node in a command grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spec {
    /// A (possibly bounded) integer.
    Integer(Integer),
    /// A case-insensitive fixed token.
    Literal(Literal),
    /// One of a set of words, matched by unambiguous abbreviation.
    Enumerated(Enumerated),
    /// The first of several alternatives that matches.
    Alternation(Alternation),
    /// Several nodes one after another.
    Sequence(Sequence),
    /// A delimited list of one node.
    Repetition(Repetition),
    /// A node that may be left out.
    Optional(Optional),
    /// A node annotated with a name and description for help output.
    Documented(Documented),
    /// A player's name, resolved to a roster index.
    PlayerName,
    /// A run of whitespace.
    Whitespace,
}

impl Parse for Spec {
    fn parse<'a>(&self, input: &'a str, players: &[String]) -> ParseResult<'a> {
        match self {
            Self::Integer(node) => node.parse(input, players),
            Self::Literal(node) => node.parse(input, players),
            Self::Enumerated(node) => node.parse(input, players),
            Self::Alternation(node) => node.parse(input, players),
            Self::Sequence(node) => node.parse(input, players),
            Self::Repetition(node) => node.parse(input, players),
            Self::Optional(node) => node.parse(input, players),
            Self::Documented(node) => node.parse(input, players),
            Self::PlayerName => PlayerName.parse(input, players),
            Self::Whitespace => Whitespace.parse(input, players),
        }
    }

    fn expected(&self, players: &[String]) -> Vec<String> {
        match self {
            Self::Integer(node) => node.expected(players),
            Self::Literal(node) => node.expected(players),
            Self::Enumerated(node) => node.expected(players),
            Self::Alternation(node) => node.expected(players),
            Self::Sequence(node) => node.expected(players),
            Self::Repetition(node) => node.expected(players),
            Self::Optional(node) => node.expected(players),
            Self::Documented(node) => node.expected(players),
            Self::PlayerName => PlayerName.expected(players),
            Self::Whitespace => Whitespace.expected(players),
        }
    }
}

impl Spec {
    /// Any integer.
    #[must_use]
    pub fn integer() -> Self {
        Self::Integer(Integer::default())
    }

    /// An integer in `min..=max`.
    #[must_use]
    pub fn integer_between(min: i64, max: i64) -> Self {
        Self::Integer(Integer::new(Some(min), Some(max)))
    }

    /// An integer no lower than `min`.
    #[must_use]
    pub fn integer_at_least(min: i64) -> Self {
        Self::Integer(Integer::new(Some(min), None))
    }

    /// An integer no higher than `max`.
    #[must_use]
    pub fn integer_at_most(max: i64) -> Self {
        Self::Integer(Integer::new(None, Some(max)))
    }

    /// A fixed token.
    #[must_use]
    pub fn literal(token: impl Into<String>) -> Self {
        Self::Literal(Literal::new(token))
    }

    /// One of `values`, accepting unambiguous abbreviations.
    #[must_use]
    pub fn enumerated<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enumerated(Enumerated::new(values))
    }

    /// One of `values`, typed out in full.
    #[must_use]
    pub fn exact_enumerated<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enumerated(Enumerated::exact(values))
    }

    /// The first alternative that matches.
    #[must_use]
    pub fn one_of(alternatives: Vec<Spec>) -> Self {
        Self::Alternation(Alternation(alternatives))
    }

    /// Each of `steps` in order.
    #[must_use]
    pub fn sequence(steps: Vec<Spec>) -> Self {
        Self::Sequence(Sequence(steps))
    }

    /// Any number of `item`, with no delimiter.
    ///
    /// Use the [`Repetition`] builder methods for bounds and delimiters.
    #[must_use]
    pub fn repeat(item: Spec) -> Repetition {
        Repetition::new(item)
    }

    /// `inner`, or nothing.
    #[must_use]
    pub fn optional(inner: Spec) -> Self {
        Self::Optional(Optional::new(inner))
    }

    /// `inner`, annotated for help output.
    #[must_use]
    pub fn documented(name: impl Into<String>, description: impl Into<String>, inner: Spec) -> Self {
        Self::Documented(Documented::new(name, description, inner))
    }

    /// A player's name.
    #[must_use]
    pub const fn player() -> Self {
        Self::PlayerName
    }

    /// A run of whitespace.
    #[must_use]
    pub const fn whitespace() -> Self {
        Self::Whitespace
    }

    /// Whitespace followed by `spec`.
    ///
    /// Separates command words without every grammar spelling out the gap.
    #[must_use]
    pub fn after_space(spec: Spec) -> Self {
        Self::sequence(vec![Self::Whitespace, spec])
    }

    /// Every documented node in this tree, in pre-order.
    #[must_use]
    pub fn documentation(&self) -> Vec<DocEntry> {
        let mut entries = Vec::new();
        self.collect_documentation(&mut entries);
        entries
    }

    fn collect_documentation(&self, entries: &mut Vec<DocEntry>) {
        match self {
            Self::Documented(node) => {
                entries.push(node.entry());
                node.inner.collect_documentation(entries);
            }
            Self::Alternation(Alternation(children)) | Self::Sequence(Sequence(children)) => {
                for child in children {
                    child.collect_documentation(entries);
                }
            }
            Self::Repetition(node) => node.item.collect_documentation(entries),
            Self::Optional(node) => node.inner().collect_documentation(entries),
            Self::Integer(_)
            | Self::Literal(_)
            | Self::Enumerated(_)
            | Self::PlayerName
            | Self::Whitespace => {}
        }
    }

    /// Returns true if any node in this tree resolves player names.
    #[must_use]
    pub fn uses_players(&self) -> bool {
        match self {
            Self::PlayerName => true,
            Self::Alternation(Alternation(children)) | Self::Sequence(Sequence(children)) => {
                children.iter().any(Spec::uses_players)
            }
            Self::Repetition(node) => node.item.uses_players(),
            Self::Optional(node) => node.inner().uses_players(),
            Self::Documented(node) => node.inner.uses_players(),
            Self::Integer(_) | Self::Literal(_) | Self::Enumerated(_) | Self::Whitespace => false,
        }
    }
}

impl From<Integer> for Spec {
    fn from(node: Integer) -> Self {
        Self::Integer(node)
    }
}

impl From<Literal> for Spec {
    fn from(node: Literal) -> Self {
        Self::Literal(node)
    }
}

impl From<Enumerated> for Spec {
    fn from(node: Enumerated) -> Self {
        Self::Enumerated(node)
    }
}

impl From<Alternation> for Spec {
    fn from(node: Alternation) -> Self {
        Self::Alternation(node)
    }
}

impl From<Sequence> for Spec {
    fn from(node: Sequence) -> Self {
        Self::Sequence(node)
    }
}

impl From<Repetition> for Spec {
    fn from(node: Repetition) -> Self {
        Self::Repetition(node)
    }
}

impl From<Optional> for Spec {
    fn from(node: Optional) -> Self {
        Self::Optional(node)
    }
}

impl From<Documented> for Spec {
    fn from(node: Documented) -> Self {
        Self::Documented(node)
    }
}

impl From<PlayerName> for Spec {
    fn from(_: PlayerName) -> Self {
        Self::PlayerName
    }
}

impl From<Whitespace> for Spec {
    fn from(_: Whitespace) -> Self {
        Self::Whitespace
    }
}
