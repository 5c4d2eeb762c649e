//! A command grammar bound to a player roster.
//!
//! The session is the in-process boundary a turn-based game talks to: it
//! parses whole command lines, rejects unexpected trailing input, and offers
//! completions built from the grammar's expectations.

use parlance_foundation::{Error, Result};
use parlance_grammar::{DocEntry, Output, Parse, ParseFailure, ParseResult, Spec};
use tracing::debug;

use crate::loader::GrammarFile;

/// Configuration for how a session treats whole command lines.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Accept input left over after the grammar matched.
    pub allow_trailing_input: bool,
    /// Trim surrounding whitespace from a line before parsing it.
    pub trim_input: bool,
    /// Print parsed values as JSON rather than plain text.
    pub json_output: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            allow_trailing_input: false,
            trim_input: true,
            json_output: false,
        }
    }
}

impl SessionConfig {
    /// Builder method to accept trailing input.
    #[must_use]
    pub fn with_trailing_input(mut self, allow: bool) -> Self {
        self.allow_trailing_input = allow;
        self
    }

    /// Builder method to set input trimming.
    #[must_use]
    pub fn with_trim_input(mut self, trim: bool) -> Self {
        self.trim_input = trim;
        self
    }

    /// Builder method to set JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }
}

/// Completion candidates for partially typed input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestion {
    /// Byte position in the typed text where the candidates would be inserted.
    pub start: usize,
    /// Expected descriptions that extend what was typed after `start`.
    pub candidates: Vec<String>,
}

/// A grammar, the current players, and how to apply them.
#[derive(Clone, Debug)]
pub struct Session {
    grammar: Spec,
    players: Vec<String>,
    config: SessionConfig,
}

impl Session {
    /// Creates a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar resolves player names but `players`
    /// is empty.
    pub fn new(grammar: Spec, players: Vec<String>) -> Result<Self> {
        if players.is_empty() && grammar.uses_players() {
            return Err(Error::empty_roster());
        }
        Ok(Self {
            grammar,
            players,
            config: SessionConfig::default(),
        })
    }

    /// Creates a session from a loaded grammar file, adding `extra_players`
    /// after the file's own roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar needs players and none are known.
    pub fn from_file(file: GrammarFile, extra_players: Vec<String>) -> Result<Self> {
        let mut players = file.players;
        players.extend(extra_players);
        Self::new(file.command, players)
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// The grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Spec {
        &self.grammar
    }

    /// The player roster.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parses one command line.
    ///
    /// # Errors
    ///
    /// Returns the grammar's failure, or a failure naming the trailing text
    /// when the grammar matched only part of the line.
    pub fn parse<'a>(&self, line: &'a str) -> ParseResult<'a> {
        let input = if self.config.trim_input {
            line.trim()
        } else {
            line
        };

        let result = self
            .grammar
            .parse(input, &self.players)
            .and_then(|output| self.check_trailing(output));

        match &result {
            Ok(output) => debug!(input, value = %output.value, "parsed command"),
            Err(failure) => debug!(input, offset = failure.offset, %failure, "command rejected"),
        }
        result
    }

    fn check_trailing<'a>(&self, output: Output<'a>) -> ParseResult<'a> {
        if self.config.allow_trailing_input || output.remaining.trim().is_empty() {
            return Ok(output);
        }
        let padding = output
            .remaining
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        Err(
            ParseFailure::message(format!("unexpected trailing input `{}`", output.remaining.trim()))
                .at(output.consumed_chars() + padding),
        )
    }

    /// Descriptions of what a command may start with.
    #[must_use]
    pub fn expected(&self) -> Vec<String> {
        self.grammar.expected(&self.players)
    }

    /// The documented parts of the grammar.
    #[must_use]
    pub fn documentation(&self) -> Vec<DocEntry> {
        self.grammar.documentation()
    }

    /// Completions for the word being typed at the end of `typed`.
    ///
    /// Everything before that word is parsed; if it stops matching exactly
    /// where the word begins, the word is compared against what the grammar
    /// expected there.
    #[must_use]
    pub fn suggest(&self, typed: &str) -> Suggestion {
        let start = typed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let mut suggestion = Suggestion {
            start,
            candidates: Vec::new(),
        };

        let before = &typed[..start];
        let Err(failure) = self.grammar.parse(before, &self.players) else {
            return suggestion;
        };
        if failure.offset != before.chars().count() {
            return suggestion;
        }

        let partial = typed[start..].to_lowercase();
        suggestion.candidates = failure
            .expected
            .into_iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&partial))
            .collect();
        suggestion
    }
}
