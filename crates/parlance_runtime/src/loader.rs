//! Grammar files.
//!
//! A grammar file is JSON holding the command grammar and, optionally, the
//! player roster:
//!
//! ```json
//! {
//!   "players": ["Mick", "Steve"],
//!   "command": {"Alternation": [{"Literal": "pass"}, "PlayerName"]}
//! }
//! ```

use std::fs;
use std::path::Path;

use parlance_foundation::{Error, ErrorContext, Result};
use parlance_grammar::Spec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A command grammar together with the players it was written for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarFile {
    /// Player display names, in roster order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<String>,
    /// The grammar of one command.
    pub command: Spec,
}

/// Parses a grammar file's contents.
///
/// # Errors
///
/// Returns a grammar format error if `source` is not a valid grammar file.
pub fn parse_grammar(source: &str) -> Result<GrammarFile> {
    serde_json::from_str(source)
        .map_err(|e| Error::grammar_format(e.to_string(), e.line(), e.column()))
}

/// Reads and parses a grammar file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid grammar.
pub fn load_grammar(path: &Path) -> Result<GrammarFile> {
    debug!(path = %path.display(), "reading grammar");
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let grammar = parse_grammar(&source).map_err(|e| {
        e.with_context(
            ErrorContext::new()
                .with_source(path)
                .with_activity("loading grammar"),
        )
    })?;

    info!(
        path = %path.display(),
        players = grammar.players.len(),
        commands = grammar.command.documentation().len(),
        "grammar loaded"
    );
    Ok(grammar)
}

/// Serializes a grammar file as pretty-printed JSON.
///
/// # Errors
///
/// Returns an internal error if serialization fails.
pub fn to_json(grammar: &GrammarFile) -> Result<String> {
    serde_json::to_string_pretty(grammar).map_err(|e| Error::internal(e.to_string()))
}
