//! Grammar loading, sessions, and the interactive prompt for Parlance.
//!
//! This crate provides:
//! - [`Session`] - A grammar bound to a player roster; parses whole lines
//! - [`load_grammar`] - Reads a command grammar from a JSON file
//! - [`Repl`] - Interactive prompt with completion from the grammar
//! - [`run_batch`] - Line-at-a-time parsing for scripts and pipes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod loader;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use loader::{GrammarFile, load_grammar, parse_grammar, to_json};
pub use repl::{BatchSummary, Repl, ReplConfig, Response, run_batch};
pub use session::{Session, SessionConfig, Suggestion};
