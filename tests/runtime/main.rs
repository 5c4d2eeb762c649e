//! Integration tests for Layer 2: Runtime
//!
//! Tests for grammar files, sessions, and batch evaluation against the
//! bundled trade grammar.

mod batch;

use parlance_runtime::{Session, parse_grammar};

/// The bundled demo grammar.
pub const TRADE: &str = include_str!("../../grammars/trade.json");

/// A session over the bundled demo grammar and its roster.
pub fn trade_session() -> Session {
    let file = parse_grammar(TRADE).expect("bundled grammar parses");
    Session::from_file(file, Vec::new()).expect("bundled grammar has players")
}
