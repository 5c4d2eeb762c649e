//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use parlance_foundation::{Error, ErrorContext, ErrorKind};
use std::error::Error as _;
use std::io;
use std::path::PathBuf;

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_grammar_format() {
    let err = Error::grammar_format("missing field `command`", 1, 2);
    assert!(matches!(
        err.kind,
        ErrorKind::GrammarFormat {
            line: 1,
            column: 2,
            ..
        }
    ));
    assert_eq!(
        format!("{err}"),
        "invalid grammar at 1:2: missing field `command`"
    );
}

#[test]
fn error_empty_roster() {
    let err = Error::empty_roster();
    assert!(matches!(err.kind, ErrorKind::EmptyRoster));
    assert!(format!("{err}").contains("roster is empty"));
}

#[test]
fn error_editor() {
    let err = Error::editor("terminal closed");
    assert!(matches!(err.kind, ErrorKind::Editor(_)));
    assert_eq!(format!("{err}"), "line editor error: terminal closed");
}

#[test]
fn error_io_keeps_source() {
    let err = Error::io(
        "missing.json",
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(format!("{err}").starts_with("cannot read missing.json"));
    assert!(err.kind.source().is_some());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    assert!(Error::internal("x").context.is_none());
}

#[test]
fn context_display_variants() {
    assert_eq!(ErrorContext::new().to_string(), "");
    assert_eq!(
        ErrorContext::new().with_activity("loading grammar").to_string(),
        "while loading grammar"
    );
    assert_eq!(
        ErrorContext::new().with_source("g.json").to_string(),
        "in g.json"
    );
}

#[test]
fn context_attached_to_error() {
    let err = Error::grammar_format("bad", 1, 1)
        .with_context(ErrorContext::new().with_source("trade.json"));
    let ctx = err.context.expect("context");
    assert_eq!(ctx.source, Some(PathBuf::from("trade.json")));
    assert_eq!(ctx.activity, None);
}
