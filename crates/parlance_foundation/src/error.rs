//! Error types for the outer Parlance layers.
//!
//! Uses `thiserror` for ergonomic error definition with rich context. Parse
//! failures are not errors in this sense: the grammar layer returns them as
//! ordinary values so combinators can rank them.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible Parlance operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Parlance operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates a grammar format error.
    #[must_use]
    pub fn grammar_format(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::GrammarFormat {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates an empty roster error.
    #[must_use]
    pub fn empty_roster() -> Self {
        Self::new(ErrorKind::EmptyRoster)
    }

    /// Creates a line editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading a file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The path that was accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A grammar file is not a valid grammar description.
    #[error("invalid grammar at {line}:{column}: {message}")]
    GrammarFormat {
        /// Description of the problem.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// The grammar refers to players but no names were supplied.
    #[error("grammar uses player names but the roster is empty")]
    EmptyRoster,

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file.
    pub source: Option<PathBuf>,
    /// What was being done when the error occurred.
    pub activity: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the activity description.
    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(activity) = &self.activity {
            write!(f, "while {activity}")?;
            if self.source.is_some() {
                write!(f, " ")?;
            }
        }
        if let Some(source) = &self.source {
            write!(f, "in {}", source.display())?;
        }
        Ok(())
    }
}
