//! The interactive command prompt.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use parlance_foundation::{Error, Result, Value, comma_list_or};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Configuration for the prompt itself.
#[derive(Clone, Debug)]
pub struct ReplConfig {
    /// Primary prompt.
    pub prompt: String,
    /// Whether to show the welcome banner.
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

/// What evaluating one line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Blank line; nothing to show.
    Nothing,
    /// Text for standard output: a parsed value or help.
    Output(String),
    /// The command was rejected; text for standard error.
    Failure(String),
    /// The user asked to leave.
    Quit,
}

/// Counts from a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines that parsed.
    pub parsed: usize,
    /// Lines that were rejected.
    pub failed: usize,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Grammar and roster.
    session: Session,

    /// Prompt settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new(session.clone())?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            config: ReplConfig::default(),
        }
    }

    /// Sets the prompt configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.config.show_banner {
            self.print_banner();
        }
        info!(players = self.session.players().len(), "prompt started");

        loop {
            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };

            if !line.trim().is_empty() {
                self.editor.add_history(&line);
            }

            match self.eval(&line)? {
                Response::Nothing => {}
                Response::Output(text) => println!("{text}"),
                Response::Failure(text) => eprintln!("\x1b[31m{text}\x1b[0m"),
                Response::Quit => break,
            }
        }

        info!("prompt closed");
        Ok(())
    }

    /// Evaluates one line: a meta command or a game command.
    ///
    /// # Errors
    ///
    /// Returns an error if a parsed value cannot be rendered.
    pub fn eval(&self, line: &str) -> Result<Response> {
        eval_line(&self.session, line)
    }

    /// Prints the welcome banner.
    fn print_banner(&self) {
        println!("\x1b[1;36mparlance v{}\x1b[0m", env!("CARGO_PKG_VERSION"));
        println!("Type a command. :help lists commands, Ctrl+D exits.\n");
        let _ = io::stdout().flush();
    }
}

/// Parses every line of `input`, writing one result per line to `output`.
///
/// Blank lines are skipped; meta commands are honoured.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_batch<R: BufRead, W: Write>(
    session: &Session,
    input: R,
    mut output: W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line.map_err(|e| Error::io("<stdin>", e))?;
        let written = match eval_line(session, &line)? {
            Response::Nothing => Ok(()),
            Response::Output(text) => {
                summary.parsed += 1;
                writeln!(output, "{text}")
            }
            Response::Failure(text) => {
                summary.failed += 1;
                writeln!(output, "error: {text}")
            }
            Response::Quit => break,
        };
        written.map_err(|e| Error::io("<stdout>", e))?;
    }

    debug!(parsed = summary.parsed, failed = summary.failed, "batch finished");
    Ok(summary)
}

fn eval_line(session: &Session, line: &str) -> Result<Response> {
    match line.trim() {
        "" => Ok(Response::Nothing),
        ":quit" | ":q" => Ok(Response::Quit),
        ":help" | ":h" => Ok(Response::Output(help(session))),
        ":players" => Ok(Response::Output(roster(session))),
        _ => match session.parse(line) {
            Ok(output) => format_value(session, &output.value).map(Response::Output),
            Err(failure) => Ok(Response::Failure(failure.to_string())),
        },
    }
}

fn format_value(session: &Session, value: &Value) -> Result<String> {
    if session.config().json_output {
        serde_json::to_string(value).map_err(|e| Error::internal(e.to_string()))
    } else {
        Ok(value.to_string())
    }
}

fn help(session: &Session) -> String {
    let mut text = String::new();
    let entries = session.documentation();
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for entry in &entries {
        let _ = writeln!(text, "  {:<width$}  {}", entry.name, entry.description);
    }
    let expected = session.expected();
    if !expected.is_empty() {
        let _ = write!(text, "Commands start with {}", comma_list_or(&expected));
    }
    text.trim_end().to_string()
}

fn roster(session: &Session) -> String {
    if session.players().is_empty() {
        return "no players".to_string();
    }
    session
        .players()
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {i}: {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}
