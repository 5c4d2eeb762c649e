//! Parlance CLI entry point.

use clap::{Arg, ArgAction, Command};
use parlance_runtime::{Repl, Session, SessionConfig, load_grammar, run_batch};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("parlance")
        .version(VERSION)
        .about("Parse abbreviated game commands against a grammar.")
        .arg(
            Arg::new("grammar")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("The JSON file holding the command grammar and, optionally, a player roster."),
        )
        .arg(
            Arg::new("player")
                .short('p')
                .long("player")
                .action(ArgAction::Append)
                .help("Add a player name to the roster. May be given more than once."),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .action(ArgAction::SetTrue)
                .help("Read commands from standard input, one per line, instead of prompting."),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print parsed values as JSON."),
        )
        .arg(
            Arg::new("allow-trailing")
                .long("allow-trailing")
                .action(ArgAction::SetTrue)
                .help("Accept commands that leave unparsed text at the end of the line."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more detail to standard error. Repeat for trace output."),
        )
        .get_matches();

    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let Some(path) = matches.get_one::<PathBuf>("grammar") else {
        eprintln!("usage: parlance <GRAMMAR> [OPTIONS]");
        return ExitCode::FAILURE;
    };
    let players: Vec<String> = matches
        .get_many::<String>("player")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();

    let config = SessionConfig::default()
        .with_json_output(matches.get_flag("json"))
        .with_trailing_input(matches.get_flag("allow-trailing"));

    let session = match load_grammar(path).and_then(|file| Session::from_file(file, players)) {
        Ok(session) => session.with_config(config),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            return ExitCode::FAILURE;
        }
    };

    if matches.get_flag("batch") {
        return match run_batch(&session, io::stdin().lock(), io::stdout().lock()) {
            Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("\x1b[31mError: {e}\x1b[0m");
                ExitCode::FAILURE
            }
        };
    }

    match Repl::new(session).and_then(|mut repl| repl.run()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}
