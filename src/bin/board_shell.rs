//! Line-oriented front end for a single kanban board session.
//!
//! Usage:
//!
//! ```text
//! board_shell [config-path]
//! ```
//!
//! Commands are read from standard input, one per line:
//!
//! ```text
//! add <title>
//! move <index> <from-column> <to-column>
//! show
//! help
//! quit
//! ```
//!
//! Columns are named `todo`, `inProgress` and `done`. After every accepted
//! mutation the board is written to standard output as JSON. Rejected
//! commands print a one-line reason and the session continues. Log output
//! goes to standard error and is filtered with `RUST_LOG` (default `warn`).
//!
//! The optional `config-path` names a JSON [`BoardConfig`] file such as:
//!
//! ```json
//! { "same_column_move": "ignore", "trim_titles": true }
//! ```

use camino::Utf8PathBuf;
use kanban_board::board::{
    adapters::memory::{InMemoryBoardStore, UuidTaskIdGenerator},
    domain::Board,
    ports::{BoardStore, TaskIdGenerator},
    services::{BoardConfig, BoardConfigError, BoardService},
};
use mockable::{Clock, DefaultClock};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const HELP: &str = "\
commands:
  add <title>                      add a task to the end of todo
  move <index> <from> <to>         move a task to the end of another column
  show                             print the board
  help                             print this help
  quit                             end the session
columns: todo, inProgress, done";

/// Errors that end the shell session.
#[derive(Debug, Error)]
enum ShellError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(&'static str),
    #[error(transparent)]
    Config(#[from] BoardConfigError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render board: {0}")]
    Render(#[from] serde_json::Error),
}

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(String),
    Move {
        index: usize,
        source: String,
        destination: String,
    },
    Show,
    Help,
    Quit,
}

/// Reasons an input line is not a command.
#[derive(Debug, PartialEq, Eq, Error)]
enum CommandParseError {
    #[error("empty line")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

const MOVE_USAGE: &str = "move <index> <from> <to>";

impl Command {
    fn parse(line: &str) -> Result<Self, CommandParseError> {
        let trimmed = line.trim_start();
        let (verb, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        match verb {
            "" => Err(CommandParseError::Empty),
            "add" => Ok(Self::Add(rest.to_owned())),
            "move" => Self::parse_move(rest),
            "show" => Ok(Self::Show),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandParseError::Unknown(other.to_owned())),
        }
    }

    fn parse_move(args: &str) -> Result<Self, CommandParseError> {
        let usage = CommandParseError::Usage(MOVE_USAGE);
        let mut parts = args.split_whitespace();
        let (Some(index), Some(source), Some(destination), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(usage);
        };
        let parsed_index = index.parse().map_err(|_| usage)?;
        Ok(Self::Move {
            index: parsed_index,
            source: source.to_owned(),
            destination: destination.to_owned(),
        })
    }
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let config = load_config(env::args_os().skip(1))?;
    let service = BoardService::with_config(
        Arc::new(InMemoryBoardStore::new()),
        Arc::new(UuidTaskIdGenerator),
        Arc::new(DefaultClock),
        config,
    );
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&service, stdin.lock(), stdout.lock()).map_err(Into::into)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(mut args: impl Iterator<Item = OsString>) -> Result<BoardConfig, ShellError> {
    let Some(arg) = args.next() else {
        return Ok(BoardConfig::default());
    };
    if args.next().is_some() {
        return Err(ShellError::InvalidArgs("expected at most one config path"));
    }
    let path = arg
        .into_string()
        .map(Utf8PathBuf::from)
        .map_err(|_| ShellError::InvalidArgs("config path is not valid UTF-8"))?;
    Ok(BoardConfig::load(&path)?)
}

/// Reads commands from `input` until end of input or `quit`.
fn run_shell<S, G, C>(
    service: &BoardService<S, G, C>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), ShellError>
where
    S: BoardStore,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    for line in input.lines() {
        let text = line?;
        match Command::parse(&text) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(service, command, &mut output)?,
            Err(CommandParseError::Empty) => {}
            Err(err) => writeln!(output, "error: {err}")?,
        }
    }
    output.flush()?;
    Ok(())
}

fn execute<S, G, C>(
    service: &BoardService<S, G, C>,
    command: Command,
    output: &mut impl Write,
) -> Result<(), ShellError>
where
    S: BoardStore,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    match command {
        Command::Add(title) => match service.add_task(title) {
            Ok(outcome) if outcome.clears_input() => render(outcome.board(), output),
            Ok(_) => Ok(writeln!(output, "ignored: title is blank")?),
            Err(err) => Ok(writeln!(output, "rejected: {err}")?),
        },
        Command::Move {
            index,
            source,
            destination,
        } => match service.move_task(index, &source, &destination) {
            Ok(board) => render(&board, output),
            Err(err) => Ok(writeln!(output, "rejected: {err}")?),
        },
        Command::Show => match service.board() {
            Ok(board) => render(&board, output),
            Err(err) => Ok(writeln!(output, "rejected: {err}")?),
        },
        Command::Help => Ok(writeln!(output, "{HELP}")?),
        Command::Quit => Ok(()),
    }
}

fn render(board: &Board, output: &mut impl Write) -> Result<(), ShellError> {
    serde_json::to_writer_pretty(&mut *output, board)?;
    writeln!(output)?;
    Ok(())
}
