//! Command-line front end.
//!
//! Arguments that were not supplied (or were empty) are asked for on the
//! terminal until a non-empty answer is given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::loader::{self, LoadError};
use crate::planner::{Planner, SearchConfig, SearchError};

const FILE_PROMPT: &str = "Please specify the path to CSV file: ";
const START_PROMPT: &str = "What station are you getting on the train? ";
const END_PROMPT: &str = "What station are you getting off the train? ";

/// Find the fastest train route between two stations
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// Path to the route table (start,end,time rows, no header)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Station to board at
    #[arg(long)]
    pub from: Option<String>,

    /// Station to get off at
    #[arg(long)]
    pub to: Option<String>,

    /// Give up on a query after this many milliseconds
    #[arg(long)]
    pub deadline_ms: Option<u64>,
}

/// Errors from a command-line run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading an answer from the terminal failed
    #[error("failed to read input: {0}")]
    Prompt(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Ask `question` until a non-empty line is answered.
///
/// Only the line terminator is stripped; surrounding spaces are part of the
/// answer. End of input is an error.
pub fn prompt_until_answered<R, W>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        output.write_all(question.as_bytes())?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

/// Use `value` if present and non-empty, otherwise prompt for it.
fn resolve<R, W>(
    value: Option<String>,
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => prompt_until_answered(input, output, question),
    }
}

/// Run one query: fill in missing arguments, load the table, find the route.
///
/// Returns the message to print.
pub fn run<R, W>(args: Args, input: &mut R, output: &mut W) -> Result<String, CliError>
where
    R: BufRead,
    W: Write,
{
    let file = resolve(
        args.file.map(|p| p.to_string_lossy().into_owned()),
        input,
        output,
        FILE_PROMPT,
    )?;
    let file = PathBuf::from(file);
    loader::validate_file(&file)?;

    let start = resolve(args.from, input, output, START_PROMPT)?;
    let end = resolve(args.to, input, output, END_PROMPT)?;

    let graph = loader::load_graph(&file)?;
    let config = SearchConfig::new(args.deadline_ms);
    debug!(start = %start, end = %end, ?config, "running route query");

    let result = Planner::new(&graph, &config).find_route(&start, &end)?;
    Ok(result.to_string())
}
