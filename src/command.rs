//! Command parsing and dispatch.
//!
//! A command line is `verb<TAB>arg1[<TAB>arg2...]`. The verb is matched
//! case-insensitively; arguments are used verbatim and extras are ignored.
//!
//! | verb     | arguments            |
//! |----------|----------------------|
//! | `search` | rle-encoded fragment |
//! | `diff`   | protein, protein     |
//! | `mode`   | protein              |

use std::io::{self, Write};

use log::debug;

use crate::model::Dataset;
use crate::query;
use crate::report::ReportWriter;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Search { query: &'a str },
    Diff { first: &'a str, second: &'a str },
    Mode { protein: &'a str },
    /// Unknown verb or too few arguments
    Invalid,
}

impl<'a> Command<'a> {
    /// Parses an already trimmed command line.
    pub fn parse(line: &'a str) -> Self {
        let parts: Vec<&str> = line.split('\t').collect();
        let verb = parts[0].trim().to_lowercase();

        match (verb.as_str(), &parts[1..]) {
            ("search", [query, ..]) => Command::Search { query: *query },
            ("diff", [first, second, ..]) => Command::Diff {
                first: *first,
                second: *second,
            },
            ("mode", [protein, ..]) => Command::Mode { protein: *protein },
            _ => Command::Invalid,
        }
    }
}

/// Runs one command line against the dataset and reports the result.
///
/// Writes the numbered block header for `counter` whether or not the line is
/// a valid command, and returns the counter to use for the next line.
pub fn dispatch<W: Write>(
    line: &str,
    dataset: &Dataset,
    report: &mut ReportWriter<W>,
    counter: usize,
) -> io::Result<usize> {
    let line = line.trim();
    report.begin_command(counter, line)?;

    let command = Command::parse(line);
    debug!("Command {:03}: {:?}", counter, command);

    match command {
        Command::Search { query } => report.write_search(&query::search(dataset, query))?,
        Command::Diff { first, second } => report.write_diff(&query::diff(dataset, first, second))?,
        Command::Mode { protein } => report.write_mode(&query::mode(dataset, protein))?,
        Command::Invalid => report.write_invalid()?,
    }

    Ok(counter + 1)
}
