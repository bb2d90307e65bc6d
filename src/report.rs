//! Report output.
//!
//! The report is plain line-oriented UTF-8 text:
//!
//! ```text
//! <author>
//! <title>
//!
//!
//! ----------------------------------------
//! 001	search	2A
//! P1	Org1
//! P2	Org2
//! ```
//!
//! Every command gets a block made of a blank line, a 40-character rule and
//! the numbered command echo, followed by the result lines.

use std::io::{self, Write};

use crate::model::Record;
use crate::query::{DiffOutcome, ModeOutcome};

/// Width of the rule separating command blocks.
pub const RULE_WIDTH: usize = 40;

/// Writes report text to any [`Write`] sink.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    /// Wraps a sink. Nothing is written until [`write_header`](Self::write_header).
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the author and title lines followed by a blank line.
    pub fn write_header(&mut self, author: &str, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", author)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out)
    }

    /// Starts a command block: blank line, rule, numbered echo of `line`.
    pub fn begin_command(&mut self, counter: usize, line: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{:03}\t{}", counter, line)
    }

    /// Writes one `protein<TAB>organism` line per hit, or `NOT FOUND`.
    pub fn write_search(&mut self, hits: &[&Record]) -> io::Result<()> {
        if hits.is_empty() {
            return writeln!(self.out, "NOT FOUND");
        }
        for record in hits {
            writeln!(self.out, "{}\t{}", record.protein, record.organism)?;
        }
        Ok(())
    }

    pub fn write_diff(&mut self, outcome: &DiffOutcome) -> io::Result<()> {
        match outcome {
            DiffOutcome::Difference(count) => {
                writeln!(self.out, "amino-acids difference: {}", count)
            }
            DiffOutcome::Missing(names) => {
                writeln!(
                    self.out,
                    "amino-acids difference: MISSING: {}",
                    names.join(" ").trim()
                )
            }
        }
    }

    pub fn write_mode(&mut self, outcome: &ModeOutcome) -> io::Result<()> {
        match outcome {
            ModeOutcome::Found { symbol, count } => {
                writeln!(self.out, "amino-acid occurs: {} {}", symbol, count)
            }
            ModeOutcome::EmptySequence => writeln!(self.out, "amino-acid occurs: ? 0"),
            ModeOutcome::Missing(name) => {
                writeln!(self.out, "amino-acid occurs: MISSING: {}", name)
            }
        }
    }

    pub fn write_invalid(&mut self) -> io::Result<()> {
        writeln!(self.out, "Invalid command")
    }

    /// Flushes the sink and hands it back.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
