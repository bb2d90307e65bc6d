//! Sequences file loader.
//!
//! This module reads the tab-delimited dataset, decodes each sequence and
//! keeps only the rows that pass alphabet validation.
//!
//! ## Sequences Format
//!
//! ```text
//! protein<TAB>organism<TAB>rle_sequence[<TAB>ignored...]
//! ```
//!
//! Malformed rows never abort a load. Each one is reported on the
//! diagnostics sink with its line number and returned as a [`SkippedLine`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::alphabet::{self, AlphabetError};
use crate::model::{Dataset, Record};
use crate::rle;

/// Errors that abort a load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a row of the sequences file was dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("expected at least 3 tab-separated columns, found {found}: {content}")]
    TooFewFields { found: usize, content: String },

    #[error("empty amino-acid sequence")]
    BlankSequence,

    #[error("invalid amino-acid sequence ({error}): {sequence}")]
    InvalidSequence {
        sequence: String,
        error: AlphabetError,
    },
}

/// A dropped row and its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of a load: the kept records plus what was dropped.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub dataset: Dataset,
    pub skipped: Vec<SkippedLine>,
}

/// Iterator over the lines of a reader that tolerates invalid UTF-8.
///
/// Bad bytes become U+FFFD instead of failing the read. The trailing `\n`
/// or `\r\n` is removed, as with [`BufRead::lines`].
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Reads `reader` line by line, replacing invalid UTF-8.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

/// Parses one non-blank row into a record.
fn parse_row(line: &str) -> Result<Record, SkipReason> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 3 {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
            content: line.to_string(),
        });
    }

    let encoded = fields[2];
    if encoded.trim().is_empty() {
        return Err(SkipReason::BlankSequence);
    }

    let amino_acids = rle::decode(encoded);
    if let Err(error) = alphabet::validate(&amino_acids) {
        return Err(SkipReason::InvalidSequence {
            sequence: amino_acids,
            error,
        });
    }

    Ok(Record::new(fields[0], fields[1], amino_acids))
}

/// Loads a dataset from a reader.
///
/// Blank lines are skipped silently. Every other rejected row produces one
/// `warning:` line on `diagnostics`. Invalid UTF-8 is decoded lossily, so
/// such rows fail validation instead of aborting the load.
pub fn load_dataset<R: BufRead, W: Write>(reader: R, diagnostics: &mut W) -> LoadResult<Loaded> {
    let mut records = Vec::new();
    let mut skipped = Vec::new();

    for (index, line_result) in lossy_lines(reader).enumerate() {
        let line_number = index + 1;
        let line = line_result?;

        if line.trim().is_empty() {
            continue;
        }

        match parse_row(&line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                let skip = SkippedLine {
                    line: line_number,
                    reason,
                };
                warn!("Skipping dataset {}", skip);
                writeln!(diagnostics, "warning: {}", skip)?;
                skipped.push(skip);
            }
        }
    }

    Ok(Loaded {
        dataset: Dataset::new(records),
        skipped,
    })
}

/// Loads a dataset from a sequences file.
pub fn load_dataset_file<P: AsRef<Path>, W: Write>(
    path: P,
    diagnostics: &mut W,
) -> LoadResult<Loaded> {
    let file = File::open(path)?;
    load_dataset(BufReader::new(file), diagnostics)
}

/// Loads a dataset from an in-memory string.
///
/// Useful for testing or processing in-memory data.
pub fn load_dataset_str<W: Write>(content: &str, diagnostics: &mut W) -> LoadResult<Loaded> {
    load_dataset(content.as_bytes(), diagnostics)
}
