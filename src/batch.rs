//! Batch driver.
//!
//! Ties a run together: load the dataset, write the report header, then
//! dispatch every command line in file order. Diagnostics and the report are
//! separate sinks; the report never receives loader warnings.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::command;
use crate::config::RunConfig;
use crate::loader::{self, LoadError};
use crate::model::Dataset;
use crate::report::ReportWriter;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Input files not found: {}", format_paths(.0))]
    MissingInputs(Vec<PathBuf>),

    #[error("Failed to load sequences: {0}")]
    LoadError(#[from] LoadError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for run operations.
pub type RunResult<T> = Result<T, RunError>;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records kept in the dataset
    pub records: usize,
    /// Dataset rows dropped
    pub skipped: usize,
    /// Command lines dispatched
    pub commands: usize,
}

/// Writes the report header and one block per non-blank command line.
///
/// Returns the number of commands dispatched. Numbering starts at 1.
/// Invalid UTF-8 in a command line is replaced, never fatal.
pub fn process<R: BufRead, W: Write>(
    dataset: &Dataset,
    commands: R,
    report: &mut ReportWriter<W>,
    author: &str,
    title: &str,
) -> RunResult<usize> {
    report.write_header(author, title)?;

    let mut counter = 1;
    for line in loader::lossy_lines(commands) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        counter = command::dispatch(&line, dataset, report, counter)?;
    }

    Ok(counter - 1)
}

/// Executes a full run described by `config`.
///
/// Both input files must exist before anything is read or written.
pub fn run<D: Write>(config: &RunConfig, diagnostics: &mut D) -> RunResult<RunSummary> {
    let missing = config.missing_inputs();
    if !missing.is_empty() {
        return Err(RunError::MissingInputs(missing));
    }

    let loaded = loader::load_dataset_file(&config.sequences_path, diagnostics)?;
    info!(
        "Loaded {} records from {} ({} skipped)",
        loaded.dataset.len(),
        config.sequences_path.display(),
        loaded.skipped.len()
    );

    let commands = BufReader::new(File::open(&config.commands_path)?);
    let mut report = ReportWriter::new(BufWriter::new(File::create(&config.report_path)?));
    let dispatched = process(&loaded.dataset, commands, &mut report, &config.author, &config.title)?;
    report.finish()?;

    info!("Processed {} commands", dispatched);

    Ok(RunSummary {
        records: loaded.dataset.len(),
        skipped: loaded.skipped.len(),
        commands: dispatched,
    })
}
