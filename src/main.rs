//! genequery - Batch protein sequence queries
//!
//! ## Usage
//!
//! ```bash
//! genequery            # run 0 in the current directory
//! genequery 3 -d data  # data/sequences.3.txt + data/commands.3.txt -> data/genedata.3.txt
//! ```
//!
//! ## Commands
//!
//! - `search<TAB>RLE`: proteins whose sequence contains the decoded fragment
//! - `diff<TAB>P1<TAB>P2`: positional differences between two proteins
//! - `mode<TAB>P`: most frequent amino acid of a protein

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use genequery::batch;
use genequery::config::{RunConfig, DEFAULT_AUTHOR, DEFAULT_TITLE};

/// genequery - Search, compare and profile run-length encoded protein sequences
///
/// Reads sequences.<RUN>.txt and commands.<RUN>.txt from DIR and writes
/// genedata.<RUN>.txt next to them. Skipped dataset lines are reported on stderr.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run identifier used to derive the file names
    #[arg(default_value = "0")]
    run: u32,

    /// Directory holding the input files and receiving the report
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// First header line of the report
    #[arg(long = "author", default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Second header line of the report
    #[arg(long = "title", default_value = DEFAULT_TITLE)]
    title: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::init();

    if !args.dir.is_dir() {
        anyhow::bail!("Not a directory: {}", args.dir.display());
    }

    let config = RunConfig::new(&args.dir, args.run)
        .with_author(args.author)
        .with_title(args.title);

    let summary = batch::run(&config, &mut io::stderr())?;

    eprintln!(
        "Wrote report to {} ({} records loaded, {} skipped, {} commands)",
        config.report_path.display(),
        summary.records,
        summary.skipped,
        summary.commands
    );

    Ok(())
}
