//! # genequery - Batch queries over encoded protein datasets
//!
//! Loads a tab-delimited dataset of run-length encoded protein sequences
//! and answers `search`, `diff` and `mode` queries from a command file,
//! writing a numbered report.
//!
//! ## Architecture
//!
//! The crate is a linear pipeline:
//! - `rle`: run-length decoding of sequence strings
//! - `alphabet`: amino-acid alphabet validation
//! - `model`: records and the loaded dataset
//! - `loader`: sequences file parsing with per-line diagnostics
//! - `query`: the three query algorithms
//! - `command`: command line parsing and dispatch
//! - `report`: report text formatting
//! - `config`: file naming and report header for a run
//! - `batch`: orchestration of a whole run

pub mod alphabet;
pub mod batch;
pub mod command;
pub mod config;
pub mod loader;
pub mod model;
pub mod query;
pub mod report;
pub mod rle;
