//! Run configuration.
//!
//! A run is identified by a number `n`. The three files it touches live in
//! one directory:
//!
//! - `sequences.<n>.txt`: dataset (read)
//! - `commands.<n>.txt`: queries (read)
//! - `genedata.<n>.txt`: report (written)

use std::path::{Path, PathBuf};

/// Default first header line of the report.
pub const DEFAULT_AUTHOR: &str = "Malyshko Mikhail";

/// Default second header line of the report.
pub const DEFAULT_TITLE: &str = "Генетический поиск";

/// Paths and report header for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sequences_path: PathBuf,
    pub commands_path: PathBuf,
    pub report_path: PathBuf,
    pub author: String,
    pub title: String,
}

impl RunConfig {
    /// Derives the file names for run `run` inside `dir`.
    pub fn new<P: AsRef<Path>>(dir: P, run: u32) -> Self {
        let dir = dir.as_ref();
        Self {
            sequences_path: dir.join(format!("sequences.{}.txt", run)),
            commands_path: dir.join(format!("commands.{}.txt", run)),
            report_path: dir.join(format!("genedata.{}.txt", run)),
            author: DEFAULT_AUTHOR.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Replaces the author line of the report header.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Replaces the title line of the report header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Input files that do not exist, in sequences-then-commands order.
    pub fn missing_inputs(&self) -> Vec<PathBuf> {
        [&self.sequences_path, &self.commands_path]
            .into_iter()
            .filter(|p| !p.is_file())
            .cloned()
            .collect()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(".", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_run_id() {
        let config = RunConfig::new("data", 3);
        assert_eq!(config.sequences_path, Path::new("data/sequences.3.txt"));
        assert_eq!(config.commands_path, Path::new("data/commands.3.txt"));
        assert_eq!(config.report_path, Path::new("data/genedata.3.txt"));
    }

    #[test]
    fn test_default_header() {
        let config = RunConfig::default();
        assert_eq!(config.author, DEFAULT_AUTHOR);
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.report_path, Path::new("./genedata.0.txt"));
    }

    #[test]
    fn test_header_overrides() {
        let config = RunConfig::new(".", 1).with_author("A. Author").with_title("Title");
        assert_eq!(config.author, "A. Author");
        assert_eq!(config.title, "Title");
    }

    #[test]
    fn test_missing_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path(), 0);
        assert_eq!(
            config.missing_inputs(),
            vec![config.sequences_path.clone(), config.commands_path.clone()]
        );

        std::fs::write(&config.sequences_path, "").unwrap();
        assert_eq!(config.missing_inputs(), vec![config.commands_path.clone()]);

        std::fs::write(&config.commands_path, "").unwrap();
        assert!(config.missing_inputs().is_empty());
    }
}
