//! Data model for the query tool.
//!
//! This module contains the in-memory representation of a loaded dataset:
//! - `Record`: one protein/organism/sequence triple
//! - `Dataset`: the records of a sequences file, in file order
//!
//! Sequences are stored decoded; the run-length encoding only exists in the
//! input files.

/// A single dataset entry with its decoded amino-acid sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Protein name (first column)
    pub protein: String,
    /// Organism name (second column)
    pub organism: String,
    /// Decoded amino-acid sequence
    pub amino_acids: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(
        protein: impl Into<String>,
        organism: impl Into<String>,
        amino_acids: impl Into<String>,
    ) -> Self {
        Self {
            protein: protein.into(),
            organism: organism.into(),
            amino_acids: amino_acids.into(),
        }
    }

    /// Returns true if the decoded sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.amino_acids.is_empty()
    }

    /// Returns true if `pattern` occurs as a contiguous run in the sequence.
    pub fn contains(&self, pattern: &str) -> bool {
        self.amino_acids.contains(pattern)
    }
}

/// All records loaded from a sequences file.
///
/// Read-only once built. Protein names are expected to be unique but this is
/// not enforced: lookups return the first record with a matching name.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from records in file order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record was loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gets a record by index.
    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates over the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Finds the first record whose protein name equals `protein` exactly.
    pub fn find(&self, protein: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.protein == protein)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
