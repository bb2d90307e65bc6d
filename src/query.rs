//! Query handlers over a loaded dataset.
//!
//! Each handler returns a typed outcome; turning outcomes into report text is
//! the job of [`crate::report`].

use std::collections::BTreeMap;

use crate::model::{Dataset, Record};
use crate::rle;

/// Character used for positions past the end of the shorter sequence.
const PADDING: char = ' ';

/// Result of a `diff` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Both proteins found; number of differing positions.
    Difference(usize),
    /// Names that were not found, first argument before second.
    Missing(Vec<String>),
}

/// Result of a `mode` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeOutcome {
    /// Most frequent residue and its count.
    Found { symbol: char, count: usize },
    /// The protein exists but its sequence is empty.
    EmptySequence,
    /// No protein with that name.
    Missing(String),
}

/// Returns the records whose sequence contains the decoded query.
///
/// `encoded_query` is run-length decoded first, then matched as a plain
/// substring. Records come back in dataset order.
pub fn search<'a>(dataset: &'a Dataset, encoded_query: &str) -> Vec<&'a Record> {
    let query = rle::decode(encoded_query);
    dataset.iter().filter(|r| r.contains(&query)).collect()
}

/// Counts positions at which two sequences differ.
///
/// The shorter sequence is padded with spaces, so every position of the
/// longer tail counts as a difference.
pub fn sequence_difference(first: &str, second: &str) -> usize {
    let mut a = first.chars();
    let mut b = second.chars();
    let mut count = 0;

    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) => {
                if x.unwrap_or(PADDING) != y.unwrap_or(PADDING) {
                    count += 1;
                }
            }
        }
    }

    count
}

/// Compares the sequences of two named proteins.
pub fn diff(dataset: &Dataset, first: &str, second: &str) -> DiffOutcome {
    match (dataset.find(first), dataset.find(second)) {
        (Some(a), Some(b)) => DiffOutcome::Difference(sequence_difference(&a.amino_acids, &b.amino_acids)),
        (a, b) => {
            let mut missing = Vec::with_capacity(2);
            if a.is_none() {
                missing.push(first.to_string());
            }
            if b.is_none() {
                missing.push(second.to_string());
            }
            DiffOutcome::Missing(missing)
        }
    }
}

/// Finds the most frequent character of a sequence.
///
/// Ties go to the lowest code point. Returns `None` for an empty sequence.
pub fn most_frequent(sequence: &str) -> Option<(char, usize)> {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in sequence.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    // Keys ascend; only a strictly higher count replaces the current best
    counts.into_iter().fold(None, |best, (symbol, count)| match best {
        Some((_, best_count)) if best_count >= count => best,
        _ => Some((symbol, count)),
    })
}

/// Finds the most frequent residue of a named protein.
pub fn mode(dataset: &Dataset, protein: &str) -> ModeOutcome {
    let Some(record) = dataset.find(protein) else {
        return ModeOutcome::Missing(protein.to_string());
    };

    if record.is_empty() {
        return ModeOutcome::EmptySequence;
    }

    match most_frequent(&record.amino_acids) {
        Some((symbol, count)) => ModeOutcome::Found { symbol, count },
        None => ModeOutcome::EmptySequence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Record::new("P1", "Org1", "AAC"),
            Record::new("P2", "Org2", "AAA"),
            Record::new("P3", "Org3", "MKVLW"),
        ])
    }

    #[test]
    fn test_search_decodes_query() {
        let dataset = sample();
        let hits: Vec<&str> = search(&dataset, "2A").into_iter().map(|r| r.protein.as_str()).collect();
        assert_eq!(hits, vec!["P1", "P2"]);
    }

    #[test]
    fn test_search_literal_query() {
        let dataset = sample();
        let hits = search(&dataset, "KVL");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].organism, "Org3");
    }

    #[test]
    fn test_search_no_match() {
        let dataset = sample();
        assert!(search(&dataset, "X").is_empty());
        assert!(search(&dataset, "3C").is_empty());
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let dataset = sample();
        assert_eq!(search(&dataset, "0A").len(), 3);
    }

    #[test]
    fn test_sequence_difference() {
        assert_eq!(sequence_difference("AAC", "AAA"), 1);
        assert_eq!(sequence_difference("MKV", "MKV"), 0);
        assert_eq!(sequence_difference("", ""), 0);
        assert_eq!(sequence_difference("AC", "ACDE"), 2);
        assert_eq!(sequence_difference("", "WWW"), 3);
    }

    #[test]
    fn test_sequence_difference_is_symmetric() {
        let pairs = [("AAC", "AAA"), ("MK", "MKVLW"), ("ACDEF", "FEDCA"), ("", "A")];
        for (a, b) in pairs {
            assert_eq!(sequence_difference(a, b), sequence_difference(b, a));
        }
    }

    #[test]
    fn test_sequence_difference_longer_tail_counts() {
        // No overlap matches: at least the longer length
        assert!(sequence_difference("CC", "AAAAA") >= 5);
        assert_eq!(sequence_difference("CC", "AAAAA"), 5);
    }

    #[test]
    fn test_diff_found() {
        let dataset = sample();
        assert_eq!(diff(&dataset, "P1", "P2"), DiffOutcome::Difference(1));
        assert_eq!(diff(&dataset, "P2", "P1"), DiffOutcome::Difference(1));
        assert_eq!(diff(&dataset, "P3", "P3"), DiffOutcome::Difference(0));
    }

    #[test]
    fn test_diff_missing() {
        let dataset = sample();
        assert_eq!(
            diff(&dataset, "P1", "P9"),
            DiffOutcome::Missing(vec!["P9".to_string()])
        );
        assert_eq!(
            diff(&dataset, "Q1", "P2"),
            DiffOutcome::Missing(vec!["Q1".to_string()])
        );
        assert_eq!(
            diff(&dataset, "Q1", "Q2"),
            DiffOutcome::Missing(vec!["Q1".to_string(), "Q2".to_string()])
        );
    }

    #[test]
    fn test_most_frequent_tie_break() {
        assert_eq!(most_frequent("BBAA"), Some(('A', 2)));
        assert_eq!(most_frequent("ABAB"), Some(('A', 2)));
        assert_eq!(most_frequent("WYWY"), Some(('W', 2)));
    }

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent("AAC"), Some(('A', 2)));
        assert_eq!(most_frequent("CDDDA"), Some(('D', 3)));
        assert_eq!(most_frequent("K"), Some(('K', 1)));
        assert_eq!(most_frequent(""), None);
    }

    #[test]
    fn test_mode_outcomes() {
        let dataset = Dataset::new(vec![
            Record::new("P1", "Org1", "AAC"),
            Record::new("E", "Org2", ""),
        ]);
        assert_eq!(mode(&dataset, "P1"), ModeOutcome::Found { symbol: 'A', count: 2 });
        assert_eq!(mode(&dataset, "E"), ModeOutcome::EmptySequence);
        assert_eq!(mode(&dataset, "P2"), ModeOutcome::Missing("P2".to_string()));
    }
}
