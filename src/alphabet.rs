//! The standard amino-acid alphabet and sequence validation.

use thiserror::Error;

/// One-letter codes of the 20 standard amino acids, in code point order.
pub const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Reasons a decoded sequence is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("sequence is empty or null")]
    Empty,

    #[error("invalid symbol: {0}")]
    InvalidSymbol(char),
}

/// Returns true if `c` is one of the 20 standard amino-acid letters.
///
/// Lower-case letters are not accepted.
pub fn is_amino_acid(c: char) -> bool {
    AMINO_ACIDS.contains(c)
}

/// Checks that `sequence` is non-empty and uses only [`AMINO_ACIDS`].
///
/// Reports the first offending character.
pub fn validate(sequence: &str) -> Result<(), AlphabetError> {
    if sequence.is_empty() {
        return Err(AlphabetError::Empty);
    }

    match sequence.chars().find(|&c| !is_amino_acid(c)) {
        Some(c) => Err(AlphabetError::InvalidSymbol(c)),
        None => Ok(()),
    }
}
