//! Run-length decoding of compact sequence strings.
//!
//! A decimal digit immediately followed by another character means "repeat
//! that character digit times". Every other character passes through:
//!
//! ```text
//! 3A2BC  ->  AAABBC
//! A3B    ->  ABBB
//! ```
//!
//! Counts are a single digit, so `12A` decodes as `1` copy of `2`, then `A`.

/// Expands a run-length encoded string.
///
/// A digit in the last position has nothing to repeat and is kept as a
/// literal character. Never fails: malformed input simply decodes to
/// whatever literal characters it holds.
///
/// # Examples
///
/// ```
/// use genequery::rle::decode;
///
/// assert_eq!(decode("3A2B"), "AAABB");
/// assert_eq!(decode("A3B"), "ABBB");
/// assert_eq!(decode("AC5"), "AC5");
/// ```
pub fn decode(encoded: &str) -> String {
    let mut decoded = String::with_capacity(encoded.len());
    let mut chars = encoded.chars().peekable();

    while let Some(c) = chars.next() {
        match (c.to_digit(10), chars.peek()) {
            (Some(count), Some(&next)) => {
                decoded.extend(std::iter::repeat(next).take(count as usize));
                chars.next();
            }
            _ => decoded.push(c),
        }
    }

    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_runs() {
        assert_eq!(decode("3A2B"), "AAABB");
        assert_eq!(decode("2A1C"), "AAC");
        assert_eq!(decode("9W"), "WWWWWWWWW");
    }

    #[test]
    fn test_decode_mixed_literals() {
        assert_eq!(decode("A3B"), "ABBB");
        assert_eq!(decode("M2KV3L"), "MKKVLLL");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_literal_string_unchanged() {
        let literal = "MKVLAACDEFGHIKLMNPQRSTVWY";
        assert_eq!(decode(literal), literal);
    }

    #[test]
    fn test_trailing_digit_is_literal() {
        assert_eq!(decode("AC5"), "AC5");
        assert_eq!(decode("7"), "7");
    }

    #[test]
    fn test_zero_count_drops_character() {
        assert_eq!(decode("A0CD"), "AD");
    }

    #[test]
    fn test_single_digit_counts() {
        // "1" repeats "2" once, then "A" is literal
        assert_eq!(decode("12A"), "2A");
        // A digit can itself be the repeated character
        assert_eq!(decode("33"), "333");
    }

    #[test]
    fn test_decode_non_ascii() {
        assert_eq!(decode("2Ж"), "ЖЖ");
    }
}
