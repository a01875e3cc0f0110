use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbols permitted in a [`Sequence`]
pub const ALPHABET: &[u8] = b"ACGT";

/// Check whether a character is one of the four nucleotide symbols
#[must_use]
pub fn is_valid_symbol(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid symbol '{symbol}' at position {position} (expected one of A, C, G, T)")]
    InvalidSymbol { symbol: char, position: usize },
}

/// An immutable, validated nucleotide sequence over `{A, C, G, T}`.
///
/// Validation happens once, in [`Sequence::new`]. Nothing mutates a sequence
/// afterwards, so every value upholds the alphabet invariant for its whole
/// lifetime. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence {
    symbols: String,
}

impl Sequence {
    /// Validate `symbols` and wrap them as a sequence.
    ///
    /// Matching is case-sensitive: only upper-case `A`, `C`, `G` and `T` are
    /// accepted. The empty string is a valid, empty sequence.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::InvalidSymbol` for the first character outside
    /// the alphabet.
    pub fn new(symbols: impl Into<String>) -> Result<Self, SequenceError> {
        let symbols = symbols.into();

        if let Some((position, symbol)) = symbols
            .chars()
            .enumerate()
            .find(|(_, c)| !is_valid_symbol(*c))
        {
            return Err(SequenceError::InvalidSymbol { symbol, position });
        }

        Ok(Self { symbols })
    }

    /// Wrap symbols already known to be valid
    fn from_validated(symbols: String) -> Self {
        debug_assert!(symbols.chars().all(is_valid_symbol));
        Self { symbols }
    }

    /// Number of symbols
    #[must_use]
    pub fn len(&self) -> usize {
        // All symbols are single-byte ASCII
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.symbols.as_bytes()
    }

    /// Length of the longest suffix of `self` that equals a prefix of `other`.
    ///
    /// Every candidate length up to `min(self.len(), other.len())` is
    /// considered and the largest exact match wins; shorter lengths need not
    /// match too (e.g. `ACA` vs `ACA` overlaps by 3 although a 2-symbol
    /// overlap does not exist). Returns 0 if nothing matches, including when
    /// either sequence is empty.
    ///
    /// The measure is directional: `a.calculate_overlap(&b)` compares the
    /// end of `a` with the start of `b`.
    #[must_use]
    pub fn calculate_overlap(&self, other: &Sequence) -> usize {
        let suffix_source = self.as_bytes();
        let prefix_source = other.as_bytes();
        let bound = suffix_source.len().min(prefix_source.len());

        (1..=bound)
            .rev()
            .find(|&k| suffix_source[suffix_source.len() - k..] == prefix_source[..k])
            .unwrap_or(0)
    }

    /// Merge `other` onto the end of `self` along their maximal overlap.
    ///
    /// `self` is the left operand: the result is all of `self` followed by
    /// the symbols of `other` past the overlap. The resulting length is
    /// `self.len() + other.len() - self.calculate_overlap(other)`.
    #[must_use]
    pub fn merged_with(&self, other: &Sequence) -> Sequence {
        let overlap = self.calculate_overlap(other);

        let mut merged = String::with_capacity(self.len() + other.len() - overlap);
        merged.push_str(&self.symbols);
        merged.push_str(&other.symbols[overlap..]);

        Self::from_validated(merged)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Sequence {
    type Error = SequenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Sequence> for String {
    fn from(sequence: Sequence) -> Self {
        sequence.symbols
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::new(s).unwrap()
    }

    #[test]
    fn test_new_accepts_alphabet() {
        let s = seq("GATTACA");
        assert_eq!(s.len(), 7);
        assert_eq!(s.as_str(), "GATTACA");
        assert_eq!(s.to_string(), "GATTACA");
    }

    #[test]
    fn test_new_accepts_empty() {
        let s = seq("");
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_symbol() {
        let err = Sequence::new("CATN").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidSymbol {
                symbol: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn test_new_reports_first_invalid_symbol() {
        let err = Sequence::new("AXGZ").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidSymbol {
                symbol: 'X',
                position: 1
            }
        );
    }

    #[test]
    fn test_new_is_case_sensitive() {
        assert!(Sequence::new("acgt").is_err());
        assert!(Sequence::new("ACgT").is_err());
    }

    #[test]
    fn test_new_rejects_non_ascii() {
        let err = Sequence::new("ACé").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidSymbol {
                symbol: 'é',
                position: 2
            }
        );
    }

    #[test]
    fn test_error_message_names_symbol() {
        let err = Sequence::new("CATN").unwrap_err();
        assert!(err.to_string().contains("'N'"));
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(seq("ACGT"), seq("ACGT"));
        assert_ne!(seq("ACGT"), seq("ACG"));
    }

    #[test]
    fn test_overlap_takes_largest() {
        assert_eq!(seq("CAA").calculate_overlap(&seq("AAG")), 2);
    }

    #[test]
    fn test_overlap_is_not_monotonic() {
        // A 3-symbol overlap exists even though no 2-symbol one does
        assert_eq!(seq("ACA").calculate_overlap(&seq("ACAT")), 3);
        assert_eq!(seq("GACA").calculate_overlap(&seq("ACA")), 3);
    }

    #[test]
    fn test_overlap_known_pair() {
        let left = seq("ATTAGACCTG");
        let right = seq("CCTGCCGGAA");
        assert_eq!(left.calculate_overlap(&right), 4);
        assert_eq!(right.calculate_overlap(&left), 1);
    }

    #[test]
    fn test_overlap_with_self_is_full_length() {
        let s = seq("ACGTAC");
        assert_eq!(s.calculate_overlap(&s), 6);
    }

    #[test]
    fn test_overlap_with_empty_is_zero() {
        assert_eq!(seq("").calculate_overlap(&seq("ACGT")), 0);
        assert_eq!(seq("ACGT").calculate_overlap(&seq("")), 0);
        assert_eq!(seq("").calculate_overlap(&seq("")), 0);
    }

    #[test]
    fn test_overlap_none() {
        assert_eq!(seq("GGG").calculate_overlap(&seq("TTT")), 0);
    }

    #[test]
    fn test_overlap_bounded_by_shorter() {
        let pairs = [("A", "AAAA"), ("AAAA", "A"), ("CGCG", "CG"), ("TT", "TTTTT")];
        for (a, b) in pairs {
            let (a, b) = (seq(a), seq(b));
            let overlap = a.calculate_overlap(&b);
            assert!(overlap <= a.len().min(b.len()), "{a} vs {b}: {overlap}");
        }
    }

    #[test]
    fn test_merged_with() {
        assert_eq!(seq("CAA").merged_with(&seq("AAG")), seq("CAAG"));
        assert_eq!(
            seq("ATTAGACCTG").merged_with(&seq("CCTGCCGGAA")),
            seq("ATTAGACCTGCCGGAA")
        );
    }

    #[test]
    fn test_merged_with_is_directional() {
        let a = seq("CAA");
        let b = seq("AAG");
        assert_eq!(a.merged_with(&b), seq("CAAG"));
        assert_eq!(b.merged_with(&a), seq("AAGCAA"));
    }

    #[test]
    fn test_merged_length() {
        let a = seq("GATTACA");
        let b = seq("ACATTAG");
        let merged = a.merged_with(&b);
        assert_eq!(merged.len(), a.len() + b.len() - a.calculate_overlap(&b));
    }

    #[test]
    fn test_merged_without_overlap_concatenates() {
        assert_eq!(seq("GG").merged_with(&seq("TT")), seq("GGTT"));
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let json = serde_json::to_string(&seq("ACGT")).unwrap();
        assert_eq!(json, "\"ACGT\"");

        let parsed: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seq("ACGT"));

        let invalid: Result<Sequence, _> = serde_json::from_str("\"ACGN\"");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_from_str() {
        let s: Sequence = "TGCA".parse().unwrap();
        assert_eq!(s.as_bytes(), b"TGCA");
        assert!("TGCU".parse::<Sequence>().is_err());
    }
}
