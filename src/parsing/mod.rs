//! Readers that turn input files into validated fragments.
//!
//! The assembler itself performs no I/O; these parsers source fragments for
//! it:
//!
//! - **FASTA files**: one fragment per record, optionally gzip/bgzip compressed
//! - **Text files**: one fragment per line, `#` comments and blank lines skipped
//!
//! ## Example
//!
//! ```rust,no_run
//! use frag_assembler::parsing::{parse_file, parse_text};
//! use std::path::Path;
//!
//! // Parse from a FASTA file
//! let fragments = parse_file(Path::new("reads.fa")).unwrap();
//!
//! // Or parse from raw text
//! let fragments = parse_text("ATTAGACCTG\nCCTGCCGGAA\n").unwrap();
//! ```

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::{Sequence, SequenceError};
use crate::utils::validation::MAX_FRAGMENTS;

pub mod fasta;
pub mod text;

pub use text::parse_text;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Invalid sequence in {record}: {source}")]
    InvalidSequence {
        record: String,
        #[source]
        source: SequenceError,
    },

    #[error("Too many fragments: {0} exceeds maximum allowed ({MAX_FRAGMENTS})")]
    TooManyFragments(usize),
}

/// Input file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// FASTA, one fragment per record
    Fasta,
    /// Plain text, one fragment per line
    Text,
}

impl InputFormat {
    /// Detect the format from a file name: FASTA extensions, else text
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        if fasta::is_fasta_file(path) {
            Self::Fasta
        } else {
            Self::Text
        }
    }
}

/// Parse a file, detecting its format from the extension
///
/// # Errors
///
/// Returns any error from the format-specific parser.
pub fn parse_file(path: &Path) -> Result<Vec<Sequence>, ParseError> {
    parse_file_as(path, InputFormat::detect(path))
}

/// Parse a file in the given format
///
/// # Errors
///
/// Returns any error from the format-specific parser.
pub fn parse_file_as(path: &Path, format: InputFormat) -> Result<Vec<Sequence>, ParseError> {
    match format {
        InputFormat::Fasta => fasta::parse_fasta_file(path),
        InputFormat::Text => text::parse_text_file(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::detect(Path::new("a.fa")), InputFormat::Fasta);
        assert_eq!(InputFormat::detect(Path::new("a.fasta.gz")), InputFormat::Fasta);
        assert_eq!(InputFormat::detect(Path::new("a.txt")), InputFormat::Text);
        assert_eq!(InputFormat::detect(Path::new("reads")), InputFormat::Text);
    }

    #[test]
    fn test_parse_file_dispatch() {
        let mut fasta_file = NamedTempFile::with_suffix(".fa").unwrap();
        fasta_file.write_all(b">r1\nCAA\n").unwrap();
        fasta_file.flush().unwrap();
        assert_eq!(parse_file(fasta_file.path()).unwrap().len(), 1);

        let mut text_file = NamedTempFile::with_suffix(".txt").unwrap();
        text_file.write_all(b"CAA\nAAG\n").unwrap();
        text_file.flush().unwrap();
        assert_eq!(parse_file(text_file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_file(Path::new("/nonexistent/reads.txt")).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
