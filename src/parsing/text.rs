//! Parser for plain-text fragment lists.
//!
//! One fragment per line. Surrounding whitespace is trimmed, blank lines and
//! lines starting with `#` are skipped, and symbols are uppercased before
//! validation.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;
use crate::utils::validation::{check_fragment_limit, normalize_symbols};

/// Parse fragments from a text file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`parse_text_reader`].
pub fn parse_text_file(path: &Path) -> Result<Vec<Sequence>, ParseError> {
    let file = std::fs::File::open(path)?;
    parse_text_reader(file)
}

/// Parse fragments from in-memory text
///
/// # Errors
///
/// See [`parse_text_reader`].
pub fn parse_text(content: &str) -> Result<Vec<Sequence>, ParseError> {
    parse_text_reader(content.as_bytes())
}

/// Parse fragments from any reader, one per line
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, `ParseError::InvalidSequence` if a
/// line holds a symbol outside `{A, C, G, T}`, or `ParseError::TooManyFragments`
/// if the limit is exceeded.
pub fn parse_text_reader<R: Read>(reader: R) -> Result<Vec<Sequence>, ParseError> {
    let reader = BufReader::new(reader);
    let mut fragments = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if check_fragment_limit(fragments.len()).is_some() {
            return Err(ParseError::TooManyFragments(fragments.len()));
        }

        let sequence =
            Sequence::new(normalize_symbols(trimmed)).map_err(|e| ParseError::InvalidSequence {
                record: format!("line {}", line_idx + 1),
                source: e,
            })?;
        fragments.push(sequence);
    }

    Ok(fragments)
}
