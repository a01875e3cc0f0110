//! Parser for FASTA files using noodles.
//!
//! Each record becomes one fragment. Supports both uncompressed and
//! gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::warn;

use crate::core::sequence::Sequence;
use crate::parsing::ParseError;
use crate::utils::validation::check_fragment_limit;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse a FASTA file into fragments.
///
/// Record sequences are uppercased before validation, so soft-masked
/// bases are accepted.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, `ParseError::InvalidFormat` if no records are found,
/// `ParseError::InvalidSequence` if a record holds a symbol outside
/// `{A, C, G, T}`, or `ParseError::TooManyFragments` if the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<Sequence>, ParseError> {
    let file = std::fs::File::open(path)?;

    if is_gzipped(path) {
        let reader = BufReader::new(MultiGzDecoder::new(file));
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    } else {
        let reader = BufReader::new(file);
        parse_fasta_reader(&mut fasta::io::Reader::new(reader))
    }
}

/// Parse from a noodles FASTA reader
fn parse_fasta_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<Sequence>, ParseError> {
    let mut fragments = Vec::new();
    let mut records = 0usize;

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;
        records += 1;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let symbols = String::from_utf8_lossy(record.sequence().as_ref()).to_ascii_uppercase();

        if symbols.is_empty() {
            warn!(record = %name, "Skipping FASTA record with empty sequence");
            continue;
        }

        if check_fragment_limit(fragments.len()).is_some() {
            return Err(ParseError::TooManyFragments(fragments.len()));
        }

        let sequence = Sequence::new(symbols).map_err(|e| ParseError::InvalidSequence {
            record: name,
            source: e,
        })?;
        fragments.push(sequence);
    }

    if records == 0 {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(fragments)
}
