//! Command-line interface for frag-assembler.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **assemble**: Greedily assemble fragments from files and/or the command line
//! - **overlap**: Show the overlap and merge of two sequences
//!
//! ## Usage
//!
//! ```text
//! # Assemble reads from a FASTA file
//! frag-assembler assemble reads.fa
//!
//! # Pipe one fragment per line
//! printf 'CAA\nAAG\n' | frag-assembler assemble -
//!
//! # JSON output with every merge step
//! frag-assembler assemble reads.txt --format json
//!
//! # Inspect a single pair
//! frag-assembler overlap ATTAGACCTG CCTGCCGGAA
//! ```

use clap::{Parser, Subcommand};

pub mod assemble;
pub mod overlap;

#[derive(Parser)]
#[command(name = "frag-assembler")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Greedily assemble overlapping DNA fragments into a superstring")]
#[command(
    long_about = "frag-assembler reconstructs a superstring from short overlapping fragments over the alphabet {A, C, G, T}.\n\nAt each step it merges the pair of fragments with the largest exact suffix/prefix overlap, preferring the shorter result on ties, until a single sequence remains or no pair overlaps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble fragments into a superstring
    Assemble(assemble::AssembleArgs),

    /// Compute the overlap and merge of two sequences
    Overlap(overlap::OverlapArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
