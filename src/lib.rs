//! # frag-assembler
//!
//! A library for greedy superstring assembly of short DNA fragments.
//!
//! Given a collection of short overlapping sequences over `{A, C, G, T}`,
//! `frag-assembler` repeatedly merges the two fragments with the largest exact
//! suffix/prefix overlap until a single superstring remains, or until no pair
//! overlaps at all.
//!
//! ## Features
//!
//! - **Validated sequences**: Fragments are checked against the alphabet once, at construction
//! - **Directional overlap**: Largest suffix/prefix match between two fragments
//! - **Greedy assembly**: Largest overlap first, shortest merge on ties, deterministic order
//! - **Step-by-step control**: Single merge steps or run to completion
//! - **FASTA and text input**: Parsers for sourcing fragments from files
//!
//! ## Example
//!
//! ```rust
//! use frag_assembler::{Assembler, Sequence};
//!
//! let left = Sequence::new("CAA").unwrap();
//! let right = Sequence::new("AAG").unwrap();
//! assert_eq!(left.calculate_overlap(&right), 2);
//! assert_eq!(left.merged_with(&right).as_str(), "CAAG");
//!
//! let mut assembler = Assembler::new(&[left, right]);
//! while assembler.assemble_once() {}
//!
//! for fragment in assembler.fragments() {
//!     println!("{fragment}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence value type and merge descriptions
//! - [`assembly`]: Greedy assembler and run reports
//! - [`parsing`]: Parsers for FASTA and plain-text fragment files
//! - [`cli`]: Command-line interface implementation

pub mod assembly;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use assembly::assembler::{Assembler, AssemblyConfig};
pub use assembly::report::AssemblyReport;
pub use core::sequence::{Sequence, SequenceError};
pub use core::types::*;
