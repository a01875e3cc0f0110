//! Greedy maximum-overlap assembly.
//!
//! - [`Assembler`]: Owns a working set of fragments and merges them pairwise
//! - [`AssemblyConfig`]: Tunable merge threshold
//! - [`AssemblyReport`]: Summary of a run to completion
//!
//! ## Algorithm
//!
//! Each step scores every ordered pair of distinct fragments by the overlap
//! between the left fragment's suffix and the right fragment's prefix:
//!
//! 1. **Largest overlap** wins
//! 2. **Shortest merge** breaks overlap ties
//! 3. **Lowest positions** `(left, right)` break any remaining tie
//!
//! The winning pair is replaced by its merge. Steps repeat until one fragment
//! is left or no pair overlaps by at least the configured minimum. Fragments
//! that overlap nothing are left in place, so callers must be ready for more
//! than one fragment at the end.
//!
//! ## Example
//!
//! ```rust
//! use frag_assembler::{Assembler, Sequence};
//!
//! let fragments: Vec<Sequence> = ["ATTAGACCTG", "CCTGCCGGAA"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let mut assembler = Assembler::new(&fragments);
//! assembler.assemble_all();
//!
//! assert_eq!(assembler.fragments().len(), 1);
//! assert_eq!(assembler.fragments()[0].as_str(), "ATTAGACCTGCCGGAA");
//! ```
//!
//! [`Assembler`]: assembler::Assembler
//! [`AssemblyConfig`]: assembler::AssemblyConfig
//! [`AssemblyReport`]: report::AssemblyReport

pub mod assembler;
pub mod report;
