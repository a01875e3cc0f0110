//! Core data types for fragment assembly.
//!
//! - [`Sequence`]: An immutable nucleotide string validated against `{A, C, G, T}`,
//!   with directional suffix/prefix overlap and merge operations
//! - [`MergeCandidate`], [`MergeStep`]: Descriptions of a proposed and a
//!   performed merge between two fragments
//!
//! ## Overlap Direction
//!
//! Overlap is always measured from the end of the left sequence to the start
//! of the right one:
//!
//! | Left  | Right | Overlap | Merged  |
//! |-------|-------|---------|---------|
//! | `CAA` | `AAG` | 2       | `CAAG`  |
//! | `AAG` | `CAA` | 0       | `AAGCAA`|
//!
//! [`Sequence`]: sequence::Sequence
//! [`MergeCandidate`]: types::MergeCandidate
//! [`MergeStep`]: types::MergeStep

pub mod sequence;
pub mod types;
