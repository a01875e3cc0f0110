use serde::Serialize;

use crate::core::sequence::Sequence;

/// A candidate merge of two positions in an assembler's working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MergeCandidate {
    /// Position of the left operand (its suffix is overlapped)
    pub left: usize,

    /// Position of the right operand (its prefix is overlapped)
    pub right: usize,

    /// Overlap between left suffix and right prefix
    pub overlap: usize,

    /// Length of the sequence the merge would produce
    pub merged_len: usize,
}

impl MergeCandidate {
    /// Whether this candidate should replace `current` as the best merge.
    ///
    /// Larger overlap wins. Equal overlaps prefer the shorter merge result.
    /// Anything still tied keeps `current`, so the first pair seen in
    /// row-major order is retained.
    #[must_use]
    pub fn is_better_than(&self, current: &MergeCandidate) -> bool {
        self.overlap > current.overlap
            || (self.overlap == current.overlap && self.merged_len < current.merged_len)
    }
}

/// Record of a merge performed by the assembler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStep {
    /// Left operand as it was in the working set
    pub left: Sequence,

    /// Right operand as it was in the working set
    pub right: Sequence,

    /// Overlap used for the merge
    pub overlap: usize,

    /// The sequence appended to the working set
    pub merged: Sequence,
}
