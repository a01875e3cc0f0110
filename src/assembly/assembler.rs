use tracing::debug;

use crate::core::sequence::Sequence;
use crate::core::types::{MergeCandidate, MergeStep};

/// Default minimum overlap required for a merge
pub const DEFAULT_MIN_OVERLAP: usize = 1;

/// Configuration for the assembler
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssemblyConfig {
    /// Smallest overlap that allows two fragments to merge.
    /// Values below 1 are treated as 1: fragments never merge without overlap.
    pub min_overlap: usize,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
        }
    }
}

impl AssemblyConfig {
    /// The overlap threshold actually applied
    #[must_use]
    pub fn effective_min_overlap(&self) -> usize {
        self.min_overlap.max(1)
    }
}

/// Greedy maximum-overlap assembler.
///
/// Owns a working set of fragments and repeatedly merges the pair with the
/// largest suffix/prefix overlap until only one fragment is left or no pair
/// overlaps enough to merge.
///
/// The working set is a copy of the caller's fragments and is only changed by
/// the assembler's own merge steps; [`Assembler::fragments`] hands out a
/// read-only view.
#[derive(Debug, Clone)]
pub struct Assembler {
    fragments: Vec<Sequence>,
    config: AssemblyConfig,
}

impl Assembler {
    /// Create an assembler with default configuration
    #[must_use]
    pub fn new(fragments: &[Sequence]) -> Self {
        Self::with_config(fragments, AssemblyConfig::default())
    }

    /// Create an assembler with custom configuration
    #[must_use]
    pub fn with_config(fragments: &[Sequence], config: AssemblyConfig) -> Self {
        Self {
            fragments: fragments.to_vec(),
            config,
        }
    }

    /// The current working set
    #[must_use]
    pub fn fragments(&self) -> &[Sequence] {
        &self.fragments
    }

    /// Consume the assembler, returning the working set
    #[must_use]
    pub fn into_fragments(self) -> Vec<Sequence> {
        self.fragments
    }

    #[must_use]
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// True once the working set has collapsed to a single fragment
    #[must_use]
    pub fn is_assembled(&self) -> bool {
        self.fragments.len() == 1
    }

    /// Find the best pair to merge without changing anything.
    ///
    /// Every ordered pair of distinct positions is scored. The largest overlap
    /// wins; ties go to the pair whose merge is shortest, and remaining ties
    /// to the lowest `(left, right)` positions. Returns `None` if no pair
    /// reaches the configured minimum overlap.
    #[must_use]
    pub fn best_merge(&self) -> Option<MergeCandidate> {
        let mut best: Option<MergeCandidate> = None;

        for (left, left_seq) in self.fragments.iter().enumerate() {
            for (right, right_seq) in self.fragments.iter().enumerate() {
                if left == right {
                    continue;
                }

                let overlap = left_seq.calculate_overlap(right_seq);
                let candidate = MergeCandidate {
                    left,
                    right,
                    overlap,
                    merged_len: left_seq.len() + right_seq.len() - overlap,
                };

                if best
                    .as_ref()
                    .map_or(true, |current| candidate.is_better_than(current))
                {
                    best = Some(candidate);
                }
            }
        }

        best.filter(|c| c.overlap >= self.config.effective_min_overlap())
    }

    /// Perform a single greedy merge, returning what was merged.
    ///
    /// Returns `None`, leaving the working set untouched, when no pair can
    /// merge. Otherwise both operands are removed and the merged fragment is
    /// appended, shrinking the working set by exactly one.
    pub fn assemble_step(&mut self) -> Option<MergeStep> {
        let Some(candidate) = self.best_merge() else {
            debug!(
                fragments = self.fragments.len(),
                "No mergeable pair remains"
            );
            return None;
        };

        let left = self.fragments[candidate.left].clone();
        let right = self.fragments[candidate.right].clone();
        let merged = left.merged_with(&right);
        debug_assert_eq!(merged.len(), candidate.merged_len);

        let mut position = 0;
        self.fragments.retain(|_| {
            let keep = position != candidate.left && position != candidate.right;
            position += 1;
            keep
        });
        self.fragments.push(merged.clone());

        debug!(
            left = candidate.left,
            right = candidate.right,
            overlap = candidate.overlap,
            merged_len = merged.len(),
            remaining = self.fragments.len(),
            "Merged fragments"
        );

        Some(MergeStep {
            left,
            right,
            overlap: candidate.overlap,
            merged,
        })
    }

    /// Perform a single greedy merge. Returns true iff a merge happened.
    pub fn assemble_once(&mut self) -> bool {
        self.assemble_step().is_some()
    }

    /// Merge until one fragment remains or no pair can merge.
    ///
    /// Returns the number of merges performed; calling it again on a
    /// finished assembler performs none.
    pub fn assemble_all(&mut self) -> usize {
        let mut merges = 0;
        while self.fragments.len() > 1 && self.assemble_once() {
            merges += 1;
        }
        merges
    }

    /// Like [`Assembler::assemble_all`], but records every merge
    pub fn assemble_all_with_steps(&mut self) -> Vec<MergeStep> {
        let mut steps = Vec::new();
        while self.fragments.len() > 1 {
            match self.assemble_step() {
                Some(step) => steps.push(step),
                None => break,
            }
        }
        steps
    }
}
