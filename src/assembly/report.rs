use serde::Serialize;
use tracing::{debug, info};

use crate::assembly::assembler::{Assembler, AssemblyConfig};
use crate::core::sequence::Sequence;
use crate::core::types::MergeStep;

/// Summary of a complete assembly run
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    /// Number of fragments supplied
    pub input_fragments: usize,

    /// Number of fragments left after assembly
    pub output_fragments: usize,

    /// True if everything collapsed into a single sequence
    pub complete: bool,

    /// Total length of the remaining fragments
    pub total_length: usize,

    /// Length of the longest remaining fragment
    pub longest_fragment: usize,

    /// Merges in the order they were performed
    pub merges: Vec<MergeStep>,

    /// The final working set
    pub fragments: Vec<Sequence>,
}

impl AssemblyReport {
    /// Assemble `fragments` to completion and summarize the outcome
    #[must_use]
    pub fn run(fragments: &[Sequence], config: AssemblyConfig) -> Self {
        debug!(
            fragments = fragments.len(),
            min_overlap = config.effective_min_overlap(),
            "Starting assembly"
        );

        let mut assembler = Assembler::with_config(fragments, config);
        let merges = assembler.assemble_all_with_steps();
        let complete = assembler.is_assembled();
        let remaining = assembler.into_fragments();

        let report = Self {
            input_fragments: fragments.len(),
            output_fragments: remaining.len(),
            complete,
            total_length: remaining.iter().map(Sequence::len).sum(),
            longest_fragment: remaining.iter().map(Sequence::len).max().unwrap_or(0),
            merges,
            fragments: remaining,
        };

        info!(
            merges = report.merges.len(),
            remaining = report.output_fragments,
            "Assembly finished"
        );

        report
    }

    /// The assembled superstring, if assembly collapsed to one sequence
    #[must_use]
    pub fn superstring(&self) -> Option<&Sequence> {
        if self.complete {
            self.fragments.first()
        } else {
            None
        }
    }
}
