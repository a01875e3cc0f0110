use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::sequence::Sequence;
use crate::utils::validation::normalize_symbols;

#[derive(Args)]
pub struct OverlapArgs {
    /// Left sequence (its suffix is overlapped)
    pub left: String,

    /// Right sequence (its prefix is overlapped)
    pub right: String,
}

pub fn run(args: OverlapArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let left = Sequence::new(normalize_symbols(&args.left))
        .with_context(|| format!("Invalid left sequence '{}'", args.left))?;
    let right = Sequence::new(normalize_symbols(&args.right))
        .with_context(|| format!("Invalid right sequence '{}'", args.right))?;

    let overlap = left.calculate_overlap(&right);
    let merged = left.merged_with(&right);

    if verbose {
        eprintln!(
            "Left: {} bp, right: {} bp, reverse overlap: {}",
            left.len(),
            right.len(),
            right.calculate_overlap(&left)
        );
    }

    match format {
        OutputFormat::Text => {
            println!("Overlap: {overlap}");
            println!("Merged:  {merged}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "left": left,
                "right": right,
                "overlap": overlap,
                "merged": merged,
                "merged_length": merged.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("left\tright\toverlap\tmerged");
            println!("{left}\t{right}\t{overlap}\t{merged}");
        }
    }

    Ok(())
}
