use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::assembly::assembler::{AssemblyConfig, DEFAULT_MIN_OVERLAP};
use crate::assembly::report::AssemblyReport;
use crate::cli::OutputFormat;
use crate::core::sequence::Sequence;
use crate::parsing::{self, InputFormat};
use crate::utils::validation::{normalize_symbols, MAX_FRAGMENTS};

#[derive(Args)]
pub struct AssembleArgs {
    /// Input files (FASTA or one fragment per line)
    /// Use '-' for stdin (one fragment per line)
    pub inputs: Vec<PathBuf>,

    /// Additional fragment given directly (repeatable)
    #[arg(short = 's', long = "sequence")]
    pub sequences: Vec<String>,

    /// Input format (auto-detected from extension by default)
    #[arg(long)]
    pub input_format: Option<InputFormat>,

    /// Minimum overlap required to merge two fragments
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_OVERLAP)]
    pub min_overlap: usize,

    /// Print every merge step (text output)
    #[arg(long)]
    pub show_steps: bool,
}

pub fn run(args: AssembleArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let fragments = collect_fragments(&args)?;

    if fragments.is_empty() {
        anyhow::bail!("No fragments provided: pass input files, '-' for stdin, or --sequence");
    }

    if verbose {
        eprintln!("Loaded {} fragments", fragments.len());
    }

    let config = AssemblyConfig {
        min_overlap: args.min_overlap,
    };
    let report = AssemblyReport::run(&fragments, config);

    match format {
        OutputFormat::Text => print_text_report(&report, args.show_steps),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

/// Gather fragments from every input file, then from `--sequence` values
fn collect_fragments(args: &AssembleArgs) -> anyhow::Result<Vec<Sequence>> {
    let mut fragments = Vec::new();

    for input in &args.inputs {
        fragments.extend(read_input(input, args.input_format)?);
    }

    for raw in &args.sequences {
        let sequence = Sequence::new(normalize_symbols(raw))
            .with_context(|| format!("Invalid --sequence value '{raw}'"))?;
        fragments.push(sequence);
    }

    if fragments.len() > MAX_FRAGMENTS {
        anyhow::bail!(
            "Too many fragments: {} exceeds maximum allowed ({MAX_FRAGMENTS})",
            fragments.len()
        );
    }

    Ok(fragments)
}

fn read_input(path: &Path, format: Option<InputFormat>) -> anyhow::Result<Vec<Sequence>> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return parsing::parse_text(&content).context("Failed to parse stdin");
    }

    let fragments = match format {
        Some(format) => parsing::parse_file_as(path, format),
        None => parsing::parse_file(path),
    };

    fragments.with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_text_report(report: &AssemblyReport, show_steps: bool) {
    if show_steps {
        for (i, step) in report.merges.iter().enumerate() {
            println!(
                "Step {}: {} + {} (overlap {}) -> {}",
                i + 1,
                step.left,
                step.right,
                step.overlap,
                step.merged
            );
        }
        println!();
    }

    if let Some(superstring) = report.superstring() {
        println!("{superstring}");
        return;
    }

    println!(
        "Assembly incomplete: {} fragments remain after {} merges",
        report.output_fragments,
        report.merges.len()
    );
    for fragment in &report.fragments {
        println!("{fragment}");
    }
}

fn print_tsv_report(report: &AssemblyReport) {
    println!("index\tlength\tsequence");
    for (i, fragment) in report.fragments.iter().enumerate() {
        println!("{}\t{}\t{}", i + 1, fragment.len(), fragment);
    }
}
