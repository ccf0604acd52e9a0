use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::parsing::pair_file::{read_pair_file, write_pair_file};
use crate::preprocess::relabel::relabel_pair;

#[derive(Args)]
pub struct RelabelArgs {
    /// Genome pair file (genes, regions, genes, regions; optionally .gz)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the relabeled genomes to this file (default: stdout for text output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for the random label assignment (default: random)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute relabel subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, genome 2 repeats a gene
/// more often than genome 1, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RelabelArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pair = read_pair_file(&args.input)?;
    let (relabeled, plan) = relabel_pair(&pair, args.seed)?;

    if verbose {
        if plan.is_empty() {
            eprintln!("Genome 1 has no repeated genes; nothing to relabel");
        }
        for (gene, labels) in plan.iter() {
            let labels: Vec<String> = labels.iter().map(ToString::to_string).collect();
            eprintln!("  {gene} -> {}", labels.join(", "));
        }
    }

    match format {
        OutputFormat::Text => write_pair_file(args.output.as_deref(), &relabeled)?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "first": relabeled.first,
                "second": relabeled.second,
                "plan": plan,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            if let Some(path) = &args.output {
                write_pair_file(Some(path), &relabeled)?;
            }
        }
        OutputFormat::Tsv => {
            println!("gene\tlabels");
            for (gene, labels) in plan.iter() {
                let labels: Vec<String> = labels.iter().map(ToString::to_string).collect();
                println!("{gene}\t{}", labels.join(","));
            }
            if let Some(path) = &args.output {
                write_pair_file(Some(path), &relabeled)?;
            }
        }
    }

    Ok(())
}
