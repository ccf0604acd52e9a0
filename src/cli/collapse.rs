use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::pair::{GenomePair, GenomeRecord};
use crate::matching::engine::{CollapseEngine, CollapseOutcome, EngineConfig};
use crate::parsing::pair_file::{read_pair_file, write_pair_file};

#[derive(Args)]
pub struct CollapseArgs {
    /// Genome pair file (genes, regions, genes, regions; optionally .gz)
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the folded genomes to this file (default: stdout for text output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail if more than this many moves would be applied
    #[arg(long)]
    pub max_moves: Option<usize>,
}

/// Execute collapse subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, the genomes are malformed,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CollapseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pair = read_pair_file(&args.input)?;

    if verbose {
        eprintln!(
            "Genome 1: {} genes, {} regions",
            pair.first.genes.len(),
            pair.first.regions.len()
        );
        eprintln!(
            "Genome 2: {} genes, {} regions",
            pair.second.genes.len(),
            pair.second.regions.len()
        );
    }

    let engine = CollapseEngine::with_config(EngineConfig {
        max_moves: args.max_moves,
    });
    let outcome = engine.run_pair(&pair)?;
    let folded = folded_pair(&outcome);

    if verbose {
        print_summary(&outcome);
    }

    match format {
        OutputFormat::Text => write_pair_file(args.output.as_deref(), &folded)?,
        OutputFormat::Json => {
            print_json_outcome(&outcome, &folded)?;
            if let Some(path) = &args.output {
                write_pair_file(Some(path), &folded)?;
            }
        }
        OutputFormat::Tsv => {
            print_tsv_history(&outcome);
            if let Some(path) = &args.output {
                write_pair_file(Some(path), &folded)?;
            }
        }
    }

    Ok(())
}

fn folded_pair(outcome: &CollapseOutcome) -> GenomePair {
    GenomePair::new(
        GenomeRecord::from(&outcome.first),
        GenomeRecord::from(&outcome.second),
    )
}

fn print_summary(outcome: &CollapseOutcome) {
    eprintln!("Moves: {}", outcome.moves());
    for (i, applied) in outcome.history.iter().enumerate() {
        let found = &applied.found;
        eprintln!(
            "  {}. {} A[{}..{}) B[{}..{}) -> {}",
            i + 1,
            found.window,
            found.a_start,
            found.a_end,
            found.b_start,
            found.b_end,
            applied.new_gene
        );
    }
}

fn print_json_outcome(outcome: &CollapseOutcome, folded: &GenomePair) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "moves": outcome.moves(),
        "first": folded.first,
        "second": folded.second,
        "history": outcome.history,
        "retired_genes": outcome.retired_genes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_history(outcome: &CollapseOutcome) {
    println!("move\twindow\ta_start\ta_end\tb_start\tb_end\tnew_gene");
    for (i, applied) in outcome.history.iter().enumerate() {
        let found = &applied.found;
        let window: Vec<String> = found.window.elements().iter().map(ToString::to_string).collect();
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            window.join(","),
            found.a_start,
            found.a_end,
            found.b_start,
            found.b_end,
            applied.new_gene
        );
    }
}
