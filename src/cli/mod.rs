//! Command-line interface for subgenome-fold.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **collapse**: Fold every shared gene-region-gene window of two genomes
//! - **relabel**: Give repeated genes unique identifiers before folding
//!
//! ## Usage
//!
//! ```text
//! # Fold a genome pair and print the reduced genomes
//! subgenome-fold collapse pair.txt
//!
//! # Make genes unique first, reproducibly
//! subgenome-fold relabel pair.txt --seed 7 -o unique.txt
//! subgenome-fold collapse unique.txt -o folded.txt
//!
//! # Move history as JSON
//! subgenome-fold collapse pair.txt --format json
//! ```

use clap::{Parser, Subcommand};

pub mod collapse;
pub mod relabel;

#[derive(Parser)]
#[command(name = "subgenome-fold")]
#[command(version)]
#[command(about = "Collapse shared gene-region-gene windows between two genomes")]
#[command(
    long_about = "subgenome-fold compares two genomes given as genes interleaved with intergenic regions.\n\nEvery (gene, region, gene) window found identically in both genomes is replaced by a new gene, repeatedly, until no shared window is left. The reduced genomes are suitable for rearrangement-distance or synteny analysis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fold the shared windows of a genome pair
    Collapse(collapse::CollapseArgs),

    /// Assign unique identifiers to repeated genes
    Relabel(relabel::RelabelArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
