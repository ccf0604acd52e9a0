//! # subgenome-fold
//!
//! A library for normalizing two linear genomes by folding the local gene
//! arrangements they share.
//!
//! Each genome is a sequence of genes (integer identifiers) interleaved with
//! intergenic regions (string labels). Whenever a (gene, region, gene) window
//! appears identically in both genomes, it is replaced in both by one new gene
//! whose identifier is larger than any gene seen so far. This repeats until no
//! shared window is left, producing a compressed pair suitable for
//! rearrangement-distance or synteny analysis.
//!
//! ## Features
//!
//! - **Greedy, reproducible matching**: leftmost candidate in genome A, leftmost position in genome B
//! - **Anchor retirement**: a gene anchors at most one collapsed window
//! - **Move history**: every collapsed window with its positions at discovery
//! - **Relabeling**: random unique identifiers for genes repeated within a genome
//!
//! ## Example
//!
//! ```rust
//! use subgenome_fold::{CollapseEngine, parsing::pair_file::parse_pair_text};
//!
//! let pair = parse_pair_text("1 2 3\na b\n1 2 3\na b\n").unwrap();
//! let outcome = CollapseEngine::new().run_pair(&pair).unwrap();
//!
//! assert_eq!(outcome.moves(), 2);
//! assert_eq!(outcome.first.to_string(), "5");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Element, window and genome types
//! - [`matching`]: Window matcher, collapse step and fixpoint engine
//! - [`parsing`]: Four-line genome pair files
//! - [`preprocess`]: Duplicate gene relabeling
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod preprocess;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genome::{Genome, GenomeError};
pub use crate::core::pair::{GenomePair, GenomeRecord};
pub use crate::core::types::*;
pub use crate::matching::collapse::{collapse, CollapseError};
pub use crate::matching::engine::{
    AppliedMove, CollapseEngine, CollapseOutcome, EngineConfig, EngineError,
};
pub use crate::matching::matcher::{find_common_window, WindowMatch};
