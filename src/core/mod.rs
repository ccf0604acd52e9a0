//! Core data types for subgenome folding.
//!
//! - [`Element`]: a gene (integer identifier) or an intergenic region (string label)
//! - [`Genome`]: an interleaved, mutable sequence of elements with a fixed [`Layout`]
//! - [`Subgenome`]: a (gene, region, gene) window compared by value
//! - [`GenomeRecord`], [`GenomePair`]: gene/region sequences as read from input
//!
//! ## Layout
//!
//! The layout of a genome is decided once, from the gene and region counts:
//!
//! | Counts            | Index 0 | Last element |
//! |-------------------|---------|--------------|
//! | genes == regions  | gene    | region       |
//! | genes > regions   | gene    | gene         |
//! | regions > genes   | region  | region       |
//!
//! Every later collapse replaces three elements with one gene at the same index,
//! so the parity of gene positions never changes.
//!
//! [`Element`]: types::Element
//! [`Genome`]: genome::Genome
//! [`Layout`]: types::Layout
//! [`Subgenome`]: types::Subgenome
//! [`GenomeRecord`]: pair::GenomeRecord
//! [`GenomePair`]: pair::GenomePair

pub mod genome;
pub mod pair;
pub mod types;
