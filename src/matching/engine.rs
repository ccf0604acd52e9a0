use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::genome::{Genome, GenomeError};
use crate::core::pair::GenomePair;
use crate::core::types::{GeneId, Subgenome};
use crate::matching::collapse::{collapse, CollapseError};
use crate::matching::matcher::{find_common_window, WindowMatch};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Genome {index}: {source}")]
    Genome {
        index: usize,
        #[source]
        source: GenomeError,
    },

    #[error(transparent)]
    Collapse(#[from] CollapseError),

    #[error("Move limit of {0} reached before the genomes stopped changing")]
    MoveLimitExceeded(usize),
}

/// Configuration for the collapse engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Upper bound on applied moves. The loop always terminates on its own;
    /// this is a ceiling for hosts that want one.
    pub max_moves: Option<usize>,
}

/// One applied move: the shared window and the gene that replaced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedMove {
    #[serde(flatten)]
    pub found: WindowMatch,
    pub new_gene: GeneId,
}

/// Final state of a run
#[derive(Debug, Clone, Serialize)]
pub struct CollapseOutcome {
    pub first: Genome,
    pub second: Genome,
    /// Every collapsed window in discovery order, with positions at discovery
    pub history: Vec<AppliedMove>,
    /// Genes that anchored a collapsed window, ascending
    pub retired_genes: Vec<GeneId>,
}

impl CollapseOutcome {
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }
}

/// Repeatedly finds and collapses windows shared by two genomes until none is left
#[derive(Debug, Clone, Default)]
pub struct CollapseEngine {
    config: EngineConfig,
}

impl CollapseEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Build both genomes and fold them to a fixpoint.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Genome` if either input cannot be interleaved,
    /// `EngineError::Collapse` if a collapse finds inconsistent data, or
    /// `EngineError::MoveLimitExceeded` if a configured ceiling is hit.
    pub fn run(
        &self,
        genes1: &[GeneId],
        regions1: &[String],
        genes2: &[GeneId],
        regions2: &[String],
    ) -> Result<CollapseOutcome, EngineError> {
        let first = Genome::build(genes1, regions1)
            .map_err(|source| EngineError::Genome { index: 1, source })?;
        let second = Genome::build(genes2, regions2)
            .map_err(|source| EngineError::Genome { index: 2, source })?;

        self.run_genomes(first, second)
    }

    /// [`run`](Self::run) on a parsed input pair
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_pair(&self, pair: &GenomePair) -> Result<CollapseOutcome, EngineError> {
        self.run(
            &pair.first.genes,
            &pair.first.regions,
            &pair.second.genes,
            &pair.second.regions,
        )
    }

    /// Fold two already-built genomes to a fixpoint
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_genomes(
        &self,
        mut first: Genome,
        mut second: Genome,
    ) -> Result<CollapseOutcome, EngineError> {
        for (index, genome) in [(1, &first), (2, &second)] {
            let duplicates = genome.duplicate_genes();
            if !duplicates.is_empty() {
                warn!(
                    "Genome {index} repeats {} gene identifier(s); consider relabeling first",
                    duplicates.len()
                );
            }
        }

        let mut consumed_windows: HashSet<Subgenome> = HashSet::new();
        let mut consumed_genes: HashSet<GeneId> = HashSet::new();
        let mut history = Vec::new();

        while let Some(found) =
            find_common_window(&first, &second, &consumed_windows, &mut consumed_genes)
        {
            if let Some(limit) = self.config.max_moves {
                if history.len() >= limit {
                    return Err(EngineError::MoveLimitExceeded(limit));
                }
            }

            let new_gene = collapse(
                &mut first,
                &mut second,
                found.a_start,
                found.b_start,
                &found.window,
            )?;

            debug!(
                "Move {}: collapsed {} at A[{}..{}) and B[{}..{}) into gene {new_gene}",
                history.len() + 1,
                found.window,
                found.a_start,
                found.a_end,
                found.b_start,
                found.b_end,
            );

            consumed_windows.insert(found.window.clone());
            history.push(AppliedMove { found, new_gene });
        }

        info!(
            "No further common subgenome after {} move(s); {} and {} genes remain",
            history.len(),
            first.gene_count(),
            second.gene_count()
        );

        let mut retired_genes: Vec<GeneId> = consumed_genes.into_iter().collect();
        retired_genes.sort_unstable();

        Ok(CollapseOutcome {
            first,
            second,
            history,
            retired_genes,
        })
    }
}
