use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::pair::{GenomePair, GenomeRecord};
use crate::core::types::GeneId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelabelError {
    #[error("Gene {gene} occurs more than the {available} times planned for it")]
    Exhausted { gene: GeneId, available: usize },

    #[error("No gene identifier left above {0}")]
    GeneIdOverflow(GeneId),
}

/// Labels reserved for each repeated gene.
///
/// A gene seen `n` times owns `n` labels: `n - 1` fresh identifiers plus the
/// original one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelabelPlan {
    labels: BTreeMap<GeneId, Vec<GeneId>>,
}

impl RelabelPlan {
    /// Plan from the repeats in `genes`, with fresh identifiers above `max(genes)`
    ///
    /// # Errors
    ///
    /// Returns `RelabelError::GeneIdOverflow` if fresh identifiers would pass `i64::MAX`.
    pub fn from_genes(genes: &[GeneId]) -> Result<Self, RelabelError> {
        let start_after = genes.iter().copied().max().unwrap_or_default();
        Self::build(genes, start_after)
    }

    /// Plan from the repeats in the first genome, with fresh identifiers above
    /// every gene of both genomes so that neither gains a new collision
    ///
    /// # Errors
    ///
    /// Returns `RelabelError::GeneIdOverflow` if fresh identifiers would pass `i64::MAX`.
    pub fn for_pair(pair: &GenomePair) -> Result<Self, RelabelError> {
        let start_after = pair
            .first
            .genes
            .iter()
            .chain(&pair.second.genes)
            .copied()
            .max()
            .unwrap_or_default();
        Self::build(&pair.first.genes, start_after)
    }

    fn build(genes: &[GeneId], start_after: GeneId) -> Result<Self, RelabelError> {
        let mut counts: BTreeMap<GeneId, usize> = BTreeMap::new();
        for &gene in genes {
            *counts.entry(gene).or_default() += 1;
        }

        let mut labels = BTreeMap::new();
        let mut current_max = start_after;

        for (gene, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
            let mut owned = Vec::with_capacity(count);
            for _ in 1..count {
                current_max = current_max
                    .checked_add(1)
                    .ok_or(RelabelError::GeneIdOverflow(current_max))?;
                owned.push(current_max);
            }
            owned.push(gene);
            labels.insert(gene, owned);
        }

        Ok(Self { labels })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels owned by `gene`, if it is repeated
    #[must_use]
    pub fn labels_for(&self, gene: GeneId) -> Option<&[GeneId]> {
        self.labels.get(&gene).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeneId, &[GeneId])> {
        self.labels.iter().map(|(gene, owned)| (*gene, owned.as_slice()))
    }
}

/// Applies a [`RelabelPlan`] with random label order
pub struct Relabeler {
    plan: RelabelPlan,
    rng: StdRng,
}

impl Relabeler {
    /// Create a relabeler; a seed makes the assignment reproducible
    #[must_use]
    pub fn new(plan: RelabelPlan, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { plan, rng }
    }

    #[must_use]
    pub fn plan(&self) -> &RelabelPlan {
        &self.plan
    }

    /// Give each occurrence of a planned gene its own label.
    ///
    /// Labels are shuffled afresh on every call, then handed out to the
    /// gene's occurrences from left to right. Unplanned genes pass through.
    ///
    /// # Errors
    ///
    /// Returns `RelabelError::Exhausted` if a planned gene occurs more often
    /// than it has labels.
    pub fn apply(&mut self, genes: &[GeneId]) -> Result<Vec<GeneId>, RelabelError> {
        let mut shuffled: HashMap<GeneId, Vec<GeneId>> = HashMap::new();
        for (gene, owned) in self.plan.iter() {
            let mut owned = owned.to_vec();
            owned.shuffle(&mut self.rng);
            shuffled.insert(gene, owned);
        }

        let mut used: HashMap<GeneId, usize> = HashMap::new();
        let mut relabeled = Vec::with_capacity(genes.len());

        for &gene in genes {
            let Some(owned) = shuffled.get(&gene) else {
                relabeled.push(gene);
                continue;
            };

            let next = used.entry(gene).or_default();
            let label = owned.get(*next).copied().ok_or(RelabelError::Exhausted {
                gene,
                available: owned.len(),
            })?;
            *next += 1;
            relabeled.push(label);
        }

        Ok(relabeled)
    }
}

/// Relabel the repeats of the first genome in both genomes of `pair`.
///
/// Regions are left untouched.
///
/// # Errors
///
/// See [`RelabelPlan::for_pair`] and [`Relabeler::apply`].
pub fn relabel_pair(
    pair: &GenomePair,
    seed: Option<u64>,
) -> Result<(GenomePair, RelabelPlan), RelabelError> {
    let plan = RelabelPlan::for_pair(pair)?;
    debug!("Relabel plan covers {} repeated gene(s)", plan.labels.len());

    let mut relabeler = Relabeler::new(plan, seed);
    let first = GenomeRecord::new(relabeler.apply(&pair.first.genes)?, pair.first.regions.clone());
    let second = GenomeRecord::new(
        relabeler.apply(&pair.second.genes)?,
        pair.second.regions.clone(),
    );

    Ok((GenomePair::new(first, second), relabeler.plan))
}
