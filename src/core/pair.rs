use serde::{Deserialize, Serialize};

use crate::core::genome::{Genome, GenomeError};
use crate::core::types::GeneId;

/// Gene and region sequences of one genome, as read from input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeRecord {
    pub genes: Vec<GeneId>,
    pub regions: Vec<String>,
}

impl GenomeRecord {
    pub fn new(genes: Vec<GeneId>, regions: Vec<String>) -> Self {
        Self { genes, regions }
    }

    /// Interleave into a [`Genome`]
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::Malformed` if gene and region counts differ by more than one.
    pub fn build(&self) -> Result<Genome, GenomeError> {
        Genome::build(&self.genes, &self.regions)
    }
}

impl From<&Genome> for GenomeRecord {
    fn from(genome: &Genome) -> Self {
        let (genes, regions) = genome.decompose();
        Self { genes, regions }
    }
}

/// The two genomes under comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomePair {
    pub first: GenomeRecord,
    pub second: GenomeRecord,
}

impl GenomePair {
    pub fn new(first: GenomeRecord, second: GenomeRecord) -> Self {
        Self { first, second }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_round_trips_through_genome() {
        let record = GenomeRecord::new(vec![3, 1], vec!["x".into(), "y".into(), "z".into()]);
        let genome = record.build().unwrap();
        assert_eq!(GenomeRecord::from(&genome), record);
    }

    #[test]
    fn test_record_build_rejects_malformed() {
        let record = GenomeRecord::new(vec![1, 2, 3, 4], vec!["x".into()]);
        assert!(record.build().is_err());
    }
}
