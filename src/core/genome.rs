use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Element, GeneId, Layout, Subgenome, WINDOW_LEN};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error(
        "Malformed genome: {genes} genes and {regions} regions cannot be interleaved (counts must differ by at most 1)"
    )]
    Malformed { genes: usize, regions: usize },
}

/// An interleaved sequence of genes and intergenic regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    elements: Vec<Element>,
    layout: Layout,
}

impl Genome {
    /// Interleave a gene sequence with a region sequence.
    ///
    /// - equal counts: `gene, region, gene, region, ...`
    /// - one more region: `region, gene, region, ..., region`
    /// - one more gene: `gene, region, ..., region, gene`
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::Malformed` if the counts differ by more than one.
    pub fn build(genes: &[GeneId], regions: &[String]) -> Result<Self, GenomeError> {
        if genes.len().abs_diff(regions.len()) > 1 {
            return Err(GenomeError::Malformed {
                genes: genes.len(),
                regions: regions.len(),
            });
        }

        let layout = Layout::from_counts(genes.len(), regions.len());
        let mut elements = Vec::with_capacity(genes.len() + regions.len());
        let mut genes = genes.iter();
        let mut regions = regions.iter();

        if layout == Layout::RegionFirst {
            if let Some(region) = regions.next() {
                elements.push(Element::Region(region.clone()));
            }
        }

        for &gene in genes.by_ref() {
            elements.push(Element::Gene(gene));
            if let Some(region) = regions.next() {
                elements.push(Element::Region(region.clone()));
            }
        }

        Ok(Self { elements, layout })
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gene identifiers in sequence order
    pub fn genes(&self) -> impl Iterator<Item = GeneId> + '_ {
        self.elements.iter().filter_map(Element::as_gene)
    }

    #[must_use]
    pub fn gene_count(&self) -> usize {
        self.genes().count()
    }

    #[must_use]
    pub fn max_gene(&self) -> Option<GeneId> {
        self.genes().max()
    }

    /// Whether `[start, start + 3)` is a legal subgenome: in bounds and
    /// starting (and therefore ending) on a gene position of this layout.
    #[must_use]
    pub fn is_valid_window(&self, start: usize) -> bool {
        self.window_end(start).is_some() && self.layout.is_gene_index(start)
    }

    /// End of the window at `start`, if it fits inside the genome
    fn window_end(&self, start: usize) -> Option<usize> {
        start
            .checked_add(WINDOW_LEN)
            .filter(|&end| end <= self.elements.len())
    }

    /// The three elements starting at `start`, regardless of validity
    #[must_use]
    pub fn window_at(&self, start: usize) -> Option<Subgenome> {
        self.window_end(start)
            .and_then(|end| self.elements.get(start..end))
            .and_then(Subgenome::from_slice)
    }

    /// All valid windows with their start index, in ascending order
    pub fn valid_windows(&self) -> impl Iterator<Item = (usize, Subgenome)> + '_ {
        (0..self.elements.len().saturating_sub(WINDOW_LEN - 1))
            .filter(|&start| self.is_valid_window(start))
            .filter_map(|start| self.window_at(start).map(|window| (start, window)))
    }

    /// Replace the window at `start` with a single gene.
    ///
    /// The prefix stays in place and the suffix is split off and re-appended,
    /// so the genome shrinks by exactly two elements. Returns `false` and leaves
    /// the genome untouched if the window does not fit.
    pub(crate) fn replace_window(&mut self, start: usize, gene: GeneId) -> bool {
        let Some(end) = self.window_end(start) else {
            return false;
        };

        let suffix = self.elements.split_off(end);
        self.elements.truncate(start);
        self.elements.push(Element::Gene(gene));
        self.elements.extend(suffix);
        true
    }

    /// Whether every element's kind agrees with the layout parity
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.elements
            .iter()
            .enumerate()
            .all(|(index, element)| element.is_gene() == self.layout.is_gene_index(index))
    }

    /// Genes that occur more than once, with their occurrence counts
    #[must_use]
    pub fn duplicate_genes(&self) -> BTreeMap<GeneId, usize> {
        let mut counts: BTreeMap<GeneId, usize> = BTreeMap::new();
        for gene in self.genes() {
            *counts.entry(gene).or_default() += 1;
        }
        counts.retain(|_, count| *count > 1);
        counts
    }

    /// Split the genome back into its gene and region sequences
    #[must_use]
    pub fn decompose(&self) -> (Vec<GeneId>, Vec<String>) {
        let mut genes = Vec::new();
        let mut regions = Vec::new();

        for element in &self.elements {
            match element {
                Element::Gene(id) => genes.push(*id),
                Element::Region(label) => regions.push(label.clone()),
            }
        }

        (genes, regions)
    }
}

impl std::fmt::Display for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{element}")?;
            first = false;
        }
        Ok(())
    }
}
