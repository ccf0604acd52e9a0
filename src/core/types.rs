use serde::{Deserialize, Serialize};

/// Identifier of a gene. Signed so that oriented genes (`-7`) are accepted.
pub type GeneId = i64;

/// Number of elements in a subgenome window
pub const WINDOW_LEN: usize = 3;

/// A single element of an interleaved genome
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    /// Gene with its identifier
    Gene(GeneId),
    /// Intergenic region label
    Region(String),
}

impl Element {
    pub fn region(label: impl Into<String>) -> Self {
        Self::Region(label.into())
    }

    #[must_use]
    pub fn is_gene(&self) -> bool {
        matches!(self, Self::Gene(_))
    }

    #[must_use]
    pub fn as_gene(&self) -> Option<GeneId> {
        match self {
            Self::Gene(id) => Some(*id),
            Self::Region(_) => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gene(id) => write!(f, "{id}"),
            Self::Region(label) => write!(f, "{label}"),
        }
    }
}

impl From<GeneId> for Element {
    fn from(id: GeneId) -> Self {
        Self::Gene(id)
    }
}

impl From<&str> for Element {
    fn from(label: &str) -> Self {
        Self::Region(label.to_string())
    }
}

/// Which element type sits at index 0 of a genome.
///
/// Fixed when the genome is built. A collapse removes three elements and
/// inserts one at the same index, so gene positions keep their parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Genes on even indices (`genes >= regions` at build time)
    GeneFirst,
    /// Genes on odd indices (`regions > genes` at build time)
    RegionFirst,
}

impl Layout {
    /// Layout produced by interleaving `genes` genes with `regions` regions
    #[must_use]
    pub fn from_counts(genes: usize, regions: usize) -> Self {
        if regions > genes {
            Self::RegionFirst
        } else {
            Self::GeneFirst
        }
    }

    /// Whether a gene is expected at `index`
    #[must_use]
    pub fn is_gene_index(self, index: usize) -> bool {
        match self {
            Self::GeneFirst => index % 2 == 0,
            Self::RegionFirst => index % 2 == 1,
        }
    }
}

/// A (gene, region, gene) window. Compared by value, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subgenome(pub [Element; WINDOW_LEN]);

impl Subgenome {
    /// Copy a window out of a slice, if the slice has exactly three elements
    #[must_use]
    pub fn from_slice(slice: &[Element]) -> Option<Self> {
        match slice {
            [first, middle, last] => Some(Self([first.clone(), middle.clone(), last.clone()])),
            _ => None,
        }
    }

    /// First and last genes of the window
    #[must_use]
    pub fn boundary_genes(&self) -> Option<(GeneId, GeneId)> {
        Some((self.0[0].as_gene()?, self.0[WINDOW_LEN - 1].as_gene()?))
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.0
    }
}

impl std::fmt::Display for Subgenome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
