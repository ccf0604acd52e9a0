use thiserror::Error;

use crate::core::genome::Genome;
use crate::core::types::{GeneId, Subgenome};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollapseError {
    #[error(
        "Data inconsistency: window {expected} not found at genome A position {a_start} and genome B position {b_start}"
    )]
    DataInconsistency {
        expected: Subgenome,
        a_start: usize,
        b_start: usize,
    },

    #[error("Window at position {start} runs past the end of a genome of length {len}")]
    WindowOutOfBounds { start: usize, len: usize },

    #[error("No gene identifier left above {0}")]
    GeneIdOverflow(GeneId),
}

fn check_bounds(genome: &Genome, start: usize) -> Result<Subgenome, CollapseError> {
    genome
        .window_at(start)
        .ok_or(CollapseError::WindowOutOfBounds {
            start,
            len: genome.len(),
        })
}

/// Replace a shared window with a fresh gene in both genomes.
///
/// The new identifier is one more than the largest gene currently in either
/// genome. Both start positions must have been captured before either genome
/// is modified. Returns the new identifier.
///
/// # Errors
///
/// Returns `CollapseError::WindowOutOfBounds` if a start index leaves fewer
/// than three elements, `CollapseError::DataInconsistency` if the two slices
/// differ from each other or from `window`, or `CollapseError::GeneIdOverflow`
/// if the largest gene is `i64::MAX`. Neither genome is changed on error.
pub fn collapse(
    a: &mut Genome,
    b: &mut Genome,
    a_start: usize,
    b_start: usize,
    window: &Subgenome,
) -> Result<GeneId, CollapseError> {
    let in_a = check_bounds(a, a_start)?;
    let in_b = check_bounds(b, b_start)?;

    if in_a != in_b || &in_a != window {
        return Err(CollapseError::DataInconsistency {
            expected: window.clone(),
            a_start,
            b_start,
        });
    }

    // Both slices hold `window`, which has genes, so neither max is empty.
    let current_max = a.max_gene().max(b.max_gene()).unwrap_or_default();
    let next_id = current_max
        .checked_add(1)
        .ok_or(CollapseError::GeneIdOverflow(current_max))?;

    a.replace_window(a_start, next_id);
    b.replace_window(b_start, next_id);

    debug_assert!(a.is_consistent() && b.is_consistent());
    Ok(next_id)
}
