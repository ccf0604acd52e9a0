use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::genome::Genome;
use crate::core::types::{GeneId, Subgenome, WINDOW_LEN};

/// A window found identically in both genomes, with its half-open bounds
/// at the time of discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowMatch {
    pub window: Subgenome,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Valid windows of `genome` not in `consumed_windows`, in order of first
/// appearance. A window value seen again later keeps its first slot but takes
/// the later position.
fn collect_candidates(
    genome: &Genome,
    consumed_windows: &HashSet<Subgenome>,
) -> Vec<(Subgenome, usize)> {
    let mut candidates: Vec<(Subgenome, usize)> = Vec::new();
    let mut slots: HashMap<Subgenome, usize> = HashMap::new();

    for (start, window) in genome.valid_windows() {
        if consumed_windows.contains(&window) {
            continue;
        }
        if let Some(&slot) = slots.get(&window) {
            candidates[slot].1 = start;
        } else {
            slots.insert(window.clone(), candidates.len());
            candidates.push((window, start));
        }
    }

    candidates
}

/// First start index in `genome` whose three elements equal `window`
fn find_in(genome: &Genome, window: &Subgenome) -> Option<usize> {
    genome
        .elements()
        .windows(WINDOW_LEN)
        .position(|slice| slice == window.elements())
}

/// Find at most one window shared by `a` and `b`.
///
/// Candidates from `a` are tried in ascending start order; a candidate whose
/// first or last gene is already in `consumed_genes` is skipped without
/// searching `b`. The first candidate present in `b` wins, and the first
/// position in `b` is used. On success both boundary genes are added to
/// `consumed_genes`.
pub fn find_common_window(
    a: &Genome,
    b: &Genome,
    consumed_windows: &HashSet<Subgenome>,
    consumed_genes: &mut HashSet<GeneId>,
) -> Option<WindowMatch> {
    for (window, a_start) in collect_candidates(a, consumed_windows) {
        let Some((first, last)) = window.boundary_genes() else {
            continue;
        };

        if consumed_genes.contains(&first) || consumed_genes.contains(&last) {
            debug!("Skipping {window}: boundary gene already consumed");
            continue;
        }

        if let Some(b_start) = find_in(b, &window) {
            consumed_genes.insert(first);
            consumed_genes.insert(last);

            return Some(WindowMatch {
                window,
                a_start,
                a_end: a_start + WINDOW_LEN,
                b_start,
                b_end: b_start + WINDOW_LEN,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(genes: &[GeneId], regions: &[&str]) -> Genome {
        let regions: Vec<String> = regions.iter().map(|s| (*s).to_string()).collect();
        Genome::build(genes, &regions).unwrap()
    }

    #[test]
    fn test_no_match_when_regions_differ() {
        let a = genome(&[1, 2, 3], &["a", "b"]);
        let b = genome(&[2, 3, 1], &["c", "a"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes);
        assert!(found.is_none());
        assert!(consumed_genes.is_empty());
    }

    #[test]
    fn test_finds_shared_window() {
        let a = genome(&[5, 7, 9], &["x", "y"]);
        let b = genome(&[7, 9, 4], &["y", "z"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.window.to_string(), "(7, y, 9)");
        assert_eq!((found.a_start, found.a_end), (2, 5));
        assert_eq!((found.b_start, found.b_end), (0, 3));
        assert_eq!(consumed_genes, HashSet::from([7, 9]));
    }

    #[test]
    fn test_first_candidate_in_a_wins() {
        // Both windows of `a` occur in `b`; the leftmost one in `a` is chosen
        // even though the other sits earlier in `b`.
        let a = genome(&[1, 2, 3, 4], &["a", "b", "c"]);
        let b = genome(&[3, 4, 1, 2], &["c", "z", "a"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.window.to_string(), "(1, a, 2)");
        assert_eq!(found.b_start, 4);
    }

    #[test]
    fn test_falls_through_to_later_candidate() {
        let a = genome(&[1, 2, 3], &["a", "b"]);
        let b = genome(&[2, 3], &["b"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.window.to_string(), "(2, b, 3)");
        assert_eq!(found.a_start, 2);
    }

    #[test]
    fn test_consumed_boundary_gene_is_skipped() {
        let a = genome(&[1, 2, 3], &["a", "b"]);
        let b = genome(&[1, 2, 3], &["a", "b"]);
        let mut consumed_genes = HashSet::from([1]);

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.window.to_string(), "(2, b, 3)");

        // Every boundary is now consumed
        assert!(find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).is_none());
    }

    #[test]
    fn test_consumed_window_value_is_excluded() {
        let a = genome(&[1, 2], &["a"]);
        let b = genome(&[1, 2], &["a"]);
        let consumed_windows = HashSet::from([a.window_at(0).unwrap()]);
        let mut consumed_genes = HashSet::new();

        assert!(find_common_window(&a, &b, &consumed_windows, &mut consumed_genes).is_none());
    }

    #[test]
    fn test_repeated_window_takes_last_position() {
        let a = genome(&[1, 2, 1, 2], &["a", "b", "a"]);
        let b = genome(&[1, 2], &["a"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.a_start, 4);
        assert_eq!(found.b_start, 0);
    }

    #[test]
    fn test_region_first_genomes() {
        let a = genome(&[1, 2], &["s", "a", "e"]);
        let b = genome(&[8, 1, 2], &["t", "u", "a", "f"]);
        let mut consumed_genes = HashSet::new();

        let found = find_common_window(&a, &b, &HashSet::new(), &mut consumed_genes).unwrap();
        assert_eq!(found.window.to_string(), "(1, a, 2)");
        assert_eq!(found.a_start, 1);
        assert_eq!(found.b_start, 3);
    }
}
