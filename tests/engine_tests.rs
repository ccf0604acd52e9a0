//! End-to-end folding scenarios and properties of the collapse engine.

use std::collections::HashSet;

use proptest::prelude::*;
use subgenome_fold::{
    find_common_window, CollapseEngine, Element, GeneId, Genome, Layout, Subgenome,
};

fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_no_shared_window_leaves_genomes_unchanged() {
    let outcome = CollapseEngine::new()
        .run(&[1, 2, 3], &labels(&["a", "b"]), &[2, 3, 1], &labels(&["c", "a"]))
        .unwrap();

    assert_eq!(outcome.moves(), 0);
    assert_eq!(outcome.first.decompose(), (vec![1, 2, 3], labels(&["a", "b"])));
    assert_eq!(outcome.second.decompose(), (vec![2, 3, 1], labels(&["c", "a"])));
}

#[test]
fn test_single_window_collapse_retires_boundary_genes() {
    let outcome = CollapseEngine::new()
        .run(&[5, 7, 9], &labels(&["x", "y"]), &[7, 9, 4], &labels(&["y", "z"]))
        .unwrap();

    assert_eq!(outcome.moves(), 1);
    assert_eq!(outcome.first.len(), 3);
    assert_eq!(outcome.second.len(), 3);

    let applied = &outcome.history[0];
    assert_eq!(
        applied.found.window,
        Subgenome([Element::Gene(7), Element::region("y"), Element::Gene(9)])
    );
    assert_eq!((applied.found.a_start, applied.found.a_end), (2, 5));
    assert_eq!((applied.found.b_start, applied.found.b_end), (0, 3));
    assert_eq!(outcome.retired_genes, vec![7, 9]);
}

#[test]
fn test_three_element_genomes_collapse_to_one_gene() {
    let outcome = CollapseEngine::new()
        .run(&[1, 2], &labels(&["a"]), &[1, 2], &labels(&["a"]))
        .unwrap();

    assert_eq!(outcome.moves(), 1);
    assert_eq!(outcome.first.elements(), &[Element::Gene(3)]);
    assert_eq!(outcome.second.elements(), &[Element::Gene(3)]);
}

#[test]
fn test_region_first_genomes_fold() {
    // s 1 a 2 e  vs  t 8 u 1 a 2 f
    let outcome = CollapseEngine::new()
        .run(
            &[1, 2],
            &labels(&["s", "a", "e"]),
            &[8, 1, 2],
            &labels(&["t", "u", "a", "f"]),
        )
        .unwrap();

    assert_eq!(outcome.moves(), 1);
    assert_eq!(outcome.first.to_string(), "s 9 e");
    assert_eq!(outcome.second.to_string(), "t 8 u 9 f");
    assert_eq!(outcome.first.layout(), Layout::RegionFirst);
    assert!(outcome.first.is_consistent());
    assert!(outcome.second.is_consistent());
}

#[test]
fn test_retired_gene_blocks_later_window() {
    // Gene 1 repeats in both genomes. Once (1, a, 2) is folded, gene 1 is
    // retired and the shared window (1, c, 3) is never folded.
    let outcome = CollapseEngine::new()
        .run(
            &[1, 2, 1, 3],
            &labels(&["a", "b", "c"]),
            &[1, 2, 1, 3],
            &labels(&["a", "z", "c"]),
        )
        .unwrap();

    assert_eq!(outcome.moves(), 1);
    assert_eq!(outcome.first.to_string(), "4 b 1 c 3");
    assert_eq!(outcome.second.to_string(), "4 z 1 c 3");
}

#[test]
fn test_history_keeps_positions_at_discovery() {
    // 1 a 2 b 3 c 4  vs  3 c 4 z 1 a 2
    let outcome = CollapseEngine::new()
        .run(
            &[1, 2, 3, 4],
            &labels(&["a", "b", "c"]),
            &[3, 4, 1, 2],
            &labels(&["c", "z", "a"]),
        )
        .unwrap();

    assert_eq!(outcome.moves(), 2);

    let first = &outcome.history[0];
    assert_eq!(first.found.window.to_string(), "(1, a, 2)");
    assert_eq!((first.found.a_start, first.found.b_start), (0, 4));
    assert_eq!(first.new_gene, 5);

    // After the first fold: 5 b 3 c 4  vs  3 c 4 z 5
    let second = &outcome.history[1];
    assert_eq!(second.found.window.to_string(), "(3, c, 4)");
    assert_eq!((second.found.a_start, second.found.b_start), (2, 0));
    assert_eq!(second.new_gene, 6);

    assert_eq!(outcome.first.to_string(), "5 b 6");
    assert_eq!(outcome.second.to_string(), "6 z 5");
}

fn genome_input() -> impl Strategy<Value = (Vec<GeneId>, Vec<String>)> {
    (1usize..10, 0usize..3).prop_flat_map(|(genes, shape)| {
        let ids: Vec<GeneId> = (1..=genes as GeneId).collect();
        let region_count = genes - 1 + shape;
        let regions = proptest::collection::vec(
            prop_oneof![Just("a".to_string()), Just("b".to_string())],
            region_count,
        );
        (Just(ids).prop_shuffle(), regions)
    })
}

proptest! {
    #[test]
    fn decompose_inverts_build((genes, regions) in genome_input()) {
        let genome = Genome::build(&genes, &regions).unwrap();
        prop_assert!(genome.is_consistent());
        prop_assert_eq!(genome.decompose(), (genes, regions));
    }

    #[test]
    fn fold_preserves_layout_and_bounds_moves(
        (genes1, regions1) in genome_input(),
        (genes2, regions2) in genome_input(),
    ) {
        let outcome = CollapseEngine::new()
            .run(&genes1, &regions1, &genes2, &regions2)
            .unwrap();
        let moves = outcome.moves();

        prop_assert_eq!(outcome.first.layout(), Layout::from_counts(genes1.len(), regions1.len()));
        prop_assert_eq!(outcome.second.layout(), Layout::from_counts(genes2.len(), regions2.len()));
        prop_assert!(outcome.first.is_consistent());
        prop_assert!(outcome.second.is_consistent());

        prop_assert_eq!(outcome.first.len(), genes1.len() + regions1.len() - 2 * moves);
        prop_assert_eq!(outcome.second.len(), genes2.len() + regions2.len() - 2 * moves);
        prop_assert!(moves <= genes1.len().min(genes2.len()).saturating_sub(1));
    }

    #[test]
    fn boundary_genes_are_never_reused(
        (genes1, regions1) in genome_input(),
        (genes2, regions2) in genome_input(),
    ) {
        let outcome = CollapseEngine::new()
            .run(&genes1, &regions1, &genes2, &regions2)
            .unwrap();

        let mut seen = HashSet::new();
        let mut previous_new_gene = genes1.iter().chain(&genes2).copied().max().unwrap_or_default();
        for applied in &outcome.history {
            let (first, last) = applied.found.window.boundary_genes().unwrap();
            prop_assert!(seen.insert(first), "gene {} anchored twice", first);
            prop_assert!(seen.insert(last), "gene {} anchored twice", last);
            prop_assert!(applied.new_gene > previous_new_gene);
            previous_new_gene = applied.new_gene;
        }
        prop_assert_eq!(seen.len(), outcome.retired_genes.len());
    }

    #[test]
    fn folded_genomes_share_no_window(
        (genes1, regions1) in genome_input(),
        (genes2, regions2) in genome_input(),
    ) {
        let outcome = CollapseEngine::new()
            .run(&genes1, &regions1, &genes2, &regions2)
            .unwrap();

        let mut consumed_genes = HashSet::new();
        let found = find_common_window(
            &outcome.first,
            &outcome.second,
            &HashSet::new(),
            &mut consumed_genes,
        );
        prop_assert!(found.is_none());
    }
}
