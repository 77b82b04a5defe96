use std::sync::Arc;

use proptest::prelude::*;
use salesman::{
    alternative::Alternative,
    problem::Problem,
    rng::RandomNumberGenerator,
    tour::Tour,
};

fn scattered(n: usize) -> Arc<Problem> {
    Arc::new(Problem::from_coordinates((0..n).map(|i| {
        let i = i as f64;
        ((i * 7.3) % 11.0, (i * 3.1) % 5.0)
    })))
}

/// Every genome in the mixed radix space, in lexicographic order.
fn all_genomes(n: usize) -> Vec<Vec<usize>> {
    let mut genomes = vec![vec![]];
    for position in 0..n {
        genomes = genomes
            .into_iter()
            .flat_map(|prefix: Vec<usize>| {
                (0..Alternative::bound(n, position)).map(move |gene| {
                    let mut genome = prefix.clone();
                    genome.push(gene);
                    genome
                })
            })
            .collect();
    }
    genomes
}

#[test]
fn test_decode_is_a_bijection_for_small_sizes() {
    for n in 1..=6 {
        let problem = scattered(n);
        let mut seen = std::collections::HashSet::new();
        for genes in all_genomes(n) {
            let tour = Alternative::new(Arc::clone(&problem), genes).unwrap().decode();
            assert!(Tour::new(Arc::clone(&problem), tour.order().to_vec()).is_ok());
            assert!(seen.insert(tour.order().to_vec()));
        }
        assert_eq!(seen.len(), (1..=n).product::<usize>());
    }
}

#[test]
fn test_neighbor_count_matches_problem_size() {
    let mut rng = RandomNumberGenerator::from_seed(5);
    for n in 2..10 {
        let genome = Alternative::of(scattered(n), &mut rng);
        assert_eq!(genome.neighbors().len(), 2 * (n - 1));
    }
}

fn permutation(n: usize) -> impl Strategy<Value = Vec<usize>> {
    Just((0..n).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn goal_is_invariant_under_rotation(order in (3usize..12).prop_flat_map(permutation), shift in 0usize..12) {
        let problem = scattered(order.len());
        let tour = Tour::new(Arc::clone(&problem), order.clone()).unwrap();

        let mut rotated = order.clone();
        rotated.rotate_left(shift % order.len());
        let rotated = Tour::new(problem, rotated).unwrap();

        prop_assert!((tour.goal() - rotated.goal()).abs() < 1e-9);
    }

    #[test]
    fn goal_is_invariant_under_reversal(order in (3usize..12).prop_flat_map(permutation)) {
        let problem = scattered(order.len());
        let tour = Tour::new(Arc::clone(&problem), order.clone()).unwrap();

        let mut reversed = order;
        reversed.reverse();
        let reversed = Tour::new(problem, reversed).unwrap();

        prop_assert!((tour.goal() - reversed.goal()).abs() < 1e-9);
    }

    #[test]
    fn encoding_round_trips(order in (1usize..12).prop_flat_map(permutation)) {
        let tour = Tour::new(scattered(order.len()), order).unwrap();
        prop_assert_eq!(Alternative::from_tour(&tour).decode(), tour);
    }

    #[test]
    fn random_genomes_decode_to_permutations(seed in any::<u64>(), n in 1usize..20) {
        let problem = scattered(n);
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let tour = Alternative::of(Arc::clone(&problem), &mut rng).decode();
        prop_assert!(Tour::new(problem, tour.order().to_vec()).is_ok());
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes() {
    let problem = scattered(4);
    let tour = Tour::new(problem, vec![3, 1, 0, 2]).unwrap();
    let report = tour.report();

    let json = serde_json::to_string(&report).unwrap();
    let back: salesman::tour::TourReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert!(json.contains("\"goal\""));
}
