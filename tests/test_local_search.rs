use std::sync::Arc;

use salesman::{
    alternative::Alternative,
    local_search::{
        BruteForce, DeterministicHillClimbing, GeometricCooling, HillClimbing, LocalSearch,
        SimulatedAnnealing, StopReason, TabuSearch, TabuStep, TabuWalk,
    },
    problem::Problem,
    rng::RandomNumberGenerator,
    tour::Tour,
};

fn regular_polygon(n: usize) -> Arc<Problem> {
    Arc::new(Problem::from_coordinates((0..n).map(|i| {
        let angle = i as f64 * 2.0 * std::f64::consts::PI / n as f64;
        (angle.cos(), angle.sin())
    })))
}

fn scattered(n: usize) -> Arc<Problem> {
    Arc::new(Problem::from_coordinates((0..n).map(|i| {
        let i = i as f64;
        ((i * 7.3) % 11.0, (i * 3.1) % 5.0)
    })))
}

/// Minimum over all orders that start at city 0, computed without the solver.
fn exhaustive_minimum(problem: &Arc<Problem>) -> f64 {
    fn extend(problem: &Problem, order: &mut Vec<usize>, used: &mut Vec<bool>, best: &mut f64) {
        let n = problem.len();
        if order.len() == n {
            let goal: f64 = (0..n).map(|i| problem.distance(order[i], order[(i + 1) % n])).sum();
            *best = best.min(goal);
            return;
        }
        for city in 1..n {
            if !used[city] {
                used[city] = true;
                order.push(city);
                extend(problem, order, used, best);
                order.pop();
                used[city] = false;
            }
        }
    }

    let mut best = f64::INFINITY;
    let mut used = vec![false; problem.len()];
    used[0] = true;
    extend(problem, &mut vec![0], &mut used, &mut best);
    best
}

#[test]
fn test_brute_force_finds_the_pentagon() {
    let problem = regular_polygon(5);
    let mut rng = RandomNumberGenerator::from_seed(0);
    let result = BruteForce::new()
        .search(Tour::identity(Arc::clone(&problem)), &mut rng)
        .unwrap();

    let side = 2.0 * (std::f64::consts::PI / 5.0).sin();
    assert!((result.goal - 5.0 * side).abs() < 1e-9);
    assert!((result.goal - exhaustive_minimum(&problem)).abs() < 1e-9);
}

#[test]
fn test_brute_force_matches_exhaustive_minimum() {
    let problem = scattered(7);
    let mut rng = RandomNumberGenerator::from_seed(0);
    let start = Tour::new(Arc::clone(&problem), vec![3, 0, 6, 1, 5, 2, 4]).unwrap();
    let result = BruteForce::new().search(start, &mut rng).unwrap();

    assert_eq!(result.iterations, 5040);
    assert!((result.goal - exhaustive_minimum(&problem)).abs() < 1e-9);
}

#[test]
fn test_deterministic_hill_climbing_is_monotone() {
    let problem = scattered(12);
    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let start = Alternative::of(Arc::clone(&problem), &mut rng);
        let result = DeterministicHillClimbing::new(25)
            .unwrap()
            .search(start, &mut rng)
            .unwrap();

        assert!(result.trajectory.windows(2).all(|w| w[1] < w[0]));
        assert!(result.iterations <= 25);
        assert_eq!(result.trajectory.len(), result.iterations + 1);
        assert_eq!(result.goal, *result.trajectory.last().unwrap());
    }
}

#[test]
fn test_budget_exhaustion_is_reported_distinctly() {
    let problem = scattered(15);
    let mut rng = RandomNumberGenerator::from_seed(2);
    let start = Alternative::of(problem, &mut rng);
    let result = DeterministicHillClimbing::new(1)
        .unwrap()
        .search(start, &mut rng)
        .unwrap();
    // A random tour of 15 scattered cities always has an improving neighbor.
    assert_eq!(result.stop_reason, StopReason::BudgetExhausted);
    assert_eq!(result.iterations, 1);
}

#[test]
fn test_hill_climbing_improves_a_random_start() {
    let problem = scattered(10);
    let mut rng = RandomNumberGenerator::from_seed(33);
    let start = Alternative::of(problem, &mut rng);
    let start_goal = start.goal();
    let result = HillClimbing::new(2000).unwrap().search(start, &mut rng).unwrap();
    assert!(result.goal < start_goal);
}

#[test]
fn test_tabu_current_is_never_repeated_inside_the_list() {
    let problem = scattered(6);
    let mut rng = RandomNumberGenerator::from_seed(14);
    let mut walk = TabuWalk::new(Alternative::of(problem, &mut rng), 8);

    for _ in 0..300 {
        if walk.step() == TabuStep::Stuck {
            break;
        }
        let entries: Vec<&Alternative> = walk.tabu_list().iter().collect();
        assert!(entries.len() <= 8);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn test_tabu_best_is_best_of_trajectory() {
    let problem = scattered(9);
    let mut rng = RandomNumberGenerator::from_seed(4);
    let start = Alternative::of(problem, &mut rng);
    let result = TabuSearch::new(200, 20).unwrap().search(start, &mut rng).unwrap();

    let minimum = result.trajectory.iter().cloned().fold(f64::INFINITY, f64::min);
    assert_eq!(result.goal, minimum);
    assert_eq!(result.best.goal(), result.goal);
}

#[test]
fn test_annealing_is_reproducible_under_a_seed() {
    let problem = scattered(10);
    let run = || {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let start = Alternative::of(Arc::clone(&problem), &mut rng);
        SimulatedAnnealing::new(1000, GeometricCooling::new(5.0, 0.99).unwrap())
            .unwrap()
            .search(start, &mut rng)
            .unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first.best, second.best);
    assert_eq!(first.trajectory, second.trajectory);
}

#[test]
fn test_every_search_rejects_degenerate_problems() {
    let problem = Arc::new(Problem::from_coordinates(vec![(1.0, 1.0)]));
    let mut rng = RandomNumberGenerator::from_seed(0);
    let start = Alternative::of(Arc::clone(&problem), &mut rng);

    assert!(HillClimbing::new(10).unwrap().search(start.clone(), &mut rng).is_err());
    assert!(DeterministicHillClimbing::new(10)
        .unwrap()
        .search(start.clone(), &mut rng)
        .is_err());
    assert!(TabuSearch::new(10, 3).unwrap().search(start.clone(), &mut rng).is_err());
    assert!(SimulatedAnnealing::new(10, GeometricCooling::new(1.0, 0.9).unwrap())
        .unwrap()
        .search(start, &mut rng)
        .is_err());
    assert!(BruteForce::new().search(Tour::identity(problem), &mut rng).is_err());
}
