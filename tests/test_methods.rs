use std::sync::Arc;

use salesman::{
    config::{keys, MethodConfig},
    error::SolverError,
    methods::MethodRegistry,
    problem::Problem,
    rng::RandomNumberGenerator,
    tour::Tour,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn heptagon() -> Arc<Problem> {
    Arc::new(Problem::from_coordinates((0..7).map(|i| {
        let angle = i as f64 * 2.0 * std::f64::consts::PI / 7.0;
        (5.0 * angle.cos(), 5.0 * angle.sin())
    })))
}

fn small_ga() -> MethodConfig {
    MethodConfig::new()
        .with(keys::POPULATION_SIZE, 20)
        .with(keys::ITERATION_COUNT, 15)
}

fn run(name: &str, config: &MethodConfig, seed: u64) -> salesman::Result<Tour> {
    let mut rng = RandomNumberGenerator::from_seed(seed);
    MethodRegistry::standard().run(name, heptagon(), config, &mut rng)
}

#[test]
fn test_no_method_beats_brute_force() {
    init_tracing();
    let optimum = run("brute_force", &MethodConfig::new(), 0).unwrap().goal();
    let config = small_ga().with(keys::ITERATIONS, 200);

    for name in MethodRegistry::standard().names() {
        let tour = run(name, &config, 13).unwrap();
        assert_eq!(tour.len(), 7, "{}", name);
        assert!(tour.goal() >= optimum - 1e-9, "{}", name);
    }
}

#[test]
fn test_malformed_option_is_a_configuration_error() {
    init_tracing();
    let config = MethodConfig::new().with(keys::ITERATIONS, "many");
    assert!(matches!(
        run("hillclimb", &config, 0),
        Err(SolverError::Configuration(_))
    ));

    let config = small_ga().with(keys::CROSSOVER_PROBABILITY, 1.5);
    assert!(matches!(
        run("genetic_algorithm", &config, 0),
        Err(SolverError::Configuration(_))
    ));
}

#[test]
fn test_every_method_rejects_a_single_city() {
    init_tracing();
    let registry = MethodRegistry::standard();
    let lonely = Arc::new(Problem::from_coordinates(vec![(1.0, 1.0)]));

    for name in registry.names() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result = registry.run(name, lonely.clone(), &small_ga(), &mut rng);
        assert!(
            matches!(result, Err(SolverError::DegenerateProblem { cities: 1 })),
            "{}",
            name
        );
    }
}

#[test]
fn test_unknown_operator_names_fall_back() {
    init_tracing();
    let config = small_ga()
        .with(keys::ENCODING, "huffman")
        .with(keys::SELECTION, "lottery_selection")
        .with(keys::CROSSOVER, "crossover_everything")
        .with(keys::MUTATION, "mutation_nothing")
        .with(keys::TERMINATION, "whenever")
        .with(keys::COOLING, "liquid_nitrogen")
        .with(keys::MIGRATION, "swim");

    for name in [
        "genetic_algorithm",
        "genetic_algorithm_island",
        "simulated_annealing",
    ] {
        let tour = run(name, &config.clone().with(keys::ITERATIONS, 100), 4).unwrap();
        assert_eq!(tour.len(), 7, "{}", name);
    }
}

#[test]
fn test_permutation_encoding() {
    init_tracing();
    let config = small_ga()
        .with(keys::ENCODING, "permutation")
        .with(keys::CROSSOVER, "crossover_ordered")
        .with(keys::MUTATION, "mutation_swap")
        .with(keys::SELECTION, "rank_selection");
    let tour = run("genetic_algorithm", &config, 6).unwrap();
    assert!(Tour::new(heptagon(), tour.order().to_vec()).is_ok());
}

#[test]
fn test_island_options() {
    init_tracing();
    let config = small_ga()
        .with(keys::POPULATION_SIZE, 24)
        .with(keys::DEMES, 4)
        .with(keys::MIGRATION_GAP, 2)
        .with(keys::MIGRATION, "ranked")
        .with(keys::CROSSOVER, "crossover_two_point");
    assert!(run("genetic_algorithm_island", &config, 8).is_ok());

    let uneven = config.with(keys::POPULATION_SIZE, 25);
    assert!(matches!(
        run("genetic_algorithm_island", &uneven, 8),
        Err(SolverError::Configuration(_))
    ));
}

#[test]
fn test_population_report_and_other_terminations() {
    init_tracing();
    let reported = small_ga().with(keys::PRINT_POPULATION_STATS, "yes");
    assert!(run("genetic_algorithm", &reported, 2).is_ok());

    let stall = small_ga()
        .with(keys::TERMINATION, "stall")
        .with(keys::STALL_GENERATIONS, 5);
    assert!(run("genetic_algorithm", &stall, 2).is_ok());

    let convergence = small_ga()
        .with(keys::TERMINATION, "convergence")
        .with(keys::MIN_STDDEV, 0.5);
    assert!(run("genetic_algorithm", &convergence, 2).is_ok());
}

#[test]
fn test_geometric_annealing() {
    init_tracing();
    let config = MethodConfig::new()
        .with(keys::COOLING, "geometric")
        .with(keys::TEMPERATURE, 50.0)
        .with(keys::COOLING_RATE, 0.9)
        .with(keys::ITERATIONS, 500);
    let first = run("simulated_annealing", &config, 31).unwrap();
    let second = run("simulated_annealing", &config, 31).unwrap();
    assert_eq!(first, second);

    let frozen = config.with(keys::COOLING_RATE, 2.0);
    assert!(run("simulated_annealing", &frozen, 31).is_err());
}
