//! # Methods
//!
//! The solver methods callers pick by name. Each one takes a shared problem, a flat
//! configuration and a random number generator, and returns a tour.
//!
//! | method | options read |
//! |---|---|
//! | `brute_force` | none |
//! | `hillclimb` | `iterations` |
//! | `hillclimb_deterministic` | `iterations` |
//! | `tabu_search` | `iterations`, `tabu_size` |
//! | `simulated_annealing` | `iterations`, `cooling`, `temperature`, `cooling_rate` |
//! | `genetic_algorithm` | `encoding`, `population_size`, `crossover_probability`, `mutation_probability`, `selection`, `tournament_size`, `crossover`, `mutation`, `termination`, `iteration_count`, `stall_generations`, `min_stddev`, `print_population_stats`, `fitness_scale`, `parallel_threshold` |
//! | `genetic_algorithm_island` | everything `genetic_algorithm` reads, plus `demes`, `migration_gap`, `migration` |
//!
//! ```rust
//! use std::sync::Arc;
//! use salesman::config::MethodConfig;
//! use salesman::methods::MethodRegistry;
//! use salesman::problem::Problem;
//! use salesman::rng::RandomNumberGenerator;
//!
//! let problem = Arc::new(Problem::from_coordinates(vec![
//!     (0.0, 0.0),
//!     (0.0, 1.0),
//!     (1.0, 1.0),
//!     (1.0, 0.0),
//! ]));
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let tour = MethodRegistry::standard()
//!     .run("brute_force", problem, &MethodConfig::new(), &mut rng)
//!     .unwrap();
//! assert_eq!(tour.goal(), 4.0);
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::alternative::Alternative;
use crate::config::{keys, MethodConfig};
use crate::error::{Result, SolverError};
use crate::evolution::{
    EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions, InverseGoal, IslandLauncher,
    IslandOptions,
};
use crate::local_search::{
    BruteForce, DeterministicHillClimbing, HillClimbing, LocalSearch, SimulatedAnnealing,
    TabuSearch,
};
use crate::problem::Problem;
use crate::registry::{self, Breedable};
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

pub type MethodFn = fn(Arc<Problem>, &MethodConfig, &mut RandomNumberGenerator) -> Result<Tour>;

/// Method name to solver function.
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    methods: BTreeMap<String, MethodFn>,
}

impl MethodRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in method.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("brute_force", brute_force);
        registry.register("hillclimb", hillclimb);
        registry.register("hillclimb_deterministic", hillclimb_deterministic);
        registry.register("tabu_search", tabu_search);
        registry.register("simulated_annealing", simulated_annealing);
        registry.register("genetic_algorithm", genetic_algorithm);
        registry.register("genetic_algorithm_island", genetic_algorithm_island);
        registry
    }

    /// Adds `method` under `name`, replacing any method registered under it before.
    pub fn register<N: Into<String>>(&mut self, name: N, method: MethodFn) {
        self.methods.insert(name.into(), method);
    }

    pub fn names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Runs the method registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UnknownMethod`] for a name that is not registered, and
    /// otherwise whatever the method itself fails with.
    pub fn run(
        &self,
        name: &str,
        problem: Arc<Problem>,
        config: &MethodConfig,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Tour> {
        let method = self.methods.get(name).ok_or_else(|| SolverError::UnknownMethod {
            name: name.to_string(),
            available: self.names().join(", "),
        })?;

        let tour = method(problem, config, rng)?;
        info!(method = name, goal = tour.goal(), "method finished");
        Ok(tour)
    }
}

fn iterations(config: &MethodConfig) -> Result<usize> {
    config.parse_or(keys::ITERATIONS, keys::DEFAULT_ITERATIONS)
}

/// Exhaustive search from the identity tour.
pub fn brute_force(
    problem: Arc<Problem>,
    _config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let result = BruteForce::new().search(Tour::identity(problem), rng)?;
    Ok(result.best)
}

pub fn hillclimb(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let search = HillClimbing::new(iterations(config)?)?;
    let start = Alternative::of(problem, rng);
    Ok(search.search(start, rng)?.best.decode())
}

pub fn hillclimb_deterministic(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let search = DeterministicHillClimbing::new(iterations(config)?)?;
    let start = Alternative::of(problem, rng);
    Ok(search.search(start, rng)?.best.decode())
}

pub fn tabu_search(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let search = TabuSearch::new(
        iterations(config)?,
        config.parse_or(keys::TABU_SIZE, keys::DEFAULT_TABU_SIZE)?,
    )?;
    let start = Alternative::of(problem, rng);
    Ok(search.search(start, rng)?.best.decode())
}

pub fn simulated_annealing(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let search = SimulatedAnnealing::with_boxed_schedule(
        iterations(config)?,
        registry::cooling_from_config(config)?,
    )?;
    let start = Alternative::of(problem, rng);
    Ok(search.search(start, rng)?.best.decode())
}

fn launcher_from_config<S: Breedable>(config: &MethodConfig) -> Result<EvolutionLauncher<S>> {
    EvolutionLauncherBuilder::<S>::new()
        .with_fitness(InverseGoal::new(
            config.parse_or(keys::FITNESS_SCALE, keys::DEFAULT_FITNESS_SCALE)?,
        )?)
        .with_selection(registry::selection_from_config(config)?)
        .with_crossover(registry::crossover_from_config::<S>(config)?)
        .with_mutation(registry::mutation_from_config::<S>(config)?)
        .with_options(EvolutionOptions::from_config(config)?)
        .build()
}

fn evolve<S: Breedable>(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    problem.ensure_routable()?;
    let launcher = launcher_from_config::<S>(config)?;
    let mut termination = registry::termination_from_config::<S>(config)?;

    let population = launcher.random_population(&problem, rng);
    let result = launcher.evolve(population, termination.as_mut(), rng)?;
    Ok(result.best.to_tour())
}

fn evolve_islands<S: Breedable>(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    problem.ensure_routable()?;
    let options = IslandOptions::from_config(config, registry::migration_from_config(config)?)?;
    let islands = IslandLauncher::new(launcher_from_config::<S>(config)?, options);
    let mut termination = registry::termination_from_config::<S>(config)?;

    let population = islands.launcher().random_population(&problem, rng);
    let result = islands.evolve(population, termination.as_mut(), rng)?;
    Ok(result.best.to_tour())
}

const ENCODINGS: &[(&str, MethodFn)] = &[
    (<Alternative as Breedable>::ENCODING, evolve::<Alternative>),
    (<Tour as Breedable>::ENCODING, evolve::<Tour>),
];

const ISLAND_ENCODINGS: &[(&str, MethodFn)] = &[
    (<Alternative as Breedable>::ENCODING, evolve_islands::<Alternative>),
    (<Tour as Breedable>::ENCODING, evolve_islands::<Tour>),
];

fn encoding(config: &MethodConfig) -> &str {
    config.str_or(keys::ENCODING, <Alternative as Breedable>::ENCODING)
}

/// The genetic algorithm on one population.
pub fn genetic_algorithm(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let (_, run) = registry::lookup(ENCODINGS, encoding(config), "encoding")?;
    run(problem, config, rng)
}

/// The genetic algorithm on a ring of demes.
pub fn genetic_algorithm_island(
    problem: Arc<Problem>,
    config: &MethodConfig,
    rng: &mut RandomNumberGenerator,
) -> Result<Tour> {
    let (_, run) = registry::lookup(ISLAND_ENCODINGS, encoding(config), "encoding")?;
    run(problem, config, rng)
}
