//! # Operator registry
//!
//! Named lookup from configuration strings to operator constructors. Every table lists
//! its default first. An unrecognized name is not an error: the lookup logs a warning
//! and hands out the default instead.
//!
//! | role | names (default first) |
//! |---|---|
//! | selection | `tournament_selection`, `roulette_selection`, `rank_selection` |
//! | crossover, factoradic | `crossover_one_point`, `crossover_two_point` |
//! | crossover, permutation | `crossover_ordered` |
//! | mutation, factoradic | `mutation_change_one_city_descending` |
//! | mutation, permutation | `mutation_swap` |
//! | termination | `generations`, `stall`, `convergence` |
//! | cooling | `inverse`, `geometric` |
//! | migration | `random`, `ranked` |
//!
//! ```rust
//! use salesman::config::{keys, MethodConfig};
//! use salesman::registry;
//!
//! let config = MethodConfig::new().with(keys::SELECTION, "no_such_selection");
//! let selection = registry::selection_from_config(&config).unwrap();
//! assert!(format!("{:?}", selection).starts_with("TournamentSelection"));
//! ```

use tracing::warn;

use crate::alternative::Alternative;
use crate::breeding::{
    CrossoverStrategy, DescendingGeneMutation, MutationStrategy, OnePointCrossover,
    OrderedCrossover, SwapMutation, TwoPointCrossover,
};
use crate::config::{keys, MethodConfig};
use crate::error::{Result, SolverError};
use crate::evolution::options::MigrationMode;
use crate::evolution::termination::{
    ConvergenceLimit, GenerationLimit, PopulationReport, StallLimit, TerminationCondition,
};
use crate::local_search::{CoolingSchedule, GeometricCooling, InverseCooling};
use crate::selection::{
    RankBasedSelection, RouletteWheelSelection, SelectionStrategy, TournamentSelection,
};
use crate::specimen::Specimen;
use crate::tour::Tour;

pub type SelectionConstructor = fn(&MethodConfig) -> Result<Box<dyn SelectionStrategy>>;
pub type CrossoverConstructor<S> = fn(&MethodConfig) -> Result<Box<dyn CrossoverStrategy<S>>>;
pub type MutationConstructor<S> = fn(&MethodConfig) -> Result<Box<dyn MutationStrategy<S>>>;
pub type TerminationConstructor<S> = fn(&MethodConfig) -> Result<Box<dyn TerminationCondition<S>>>;
pub type CoolingConstructor = fn(&MethodConfig) -> Result<Box<dyn CoolingSchedule>>;

/// Finds `name` in `table`, or falls back to the first entry with a warning.
///
/// # Errors
///
/// Returns an error only if `table` is empty.
pub fn lookup<T: Copy>(
    table: &[(&'static str, T)],
    name: &str,
    role: &str,
) -> Result<(&'static str, T)> {
    if let Some(&entry) = table.iter().find(|(candidate, _)| *candidate == name) {
        return Ok(entry);
    }
    let &(fallback, entry) = table.first().ok_or_else(|| {
        SolverError::Configuration(format!("No {} strategies are registered", role))
    })?;
    warn!(role, requested = name, fallback, "unrecognized name, using the default");
    Ok((fallback, entry))
}

pub fn names<T>(table: &[(&'static str, T)]) -> Vec<&'static str> {
    table.iter().map(|(name, _)| *name).collect()
}

fn tournament(config: &MethodConfig) -> Result<Box<dyn SelectionStrategy>> {
    Ok(Box::new(TournamentSelection::from_config(config)?))
}

fn roulette(_config: &MethodConfig) -> Result<Box<dyn SelectionStrategy>> {
    Ok(Box::new(RouletteWheelSelection::new()))
}

fn rank(_config: &MethodConfig) -> Result<Box<dyn SelectionStrategy>> {
    Ok(Box::new(RankBasedSelection::new()))
}

pub const SELECTIONS: &[(&str, SelectionConstructor)] = &[
    ("tournament_selection", tournament),
    ("roulette_selection", roulette),
    ("rank_selection", rank),
];

/// Builds the selection strategy named under `selection`.
pub fn selection_from_config(config: &MethodConfig) -> Result<Box<dyn SelectionStrategy>> {
    let (_, build) = lookup(SELECTIONS, config.str_or(keys::SELECTION, SELECTIONS[0].0), "selection")?;
    build(config)
}

fn crossover_probability(config: &MethodConfig) -> Result<f64> {
    config.parse_or(keys::CROSSOVER_PROBABILITY, keys::DEFAULT_CROSSOVER_PROBABILITY)
}

fn mutation_probability(config: &MethodConfig) -> Result<f64> {
    config.parse_or(keys::MUTATION_PROBABILITY, keys::DEFAULT_MUTATION_PROBABILITY)
}

fn one_point(config: &MethodConfig) -> Result<Box<dyn CrossoverStrategy<Alternative>>> {
    Ok(Box::new(OnePointCrossover::new(crossover_probability(config)?)?))
}

fn two_point(config: &MethodConfig) -> Result<Box<dyn CrossoverStrategy<Alternative>>> {
    Ok(Box::new(TwoPointCrossover::new(crossover_probability(config)?)?))
}

fn ordered(config: &MethodConfig) -> Result<Box<dyn CrossoverStrategy<Tour>>> {
    Ok(Box::new(OrderedCrossover::new(crossover_probability(config)?)?))
}

fn descending(config: &MethodConfig) -> Result<Box<dyn MutationStrategy<Alternative>>> {
    Ok(Box::new(DescendingGeneMutation::new(mutation_probability(config)?)?))
}

fn swap(config: &MethodConfig) -> Result<Box<dyn MutationStrategy<Tour>>> {
    Ok(Box::new(SwapMutation::new(mutation_probability(config)?)?))
}

const ALTERNATIVE_CROSSOVERS: &[(&str, CrossoverConstructor<Alternative>)] = &[
    ("crossover_one_point", one_point),
    ("crossover_two_point", two_point),
];

const ALTERNATIVE_MUTATIONS: &[(&str, MutationConstructor<Alternative>)] =
    &[("mutation_change_one_city_descending", descending)];

const TOUR_CROSSOVERS: &[(&str, CrossoverConstructor<Tour>)] = &[("crossover_ordered", ordered)];

const TOUR_MUTATIONS: &[(&str, MutationConstructor<Tour>)] = &[("mutation_swap", swap)];

/// An encoding the genetic algorithm can evolve, with the operators registered for it.
pub trait Breedable: Specimen + 'static {
    /// Value of the `encoding` option that selects this encoding.
    const ENCODING: &'static str;

    fn crossovers() -> &'static [(&'static str, CrossoverConstructor<Self>)];

    fn mutations() -> &'static [(&'static str, MutationConstructor<Self>)];
}

impl Breedable for Alternative {
    const ENCODING: &'static str = "factoradic";

    fn crossovers() -> &'static [(&'static str, CrossoverConstructor<Self>)] {
        ALTERNATIVE_CROSSOVERS
    }

    fn mutations() -> &'static [(&'static str, MutationConstructor<Self>)] {
        ALTERNATIVE_MUTATIONS
    }
}

impl Breedable for Tour {
    const ENCODING: &'static str = "permutation";

    fn crossovers() -> &'static [(&'static str, CrossoverConstructor<Self>)] {
        TOUR_CROSSOVERS
    }

    fn mutations() -> &'static [(&'static str, MutationConstructor<Self>)] {
        TOUR_MUTATIONS
    }
}

pub fn crossover_from_config<S: Breedable>(
    config: &MethodConfig,
) -> Result<Box<dyn CrossoverStrategy<S>>> {
    let table = S::crossovers();
    let default = table.first().map_or("", |(name, _)| *name);
    let (_, build) = lookup(table, config.str_or(keys::CROSSOVER, default), "crossover")?;
    build(config)
}

pub fn mutation_from_config<S: Breedable>(
    config: &MethodConfig,
) -> Result<Box<dyn MutationStrategy<S>>> {
    let table = S::mutations();
    let default = table.first().map_or("", |(name, _)| *name);
    let (_, build) = lookup(table, config.str_or(keys::MUTATION, default), "mutation")?;
    build(config)
}

fn generations<S: Specimen>(config: &MethodConfig) -> Result<Box<dyn TerminationCondition<S>>> {
    Ok(Box::new(GenerationLimit::new(config.parse_or(
        keys::ITERATION_COUNT,
        keys::DEFAULT_ITERATION_COUNT,
    )?)))
}

fn stall<S: Specimen>(config: &MethodConfig) -> Result<Box<dyn TerminationCondition<S>>> {
    Ok(Box::new(StallLimit::new(config.parse_or(
        keys::STALL_GENERATIONS,
        keys::DEFAULT_STALL_GENERATIONS,
    )?)?))
}

fn convergence<S: Specimen>(config: &MethodConfig) -> Result<Box<dyn TerminationCondition<S>>> {
    Ok(Box::new(ConvergenceLimit::new(
        config.parse_or(keys::MIN_STDDEV, keys::DEFAULT_MIN_STDDEV)?,
    )?))
}

/// Builds the termination condition named under `termination`, wrapped in a
/// [`PopulationReport`] when `print_population_stats` is set.
pub fn termination_from_config<S: Specimen + 'static>(
    config: &MethodConfig,
) -> Result<Box<dyn TerminationCondition<S>>> {
    let table: [(&'static str, TerminationConstructor<S>); 3] = [
        ("generations", generations::<S>),
        ("stall", stall::<S>),
        ("convergence", convergence::<S>),
    ];
    let (_, build) = lookup(&table, config.str_or(keys::TERMINATION, table[0].0), "termination")?;
    let condition = build(config)?;

    if config.flag(keys::PRINT_POPULATION_STATS)? {
        Ok(Box::new(PopulationReport::new(condition)))
    } else {
        Ok(condition)
    }
}

fn inverse(config: &MethodConfig) -> Result<Box<dyn CoolingSchedule>> {
    Ok(Box::new(InverseCooling::new(
        config.parse_or(keys::TEMPERATURE, keys::DEFAULT_TEMPERATURE)?,
    )?))
}

fn geometric(config: &MethodConfig) -> Result<Box<dyn CoolingSchedule>> {
    Ok(Box::new(GeometricCooling::new(
        config.parse_or(keys::TEMPERATURE, keys::DEFAULT_TEMPERATURE)?,
        config.parse_or(keys::COOLING_RATE, keys::DEFAULT_COOLING_RATE)?,
    )?))
}

pub const COOLING_SCHEDULES: &[(&str, CoolingConstructor)] =
    &[("inverse", inverse), ("geometric", geometric)];

pub fn cooling_from_config(config: &MethodConfig) -> Result<Box<dyn CoolingSchedule>> {
    let (_, build) = lookup(
        COOLING_SCHEDULES,
        config.str_or(keys::COOLING, COOLING_SCHEDULES[0].0),
        "cooling",
    )?;
    build(config)
}

pub const MIGRATION_MODES: &[(&str, MigrationMode)] = &[
    ("random", MigrationMode::Random),
    ("ranked", MigrationMode::Ranked),
];

pub fn migration_from_config(config: &MethodConfig) -> Result<MigrationMode> {
    let (_, mode) = lookup(
        MIGRATION_MODES,
        config.str_or(keys::MIGRATION, MIGRATION_MODES[0].0),
        "migration",
    )?;
    Ok(mode)
}
