//! # Evolution
//!
//! The genetic algorithm engine and its island extension.
//!
//! [`EvolutionLauncher`] runs the generational loop over one population.
//! [`IslandLauncher`] splits a population into demes that evolve concurrently, one
//! generation of the same loop each, and exchanges their best individuals along a ring
//! every few generations.

pub mod builder;
pub mod fitness;
pub mod island;
pub mod launcher;
pub mod options;
pub mod termination;

pub use builder::EvolutionLauncherBuilder;
pub use fitness::{FitnessFunction, InverseGoal};
pub use island::IslandLauncher;
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use options::{EvolutionOptions, IslandOptions, MigrationMode};
pub use termination::{
    ConvergenceLimit, GenerationLimit, PopulationReport, PopulationStats, StallLimit,
    TerminationCondition,
};
