use std::fmt::Debug;

use crate::error::{Result, SolverError};
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies used in the genetic algorithm.
///
/// A selection strategy looks only at the fitness vector of a population and picks the
/// index of one parent. The engine calls it once per parent slot, so the same index may
/// be returned many times within a generation. Higher fitness is better.
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects the index of one individual.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of the population, one per individual.
    /// * `rng` - The random number generator driving the draw.
    ///
    /// # Errors
    ///
    /// Returns an error if `fitness` is empty, or if the strategy cannot weigh the
    /// given values.
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize>;
}

pub(crate) fn ensure_not_empty(fitness: &[f64]) -> Result<()> {
    if fitness.is_empty() {
        return Err(SolverError::EmptyPopulation);
    }
    Ok(())
}
