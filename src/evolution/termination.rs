//! # Termination conditions
//!
//! A termination condition is asked after every generation whether the run should go
//! on. It sees the new population, its fitness vector and the number of generations
//! completed so far. Conditions may keep state between calls, such as the best fitness
//! seen, so they are taken by mutable reference and are fresh for each run.

use std::fmt::Debug;

use tracing::info;

use crate::error::{ensure_positive, Result, SolverError};
use crate::specimen::Specimen;

pub trait TerminationCondition<S: Specimen>: Debug + Send {
    /// Returns `false` to stop the run.
    fn should_continue(&mut self, population: &[S], fitness: &[f64], generation: usize) -> bool;
}

/// Summary statistics of a fitness vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub best: f64,
    pub mean: f64,
    /// Population standard deviation (divides by `N`).
    pub stddev: f64,
}

impl PopulationStats {
    /// Returns `None` for an empty vector.
    pub fn of(fitness: &[f64]) -> Option<Self> {
        if fitness.is_empty() {
            return None;
        }
        let n = fitness.len() as f64;
        let best = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitness.iter().sum::<f64>() / n;
        let variance = fitness.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            best,
            mean,
            stddev: variance.sqrt(),
        })
    }
}

/// Runs a fixed number of generations.
#[derive(Debug, Clone)]
pub struct GenerationLimit {
    generations: usize,
}

impl GenerationLimit {
    pub fn new(generations: usize) -> Self {
        Self { generations }
    }
}

impl<S: Specimen> TerminationCondition<S> for GenerationLimit {
    fn should_continue(&mut self, _population: &[S], _fitness: &[f64], generation: usize) -> bool {
        generation < self.generations
    }
}

/// Stops once the best fitness seen has not improved for `patience` generations.
#[derive(Debug, Clone)]
pub struct StallLimit {
    patience: usize,
    best: f64,
    last_improvement: usize,
}

impl StallLimit {
    /// # Errors
    ///
    /// Returns an error if `patience` is 0.
    pub fn new(patience: usize) -> Result<Self> {
        Ok(Self {
            patience: ensure_positive("Stall generations", patience)?,
            best: f64::NEG_INFINITY,
            last_improvement: 0,
        })
    }
}

impl<S: Specimen> TerminationCondition<S> for StallLimit {
    fn should_continue(&mut self, _population: &[S], fitness: &[f64], generation: usize) -> bool {
        let current = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if current > self.best {
            self.best = current;
            self.last_improvement = generation;
        }
        generation - self.last_improvement < self.patience
    }
}

/// Stops once the standard deviation of the fitness drops to `min_stddev` or below.
#[derive(Debug, Clone)]
pub struct ConvergenceLimit {
    min_stddev: f64,
}

impl ConvergenceLimit {
    pub fn new(min_stddev: f64) -> Result<Self> {
        if !min_stddev.is_finite() || min_stddev < 0.0 {
            return Err(SolverError::Configuration(format!(
                "Minimum standard deviation must be non-negative and finite, got {}",
                min_stddev
            )));
        }
        Ok(Self { min_stddev })
    }
}

impl<S: Specimen> TerminationCondition<S> for ConvergenceLimit {
    fn should_continue(&mut self, _population: &[S], fitness: &[f64], _generation: usize) -> bool {
        PopulationStats::of(fitness).map_or(false, |stats| stats.stddev > self.min_stddev)
    }
}

/// Logs the population after every generation, then defers to the wrapped condition.
#[derive(Debug)]
pub struct PopulationReport<S: Specimen> {
    inner: Box<dyn TerminationCondition<S>>,
}

impl<S: Specimen> PopulationReport<S> {
    pub fn new(inner: Box<dyn TerminationCondition<S>>) -> Self {
        Self { inner }
    }
}

impl<S: Specimen> TerminationCondition<S> for PopulationReport<S> {
    fn should_continue(&mut self, population: &[S], fitness: &[f64], generation: usize) -> bool {
        if let Some(stats) = PopulationStats::of(fitness) {
            let individuals = population
                .iter()
                .zip(fitness)
                .map(|(specimen, f)| format!("{}:{}", specimen.goal(), f))
                .collect::<Vec<_>>()
                .join(" ");
            info!(
                generation,
                best = stats.best,
                mean = stats.mean,
                stddev = stats.stddev,
                individuals = %individuals,
                "population"
            );
        }
        self.inner.should_continue(population, fitness, generation)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::problem::Problem;
    use crate::tour::Tour;

    fn population() -> Vec<Tour> {
        let problem = Arc::new(Problem::from_coordinates(vec![(0.0, 0.0), (1.0, 0.0)]));
        vec![Tour::identity(problem)]
    }

    #[test]
    fn test_population_stats() {
        let stats = PopulationStats::of(&[1.0, 3.0]).unwrap();
        assert_eq!(stats.best, 3.0);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.stddev, 1.0);
        assert!(PopulationStats::of(&[]).is_none());
    }

    #[test]
    fn test_generation_limit() {
        let pop = population();
        let mut limit = GenerationLimit::new(3);
        assert!(TerminationCondition::<Tour>::should_continue(&mut limit, &pop, &[1.0], 2));
        assert!(!TerminationCondition::<Tour>::should_continue(&mut limit, &pop, &[1.0], 3));
    }

    #[test]
    fn test_stall_limit_resets_on_improvement() {
        let pop = population();
        let mut stall = StallLimit::new(2).unwrap();
        let mut step = |f: f64, g: usize| TerminationCondition::<Tour>::should_continue(&mut stall, &pop, &[f], g);
        assert!(step(0.1, 1));
        assert!(step(0.1, 2));
        assert!(step(0.2, 3));
        assert!(step(0.2, 4));
        assert!(!step(0.15, 5));
    }

    #[test]
    fn test_convergence_limit() {
        let pop = population();
        let mut convergence = ConvergenceLimit::new(0.01).unwrap();
        assert!(TerminationCondition::<Tour>::should_continue(&mut convergence, &pop, &[0.1, 0.5], 1));
        assert!(!TerminationCondition::<Tour>::should_continue(&mut convergence, &pop, &[0.3, 0.3], 2));
        assert!(ConvergenceLimit::new(-1.0).is_err());
    }

    #[test]
    fn test_report_defers_to_inner() {
        let pop = population();
        let mut report = PopulationReport::new(Box::new(GenerationLimit::new(1)));
        assert!(report.should_continue(&pop, &[0.5], 0));
        assert!(!report.should_continue(&pop, &[0.5], 1));
    }
}
