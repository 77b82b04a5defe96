//! # Local Search Algorithms
//!
//! This module provides the single-solution searches: exhaustive enumeration,
//! stochastic and deterministic hill climbing, tabu search, and simulated annealing.
//! All of them share one shape: hold a current solution, look at candidates derived
//! from it, accept or reject, repeat until a budget or a stopping rule ends the run.
//!
//! The neighborhood based searches work on the factoradic
//! [`Alternative`](crate::alternative::Alternative) encoding; brute force enumerates
//! canonical [`Tour`](crate::tour::Tour)s.

use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;

pub mod brute_force;
pub mod hill_climbing;
pub mod simulated_annealing;
pub mod tabu_search;

pub use brute_force::BruteForce;
pub use hill_climbing::{DeterministicHillClimbing, HillClimbing};
pub use simulated_annealing::{CoolingSchedule, GeometricCooling, InverseCooling, SimulatedAnnealing};
pub use tabu_search::{TabuList, TabuSearch, TabuStep, TabuWalk};

/// A trait for local search algorithms.
pub trait LocalSearch<S>: Debug + Send + Sync
where
    S: Specimen,
{
    /// Runs the search from `start` and returns the best solution it found.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem has fewer than two cities.
    fn search(&self, start: S, rng: &mut RandomNumberGenerator) -> Result<SearchResult<S>>;
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The iteration budget was used up.
    BudgetExhausted,
    /// No neighbor improved on the current solution.
    NoImprovement,
    /// Every permutation was visited.
    Enumerated,
    /// Tabu search had no admissible neighbor and nothing left to evict.
    NoEscape,
}

/// Outcome of a local search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S: Specimen> {
    /// The best solution found.
    pub best: S,
    /// Goal value of `best`.
    pub goal: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    pub stop_reason: StopReason,
    /// Goal of the starting solution followed by the goal of every solution the search
    /// moved to, in order.
    pub trajectory: Vec<f64>,
}

/// The candidate with the lowest goal. Ties go to the first one in enumeration order.
pub(crate) fn best_of<S: Specimen>(candidates: Vec<S>) -> Option<(S, f64)> {
    let mut best: Option<(S, f64)> = None;
    for candidate in candidates {
        let goal = candidate.goal();
        let better = match &best {
            Some((_, best_goal)) => goal < *best_goal,
            None => true,
        };
        if better {
            best = Some((candidate, goal));
        }
    }
    best
}
