use tracing::info;

use crate::alternative::Alternative;
use crate::error::{ensure_positive, Result};
use crate::rng::RandomNumberGenerator;

use super::{best_of, LocalSearch, SearchResult, StopReason};

/// A randomized hill climbing algorithm.
///
/// Each iteration draws a single random neighbor and moves to it only if it is
/// strictly shorter. The run always uses its whole iteration budget.
#[derive(Debug, Clone)]
pub struct HillClimbing {
    max_iterations: usize,
}

impl HillClimbing {
    /// Creates a new hill climbing algorithm with the given iteration budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is 0.
    pub fn new(max_iterations: usize) -> Result<Self> {
        Ok(Self {
            max_iterations: ensure_positive("Maximum iterations", max_iterations)?,
        })
    }
}

impl LocalSearch<Alternative> for HillClimbing {
    fn search(
        &self,
        start: Alternative,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchResult<Alternative>> {
        start.problem().ensure_routable()?;

        let mut current_goal = start.goal();
        let mut current = start;
        let mut trajectory = vec![current_goal];

        for _ in 0..self.max_iterations {
            let candidate = current.random_neighbor(rng);
            let candidate_goal = candidate.goal();

            if candidate_goal < current_goal {
                current = candidate;
                current_goal = candidate_goal;
                trajectory.push(current_goal);
            }
        }

        Ok(SearchResult {
            best: current,
            goal: current_goal,
            iterations: self.max_iterations,
            stop_reason: StopReason::BudgetExhausted,
            trajectory,
        })
    }
}

/// A best-improvement hill climbing algorithm.
///
/// Each iteration evaluates the full neighborhood and moves to the best neighbor, the
/// first one in enumeration order on ties. When that neighbor is not strictly better
/// than the current solution the search stops early.
#[derive(Debug, Clone)]
pub struct DeterministicHillClimbing {
    max_iterations: usize,
}

impl DeterministicHillClimbing {
    /// Creates a new deterministic hill climbing algorithm with the given iteration
    /// budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is 0.
    pub fn new(max_iterations: usize) -> Result<Self> {
        Ok(Self {
            max_iterations: ensure_positive("Maximum iterations", max_iterations)?,
        })
    }
}

impl LocalSearch<Alternative> for DeterministicHillClimbing {
    fn search(
        &self,
        start: Alternative,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<SearchResult<Alternative>> {
        start.problem().ensure_routable()?;

        let mut current_goal = start.goal();
        let mut current = start;
        let mut trajectory = vec![current_goal];

        for iteration in 0..self.max_iterations {
            match best_of(current.neighbors()) {
                Some((neighbor, goal)) if goal < current_goal => {
                    current = neighbor;
                    current_goal = goal;
                    trajectory.push(goal);
                }
                _ => {
                    info!(
                        iteration,
                        budget = self.max_iterations,
                        goal = current_goal,
                        "no improving neighbor, stopping before the budget is used up"
                    );
                    return Ok(SearchResult {
                        best: current,
                        goal: current_goal,
                        iterations: iteration,
                        stop_reason: StopReason::NoImprovement,
                        trajectory,
                    });
                }
            }
        }

        Ok(SearchResult {
            best: current,
            goal: current_goal,
            iterations: self.max_iterations,
            stop_reason: StopReason::BudgetExhausted,
            trajectory,
        })
    }
}
