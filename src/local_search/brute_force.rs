use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

use super::{LocalSearch, SearchResult, StopReason};

/// Exhaustive enumeration of every visiting order.
///
/// Starting from the given tour, the search applies the lexicographic successor until
/// it arrives back at the start, keeping the first tour of each strictly better goal.
/// The result is optimal, and the cost is `n!` goal evaluations, so this is only
/// meant for small instances.
#[derive(Debug, Clone, Default)]
pub struct BruteForce;

impl BruteForce {
    pub fn new() -> Self {
        Self
    }
}

impl LocalSearch<Tour> for BruteForce {
    fn search(&self, start: Tour, _rng: &mut RandomNumberGenerator) -> Result<SearchResult<Tour>> {
        start.problem().ensure_routable()?;

        let mut best_goal = start.goal();
        let mut best = start.clone();
        let mut trajectory = vec![best_goal];
        let mut current = start.clone();
        let mut iterations = 0;

        loop {
            current = current.next_permutation();
            iterations += 1;
            let goal = current.goal();
            if goal < best_goal {
                best = current.clone();
                best_goal = goal;
                trajectory.push(goal);
            }
            if current == start {
                break;
            }
        }

        Ok(SearchResult {
            best,
            goal: best_goal,
            iterations,
            stop_reason: StopReason::Enumerated,
            trajectory,
        })
    }
}
