use std::collections::VecDeque;

use tracing::info;

use crate::alternative::Alternative;
use crate::error::{ensure_positive, Result};
use crate::rng::RandomNumberGenerator;

use super::{best_of, LocalSearch, SearchResult, StopReason};

/// A bounded FIFO of recently visited solutions. The oldest entry is always the first
/// to go.
#[derive(Debug, Clone)]
pub struct TabuList<S> {
    entries: VecDeque<S>,
    capacity: usize,
}

impl<S: PartialEq> TabuList<S> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `entry` as the newest element, evicting the oldest one when the list
    /// grows past its capacity.
    pub fn push(&mut self, entry: S) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn evict_oldest(&mut self) -> Option<S> {
        self.entries.pop_front()
    }

    pub fn newest(&self) -> Option<&S> {
        self.entries.back()
    }

    pub fn contains(&self, entry: &S) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.entries.iter()
    }
}

/// What a single tabu step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabuStep {
    /// Moved to the best admissible neighbor.
    Moved,
    /// Every neighbor was tabu, so the oldest entry was released.
    Backtracked,
    /// Every neighbor was tabu and the list holds only the current solution.
    Stuck,
}

/// The state of a tabu search between steps.
///
/// The newest entry of the tabu list is the current solution.
#[derive(Debug, Clone)]
pub struct TabuWalk {
    list: TabuList<Alternative>,
    current_goal: f64,
    best: Alternative,
    best_goal: f64,
}

impl TabuWalk {
    pub fn new(start: Alternative, tabu_size: usize) -> Self {
        let goal = start.goal();
        let mut list = TabuList::new(tabu_size);
        list.push(start.clone());
        Self {
            list,
            current_goal: goal,
            best: start,
            best_goal: goal,
        }
    }

    pub fn step(&mut self) -> TabuStep {
        let neighbors = match self.list.newest() {
            Some(current) => current.neighbors(),
            None => return TabuStep::Stuck,
        };
        let admissible: Vec<Alternative> = neighbors
            .into_iter()
            .filter(|n| !self.list.contains(n))
            .collect();

        match best_of(admissible) {
            Some((next, goal)) => {
                if goal < self.best_goal {
                    self.best = next.clone();
                    self.best_goal = goal;
                }
                self.current_goal = goal;
                self.list.push(next);
                TabuStep::Moved
            }
            None if self.list.len() > 1 => {
                self.list.evict_oldest();
                TabuStep::Backtracked
            }
            None => TabuStep::Stuck,
        }
    }

    pub fn current(&self) -> Option<&Alternative> {
        self.list.newest()
    }

    pub fn current_goal(&self) -> f64 {
        self.current_goal
    }

    pub fn tabu_list(&self) -> &TabuList<Alternative> {
        &self.list
    }

    pub fn best(&self) -> &Alternative {
        &self.best
    }

    pub fn best_goal(&self) -> f64 {
        self.best_goal
    }

    fn into_result(
        self,
        iterations: usize,
        stop_reason: StopReason,
        trajectory: Vec<f64>,
    ) -> SearchResult<Alternative> {
        SearchResult {
            best: self.best,
            goal: self.best_goal,
            iterations,
            stop_reason,
            trajectory,
        }
    }
}

/// A tabu search algorithm.
///
/// The search always moves to the best neighbor of the current solution that is not in
/// the tabu list, even when that neighbor is worse, and remembers the best solution
/// seen along the way.
#[derive(Debug, Clone)]
pub struct TabuSearch {
    max_iterations: usize,
    tabu_size: usize,
}

impl TabuSearch {
    /// Creates a new tabu search algorithm with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_iterations` is 0
    /// - `tabu_size` is 0
    pub fn new(max_iterations: usize, tabu_size: usize) -> Result<Self> {
        Ok(Self {
            max_iterations: ensure_positive("Maximum iterations", max_iterations)?,
            tabu_size: ensure_positive("Tabu list size", tabu_size)?,
        })
    }
}

impl LocalSearch<Alternative> for TabuSearch {
    fn search(
        &self,
        start: Alternative,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<SearchResult<Alternative>> {
        start.problem().ensure_routable()?;

        let mut walk = TabuWalk::new(start, self.tabu_size);
        let mut trajectory = vec![walk.current_goal()];

        for iteration in 0..self.max_iterations {
            match walk.step() {
                TabuStep::Moved => trajectory.push(walk.current_goal()),
                TabuStep::Backtracked => {}
                TabuStep::Stuck => {
                    info!(
                        iteration,
                        goal = walk.best_goal(),
                        "every neighbor is tabu and nothing is left to evict"
                    );
                    return Ok(walk.into_result(iteration, StopReason::NoEscape, trajectory));
                }
            }
        }

        Ok(walk.into_result(self.max_iterations, StopReason::BudgetExhausted, trajectory))
    }
}
