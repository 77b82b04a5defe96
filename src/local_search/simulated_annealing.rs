use std::fmt::Debug;

use crate::alternative::Alternative;
use crate::error::{ensure_positive, Result, SolverError};
use crate::rng::RandomNumberGenerator;

use super::{LocalSearch, SearchResult, StopReason};

/// Temperature as a function of the iteration index.
pub trait CoolingSchedule: Debug + Send + Sync {
    fn temperature(&self, iteration: usize) -> f64;
}

fn ensure_temperature(initial_temperature: f64) -> Result<f64> {
    if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
        return Err(SolverError::Configuration(format!(
            "Initial temperature must be positive and finite, got {}",
            initial_temperature
        )));
    }
    Ok(initial_temperature)
}

/// `T(k) = T0 / (k + 1)`.
#[derive(Debug, Clone)]
pub struct InverseCooling {
    initial_temperature: f64,
}

impl InverseCooling {
    pub fn new(initial_temperature: f64) -> Result<Self> {
        Ok(Self {
            initial_temperature: ensure_temperature(initial_temperature)?,
        })
    }
}

impl CoolingSchedule for InverseCooling {
    fn temperature(&self, iteration: usize) -> f64 {
        self.initial_temperature / (iteration as f64 + 1.0)
    }
}

/// `T(k) = T0 * rate^k`.
#[derive(Debug, Clone)]
pub struct GeometricCooling {
    initial_temperature: f64,
    rate: f64,
}

impl GeometricCooling {
    /// # Errors
    ///
    /// Returns an error if the temperature is not positive or `rate` is outside
    /// `(0, 1]`.
    pub fn new(initial_temperature: f64, rate: f64) -> Result<Self> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(SolverError::Configuration(format!(
                "Cooling rate must be in (0.0, 1.0], got {}",
                rate
            )));
        }
        Ok(Self {
            initial_temperature: ensure_temperature(initial_temperature)?,
            rate,
        })
    }
}

impl CoolingSchedule for GeometricCooling {
    fn temperature(&self, iteration: usize) -> f64 {
        let exponent = i32::try_from(iteration).unwrap_or(i32::MAX);
        self.initial_temperature * self.rate.powi(exponent)
    }
}

/// A simulated annealing algorithm.
///
/// Each iteration draws one random neighbor. Shorter neighbors are always accepted;
/// longer ones are accepted with probability `exp(-delta / T)` where `T` comes from the
/// cooling schedule. The best solution seen is returned.
#[derive(Debug)]
pub struct SimulatedAnnealing {
    max_iterations: usize,
    schedule: Box<dyn CoolingSchedule>,
}

impl SimulatedAnnealing {
    /// Creates a new simulated annealing algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iterations` is 0.
    pub fn new<C>(max_iterations: usize, schedule: C) -> Result<Self>
    where
        C: CoolingSchedule + 'static,
    {
        Self::with_boxed_schedule(max_iterations, Box::new(schedule))
    }

    pub fn with_boxed_schedule(
        max_iterations: usize,
        schedule: Box<dyn CoolingSchedule>,
    ) -> Result<Self> {
        Ok(Self {
            max_iterations: ensure_positive("Maximum iterations", max_iterations)?,
            schedule,
        })
    }
}

impl LocalSearch<Alternative> for SimulatedAnnealing {
    fn search(
        &self,
        start: Alternative,
        rng: &mut RandomNumberGenerator,
    ) -> Result<SearchResult<Alternative>> {
        start.problem().ensure_routable()?;

        let mut current_goal = start.goal();
        let mut current = start;
        let mut best = current.clone();
        let mut best_goal = current_goal;
        let mut trajectory = vec![current_goal];

        for iteration in 0..self.max_iterations {
            let candidate = current.random_neighbor(rng);
            let candidate_goal = candidate.goal();
            let delta = candidate_goal - current_goal;

            let accept = if delta < 0.0 {
                true
            } else {
                let temperature = self.schedule.temperature(iteration);
                temperature > 0.0 && rng.gen_probability() < (-delta / temperature).exp()
            };

            if accept {
                current = candidate;
                current_goal = candidate_goal;
                trajectory.push(current_goal);

                if current_goal < best_goal {
                    best = current.clone();
                    best_goal = current_goal;
                }
            }
        }

        Ok(SearchResult {
            best,
            goal: best_goal,
            iterations: self.max_iterations,
            stop_reason: StopReason::BudgetExhausted,
            trajectory,
        })
    }
}
