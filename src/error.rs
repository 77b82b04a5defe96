//! # Error Types
//!
//! This module defines the error type shared by every solver in the crate.
//! Failures are either configuration-time rejections (bad option values, unknown
//! method names, degenerate problems) or violations of a representation invariant.
//! Algorithmic early exits, such as a tabu search with no escape, are not errors.
//!
//! ## Examples
//!
//! ```rust
//! use salesman::error::{Result, SolverError};
//!
//! fn check_budget(iterations: usize) -> Result<usize> {
//!     if iterations == 0 {
//!         return Err(SolverError::Configuration(
//!             "Iteration budget must be greater than 0".to_string(),
//!         ));
//!     }
//!     Ok(iterations)
//! }
//!
//! assert!(check_budget(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use salesman::error::{OptionExt, SolverError};
//!
//! fn fittest(fitness: &[f64]) -> salesman::error::Result<f64> {
//!     fitness
//!         .iter()
//!         .cloned()
//!         .fold(None, |best: Option<f64>, f| Some(best.map_or(f, |b| b.max(f))))
//!         .ok_or_else_solver(|| SolverError::EmptyPopulation)
//! }
//!
//! assert!(fittest(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running a solver.
#[derive(Error, Debug)]
pub enum SolverError {
    /// An invalid configuration value was provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A method name was requested that the registry does not know.
    #[error("Unknown method '{name}', available methods: {available}")]
    UnknownMethod { name: String, available: String },

    /// The problem has too few cities for neighborhoods and crossover to be defined.
    #[error("Degenerate problem: {cities} cities given, at least 2 are required")]
    DegenerateProblem { cities: usize },

    /// A factoradic gene is outside of its positional bound.
    #[error("Gene {position} holds {value}, which is outside of its bound [0, {bound})")]
    GeneOutOfBounds {
        position: usize,
        value: usize,
        bound: usize,
    },

    /// A genome or permutation does not match the number of cities.
    #[error("Genome length {actual} does not match the problem size {expected}")]
    GenomeLength { expected: usize, actual: usize },

    /// A visiting order is not a permutation of the city indices.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// An operation that needs at least one individual received none.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A fitness value was NaN, infinite, or otherwise unusable.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// The evolution process could not continue.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SolverError>` using a closure to
    /// generate the error.
    fn ok_or_else_solver<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SolverError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_solver<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SolverError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Fails with a configuration error unless `value` is a probability in `[0, 1]`.
pub(crate) fn ensure_probability(name: &str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SolverError::Configuration(format!(
            "{} must be between 0.0 and 1.0, got {}",
            name, value
        )));
    }
    Ok(value)
}

/// Fails with a configuration error unless `value` is greater than zero.
pub(crate) fn ensure_positive(name: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(SolverError::Configuration(format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(value)
}
