//! # Breeding
//!
//! Crossover and mutation operators for the genetic algorithm. Both kinds are gated by
//! a probability drawn inside the operator: when the draw fails the operator returns
//! copies of its inputs unchanged.
//!
//! Operators on the factoradic [`Alternative`](crate::alternative::Alternative) work
//! position by position and never need a repair step. Operators on the canonical
//! [`Tour`](crate::tour::Tour) preserve the permutation explicitly.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use salesman::alternative::Alternative;
//! use salesman::breeding::{CrossoverStrategy, MutationStrategy, OnePointCrossover, DescendingGeneMutation};
//! use salesman::problem::Problem;
//! use salesman::rng::RandomNumberGenerator;
//!
//! let problem = Arc::new(Problem::from_coordinates((0..6).map(|i| (i as f64, 0.0))));
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let a = Alternative::of(Arc::clone(&problem), &mut rng);
//! let b = Alternative::of(problem, &mut rng);
//!
//! let crossover = OnePointCrossover::new(1.0).unwrap();
//! let (child, _) = crossover.crossover(&a, &b, &mut rng);
//! let mutated = DescendingGeneMutation::new(1.0).unwrap().mutate(&child, &mut rng);
//! assert_eq!(mutated.decode().len(), 6);
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;

pub mod crossover;
pub mod mutation;

pub use crossover::{OnePointCrossover, OrderedCrossover, TwoPointCrossover};
pub use mutation::{DescendingGeneMutation, SwapMutation};

/// Recombines two parents into two children.
pub trait CrossoverStrategy<S: Specimen>: Debug + Send + Sync {
    fn crossover(&self, first: &S, second: &S, rng: &mut RandomNumberGenerator) -> (S, S);
}

/// Perturbs one individual into a new one.
pub trait MutationStrategy<S: Specimen>: Debug + Send + Sync {
    fn mutate(&self, specimen: &S, rng: &mut RandomNumberGenerator) -> S;
}
