//! # Specimen Trait
//!
//! The `Specimen` trait is implemented by every solution encoding the solvers can work
//! on. The crate ships two:
//!
//! - [`Tour`](crate::tour::Tour), the canonical permutation of city indices;
//! - [`Alternative`](crate::alternative::Alternative), the factoradic encoding whose
//!   genes are independently bounded, so point crossovers and single-gene mutations
//!   always decode to a valid tour.
//!
//! Specimens are value types. Operators never edit them in place; they build new ones.
//! Equality is structural equality of the encoding, never equality of the goal value.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use salesman::alternative::Alternative;
//! use salesman::problem::Problem;
//! use salesman::rng::RandomNumberGenerator;
//! use salesman::specimen::Specimen;
//!
//! let problem = Arc::new(Problem::from_coordinates(vec![
//!     (0.0, 0.0),
//!     (0.0, 1.0),
//!     (1.0, 1.0),
//!     (1.0, 0.0),
//! ]));
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let specimen = Alternative::random(&problem, &mut rng);
//! assert!(specimen.goal() >= 4.0);
//! assert_eq!(specimen.to_tour().len(), 4);
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

/// Trait for solution encodings explored by the local searches and the genetic
/// algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `PartialEq`,
/// `Send`, and `Sync` to enable tabu bookkeeping and parallel evaluation.
pub trait Specimen: Clone + Debug + PartialEq + Send + Sync {
    /// The problem this specimen is a solution of.
    fn problem(&self) -> &Arc<Problem>;

    /// Length of the closed tour this specimen represents. Lower is better.
    fn goal(&self) -> f64;

    /// The canonical tour this specimen represents.
    fn to_tour(&self) -> Tour;

    /// Draws a uniformly random specimen for `problem`.
    fn random(problem: &Arc<Problem>, rng: &mut RandomNumberGenerator) -> Self;
}
