//! # Tour
//!
//! The canonical solution: a permutation of `[0, n)` giving the order in which the
//! cities are visited, with an implicit return from the last city to the first.

use std::sync::Arc;

use crate::alternative::Alternative;
use crate::error::{Result, SolverError};
use crate::problem::{City, Problem};
use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;

/// A closed visiting order over all cities of a problem.
///
/// Two tours are equal when their permutations are equal. Rotations and reversals of
/// the same cycle are different tours with the same goal.
#[derive(Debug, Clone)]
pub struct Tour {
    problem: Arc<Problem>,
    order: Vec<usize>,
}

impl Tour {
    /// Creates a tour from an explicit visiting order.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is not a permutation of the problem's city indices.
    pub fn new(problem: Arc<Problem>, order: Vec<usize>) -> Result<Self> {
        if order.len() != problem.len() {
            return Err(SolverError::GenomeLength {
                expected: problem.len(),
                actual: order.len(),
            });
        }
        let mut seen = vec![false; order.len()];
        for &city in &order {
            match seen.get_mut(city) {
                Some(flag) if !*flag => *flag = true,
                Some(_) => {
                    return Err(SolverError::InvalidPermutation(format!(
                        "city {} is visited more than once",
                        city
                    )))
                }
                None => {
                    return Err(SolverError::InvalidPermutation(format!(
                        "city {} does not exist in a problem of {} cities",
                        city,
                        problem.len()
                    )))
                }
            }
        }
        Ok(Self { problem, order })
    }

    /// The tour visiting the cities in the order the problem lists them.
    pub fn identity(problem: Arc<Problem>) -> Self {
        let order = (0..problem.len()).collect();
        Self { problem, order }
    }

    /// Builds a tour from an order that is a permutation by construction.
    pub(crate) fn from_order(problem: Arc<Problem>, order: Vec<usize>) -> Self {
        debug_assert_eq!(order.len(), problem.len());
        Self { problem, order }
    }

    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cyclic sum of the distances between consecutive cities, wrapping last to first.
    pub fn goal(&self) -> f64 {
        let n = self.order.len();
        (0..n)
            .map(|i| self.problem.distance(self.order[i], self.order[(i + 1) % n]))
            .sum()
    }

    /// The lexicographic successor of this permutation. The last permutation wraps
    /// around to the first (ascending) one, so repeated application cycles through
    /// all `n!` orders and returns to the start.
    pub fn next_permutation(&self) -> Self {
        let mut order = self.order.clone();
        let n = order.len();
        match (0..n.saturating_sub(1)).rev().find(|&i| order[i] < order[i + 1]) {
            Some(pivot) => {
                let successor = (pivot + 1..n)
                    .rev()
                    .find(|&j| order[j] > order[pivot])
                    .unwrap_or(pivot + 1);
                order.swap(pivot, successor);
                order[pivot + 1..].reverse();
            }
            None => order.reverse(),
        }
        Self {
            problem: Arc::clone(&self.problem),
            order,
        }
    }

    /// The cities in visiting order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.order.iter().map(move |&i| &self.problem.cities()[i])
    }

    /// Snapshot of this tour for an external serializer.
    pub fn report(&self) -> TourReport {
        TourReport {
            cities: self.cities().cloned().collect(),
            goal: self.goal(),
        }
    }
}

impl PartialEq for Tour {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for Tour {}

impl Specimen for Tour {
    fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    fn goal(&self) -> f64 {
        Tour::goal(self)
    }

    fn to_tour(&self) -> Tour {
        self.clone()
    }

    fn random(problem: &Arc<Problem>, rng: &mut RandomNumberGenerator) -> Self {
        Alternative::of(Arc::clone(problem), rng).decode()
    }
}

/// The cities of a tour in visiting order together with its length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TourReport {
    pub cities: Vec<City>,
    pub goal: f64,
}
