//! # Alternative (factoradic) encoding
//!
//! An `Alternative` stores a tour as a sequence of `n` genes where gene `i` lies in
//! `[0, n - i)`. Decoding walks the genes and, for each one, removes the gene-th city
//! from the list of cities not yet visited. The last gene therefore always holds 0.
//!
//! Because every gene is bounded by its position alone, swapping genes between two
//! genomes at the same positions, or redrawing one gene within its bound, always yields
//! a genome that decodes to a valid permutation. No repair step is ever needed.
//!
//! ```rust
//! use std::sync::Arc;
//! use salesman::alternative::Alternative;
//! use salesman::problem::Problem;
//!
//! let problem = Arc::new(Problem::from_coordinates(vec![
//!     (0.0, 0.0),
//!     (1.0, 0.0),
//!     (2.0, 0.0),
//! ]));
//! let genome = Alternative::new(problem, vec![2, 0, 0]).unwrap();
//! assert_eq!(genome.decode().order(), &[2, 0, 1]);
//! ```

use std::sync::Arc;

use crate::error::{Result, SolverError};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;
use crate::tour::Tour;

/// A factoradic genome. Its genes can only be set through validating constructors or
/// through operators that respect the positional bounds.
#[derive(Debug, Clone)]
pub struct Alternative {
    problem: Arc<Problem>,
    genes: Vec<usize>,
}

impl Alternative {
    /// Exclusive upper bound of the gene at `position` in a genome of `len` genes.
    pub fn bound(len: usize, position: usize) -> usize {
        len - position
    }

    /// Creates a genome from explicit genes.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of genes differs from the number of cities, or if
    /// any gene lies outside its positional bound.
    pub fn new(problem: Arc<Problem>, genes: Vec<usize>) -> Result<Self> {
        let n = problem.len();
        if genes.len() != n {
            return Err(SolverError::GenomeLength {
                expected: n,
                actual: genes.len(),
            });
        }
        if let Some((position, &value)) = genes
            .iter()
            .enumerate()
            .find(|&(i, &g)| g >= Self::bound(n, i))
        {
            return Err(SolverError::GeneOutOfBounds {
                position,
                value,
                bound: Self::bound(n, position),
            });
        }
        Ok(Self { problem, genes })
    }

    /// Draws every gene uniformly from its legal range, which yields a uniformly random
    /// permutation once decoded.
    pub fn of(problem: Arc<Problem>, rng: &mut RandomNumberGenerator) -> Self {
        let n = problem.len();
        let genes = (0..n).map(|i| rng.gen_index(Self::bound(n, i))).collect();
        Self { problem, genes }
    }

    /// Encodes a canonical tour. `Alternative::from_tour(&t).decode() == t`.
    pub fn from_tour(tour: &Tour) -> Self {
        let problem = Arc::clone(tour.problem());
        let mut remaining: Vec<usize> = (0..problem.len()).collect();
        let genes = tour
            .order()
            .iter()
            .map(|city| {
                let index = remaining.iter().position(|c| c == city).unwrap_or(0);
                remaining.remove(index);
                index
            })
            .collect();
        Self { problem, genes }
    }

    /// Replaces the genes of this genome. Callers guarantee that every gene stays
    /// within its positional bound.
    pub(crate) fn with_genes(&self, genes: Vec<usize>) -> Self {
        debug_assert!(genes
            .iter()
            .enumerate()
            .all(|(i, &g)| g < Self::bound(genes.len(), i)));
        Self {
            problem: Arc::clone(&self.problem),
            genes,
        }
    }

    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Decodes the genome by successive removal from the list of unvisited cities.
    pub fn decode(&self) -> Tour {
        let mut remaining: Vec<usize> = (0..self.genes.len()).collect();
        let order = self.genes.iter().map(|&g| remaining.remove(g)).collect();
        Tour::from_order(Arc::clone(&self.problem), order)
    }

    pub fn goal(&self) -> f64 {
        self.decode().goal()
    }

    /// Number of variants produced by [`neighbors`](Self::neighbors).
    pub fn neighbor_count(&self) -> usize {
        2 * self.genes.len().saturating_sub(1)
    }

    /// The `k`-th unit perturbation: gene `k / 2` incremented (even `k`) or
    /// decremented (odd `k`) modulo its bound.
    fn neighbor_at(&self, k: usize) -> Self {
        let position = k / 2;
        let bound = Self::bound(self.genes.len(), position);
        let mut genes = self.genes.clone();
        genes[position] = if k % 2 == 0 {
            (genes[position] + 1) % bound
        } else {
            (genes[position] + bound - 1) % bound
        };
        self.with_genes(genes)
    }

    /// All unit perturbations, in a fixed order: for each free position the incremented
    /// variant followed by the decremented one. Yields `2 * (n - 1)` genomes, or none
    /// for fewer than two cities.
    pub fn neighbors(&self) -> Vec<Self> {
        (0..self.neighbor_count())
            .map(|k| self.neighbor_at(k))
            .collect()
    }

    /// One neighbor drawn uniformly from [`neighbors`](Self::neighbors), without
    /// building the whole set.
    pub fn random_neighbor(&self, rng: &mut RandomNumberGenerator) -> Self {
        match self.neighbor_count() {
            0 => self.clone(),
            count => self.neighbor_at(rng.gen_index(count)),
        }
    }
}

impl PartialEq for Alternative {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl Eq for Alternative {}

impl Specimen for Alternative {
    fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    fn goal(&self) -> f64 {
        Alternative::goal(self)
    }

    fn to_tour(&self) -> Tour {
        self.decode()
    }

    fn random(problem: &Arc<Problem>, rng: &mut RandomNumberGenerator) -> Self {
        Alternative::of(Arc::clone(problem), rng)
    }
}
