use std::sync::Arc;

use crate::alternative::Alternative;
use crate::error::{ensure_probability, Result};
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

use super::MutationStrategy;

/// Redraws one gene of a factoradic genome.
///
/// With probability `p` a position is drawn uniformly from the free positions
/// `[0, n - 1)` and its gene is replaced by a value drawn uniformly from that position's
/// bound. The new value may equal the old one.
#[derive(Debug, Clone)]
pub struct DescendingGeneMutation {
    probability: f64,
}

impl DescendingGeneMutation {
    /// # Errors
    ///
    /// Returns an error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("Mutation probability", probability)?,
        })
    }
}

impl MutationStrategy<Alternative> for DescendingGeneMutation {
    fn mutate(&self, specimen: &Alternative, rng: &mut RandomNumberGenerator) -> Alternative {
        let n = specimen.len();
        if n < 2 || rng.gen_probability() >= self.probability {
            return specimen.clone();
        }
        let position = rng.gen_index(n - 1);
        let mut genes = specimen.genes().to_vec();
        genes[position] = rng.gen_index(Alternative::bound(n, position));
        specimen.with_genes(genes)
    }
}

/// Exchanges two uniformly drawn positions of a tour.
#[derive(Debug, Clone)]
pub struct SwapMutation {
    probability: f64,
}

impl SwapMutation {
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("Mutation probability", probability)?,
        })
    }
}

impl MutationStrategy<Tour> for SwapMutation {
    fn mutate(&self, specimen: &Tour, rng: &mut RandomNumberGenerator) -> Tour {
        let n = specimen.len();
        if n < 2 || rng.gen_probability() >= self.probability {
            return specimen.clone();
        }
        let mut order = specimen.order().to_vec();
        let i = rng.gen_index(n);
        let j = rng.gen_index(n);
        order.swap(i, j);
        Tour::from_order(Arc::clone(specimen.problem()), order)
    }
}
