use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::roulette::spin;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// A selection strategy that selects individuals based on their rank in the population.
///
/// Individuals are sorted by fitness in ascending order and given the weights
/// `1, 2, ..., N`, so the least fit has weight 1 and the fittest has weight `N`. A
/// roulette wheel is then spun over those weights. Only the order of the fitness values
/// matters, which keeps a single outlier from dominating the parent pool.
///
/// Equal fitness values keep their population order when ranked.
///
/// # Examples
///
/// ```
/// use salesman::rng::RandomNumberGenerator;
/// use salesman::selection::{RankBasedSelection, SelectionStrategy};
///
/// let fitness = vec![1000.0, 0.1, 0.2];
/// let mut rng = RandomNumberGenerator::from_seed(2);
///
/// let selection = RankBasedSelection::new();
/// let index = selection.select(&fitness, &mut rng).unwrap();
/// assert!(index < 3);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RankBasedSelection;

impl RankBasedSelection {
    pub fn new() -> Self {
        Self
    }

    /// Population indices from least to most fit.
    fn ranking(fitness: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));
        order
    }
}

impl SelectionStrategy for RankBasedSelection {
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        ensure_not_empty(fitness)?;

        let order = Self::ranking(fitness);
        let weights: Vec<f64> = (1..=order.len()).map(|rank| rank as f64).collect();
        let winner = spin(&weights, rng)?;

        Ok(order[winner])
    }
}
