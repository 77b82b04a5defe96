use std::sync::Arc;

use crate::alternative::Alternative;
use crate::error::{ensure_probability, Result};
use crate::rng::RandomNumberGenerator;
use crate::tour::Tour;

use super::CrossoverStrategy;

/// One-point crossover on factoradic genomes.
///
/// With probability `p` a cut `c` is drawn uniformly from `[0, n)` and the children are
/// `a[..c] ++ b[c..]` and `b[..c] ++ a[c..]`. Both children keep every gene at the
/// position it came from, so each one is a valid genome.
#[derive(Debug, Clone)]
pub struct OnePointCrossover {
    probability: f64,
}

impl OnePointCrossover {
    /// # Errors
    ///
    /// Returns an error if `probability` is outside `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("Crossover probability", probability)?,
        })
    }

    /// Swaps the suffixes of `first` and `second` starting at `cut`.
    pub fn cross_at(first: &Alternative, second: &Alternative, cut: usize) -> (Alternative, Alternative) {
        let cut = cut.min(first.len());
        let genes_a = first.genes()[..cut]
            .iter()
            .chain(&second.genes()[cut..])
            .copied()
            .collect();
        let genes_b = second.genes()[..cut]
            .iter()
            .chain(&first.genes()[cut..])
            .copied()
            .collect();
        (first.with_genes(genes_a), second.with_genes(genes_b))
    }
}

impl CrossoverStrategy<Alternative> for OnePointCrossover {
    fn crossover(
        &self,
        first: &Alternative,
        second: &Alternative,
        rng: &mut RandomNumberGenerator,
    ) -> (Alternative, Alternative) {
        if first.is_empty() || rng.gen_probability() >= self.probability {
            return (first.clone(), second.clone());
        }
        let cut = rng.gen_index(first.len());
        Self::cross_at(first, second, cut)
    }
}

/// Two cut points `lo <= hi`, each drawn uniformly from `[0, len - 1]`.
pub(crate) fn draw_cuts(len: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
    let a = rng.gen_index(len);
    let b = rng.gen_index(len);
    (a.min(b), a.max(b))
}

/// Two-point crossover on factoradic genomes: the genes in `[lo, hi)` are exchanged.
#[derive(Debug, Clone)]
pub struct TwoPointCrossover {
    probability: f64,
}

impl TwoPointCrossover {
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("Crossover probability", probability)?,
        })
    }

    pub fn cross_between(
        first: &Alternative,
        second: &Alternative,
        lo: usize,
        hi: usize,
    ) -> (Alternative, Alternative) {
        let mut genes_a = first.genes().to_vec();
        let mut genes_b = second.genes().to_vec();
        let hi = hi.min(genes_a.len());
        for position in lo.min(hi)..hi {
            std::mem::swap(&mut genes_a[position], &mut genes_b[position]);
        }
        (first.with_genes(genes_a), second.with_genes(genes_b))
    }
}

impl CrossoverStrategy<Alternative> for TwoPointCrossover {
    fn crossover(
        &self,
        first: &Alternative,
        second: &Alternative,
        rng: &mut RandomNumberGenerator,
    ) -> (Alternative, Alternative) {
        if first.is_empty() || rng.gen_probability() >= self.probability {
            return (first.clone(), second.clone());
        }
        let (lo, hi) = draw_cuts(first.len(), rng);
        Self::cross_between(first, second, lo, hi)
    }
}

/// Ordered crossover on canonical tours.
///
/// Two cuts `c1 <= c2` pick a segment of one parent. The child is the other parent with
/// the segment's cities removed and the segment inserted back at `c1`, so the relative
/// order of the remaining cities is inherited from the other parent. The second child
/// is built the same way with the parents' roles exchanged.
#[derive(Debug, Clone)]
pub struct OrderedCrossover {
    probability: f64,
}

impl OrderedCrossover {
    pub fn new(probability: f64) -> Result<Self> {
        Ok(Self {
            probability: ensure_probability("Crossover probability", probability)?,
        })
    }

    fn child(donor: &[usize], receiver: &[usize], lo: usize, hi: usize) -> Vec<usize> {
        let segment = &donor[lo..hi];
        let mut order: Vec<usize> = receiver
            .iter()
            .copied()
            .filter(|city| !segment.contains(city))
            .collect();
        let tail = order.split_off(lo.min(order.len()));
        order.extend_from_slice(segment);
        order.extend(tail);
        order
    }

    pub fn cross_between(first: &Tour, second: &Tour, lo: usize, hi: usize) -> (Tour, Tour) {
        let hi = hi.min(first.len());
        let lo = lo.min(hi);
        let a = Self::child(first.order(), second.order(), lo, hi);
        let b = Self::child(second.order(), first.order(), lo, hi);
        (
            Tour::from_order(Arc::clone(first.problem()), a),
            Tour::from_order(Arc::clone(second.problem()), b),
        )
    }
}

impl CrossoverStrategy<Tour> for OrderedCrossover {
    fn crossover(&self, first: &Tour, second: &Tour, rng: &mut RandomNumberGenerator) -> (Tour, Tour) {
        if first.is_empty() || rng.gen_probability() >= self.probability {
            return (first.clone(), second.clone());
        }
        let (lo, hi) = draw_cuts(first.len(), rng);
        Self::cross_between(first, second, lo, hi)
    }
}
