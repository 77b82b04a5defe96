use crate::error::{Result, SolverError};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// A selection strategy that picks individuals with probability proportional to their
/// fitness.
///
/// A value is drawn uniformly from `[0, sum)`. The wheel is then walked from the last
/// individual to the first, subtracting each weight from the running total, and the
/// first index at which the total drops to or below the drawn value wins.
///
/// Every weight must be non-negative and the sum must be positive and finite.
///
/// # Examples
///
/// ```
/// use salesman::rng::RandomNumberGenerator;
/// use salesman::selection::{RouletteWheelSelection, SelectionStrategy};
///
/// let fitness = vec![0.0, 0.0, 5.0];
/// let mut rng = RandomNumberGenerator::from_seed(11);
///
/// let selection = RouletteWheelSelection::new();
/// assert_eq!(selection.select(&fitness, &mut rng).unwrap(), 2);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        ensure_not_empty(fitness)?;
        spin(fitness, rng)
    }
}

/// Spins a roulette wheel over `weights` and returns the winning index.
pub(crate) fn spin(weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
    if let Some(negative) = weights.iter().find(|&&w| w < 0.0) {
        return Err(SolverError::FitnessCalculation(format!(
            "Roulette wheel selection requires non-negative fitness values, got {}",
            negative
        )));
    }

    let sum: f64 = weights.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(SolverError::FitnessCalculation(format!(
            "Roulette wheel selection requires a positive, finite fitness sum, got {}",
            sum
        )));
    }

    let threshold = rng.gen_range(0.0, sum);
    let mut total = sum;
    for (index, weight) in weights.iter().enumerate().rev() {
        total -= weight;
        if total <= threshold {
            return Ok(index);
        }
    }

    // Rounding can leave the running total a hair above the threshold.
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights_are_never_selected() {
        let fitness = vec![0.0, 3.0, 0.0, 1.0, 0.0];
        let selection = RouletteWheelSelection::new();
        let mut rng = RandomNumberGenerator::from_seed(7);

        for _ in 0..500 {
            let index = selection.select(&fitness, &mut rng).unwrap();
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn test_selection_is_proportional() {
        let fitness = vec![1.0, 3.0];
        let selection = RouletteWheelSelection::new();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let second = (0..4000)
            .filter(|_| selection.select(&fitness, &mut rng).unwrap() == 1)
            .count();
        assert!(second > 2800 && second < 3200);
    }

    #[test]
    fn test_walks_from_the_end() {
        // total = 4; after subtracting the last weight the total is 3, so any draw in
        // [3, 4) picks the last index and any draw below it moves on to index 0.
        let mut rng = RandomNumberGenerator::from_seed(0);
        let mut probe = rng.clone();
        let threshold = probe.gen_range(0.0, 4.0);

        let expected = if threshold >= 3.0 { 1 } else { 0 };
        assert_eq!(spin(&[3.0, 1.0], &mut rng).unwrap(), expected);
    }

    #[test]
    fn test_rejects_unusable_weights() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let selection = RouletteWheelSelection::new();
        assert!(matches!(
            selection.select(&[], &mut rng),
            Err(SolverError::EmptyPopulation)
        ));
        assert!(matches!(
            selection.select(&[0.0, 0.0], &mut rng),
            Err(SolverError::FitnessCalculation(_))
        ));
        assert!(selection.select(&[1.0, -0.5], &mut rng).is_err());
        assert!(selection.select(&[1.0, f64::INFINITY], &mut rng).is_err());
    }
}
