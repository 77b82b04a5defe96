use std::fmt::Debug;

use crate::error::{Result, SolverError};
use crate::specimen::Specimen;

/// Maps a specimen to the score the selection strategies work on. Higher is better.
///
/// Fitness is a pure function of the specimen and is recomputed every generation.
pub trait FitnessFunction<S: Specimen>: Debug + Send + Sync {
    fn fitness(&self, specimen: &S) -> f64;
}

/// `scale / (1 + goal)`: positive, and strictly decreasing in the tour length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct InverseGoal {
    scale: f64,
}

impl InverseGoal {
    /// # Errors
    ///
    /// Returns an error if `scale` is not positive and finite.
    pub fn new(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SolverError::Configuration(format!(
                "Fitness scale must be positive and finite, got {}",
                scale
            )));
        }
        Ok(Self { scale })
    }
}

impl Default for InverseGoal {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl<S: Specimen> FitnessFunction<S> for InverseGoal {
    fn fitness(&self, specimen: &S) -> f64 {
        self.scale / (1.0 + specimen.goal())
    }
}
