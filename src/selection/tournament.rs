use crate::config::{keys, MethodConfig};
use crate::error::{ensure_positive, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_not_empty, SelectionStrategy};

/// A selection strategy that picks the fittest of a few uniformly drawn individuals.
///
/// Participants are drawn with replacement. A later draw displaces the current winner
/// when its fitness is greater than or equal to the winner's, so ties go to the draw
/// made last. With the default size of two this is the classic binary tournament.
///
/// Larger tournaments put more pressure on the best individuals; a size of one is
/// uniform random selection.
///
/// # Examples
///
/// ```
/// use salesman::rng::RandomNumberGenerator;
/// use salesman::selection::{SelectionStrategy, TournamentSelection};
///
/// let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let selection = TournamentSelection::default();
/// let index = selection.select(&fitness, &mut rng).unwrap();
/// assert!(index < fitness.len());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        Ok(Self {
            tournament_size: ensure_positive("Tournament size", tournament_size)?,
        })
    }

    /// Reads `tournament_size` from the configuration.
    pub fn from_config(config: &MethodConfig) -> Result<Self> {
        Self::new(config.parse_or(keys::TOURNAMENT_SIZE, keys::DEFAULT_TOURNAMENT_SIZE)?)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 2 }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        ensure_not_empty(fitness)?;

        let mut winner = rng.gen_index(fitness.len());
        for _ in 1..self.tournament_size {
            let challenger = rng.gen_index(fitness.len());
            if fitness[challenger] >= fitness[winner] {
                winner = challenger;
            }
        }

        Ok(winner)
    }
}
