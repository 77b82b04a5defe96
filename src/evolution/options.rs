//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct carries the parameters the genetic algorithm engine
//! reads itself: the population size and the population size from which fitness is
//! evaluated in parallel. Crossover and mutation probabilities belong to the operators,
//! which are built with them. The `IslandOptions` struct adds the deme count and the
//! migration schedule of the island model.
//!
//! ## Example
//!
//! ```rust
//! use salesman::evolution::options::{EvolutionOptions, IslandOptions, MigrationMode};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(100)
//!     .build()
//!     .unwrap();
//! assert_eq!(options.get_population_size(), 100);
//! assert_eq!(options.get_parallel_threshold(), 1000);
//!
//! let islands = IslandOptions::builder()
//!     .demes(4)
//!     .migration_mode(MigrationMode::Ranked)
//!     .build()
//!     .unwrap();
//! assert_eq!(islands.get_migration_gap(), 5);
//! ```

use std::str::FromStr;

use crate::config::{keys, MethodConfig};
use crate::error::{ensure_positive, Result, SolverError};

#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    pub fn new(population_size: usize) -> Result<Self> {
        Self::builder().population_size(population_size).build()
    }

    /// Reads `population_size` and `parallel_threshold`.
    pub fn from_config(config: &MethodConfig) -> Result<Self> {
        Self::builder()
            .population_size(config.parse_or(keys::POPULATION_SIZE, keys::DEFAULT_POPULATION_SIZE)?)
            .parallel_threshold(config.parse_or(
                keys::PARALLEL_THRESHOLD,
                keys::DEFAULT_PARALLEL_THRESHOLD,
            )?)
            .build()
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: keys::DEFAULT_POPULATION_SIZE,
            parallel_threshold: keys::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        Ok(EvolutionOptions {
            population_size: ensure_positive(
                "Population size",
                self.population_size.unwrap_or(defaults.population_size),
            )?,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        })
    }
}

/// How migrants enter the neighboring demes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationMode {
    /// Every deme drops its two least fit individuals, then receives the best
    /// individual of each ring neighbor.
    Ranked,
    /// The best of each deme overwrites a uniformly drawn individual in each ring
    /// neighbor.
    Random,
}

impl MigrationMode {
    pub fn name(&self) -> &'static str {
        match self {
            MigrationMode::Ranked => "ranked",
            MigrationMode::Random => "random",
        }
    }
}

impl FromStr for MigrationMode {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ranked" => Ok(MigrationMode::Ranked),
            "random" => Ok(MigrationMode::Random),
            other => Err(SolverError::Configuration(format!(
                "Unknown migration mode '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IslandOptions {
    demes: usize,
    migration_gap: usize,
    migration_mode: MigrationMode,
}

impl IslandOptions {
    /// Reads `demes` and `migration_gap`. The migration mode is resolved by the
    /// registry, so that an unknown name falls back instead of failing.
    pub fn from_config(config: &MethodConfig, migration_mode: MigrationMode) -> Result<Self> {
        Self::builder()
            .demes(config.parse_or(keys::DEMES, keys::DEFAULT_DEMES)?)
            .migration_gap(config.parse_or(keys::MIGRATION_GAP, keys::DEFAULT_MIGRATION_GAP)?)
            .migration_mode(migration_mode)
            .build()
    }

    pub fn get_demes(&self) -> usize {
        self.demes
    }

    pub fn get_migration_gap(&self) -> usize {
        self.migration_gap
    }

    pub fn get_migration_mode(&self) -> MigrationMode {
        self.migration_mode
    }

    /// Whether migration follows the generation with 0-based index `generation`.
    pub fn migrates_after(&self, generation: usize) -> bool {
        generation % self.migration_gap == self.migration_gap - 1
    }

    pub fn builder() -> IslandOptionsBuilder {
        IslandOptionsBuilder::default()
    }
}

impl Default for IslandOptions {
    fn default() -> Self {
        Self {
            demes: keys::DEFAULT_DEMES,
            migration_gap: keys::DEFAULT_MIGRATION_GAP,
            migration_mode: MigrationMode::Random,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IslandOptionsBuilder {
    demes: Option<usize>,
    migration_gap: Option<usize>,
    migration_mode: Option<MigrationMode>,
}

impl IslandOptionsBuilder {
    pub fn demes(mut self, value: usize) -> Self {
        self.demes = Some(value);
        self
    }

    pub fn migration_gap(mut self, value: usize) -> Self {
        self.migration_gap = Some(value);
        self
    }

    pub fn migration_mode(mut self, value: MigrationMode) -> Self {
        self.migration_mode = Some(value);
        self
    }

    pub fn build(self) -> Result<IslandOptions> {
        let defaults = IslandOptions::default();
        Ok(IslandOptions {
            demes: ensure_positive("Deme count", self.demes.unwrap_or(defaults.demes))?,
            migration_gap: ensure_positive(
                "Migration gap",
                self.migration_gap.unwrap_or(defaults.migration_gap),
            )?,
            migration_mode: self.migration_mode.unwrap_or(defaults.migration_mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let options = EvolutionOptions::builder().build().unwrap();
        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_parallel_threshold(), 1000);
    }

    #[test]
    fn test_builder_validation() {
        assert!(EvolutionOptions::new(0).is_err());
        assert_eq!(EvolutionOptions::new(7).unwrap().get_population_size(), 7);
        assert!(IslandOptions::builder().demes(0).build().is_err());
        assert!(IslandOptions::builder().migration_gap(0).build().is_err());
    }

    #[test]
    fn test_from_config() {
        let config = MethodConfig::new()
            .with(keys::POPULATION_SIZE, 60)
            .with(keys::PARALLEL_THRESHOLD, 40)
            .with(keys::DEMES, 3)
            .with(keys::MIGRATION_GAP, 2);
        let options = EvolutionOptions::from_config(&config).unwrap();
        assert_eq!(options.get_population_size(), 60);
        assert_eq!(options.get_parallel_threshold(), 40);

        let islands = IslandOptions::from_config(&config, MigrationMode::Ranked).unwrap();
        assert_eq!(islands.get_demes(), 3);
        assert_eq!(islands.get_migration_gap(), 2);
        assert_eq!(islands.get_migration_mode(), MigrationMode::Ranked);

        let broken = MethodConfig::new().with(keys::POPULATION_SIZE, "many");
        assert!(EvolutionOptions::from_config(&broken).is_err());
    }

    #[test]
    fn test_migration_schedule() {
        let islands = IslandOptions::builder().migration_gap(3).build().unwrap();
        let fired: Vec<usize> = (0..10).filter(|&g| islands.migrates_after(g)).collect();
        assert_eq!(fired, vec![2, 5, 8]);

        let every = IslandOptions::builder().migration_gap(1).build().unwrap();
        assert!((0..5).all(|g| every.migrates_after(g)));
    }

    #[test]
    fn test_migration_mode_names() {
        assert_eq!("ranked".parse::<MigrationMode>().unwrap(), MigrationMode::Ranked);
        assert_eq!(MigrationMode::Random.name(), "random");
        assert!("ring".parse::<MigrationMode>().is_err());
    }
}
