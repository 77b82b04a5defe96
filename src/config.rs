//! # Method configuration
//!
//! Every solver method is configured through a flat map from option name to string
//! value. Values are parsed on demand by the method that reads them; a missing key falls
//! back to the documented default, and a value that does not parse is a configuration
//! error naming the key.
//!
//! ```rust
//! use salesman::config::{keys, MethodConfig};
//!
//! let config: MethodConfig = [("population_size", "40"), ("selection", "rank_selection")]
//!     .into_iter()
//!     .collect();
//!
//! let size: usize = config
//!     .parse_or(keys::POPULATION_SIZE, keys::DEFAULT_POPULATION_SIZE)
//!     .unwrap();
//! assert_eq!(size, 40);
//! assert_eq!(config.str_or(keys::SELECTION, "tournament_selection"), "rank_selection");
//! assert!(!config.flag(keys::PRINT_POPULATION_STATS).unwrap());
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, SolverError};

/// Option names understood by the built-in methods, with their defaults.
pub mod keys {
    pub const POPULATION_SIZE: &str = "population_size";
    pub const DEFAULT_POPULATION_SIZE: usize = 10;

    pub const CROSSOVER_PROBABILITY: &str = "crossover_probability";
    pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.9;

    pub const MUTATION_PROBABILITY: &str = "mutation_probability";
    pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;

    /// Number of generations of the genetic algorithm.
    pub const ITERATION_COUNT: &str = "iteration_count";
    pub const DEFAULT_ITERATION_COUNT: usize = 10;

    pub const SELECTION: &str = "selection";
    pub const TOURNAMENT_SIZE: &str = "tournament_size";
    pub const DEFAULT_TOURNAMENT_SIZE: usize = 2;

    pub const CROSSOVER: &str = "crossover";
    pub const MUTATION: &str = "mutation";

    pub const TERMINATION: &str = "termination";
    pub const STALL_GENERATIONS: &str = "stall_generations";
    pub const DEFAULT_STALL_GENERATIONS: usize = 100;
    pub const MIN_STDDEV: &str = "min_stddev";
    pub const DEFAULT_MIN_STDDEV: f64 = 1e-7;

    pub const PRINT_POPULATION_STATS: &str = "print_population_stats";

    /// `factoradic` or `permutation`.
    pub const ENCODING: &str = "encoding";

    /// Iteration budget of the local searches.
    pub const ITERATIONS: &str = "iterations";
    pub const DEFAULT_ITERATIONS: usize = 1000;

    pub const TABU_SIZE: &str = "tabu_size";
    pub const DEFAULT_TABU_SIZE: usize = 50;

    pub const TEMPERATURE: &str = "temperature";
    pub const DEFAULT_TEMPERATURE: f64 = 1000.0;
    /// `inverse` or `geometric`.
    pub const COOLING: &str = "cooling";
    pub const COOLING_RATE: &str = "cooling_rate";
    pub const DEFAULT_COOLING_RATE: f64 = 0.995;

    pub const DEMES: &str = "demes";
    pub const DEFAULT_DEMES: usize = 5;
    pub const MIGRATION_GAP: &str = "migration_gap";
    pub const DEFAULT_MIGRATION_GAP: usize = 5;
    /// `random` or `ranked`.
    pub const MIGRATION: &str = "migration";

    pub const FITNESS_SCALE: &str = "fitness_scale";
    pub const DEFAULT_FITNESS_SCALE: f64 = 1.0;

    pub const PARALLEL_THRESHOLD: &str = "parallel_threshold";
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;
}

/// A flat, ordered map of option names to raw string values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodConfig {
    values: BTreeMap<String, String>,
}

impl MethodConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the configuration with `key` set to `value`.
    pub fn with<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parses the value under `key`, or returns `default` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is present but does not parse.
    pub fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| {
                SolverError::Configuration(format!(
                    "Option '{}' has malformed value '{}'",
                    key, raw
                ))
            }),
        }
    }

    /// Reads a boolean switch. An absent key is `false`.
    pub fn flag(&self, key: &str) -> Result<bool> {
        match self.get(key).map(|raw| raw.trim().to_ascii_lowercase()) {
            None => Ok(false),
            Some(raw) => match raw.as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(SolverError::Configuration(format!(
                    "Option '{}' expects a boolean, got '{}'",
                    key, raw
                ))),
            },
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for MethodConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let config = MethodConfig::new();
        assert_eq!(config.parse_or(keys::TABU_SIZE, 7usize).unwrap(), 7);
        assert_eq!(config.str_or(keys::ENCODING, "factoradic"), "factoradic");
        assert!(!config.flag(keys::PRINT_POPULATION_STATS).unwrap());
    }

    #[test]
    fn test_malformed_number_names_the_key() {
        let config = MethodConfig::new().with(keys::POPULATION_SIZE, "ten");
        let error = config.parse_or(keys::POPULATION_SIZE, 10usize).unwrap_err();
        assert!(matches!(error, SolverError::Configuration(_)));
        assert!(error.to_string().contains("population_size"));
    }

    #[test]
    fn test_parses_typed_values() {
        let config = MethodConfig::new()
            .with(keys::MUTATION_PROBABILITY, 0.25)
            .with(keys::DEMES, " 4 ");
        assert_eq!(config.parse_or(keys::MUTATION_PROBABILITY, 0.1).unwrap(), 0.25);
        assert_eq!(config.parse_or(keys::DEMES, 5usize).unwrap(), 4);
    }

    #[test]
    fn test_flags() {
        for (raw, expected) in [("true", true), ("YES", true), ("1", true), ("no", false), ("0", false)] {
            let config = MethodConfig::new().with(keys::PRINT_POPULATION_STATS, raw);
            assert_eq!(config.flag(keys::PRINT_POPULATION_STATS).unwrap(), expected);
        }
        let config = MethodConfig::new().with(keys::PRINT_POPULATION_STATS, "maybe");
        assert!(config.flag(keys::PRINT_POPULATION_STATS).is_err());
    }

    #[test]
    fn test_later_pairs_win() {
        let config: MethodConfig = vec![("a", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(config.get("a"), Some("2"));
        assert_eq!(config.iter().count(), 1);
    }
}
