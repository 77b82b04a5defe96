//! # IslandLauncher
//!
//! The island model splits the population into `D` demes of equal size. Every
//! generation each deme breeds its own next generation with the wrapped
//! [`EvolutionLauncher`], and the demes do so concurrently. Every `migration_gap`
//! generations the best individual of each deme is copied into both of its neighbors on
//! a ring, deme `i` feeding demes `i - 1` and `i + 1` modulo `D`.
//!
//! Each deme draws from its own generator, spawned from the caller's generator when the
//! run starts, so a seeded run is reproducible no matter how the demes are scheduled.
//! Migration itself is serial and draws from the caller's generator.

use rayon::prelude::*;
use tracing::debug;

use super::launcher::{fittest, EvolutionLauncher, EvolutionResult};
use super::options::{IslandOptions, MigrationMode};
use super::termination::TerminationCondition;
use crate::error::{OptionExt, Result, SolverError};
use crate::rng::RandomNumberGenerator;
use crate::specimen::Specimen;

#[derive(Debug)]
pub struct IslandLauncher<S: Specimen> {
    launcher: EvolutionLauncher<S>,
    options: IslandOptions,
}

impl<S: Specimen> IslandLauncher<S> {
    pub fn new(launcher: EvolutionLauncher<S>, options: IslandOptions) -> Self {
        Self { launcher, options }
    }

    pub fn launcher(&self) -> &EvolutionLauncher<S> {
        &self.launcher
    }

    pub fn options(&self) -> &IslandOptions {
        &self.options
    }

    /// Size of every deme for a population of `population_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population does not split evenly, or if the demes are
    /// too small for ranked migration, which needs three individuals per deme.
    pub fn deme_size(&self, population_size: usize) -> Result<usize> {
        let demes = self.options.get_demes();
        if population_size == 0 {
            return Err(SolverError::EmptyPopulation);
        }
        if population_size % demes != 0 {
            return Err(SolverError::Configuration(format!(
                "Population of {} cannot be split into {} demes of equal size",
                population_size, demes
            )));
        }
        let size = population_size / demes;
        if self.options.get_migration_mode() == MigrationMode::Ranked && size < 3 {
            return Err(SolverError::Configuration(format!(
                "Ranked migration needs at least 3 individuals per deme, got {}",
                size
            )));
        }
        Ok(size)
    }

    /// Evolves `initial` until `termination` returns `false`. The termination condition
    /// sees the whole population, with the demes joined back in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or does not split into the
    /// configured demes, if the problem has fewer than two cities, or if fitness
    /// evaluation or selection fails.
    pub fn evolve(
        &self,
        initial: Vec<S>,
        termination: &mut dyn TerminationCondition<S>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<S>> {
        let first = initial.first().ok_or_else_solver(|| SolverError::EmptyPopulation)?;
        first.problem().ensure_routable()?;
        let deme_size = self.deme_size(initial.len())?;

        let mut deme_rngs: Vec<RandomNumberGenerator> =
            (0..self.options.get_demes()).map(|_| rng.spawn()).collect();

        let mut population = initial;
        let mut fitness = self.launcher.evaluate(&population)?;
        let mut generations = 0;

        loop {
            let mut demes = population
                .par_chunks(deme_size)
                .zip(fitness.par_chunks(deme_size))
                .zip(deme_rngs.par_iter_mut())
                .map(|((deme, deme_fitness), deme_rng)| {
                    self.launcher.generation(deme, deme_fitness, deme_rng)
                })
                .collect::<Result<Vec<Vec<S>>>>()?;

            if self.options.migrates_after(generations) {
                debug!(
                    generation = generations,
                    mode = self.options.get_migration_mode().name(),
                    "migration"
                );
                self.migrate(&mut demes, rng)?;
            }

            population = demes.into_iter().flatten().collect();
            fitness = self.launcher.evaluate(&population)?;
            generations += 1;

            if !termination.should_continue(&population, &fitness, generations) {
                break;
            }
        }

        fittest(population, &fitness, generations)
    }

    /// Exchanges the best individual of every deme with its two ring neighbors.
    ///
    /// In ranked mode every deme first drops its two least fit individuals and then
    /// receives two migrants, so deme sizes are unchanged. In random mode each migrant
    /// overwrites a uniformly drawn individual of the receiving deme. Migrants are
    /// chosen before any deme is changed.
    ///
    /// # Errors
    ///
    /// Returns an error if a deme is empty, or if ranked mode meets a deme of fewer than
    /// three individuals.
    pub fn migrate(&self, demes: &mut [Vec<S>], rng: &mut RandomNumberGenerator) -> Result<()> {
        let count = demes.len();
        if count == 0 {
            return Ok(());
        }

        let mut migrants = Vec::with_capacity(count);
        for deme in demes.iter_mut() {
            let fitness = self.launcher.evaluate(deme)?;
            let mut ranked: Vec<usize> = (0..deme.len()).collect();
            ranked.sort_by(|&a, &b| fitness[a].total_cmp(&fitness[b]));

            let best = *ranked.last().ok_or_else_solver(|| SolverError::EmptyPopulation)?;
            migrants.push(deme[best].clone());

            if self.options.get_migration_mode() == MigrationMode::Ranked {
                if deme.len() < 3 {
                    return Err(SolverError::Configuration(format!(
                        "Ranked migration needs at least 3 individuals per deme, got {}",
                        deme.len()
                    )));
                }
                let mut worst = [ranked[0], ranked[1]];
                worst.sort_unstable();
                deme.remove(worst[1]);
                deme.remove(worst[0]);
            }
        }

        for (i, migrant) in migrants.into_iter().enumerate() {
            let right = (i + 1) % count;
            let left = (i + count - 1) % count;
            for target in [right, left] {
                match self.options.get_migration_mode() {
                    MigrationMode::Ranked => demes[target].push(migrant.clone()),
                    MigrationMode::Random => {
                        let slot = rng.gen_index(demes[target].len());
                        demes[target][slot] = migrant.clone();
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::breeding::{OrderedCrossover, SwapMutation};
    use crate::evolution::fitness::InverseGoal;
    use crate::evolution::options::EvolutionOptions;
    use crate::evolution::termination::GenerationLimit;
    use crate::problem::Problem;
    use crate::selection::TournamentSelection;
    use crate::tour::Tour;

    fn islands(demes: usize, mode: MigrationMode) -> IslandLauncher<Tour> {
        let launcher = EvolutionLauncher::<Tour>::new(
            Box::new(InverseGoal::default()),
            Box::new(TournamentSelection::default()),
            Box::new(OrderedCrossover::new(0.8).unwrap()),
            Box::new(SwapMutation::new(0.1).unwrap()),
            EvolutionOptions::new(12).unwrap(),
        );
        let options = IslandOptions::builder()
            .demes(demes)
            .migration_gap(2)
            .migration_mode(mode)
            .build()
            .unwrap();
        IslandLauncher::new(launcher, options)
    }

    fn problem() -> Arc<Problem> {
        Arc::new(Problem::from_coordinates((0..7).map(|i| {
            let angle = i as f64 * 2.0 * std::f64::consts::PI / 7.0;
            (angle.cos(), angle.sin())
        })))
    }

    #[test]
    fn test_deme_size_validation() {
        let ranked = islands(3, MigrationMode::Ranked);
        assert_eq!(ranked.deme_size(12).unwrap(), 4);
        assert!(ranked.deme_size(10).is_err());
        assert!(ranked.deme_size(6).is_err());
        assert!(matches!(ranked.deme_size(0), Err(SolverError::EmptyPopulation)));
        assert_eq!(islands(3, MigrationMode::Random).deme_size(6).unwrap(), 2);
    }

    #[test]
    fn test_ranked_migration_replaces_the_two_worst() {
        let problem = problem();
        let launcher = islands(2, MigrationMode::Ranked);
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut demes: Vec<Vec<Tour>> = (0..2)
            .map(|_| (0..4).map(|_| Tour::random(&problem, &mut rng)).collect())
            .collect();
        let best_goal = |deme: &Vec<Tour>| deme.iter().map(|t| t.goal()).fold(f64::INFINITY, f64::min);
        let best_first = best_goal(&demes[0]);
        let best_second = best_goal(&demes[1]);

        launcher.migrate(&mut demes, &mut rng).unwrap();

        assert!(demes.iter().all(|deme| deme.len() == 4));
        // With two demes both neighbors of one deme are the other deme.
        assert_eq!(demes[0][2], demes[0][3]);
        assert_eq!(demes[1][2], demes[1][3]);
        assert!((demes[0][2].goal() - best_second).abs() < 1e-9);
        assert!((demes[1][2].goal() - best_first).abs() < 1e-9);
    }

    #[test]
    fn test_random_migration_keeps_sizes() {
        let problem = problem();
        let launcher = islands(3, MigrationMode::Random);
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut demes: Vec<Vec<Tour>> = (0..3)
            .map(|_| (0..4).map(|_| Tour::random(&problem, &mut rng)).collect())
            .collect();

        launcher.migrate(&mut demes, &mut rng).unwrap();
        assert!(demes.iter().all(|deme| deme.len() == 4));
    }

    #[test]
    fn test_random_migration_rejects_an_empty_deme() {
        let problem = problem();
        let launcher = islands(3, MigrationMode::Random);
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut demes: Vec<Vec<Tour>> = vec![
            (0..4).map(|_| Tour::random(&problem, &mut rng)).collect(),
            Vec::new(),
            (0..4).map(|_| Tour::random(&problem, &mut rng)).collect(),
        ];

        assert!(matches!(
            launcher.migrate(&mut demes, &mut rng),
            Err(SolverError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_evolve_is_reproducible() {
        let problem = problem();
        let run = |seed: u64| {
            let islands = islands(3, MigrationMode::Random);
            let mut rng = RandomNumberGenerator::from_seed(seed);
            let population = islands.launcher().random_population(&problem, &mut rng);
            islands
                .evolve(population, &mut GenerationLimit::new(10), &mut rng)
                .unwrap()
        };
        let first = run(21);
        let second = run(21);
        assert_eq!(first.best, second.best);
        assert_eq!(first.generations, 10);
    }
}
