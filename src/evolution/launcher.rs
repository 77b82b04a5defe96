//! # EvolutionLauncher
//!
//! The generational loop of the genetic algorithm:
//!
//! 1. evaluate the fitness of every individual;
//! 2. select `N` parents independently, repeats allowed;
//! 3. cross consecutive parents pairwise;
//! 4. mutate every child;
//! 5. replace the whole population with the children.
//!
//! The loop runs until the termination condition says stop. No individual survives a
//! generation unchanged unless the operators leave it so, and the launcher does not
//! remember the best individual of earlier generations: the result is the fittest
//! member of the final population, which may be worse than one seen before.

use std::sync::Arc;

use rayon::prelude::*;

use super::fitness::FitnessFunction;
use super::options::EvolutionOptions;
use super::termination::TerminationCondition;
use crate::breeding::{CrossoverStrategy, MutationStrategy};
use crate::error::{OptionExt, Result, SolverError};
use crate::problem::Problem;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;
use crate::specimen::Specimen;

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<S: Specimen> {
    /// The fittest individual of the final population.
    pub best: S,
    pub fitness: f64,
    pub goal: f64,
    /// Number of generations run.
    pub generations: usize,
}

#[derive(Debug)]
pub struct EvolutionLauncher<S: Specimen> {
    fitness: Box<dyn FitnessFunction<S>>,
    selection: Box<dyn SelectionStrategy>,
    crossover: Box<dyn CrossoverStrategy<S>>,
    mutation: Box<dyn MutationStrategy<S>>,
    options: EvolutionOptions,
}

impl<S: Specimen> EvolutionLauncher<S> {
    pub fn new(
        fitness: Box<dyn FitnessFunction<S>>,
        selection: Box<dyn SelectionStrategy>,
        crossover: Box<dyn CrossoverStrategy<S>>,
        mutation: Box<dyn MutationStrategy<S>>,
        options: EvolutionOptions,
    ) -> Self {
        Self {
            fitness,
            selection,
            crossover,
            mutation,
            options,
        }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Draws a random population of the configured size.
    pub fn random_population(
        &self,
        problem: &Arc<Problem>,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<S> {
        (0..self.options.get_population_size())
            .map(|_| S::random(problem, rng))
            .collect()
    }

    /// Fitness of every individual, in population order.
    ///
    /// # Errors
    ///
    /// Returns an error if any fitness value is not finite.
    pub fn evaluate(&self, population: &[S]) -> Result<Vec<f64>> {
        let score = |specimen: &S| {
            let value = self.fitness.fitness(specimen);
            if !value.is_finite() {
                return Err(SolverError::FitnessCalculation(format!(
                    "Non-finite fitness score encountered: {}",
                    value
                )));
            }
            Ok(value)
        };

        if population.len() >= self.options.get_parallel_threshold() {
            population.par_iter().map(score).collect()
        } else {
            population.iter().map(score).collect()
        }
    }

    /// Breeds the next generation from `population` and its fitness vector.
    ///
    /// The result has as many individuals as `population`. With an odd size the last
    /// parent has no partner and skips crossover.
    pub fn generation(
        &self,
        population: &[S],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<S>> {
        if population.is_empty() {
            return Err(SolverError::EmptyPopulation);
        }

        let parents = (0..population.len())
            .map(|_| {
                self.selection
                    .select(fitness, rng)
                    .map(|index| &population[index])
            })
            .collect::<Result<Vec<&S>>>()?;

        let mut children = Vec::with_capacity(population.len());
        for pair in parents.chunks(2) {
            match *pair {
                [first, second] => {
                    let (a, b) = self.crossover.crossover(first, second, rng);
                    children.push(self.mutation.mutate(&a, rng));
                    children.push(self.mutation.mutate(&b, rng));
                }
                [single] => children.push(self.mutation.mutate(single, rng)),
                _ => {}
            }
        }

        Ok(children)
    }

    /// Evolves `initial` until `termination` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, the problem has fewer than two
    /// cities, or fitness evaluation or selection fails.
    pub fn evolve(
        &self,
        initial: Vec<S>,
        termination: &mut dyn TerminationCondition<S>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<S>> {
        let first = initial.first().ok_or_else_solver(|| SolverError::EmptyPopulation)?;
        first.problem().ensure_routable()?;

        let mut population = initial;
        let mut fitness = self.evaluate(&population)?;
        let mut generations = 0;

        loop {
            population = self.generation(&population, &fitness, rng)?;
            fitness = self.evaluate(&population)?;
            generations += 1;

            if !termination.should_continue(&population, &fitness, generations) {
                break;
            }
        }

        fittest(population, &fitness, generations)
    }
}

/// The first individual with the highest fitness.
pub(crate) fn fittest<S: Specimen>(
    population: Vec<S>,
    fitness: &[f64],
    generations: usize,
) -> Result<EvolutionResult<S>> {
    let (index, &best_fitness) = fitness
        .iter()
        .enumerate()
        .reduce(|best, current| if current.1 > best.1 { current } else { best })
        .ok_or_else_solver(|| {
            SolverError::Evolution(
                "Evolution completed but no viable candidates were produced".to_string(),
            )
        })?;

    let best = population
        .into_iter()
        .nth(index)
        .ok_or_else_solver(|| SolverError::EmptyPopulation)?;
    let goal = best.goal();

    Ok(EvolutionResult {
        best,
        fitness: best_fitness,
        goal,
        generations,
    })
}
