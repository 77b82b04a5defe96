use crate::{
    breeding::{CrossoverStrategy, MutationStrategy},
    error::{Result, SolverError},
    selection::SelectionStrategy,
    specimen::Specimen,
};

use super::{
    fitness::{FitnessFunction, InverseGoal},
    options::EvolutionOptions,
    EvolutionLauncher,
};

/// Assembles an [`EvolutionLauncher`] from its parts.
///
/// Selection, crossover and mutation are required. Fitness defaults to [`InverseGoal`]
/// and the options to [`EvolutionOptions::default`].
pub struct EvolutionLauncherBuilder<S: Specimen> {
    fitness: Option<Box<dyn FitnessFunction<S>>>,
    selection: Option<Box<dyn SelectionStrategy>>,
    crossover: Option<Box<dyn CrossoverStrategy<S>>>,
    mutation: Option<Box<dyn MutationStrategy<S>>>,
    options: Option<EvolutionOptions>,
}

impl<S: Specimen> EvolutionLauncherBuilder<S> {
    pub fn new() -> Self {
        Self {
            fitness: None,
            selection: None,
            crossover: None,
            mutation: None,
            options: None,
        }
    }

    pub fn with_fitness(mut self, fitness: impl FitnessFunction<S> + 'static) -> Self {
        self.fitness = Some(Box::new(fitness));
        self
    }

    pub fn with_selection(mut self, selection: Box<dyn SelectionStrategy>) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_crossover(mut self, crossover: Box<dyn CrossoverStrategy<S>>) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: Box<dyn MutationStrategy<S>>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<S>> {
        let selection = self.selection.ok_or_else(|| {
            SolverError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            SolverError::Configuration("Crossover strategy not specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            SolverError::Configuration("Mutation strategy not specified".to_string())
        })?;

        Ok(EvolutionLauncher::new(
            self.fitness
                .unwrap_or_else(|| Box::new(InverseGoal::default()) as Box<dyn FitnessFunction<S>>),
            selection,
            crossover,
            mutation,
            self.options.unwrap_or_default(),
        ))
    }
}

impl<S: Specimen> Default for EvolutionLauncherBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::{OrderedCrossover, SwapMutation};
    use crate::selection::RankBasedSelection;
    use crate::tour::Tour;

    #[test]
    fn test_missing_parts_are_reported() {
        let missing_selection = EvolutionLauncherBuilder::<Tour>::new()
            .with_crossover(Box::new(OrderedCrossover::new(0.5).unwrap()))
            .with_mutation(Box::new(SwapMutation::new(0.5).unwrap()))
            .build();
        assert!(matches!(missing_selection, Err(SolverError::Configuration(_))));

        let missing_mutation = EvolutionLauncherBuilder::<Tour>::new()
            .with_selection(Box::new(RankBasedSelection::new()))
            .with_crossover(Box::new(OrderedCrossover::new(0.5).unwrap()))
            .build();
        assert!(missing_mutation.is_err());
    }

    #[test]
    fn test_defaults() {
        let launcher = EvolutionLauncherBuilder::<Tour>::new()
            .with_selection(Box::new(RankBasedSelection::new()))
            .with_crossover(Box::new(OrderedCrossover::new(0.5).unwrap()))
            .with_mutation(Box::new(SwapMutation::new(0.5).unwrap()))
            .build()
            .unwrap();
        assert_eq!(launcher.options().get_population_size(), 10);
    }
}
