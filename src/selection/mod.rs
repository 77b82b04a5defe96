//! # Selection
//!
//! Parent selection for the genetic algorithm. Every strategy maps a fitness vector to
//! one population index and is called once per parent slot.

pub mod rank;
pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use rank::RankBasedSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
