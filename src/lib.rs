pub mod alternative;
pub mod breeding;
pub mod config;
pub mod error;
pub mod evolution;
pub mod local_search;
pub mod methods;
pub mod problem;
pub mod registry;
pub mod rng;
pub mod selection;
pub mod specimen;
pub mod tour;

// Re-export commonly used types for convenience
pub use alternative::Alternative;
pub use config::MethodConfig;
pub use error::{OptionExt, Result, SolverError};
pub use methods::MethodRegistry;
pub use problem::{City, Problem};
pub use rng::RandomNumberGenerator;
pub use specimen::Specimen;
pub use tour::{Tour, TourReport};
