//! # Problem
//!
//! A `Problem` is the ordered list of cities a tour must visit. It is loaded once by the
//! caller, wrapped in an `Arc`, and shared read-only by every candidate solution.
//!
//! ```rust
//! use std::sync::Arc;
//! use salesman::problem::{City, Problem};
//!
//! let problem = Arc::new(Problem::new(vec![
//!     City::new("A", 0.0, 0.0),
//!     City::new("B", 3.0, 4.0),
//! ]));
//! assert_eq!(problem.distance(0, 1), 5.0);
//! ```

use crate::error::{Result, SolverError};

/// A named point in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new<S: Into<String>>(name: S, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An ordered, immutable sequence of cities.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    cities: Vec<City>,
}

impl Problem {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Builds a problem from bare coordinates, naming each city by its index.
    pub fn from_coordinates<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let cities = coordinates
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| City::new(i.to_string(), x, y))
            .collect();
        Self { cities }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Distance between the cities at indices `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.cities[a].distance(&self.cities[b])
    }

    /// Rejects problems with fewer than two cities, for which neighborhoods and
    /// crossover are undefined.
    pub fn ensure_routable(&self) -> Result<()> {
        if self.cities.len() < 2 {
            return Err(SolverError::DegenerateProblem {
                cities: self.cities.len(),
            });
        }
        Ok(())
    }
}
