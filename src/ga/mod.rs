//! Genetic-algorithm assignment optimization.
//!
//! Evolves a population of complete, valid [`Schedule`]s:
//! diverse seeding, tournament selection, multi-point crossover with a
//! mandatory per-camper repair pass, bounded atomic-swap mutation,
//! best-ever elitism and stagnation-based early stopping.
//!
//! # Submodules
//!
//! - [`config`]: [`GaConfig`] and [`FitnessWeights`]
//! - [`fitness`]: schedule scoring
//! - [`seeding`]: the four population-seeding strategies
//! - [`operators`]: crossover + repair, mutation
//! - [`solver`]: the generational loop
//!
//! # References
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"
//!
//! [`Schedule`]: crate::models::Schedule

pub mod config;
pub mod fitness;
pub mod operators;
pub mod seeding;
mod solver;

pub use config::{FitnessWeights, GaConfig};
pub use seeding::SeedStrategy;
pub use solver::{GaResult, GeneticSolver};
