//! Genetic Algorithm framework.
//!
//! A generic GA engine built on trait-based abstractions. A target problem
//! implements [`GaProblem`], which specifies how to create, decode and
//! mutate chromosomes; the engine owns population management, selection,
//! crossover, mutation scheduling, incumbent tracking and termination.
//!
//! # Core Traits
//!
//! - [`Phenotype`]: A decoded candidate with an engine-side cost
//! - [`GaProblem`]: Problem definition: initialization, decoding, mutation
//!
//! # Key Types
//!
//! - [`Chromosome`]: Fixed-length gene sequence
//! - [`GaConfig`]: Algorithm parameters (population size, operators, bounds)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Incumbent and run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Two-point and uniform crossover, fixed-rate and adaptive mutation
//! - [`selection`]: Tournament selection and best-feasible search
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{CrossoverKind, GaConfig};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{Chromosome, GaProblem, Phenotype};
