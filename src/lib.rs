//! Genetic algorithm for the quadratic binary function with a knapsack
//! constraint (kQBF).
//!
//! Given `n` binary variables, a symmetric coefficient matrix, per-variable
//! weights and a capacity, find a selection maximizing the quadratic value
//! whose total weight stays within the capacity.
//!
//! - **[`ga`]**: A generic genetic algorithm engine parameterized over a
//!   [`GaProblem`](ga::GaProblem): tournament selection, two-point and
//!   uniform crossover, fixed-rate and adaptive mutation, feasible-incumbent
//!   tracking, generation and wall-clock termination.
//! - **[`qbf`]**: The kQBF objective with full and delta evaluation, its
//!   bit-vector decoder, an instance reader and the [`qbf::solve`] facade.
//!
//! # Example
//!
//! ```
//! use kqbf_ga::ga::GaConfig;
//! use kqbf_ga::qbf::{solve, KqbfObjective};
//!
//! let mut c = vec![vec![0.0; 4]; 4];
//! c[0][0] = 10.0;
//! let objective = KqbfObjective::new(c, vec![1.0; 4], 2.0).unwrap();
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_max_generations(30)
//!     .with_seed(42);
//! let result = solve(&objective, &config).unwrap();
//! let best = result.incumbent.expect("a feasible selection exists");
//! assert_eq!(best.cost, 10.0);
//! ```

pub mod error;
pub mod ga;
pub mod qbf;

pub use error::{GaError, InstanceError};
