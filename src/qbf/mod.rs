//! Quadratic binary function with a knapsack constraint (kQBF).
//!
//! - [`KqbfObjective`]: coefficients, weights, capacity; full and delta
//!   evaluation
//! - [`KqbfSolution`]: a decoded selection
//! - [`KqbfProblem`]: the bit-vector decoder implementing [`GaProblem`](crate::ga::GaProblem)
//! - [`instance`]: text instance reader
//! - [`solve`]: runs the GA and reports the result as a maximization value

mod decoder;
pub mod instance;
mod objective;
mod solution;

pub use decoder::KqbfProblem;
pub use objective::{ActiveSet, KqbfObjective, Orientation};
pub use solution::KqbfSolution;

use crate::error::GaError;
use crate::ga::{GaConfig, GaResult, GaRunner};

/// Maximizes `objective` with the GA.
///
/// The engine runs on the [`Orientation::Inverse`] view of the objective.
/// The returned incumbent is converted back, so its `cost` is the QBF value
/// of the selection. `history` keeps the engine's negated costs.
///
/// An incumbent of `None` means no feasible selection was ever produced.
pub fn solve(objective: &KqbfObjective, config: &GaConfig) -> Result<GaResult<KqbfSolution>, GaError> {
    let problem = KqbfProblem::new(objective.clone().with_orientation(Orientation::Inverse));
    let mut result = GaRunner::run(&problem, config)?;
    result.incumbent = result.incumbent.map(|best| problem.to_original(best));
    Ok(result)
}
