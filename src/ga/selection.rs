//! Parent selection and best-member search.
//!
//! All functions work on the already-decoded solutions of a generation and
//! return indices into it, so a generation is decoded once and ranked many
//! times.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Chromosome, GaProblem, Phenotype};
use rand::Rng;

/// Tournament selection over decoded solutions.
///
/// Draws `size` members uniformly with replacement. A later draw replaces
/// the current winner unless the winner's cost is strictly lower, so with
/// `size == 2` ties go to the second draw.
///
/// # Complexity
/// O(size) per selection
///
/// # Panics
/// Panics if `solutions` is empty.
pub fn tournament<S: Phenotype, R: Rng>(solutions: &[S], size: usize, rng: &mut R) -> usize {
    assert!(!solutions.is_empty(), "cannot select from empty population");

    let n = solutions.len();
    let mut winner = rng.random_range(0..n);
    for _ in 1..size.max(1) {
        let challenger = rng.random_range(0..n);
        let holds = solutions[winner].cost() < solutions[challenger].cost();
        if !holds {
            winner = challenger;
        }
    }
    winner
}

/// Binary tournament: [`tournament`] with two contestants.
///
/// Convenience for callers that drive selection themselves. The runner calls
/// [`tournament`] with [`GaConfig::tournament_size`](super::GaConfig::tournament_size),
/// which defaults to 2.
pub fn binary_tournament<S: Phenotype, R: Rng>(solutions: &[S], rng: &mut R) -> usize {
    tournament(solutions, 2, rng)
}

/// Index of the best feasible solution, or `None` if no member is feasible.
///
/// "Best" follows [`Phenotype::is_better_than`]; among equals the earliest
/// member is kept.
pub fn best_feasible<P: GaProblem>(problem: &P, solutions: &[P::Solution]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, solution) in solutions.iter().enumerate() {
        if !problem.is_feasible(solution) {
            continue;
        }
        match best {
            Some(b) if !solution.is_better_than(&solutions[b]) => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Decodes `population` and returns the best feasible member with its solution.
///
/// Returns `None` when no member is feasible; callers must then treat the
/// population as contributing nothing to the incumbent.
///
/// Convenience over [`best_feasible`] for undecoded populations. The runner
/// keeps each generation's decoded solutions and calls [`best_feasible`]
/// directly.
pub fn best_of<P: GaProblem>(
    problem: &P,
    population: &[Chromosome<P::Gene>],
) -> Option<(usize, P::Solution)> {
    let solutions: Vec<P::Solution> = population.iter().map(|c| problem.decode(c)).collect();
    best_feasible(problem, &solutions).map(|idx| (idx, solutions[idx].clone()))
}

/// Index of the solution with the highest cost.
///
/// # Panics
/// Panics if `solutions` is empty.
pub(crate) fn worst<S: Phenotype>(solutions: &[S]) -> usize {
    assert!(!solutions.is_empty(), "cannot select from empty population");
    let mut worst = 0;
    for (idx, solution) in solutions.iter().enumerate().skip(1) {
        if solution.cost() > solutions[worst].cost() {
            worst = idx;
        }
    }
    worst
}
