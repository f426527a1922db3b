//! Positional genetic operators.
//!
//! Crossover operators work on any gene type because they only move genes
//! between loci. Mutation delegates the actual gene change to
//! [`GaProblem::mutate_gene`] and only decides *where* to mutate.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`]: copies the segment between two cut points from
//!   the other parent
//! - [`uniform_crossover`]: fair coin per locus
//!
//! # Mutation Operators
//!
//! - [`mutate_with_rate`]: independent flip per locus with a fixed rate
//! - [`adaptive_mutation`]: per-individual rate relative to the offspring
//!   average fitness, see [`adaptive_rate`]

use super::types::{Chromosome, GaProblem};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Two-point crossover.
///
/// Draws `p1` uniformly from `0..=n` and `p2` uniformly from `p1..=n`.
/// Child 1 takes `parent1` outside `[p1, p2)` and `parent2` inside it; child 2
/// is the complement. Either segment may be empty.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn two_point_crossover<G: Clone, R: Rng>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    rng: &mut R,
) -> (Chromosome<G>, Chromosome<G>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let p1 = rng.random_range(0..=n);
    let p2 = p1 + rng.random_range(0..=n - p1);

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for locus in 0..n {
        let (a, b) = (parent1.get(locus), parent2.get(locus));
        if locus >= p1 && locus < p2 {
            child1.push(b.clone());
            child2.push(a.clone());
        } else {
            child1.push(a.clone());
            child2.push(b.clone());
        }
    }

    (Chromosome::new(child1), Chromosome::new(child2))
}

/// Uniform crossover.
///
/// For each locus a fair coin decides whether child 1 inherits from
/// `parent1` (and child 2 from `parent2`) or the other way round.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<G: Clone, R: Rng>(
    parent1: &Chromosome<G>,
    parent2: &Chromosome<G>,
    rng: &mut R,
) -> (Chromosome<G>, Chromosome<G>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    for locus in 0..n {
        let (a, b) = (parent1.get(locus), parent2.get(locus));
        if rng.random::<f64>() < 0.5 {
            child1.push(a.clone());
            child2.push(b.clone());
        } else {
            child1.push(b.clone());
            child2.push(a.clone());
        }
    }

    (Chromosome::new(child1), Chromosome::new(child2))
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Mutates each locus independently with probability `rate`.
///
/// One random draw is consumed per locus regardless of `rate`, so the RNG
/// stream does not depend on the rate. A rate of 0 never mutates; a rate of
/// 1 or more mutates every locus.
pub fn mutate_with_rate<P: GaProblem, R: Rng>(
    problem: &P,
    chromosome: &mut Chromosome<P::Gene>,
    rate: f64,
    rng: &mut R,
) {
    for locus in 0..chromosome.len() {
        if rng.random::<f64>() < rate {
            problem.mutate_gene(chromosome, locus);
        }
    }
}

/// Mutation rate for one individual under adaptive mutation.
///
/// `fitness` is the individual's [`GaProblem::mutation_fitness`] (higher is
/// fitter) and `avg_fitness` the offspring mean. With `r = 1 / len`:
///
/// - `fitness <= 0` or not finite: `r`
/// - `avg_fitness < fitness`: `max(r, (avg_fitness / fitness) * (r / 2))`
/// - otherwise: `max(r, avg_fitness / (4 * fitness))`
///
/// The comparison direction is fixed; `fitness == avg_fitness` takes the
/// last branch. A zero-length chromosome has rate 0.
pub fn adaptive_rate(fitness: f64, avg_fitness: f64, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let base = 1.0 / len as f64;
    if !fitness.is_finite() || fitness <= 0.0 || !avg_fitness.is_finite() {
        return base;
    }

    if avg_fitness < fitness {
        base.max((avg_fitness / fitness) * (base / 2.0))
    } else {
        base.max(avg_fitness / (4.0 * fitness))
    }
}

/// Adaptive mutation over a whole offspring set.
///
/// Decodes every offspring, averages their [`GaProblem::mutation_fitness`],
/// then mutates each offspring with its own [`adaptive_rate`]. Offspring are
/// visited in order, and each consumes one random draw per locus.
pub fn adaptive_mutation<P: GaProblem, R: Rng>(
    problem: &P,
    offspring: &mut [Chromosome<P::Gene>],
    rng: &mut R,
) {
    if offspring.is_empty() {
        return;
    }

    let fitness: Vec<f64> = offspring
        .iter()
        .map(|c| problem.mutation_fitness(&problem.decode(c)))
        .collect();
    let avg_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;

    for (chromosome, &f) in offspring.iter_mut().zip(fitness.iter()) {
        let rate = adaptive_rate(f, avg_fitness, chromosome.len());
        mutate_with_rate(problem, chromosome, rate, rng);
    }
}

// ============================================================================
// Tests
// ============================================================================
