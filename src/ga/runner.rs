//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! incumbent update → termination check → repeat.
//!
//! The random source is consumed in a fixed order: initialization genes,
//! then per generation tournament draws, crossover draws and mutation draws.
//! Decoding never consumes randomness, so a seeded run is reproducible
//! regardless of the `parallel` setting.

use super::config::{CrossoverKind, GaConfig};
use super::operators::{adaptive_mutation, mutate_with_rate, two_point_crossover, uniform_crossover};
use super::selection::{best_feasible, tournament, worst};
use super::types::{Chromosome, GaProblem, Phenotype};
use crate::error::GaError;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Summary of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Incumbent cost after this generation, `None` while nothing feasible
    /// has been seen.
    pub incumbent_cost: Option<f64>,

    /// Mean cost of the generation's population.
    pub mean_cost: f64,

    /// Number of feasible members in the generation's population.
    pub feasible_count: usize,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<S> {
    /// The best feasible solution observed during the run, or `None` if no
    /// feasible solution was ever produced.
    pub incumbent: Option<S>,

    /// Number of generations executed after initialization.
    pub generations: usize,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Per-generation statistics, starting with the initial population.
    pub history: Vec<GenerationStats>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl<S: Phenotype> GaResult<S> {
    /// Cost of the incumbent, if any.
    pub fn incumbent_cost(&self) -> Option<f64> {
        self.incumbent.as_ref().map(Phenotype::cost)
    }

    /// Whether a feasible solution was found.
    pub fn found_feasible(&self) -> bool {
        self.incumbent.is_some()
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// match result.incumbent {
///     Some(best) => println!("best cost: {}", best.cost()),
///     None => println!("no feasible solution found"),
/// }
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Returns an error if the configuration is invalid or the problem has
    /// zero-length chromosomes.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Solution>, GaError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop at the next generation boundary and return the incumbent found
    /// so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Solution>, GaError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng, cancel.as_deref())
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random source.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<GaResult<P::Solution>, GaError> {
        config.validate()?;
        let n = problem.chromosome_len();
        if n == 0 {
            return Err(GaError::EmptyChromosome);
        }

        let start = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);
        info!(
            "GA start: n={}, population={}, generations={:?}, time_limit_ms={:?}, crossover={:?}, adaptive_mutation={}",
            n,
            config.population_size,
            config.max_generations,
            config.time_limit_ms,
            config.crossover,
            config.adaptive_mutation
        );

        // 1. Initialize population
        let mut population: Vec<Chromosome<P::Gene>> = (0..config.population_size)
            .map(|_| problem.generate_random(rng))
            .collect();

        // 2. Evaluate initial population
        let mut solutions = decode_population(problem, &population, config.parallel);

        // 3. Track incumbent
        let mut incumbent: Option<P::Solution> =
            best_feasible(problem, &solutions).map(|idx| solutions[idx].clone());
        let mut history = Vec::with_capacity(config.max_generations.map_or(64, |g| g + 1));
        history.push(generation_stats(problem, 0, &solutions, incumbent.as_ref()));

        let mut generation = 0usize;
        let mut timed_out = false;
        let mut cancelled = false;

        // 4. Evolutionary loop
        loop {
            if config.max_generations.is_some_and(|max| generation >= max) {
                break;
            }
            if time_limit.is_some_and(|limit| start.elapsed() > limit) {
                timed_out = true;
                break;
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            // Selection
            let mating_pool: Vec<usize> = (0..config.population_size)
                .map(|_| tournament(&solutions, config.tournament_size, rng))
                .collect();

            // Crossover
            let mut offspring = recombine(&population, &mating_pool, config.crossover, rng);

            // Mutation
            if config.adaptive_mutation {
                adaptive_mutation(problem, &mut offspring, rng);
            } else {
                for child in offspring.iter_mut() {
                    mutate_with_rate(problem, child, config.mutation_rate, rng);
                }
            }

            let mut offspring_solutions = decode_population(problem, &offspring, config.parallel);

            // Elite carry-over
            if config.elitism {
                if let Some(elite) = best_feasible(problem, &solutions) {
                    let slot = worst(&offspring_solutions);
                    offspring[slot] = population[elite].clone();
                    offspring_solutions[slot] = solutions[elite].clone();
                }
            }

            population = offspring;
            solutions = offspring_solutions;
            generation += 1;

            // Update incumbent
            if let Some(idx) = best_feasible(problem, &solutions) {
                let candidate = &solutions[idx];
                let improves = incumbent
                    .as_ref()
                    .map_or(true, |current| candidate.is_better_than(current));
                if improves {
                    debug!("(Gen. {}) incumbent cost = {}", generation, candidate.cost());
                    incumbent = Some(candidate.clone());
                }
            }

            let stats = generation_stats(problem, generation, &solutions, incumbent.as_ref());
            trace!(
                "(Gen. {}) mean cost = {}, feasible = {}/{}",
                generation,
                stats.mean_cost,
                stats.feasible_count,
                config.population_size
            );
            history.push(stats);
        }

        let elapsed = start.elapsed();
        match &incumbent {
            Some(best) => info!(
                "GA finished after {} generations in {:?}: incumbent cost = {}",
                generation,
                elapsed,
                best.cost()
            ),
            None => warn!(
                "GA finished after {} generations in {:?} without a feasible solution",
                generation, elapsed
            ),
        }

        Ok(GaResult {
            incumbent,
            generations: generation,
            timed_out,
            cancelled,
            history,
            elapsed,
        })
    }
}

/// Pairs up the mating pool and applies crossover.
///
/// Pool entries `(0, 1)`, `(2, 3)`, … are crossed over, each pair yielding
/// two children. With an odd pool the last entry is paired with the first
/// and only its first child is kept, so exactly `mating_pool.len()`
/// offspring are produced.
fn recombine<G: Clone, R: Rng>(
    population: &[Chromosome<G>],
    mating_pool: &[usize],
    crossover: CrossoverKind,
    rng: &mut R,
) -> Vec<Chromosome<G>> {
    let size = mating_pool.len();
    let mut offspring = Vec::with_capacity(size);
    let mut i = 0;
    while i < size {
        let a = &population[mating_pool[i]];
        let b = &population[mating_pool[(i + 1) % size]];
        let (c1, c2) = match crossover {
            CrossoverKind::Standard => two_point_crossover(a, b, rng),
            CrossoverKind::Uniform => uniform_crossover(a, b, rng),
        };
        offspring.push(c1);
        if offspring.len() < size {
            offspring.push(c2);
        }
        i += 2;
    }
    offspring
}

fn generation_stats<P: GaProblem>(
    problem: &P,
    generation: usize,
    solutions: &[P::Solution],
    incumbent: Option<&P::Solution>,
) -> GenerationStats {
    let mean_cost = if solutions.is_empty() {
        0.0
    } else {
        solutions.iter().map(Phenotype::cost).sum::<f64>() / solutions.len() as f64
    };
    GenerationStats {
        generation,
        incumbent_cost: incumbent.map(Phenotype::cost),
        mean_cost,
        feasible_count: solutions.iter().filter(|s| problem.is_feasible(s)).count(),
    }
}

/// Decode all chromosomes of a generation.
#[cfg(feature = "parallel")]
fn decode_population<P: GaProblem>(
    problem: &P,
    population: &[Chromosome<P::Gene>],
    parallel: bool,
) -> Vec<P::Solution> {
    use rayon::prelude::*;

    if parallel {
        population.par_iter().map(|c| problem.decode(c)).collect()
    } else {
        population.iter().map(|c| problem.decode(c)).collect()
    }
}

/// Decode all chromosomes of a generation.
#[cfg(not(feature = "parallel"))]
fn decode_population<P: GaProblem>(
    problem: &P,
    population: &[Chromosome<P::Gene>],
    _parallel: bool,
) -> Vec<P::Solution> {
    population.iter().map(|c| problem.decode(c)).collect()
}

// ============================================================================
// Tests
// ============================================================================
