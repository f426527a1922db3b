//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;

/// Crossover strategy applied to each pair of the mating pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverKind {
    /// Two-point crossover: swap the segment between two random cut points.
    #[default]
    Standard,

    /// Uniform crossover: a fair coin per locus.
    Uniform,
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use kqbf_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, Some(1000));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use kqbf_ga::ga::{CrossoverKind, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_crossover(CrossoverKind::Uniform)
///     .with_adaptive_mutation(true)
///     .with_time_limit_ms(2_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Maximum number of generations. `None` leaves the bound to
    /// [`time_limit_ms`](Self::time_limit_ms).
    pub max_generations: Option<usize>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked only between generations, so the actual runtime may exceed
    /// the limit by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Per-locus mutation probability for uniform mutation.
    ///
    /// Ignored when [`adaptive_mutation`](Self::adaptive_mutation) is set.
    pub mutation_rate: f64,

    /// Crossover strategy.
    pub crossover: CrossoverKind,

    /// Use fitness-relative per-individual mutation rates instead of
    /// [`mutation_rate`](Self::mutation_rate).
    pub adaptive_mutation: bool,

    /// Number of contestants per tournament. 2 is binary tournament.
    pub tournament_size: usize,

    /// Replace the worst offspring with the previous generation's best
    /// feasible chromosome.
    pub elitism: bool,

    /// Decode generations in parallel. Only effective with the `parallel`
    /// feature; results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: Some(1000),
            time_limit_ms: None,
            mutation_rate: 0.01,
            crossover: CrossoverKind::Standard,
            adaptive_mutation: false,
            tournament_size: 2,
            elitism: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Removes the generation bound; the time limit must then be set.
    pub fn without_generation_limit(mut self) -> Self {
        self.max_generations = None;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Sets the per-locus mutation rate. Validated, not clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: CrossoverKind) -> Self {
        self.crossover = crossover;
        self
    }

    /// Shorthand for choosing uniform (`true`) or standard crossover.
    pub fn with_uniform_crossover(self, uniform: bool) -> Self {
        self.with_crossover(if uniform {
            CrossoverKind::Uniform
        } else {
            CrossoverKind::Standard
        })
    }

    /// Enables or disables adaptive mutation.
    pub fn with_adaptive_mutation(mut self, adaptive: bool) -> Self {
        self.adaptive_mutation = adaptive;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables elite carry-over.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Enables or disables parallel decoding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: population 50, 200 generations, 10s.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: Some(200),
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset trading quality for time: population 100, 1000 generations, 60s.
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            max_generations: Some(1000),
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Preset for long runs: population 100, 5000 generations, 30 minutes.
    pub fn quality() -> Self {
        Self {
            population_size: 100,
            max_generations: Some(5000),
            time_limit_ms: Some(30 * 60 * 1000),
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::EmptyPopulation);
        }
        if !self.mutation_rate.is_finite() || self.mutation_rate < 0.0 {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        if self.tournament_size == 0 {
            return Err(GaError::EmptyTournament);
        }
        if self.max_generations == Some(0) {
            return Err(GaError::ZeroGenerations);
        }
        if self.time_limit_ms == Some(0) {
            return Err(GaError::ZeroTimeLimit);
        }
        if self.max_generations.is_none() && self.time_limit_ms.is_none() {
            return Err(GaError::Unbounded);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, Some(1000));
        assert!(config.time_limit_ms.is_none());
        assert!((config.mutation_rate - 0.01).abs() < 1e-15);
        assert_eq!(config.crossover, CrossoverKind::Standard);
        assert!(!config.adaptive_mutation);
        assert_eq!(config.tournament_size, 2);
        assert!(!config.elitism);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_time_limit_ms(500)
            .with_mutation_rate(0.2)
            .with_uniform_crossover(true)
            .with_adaptive_mutation(true)
            .with_tournament_size(3)
            .with_elitism(true)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, Some(30));
        assert_eq!(config.time_limit_ms, Some(500));
        assert!((config.mutation_rate - 0.2).abs() < 1e-15);
        assert_eq!(config.crossover, CrossoverKind::Uniform);
        assert!(config.adaptive_mutation);
        assert_eq!(config.tournament_size, 3);
        assert!(config.elitism);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_uniform_crossover_flag_false() {
        let config = GaConfig::default()
            .with_crossover(CrossoverKind::Uniform)
            .with_uniform_crossover(false);
        assert_eq!(config.crossover, CrossoverKind::Standard);
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(GaError::EmptyPopulation));
    }

    #[test]
    fn test_validate_negative_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(-0.1);
        assert_eq!(config.validate(), Err(GaError::InvalidMutationRate(-0.1)));
    }

    #[test]
    fn test_validate_nan_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(GaError::InvalidMutationRate(_))
        ));
    }

    #[test]
    fn test_validate_zero_mutation_rate_ok() {
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(GaError::EmptyTournament));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(GaError::ZeroGenerations));
    }

    #[test]
    fn test_validate_zero_time_limit() {
        let config = GaConfig::default().with_time_limit_ms(0);
        assert_eq!(config.validate(), Err(GaError::ZeroTimeLimit));
    }

    #[test]
    fn test_validate_unbounded() {
        let config = GaConfig::default().without_generation_limit();
        assert_eq!(config.validate(), Err(GaError::Unbounded));
    }

    #[test]
    fn test_validate_time_only() {
        let config = GaConfig::default()
            .without_generation_limit()
            .with_time_limit_ms(1);
        assert!(config.validate().is_ok());
    }

    // ---- Presets ----

    #[test]
    fn test_preset_fast() {
        let config = GaConfig::fast();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, Some(200));
        assert_eq!(config.time_limit_ms, Some(10_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_balanced() {
        let config = GaConfig::balanced();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, Some(1000));
        assert_eq!(config.time_limit_ms, Some(60_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_quality() {
        let config = GaConfig::quality();
        assert_eq!(config.max_generations, Some(5000));
        assert_eq!(config.time_limit_ms, Some(1_800_000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = GaConfig::fast().with_population_size(75).with_seed(42);
        assert_eq!(config.population_size, 75);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.time_limit_ms, Some(10_000));
    }
}
