//! Error types.
//!
//! [`GaError`] covers run configuration problems detected before the first
//! generation. [`InstanceError`] covers malformed kQBF instances.

use thiserror::Error;

/// A run configuration that cannot be executed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("chromosome length must be at least 1")]
    EmptyChromosome,

    #[error("mutation_rate must be a non-negative finite number, got {0}")]
    InvalidMutationRate(f64),

    #[error("tournament_size must be at least 1")]
    EmptyTournament,

    #[error("max_generations must be positive or None")]
    ZeroGenerations,

    #[error("time_limit_ms must be positive or None")]
    ZeroTimeLimit,

    #[error("at least one of max_generations or time_limit_ms must be set")]
    Unbounded,
}

/// A kQBF instance that could not be read or assembled.
#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid number {token:?} at token {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("instance has {0} unread trailing tokens")]
    TrailingTokens(usize),

    #[error("instance size must be at least 1")]
    EmptyInstance,

    #[error("{what} has length {found}, expected {expected}")]
    Dimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type InstanceResult<T> = Result<T, InstanceError>;
