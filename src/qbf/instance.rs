//! Text instance reader.
//!
//! An instance is a whitespace-separated token stream:
//!
//! ```text
//! n
//! capacity
//! w_0 w_1 … w_{n-1}
//! c_00 c_01 … c_0(n-1)
//!      c_11 … c_1(n-1)
//!           …
//!             c_(n-1)(n-1)
//! ```
//!
//! Row `i` of the coefficient block holds the `n - i` entries `c[i][i..n]`.
//! Line breaks carry no meaning.

use super::objective::KqbfObjective;
use crate::error::{InstanceError, InstanceResult};
use std::path::Path;
use std::str::FromStr;

/// Reads a kQBF instance from a file.
pub fn from_file<P: AsRef<Path>>(path: P) -> InstanceResult<KqbfObjective> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses a kQBF instance from text.
pub fn parse(text: &str) -> InstanceResult<KqbfObjective> {
    let mut tokens = Tokens::new(text);

    let n: usize = tokens.next("instance size")?;
    if n == 0 {
        return Err(InstanceError::EmptyInstance);
    }
    let capacity: f64 = tokens.next("capacity")?;

    let mut weights: Vec<f64> = Vec::with_capacity(n);
    for _ in 0..n {
        weights.push(tokens.next("weights")?);
    }

    let mut coefficients = vec![vec![0.0; n]; n];
    for (i, row) in coefficients.iter_mut().enumerate() {
        for entry in row.iter_mut().skip(i) {
            *entry = tokens.next("coefficients")?;
        }
    }

    let trailing = tokens.remaining();
    if trailing > 0 {
        return Err(InstanceError::TrailingTokens(trailing));
    }

    KqbfObjective::new(coefficients, weights, capacity)
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next<T: FromStr>(&mut self, what: &'static str) -> InstanceResult<T> {
        let token = self.inner.next().ok_or(InstanceError::UnexpectedEof(what))?;
        let position = self.position;
        self.position += 1;
        token.parse().map_err(|_| InstanceError::InvalidNumber {
            token: token.to_string(),
            position,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}
