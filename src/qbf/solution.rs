//! Decoded kQBF candidate.

use crate::ga::Phenotype;
use std::fmt;

/// A set of selected variables with its cost and used capacity.
///
/// `selected` is in increasing index order. `cost` carries the sign of the
/// objective that produced it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KqbfSolution {
    pub selected: Vec<usize>,
    pub cost: f64,
    pub used_capacity: f64,
}

impl KqbfSolution {
    /// The empty selection: cost 0, nothing used.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, i: usize) -> bool {
        self.selected.binary_search(&i).is_ok()
    }
}

impl Phenotype for KqbfSolution {
    fn cost(&self) -> f64 {
        self.cost
    }

    /// Lower cost wins; equal costs prefer the lighter selection.
    fn is_better_than(&self, other: &Self) -> bool {
        self.cost < other.cost
            || (self.cost == other.cost && self.used_capacity < other.used_capacity)
    }
}

impl fmt::Display for KqbfSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solution: cost=[{}], size=[{}], used capacity=[{}], elements={:?}",
            self.cost,
            self.selected.len(),
            self.used_capacity,
            self.selected
        )
    }
}
