//! Quadratic binary objective with a knapsack capacity.
//!
//! The value of a selection `S` is
//!
//! ```text
//! f(S) = Σ_{i ∈ S} c[i][i] + Σ_{i < j, i,j ∈ S} 2·c[i][j]
//! ```
//!
//! Only the upper triangle (`i <= j`) of the coefficient matrix is read.
//! An [`Orientation`] decides whether costs are reported as `f` or `-f`;
//! the GA minimizes, so it runs on the [`Orientation::Inverse`] view.

use crate::error::{InstanceError, InstanceResult};

/// Sign applied to every cost the objective reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Costs equal the QBF value.
    #[default]
    Original,

    /// Costs equal the negated QBF value.
    Inverse,
}

impl Orientation {
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Original => 1.0,
            Orientation::Inverse => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Original => Orientation::Inverse,
            Orientation::Inverse => Orientation::Original,
        }
    }
}

/// Membership bitmap of a working solution, used by the delta evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSet {
    active: Vec<bool>,
}

impl ActiveSet {
    /// An empty working solution over `n` variables.
    pub fn new(n: usize) -> Self {
        Self {
            active: vec![false; n],
        }
    }

    /// A working solution with the given variables active.
    ///
    /// # Panics
    /// Panics if an index is `>= n`.
    pub fn from_selected(n: usize, selected: &[usize]) -> Self {
        let mut set = Self::new(n);
        for &i in selected {
            set.insert(i);
        }
        set
    }

    pub fn insert(&mut self, i: usize) {
        self.active[i] = true;
    }

    pub fn remove(&mut self, i: usize) {
        self.active[i] = false;
    }

    pub fn contains(&self, i: usize) -> bool {
        self.active[i]
    }

    pub fn len(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.active.iter().any(|&a| a)
    }

    /// Active indices in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
    }
}

/// A kQBF instance: coefficients, weights and capacity.
///
/// Immutable once built. [`inverse`](Self::inverse) returns the same
/// instance with negated costs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KqbfObjective {
    size: usize,
    coefficients: Vec<Vec<f64>>,
    weights: Vec<f64>,
    capacity: f64,
    orientation: Orientation,
}

impl KqbfObjective {
    /// Builds an instance in [`Orientation::Original`].
    ///
    /// `coefficients` must be `n×n` and `weights` of length `n`, with
    /// `n >= 1`. Entries below the diagonal are ignored.
    pub fn new(
        coefficients: Vec<Vec<f64>>,
        weights: Vec<f64>,
        capacity: f64,
    ) -> InstanceResult<Self> {
        let size = coefficients.len();
        if size == 0 {
            return Err(InstanceError::EmptyInstance);
        }
        if let Some(row) = coefficients.iter().find(|row| row.len() != size) {
            return Err(InstanceError::Dimension {
                what: "coefficient row",
                expected: size,
                found: row.len(),
            });
        }
        if weights.len() != size {
            return Err(InstanceError::Dimension {
                what: "weights",
                expected: size,
                found: weights.len(),
            });
        }
        Ok(Self {
            size,
            coefficients,
            weights,
            capacity,
            orientation: Orientation::Original,
        })
    }

    /// The same instance with the opposite orientation.
    pub fn inverse(&self) -> Self {
        self.clone().with_orientation(self.orientation.flipped())
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of decision variables.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Coefficient of the pair `(i, j)`, read from the upper triangle.
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        if i <= j {
            self.coefficients[i][j]
        } else {
            self.coefficients[j][i]
        }
    }

    /// Oriented cost of a selection. O(k²) for `k` selected variables.
    pub fn evaluate(&self, selected: &[usize]) -> f64 {
        self.orientation.sign() * self.qbf_value(selected)
    }

    /// QBF value of a selection, ignoring orientation.
    pub fn qbf_value(&self, selected: &[usize]) -> f64 {
        let mut value = 0.0;
        for (a, &i) in selected.iter().enumerate() {
            value += self.coefficient(i, i);
            for &j in &selected[a + 1..] {
                value += 2.0 * self.coefficient(i, j);
            }
        }
        value
    }

    /// Total weight of a selection. O(k).
    pub fn used_capacity(&self, selected: &[usize]) -> f64 {
        selected.iter().map(|&i| self.weights[i]).sum()
    }

    /// Whether a used capacity respects the knapsack bound.
    pub fn fits(&self, used_capacity: f64) -> bool {
        used_capacity <= self.capacity
    }

    /// Converts an oriented cost back to the QBF value.
    pub fn to_value(&self, cost: f64) -> f64 {
        self.orientation.sign() * cost
    }

    // ------------------------------------------------------------------
    // Delta evaluations relative to a working solution, O(n) each
    // ------------------------------------------------------------------

    /// Value change of activating `i`, given the rest of `active`.
    fn contribution(&self, active: &ActiveSet, i: usize) -> f64 {
        let mut sum = self.coefficient(i, i);
        for j in active.iter() {
            if j != i {
                sum += 2.0 * self.coefficient(i, j);
            }
        }
        sum
    }

    /// Cost change of inserting `i` into `active`; 0 if already active.
    pub fn evaluate_insertion(&self, active: &ActiveSet, i: usize) -> f64 {
        if active.contains(i) {
            return 0.0;
        }
        self.orientation.sign() * self.contribution(active, i)
    }

    /// Cost change of removing `i` from `active`; 0 if not active.
    pub fn evaluate_removal(&self, active: &ActiveSet, i: usize) -> f64 {
        if !active.contains(i) {
            return 0.0;
        }
        -self.orientation.sign() * self.contribution(active, i)
    }

    /// Cost change of swapping `incoming` in and `outgoing` out.
    ///
    /// Degenerates to a removal when `incoming` is already active, and to an
    /// insertion when `outgoing` is not active.
    pub fn evaluate_exchange(&self, active: &ActiveSet, incoming: usize, outgoing: usize) -> f64 {
        if incoming == outgoing {
            return 0.0;
        }
        if active.contains(incoming) {
            return self.evaluate_removal(active, outgoing);
        }
        if !active.contains(outgoing) {
            return self.evaluate_insertion(active, incoming);
        }
        let delta = self.contribution(active, incoming)
            - self.contribution(active, outgoing)
            - 2.0 * self.coefficient(incoming, outgoing);
        self.orientation.sign() * delta
    }
}
