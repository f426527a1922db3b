//! Core trait definitions for the GA framework.
//!
//! [`Chromosome`] is the genotype the engine manipulates, [`Phenotype`] the
//! decoded candidate it ranks, and [`GaProblem`] the capability set a target
//! problem implements so the generic engine can run on it.

use rand::Rng;
use std::fmt::Debug;

/// A fixed-length, ordered sequence of genes.
///
/// Chromosomes carry no identity beyond their gene content: two chromosomes
/// with the same genes are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome<G> {
    genes: Vec<G>,
}

impl<G> Chromosome<G> {
    /// Wraps an existing gene vector.
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    /// Number of loci.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene at `locus`.
    ///
    /// # Panics
    /// Panics if `locus >= self.len()`.
    pub fn get(&self, locus: usize) -> &G {
        &self.genes[locus]
    }

    /// Replaces the gene at `locus`.
    ///
    /// # Panics
    /// Panics if `locus >= self.len()`.
    pub fn set(&mut self, locus: usize, gene: G) {
        self.genes[locus] = gene;
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.genes.iter()
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl<G> From<Vec<G>> for Chromosome<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}

impl<G> FromIterator<G> for Chromosome<G> {
    fn from_iter<T: IntoIterator<Item = G>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Chromosome<bool> {
    /// Builds a bit chromosome from `0`/`1` digits; any non-zero value is a set bit.
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().map(|&b| b != 0).collect()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&b| b).count()
    }
}

/// A decoded candidate solution.
///
/// Lower cost is better (minimization). For maximization problems, decode
/// into a negated cost and flip the sign back when reporting.
pub trait Phenotype: Clone + Send + Sync + Debug {
    /// The engine-side cost of this candidate.
    fn cost(&self) -> f64;

    /// Whether `self` should replace `other` as the best-known candidate.
    ///
    /// The default compares costs only. Implementations may add a tie-break,
    /// but must stay consistent with [`cost`](Phenotype::cost): a strictly
    /// lower cost always wins.
    fn is_better_than(&self, other: &Self) -> bool {
        self.cost() < other.cost()
    }
}

/// Defines a GA optimization problem.
///
/// This is the capability set the generic engine is parameterized over:
///
/// 1. **Initialization**: [`generate_random`](GaProblem::generate_random)
/// 2. **Decoding**: [`decode`](GaProblem::decode) genotype to phenotype
/// 3. **Mutation**: [`mutate_gene`](GaProblem::mutate_gene) at a single locus
/// 4. **Feasibility**: [`is_feasible`](GaProblem::is_feasible) for incumbent tracking
///
/// Crossover is positional and therefore handled generically by the engine.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may decode a
/// generation in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// Allele type of a single locus.
    type Gene: Clone + PartialEq + Send + Sync + Debug;

    /// The decoded candidate type.
    type Solution: Phenotype;

    /// Number of loci in every chromosome of this problem.
    fn chromosome_len(&self) -> usize;

    /// Creates a random chromosome of length [`chromosome_len`](GaProblem::chromosome_len).
    ///
    /// No feasibility filtering is expected: infeasible chromosomes are
    /// allowed to exist and evolve.
    fn generate_random<R: Rng>(&self, rng: &mut R) -> Chromosome<Self::Gene>;

    /// Maps a chromosome to its evaluated candidate.
    ///
    /// Must be deterministic and must not depend on any state other than the
    /// chromosome and the problem itself.
    fn decode(&self, chromosome: &Chromosome<Self::Gene>) -> Self::Solution;

    /// Perturbs the gene at `locus` in place.
    fn mutate_gene(&self, chromosome: &mut Chromosome<Self::Gene>, locus: usize);

    /// The candidate with no decision taken.
    fn create_empty_solution(&self) -> Self::Solution;

    /// Whether a candidate satisfies the problem's constraints.
    ///
    /// Only feasible candidates may become the incumbent. The default
    /// treats every candidate as feasible.
    fn is_feasible(&self, _solution: &Self::Solution) -> bool {
        true
    }

    /// Value compared across offspring by adaptive mutation; higher is fitter.
    ///
    /// Defaults to [`Phenotype::cost`]. A problem that decodes into a negated
    /// cost should return its natural value here, otherwise every candidate
    /// falls under the non-positive guard of
    /// [`adaptive_rate`](super::operators::adaptive_rate).
    fn mutation_fitness(&self, solution: &Self::Solution) -> f64 {
        solution.cost()
    }
}
