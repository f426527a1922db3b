//! Bit-vector decoder plugging kQBF into the GA engine.

use super::objective::KqbfObjective;
use super::solution::KqbfSolution;
use crate::ga::{Chromosome, GaProblem};
use rand::Rng;

/// kQBF as a [`GaProblem`]: one bit per decision variable.
///
/// Decoding is a full re-evaluation of the selected set; the objective's
/// delta evaluations are not used here.
#[derive(Debug, Clone)]
pub struct KqbfProblem {
    objective: KqbfObjective,
}

impl KqbfProblem {
    pub fn new(objective: KqbfObjective) -> Self {
        Self { objective }
    }

    pub fn objective(&self) -> &KqbfObjective {
        &self.objective
    }

    /// Re-expresses a decoded solution as a QBF value (maximization sign).
    pub fn to_original(&self, solution: KqbfSolution) -> KqbfSolution {
        KqbfSolution {
            cost: self.objective.to_value(solution.cost),
            ..solution
        }
    }
}

impl GaProblem for KqbfProblem {
    type Gene = bool;
    type Solution = KqbfSolution;

    fn chromosome_len(&self) -> usize {
        self.objective.size()
    }

    fn generate_random<R: Rng>(&self, rng: &mut R) -> Chromosome<bool> {
        (0..self.objective.size())
            .map(|_| rng.random_range(0..2u8) == 1)
            .collect()
    }

    fn decode(&self, chromosome: &Chromosome<bool>) -> KqbfSolution {
        let mut solution = self.create_empty_solution();
        solution.selected = chromosome
            .iter()
            .enumerate()
            .filter_map(|(locus, &bit)| bit.then_some(locus))
            .collect();
        solution.cost = self.objective.evaluate(&solution.selected);
        solution.used_capacity = self.objective.used_capacity(&solution.selected);
        solution
    }

    fn mutate_gene(&self, chromosome: &mut Chromosome<bool>, locus: usize) {
        let flipped = !*chromosome.get(locus);
        chromosome.set(locus, flipped);
    }

    fn create_empty_solution(&self) -> KqbfSolution {
        KqbfSolution::empty()
    }

    fn is_feasible(&self, solution: &KqbfSolution) -> bool {
        self.objective.fits(solution.used_capacity)
    }

    /// The QBF value of the selection, whatever the objective's orientation.
    fn mutation_fitness(&self, solution: &KqbfSolution) -> f64 {
        self.objective.to_value(solution.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qbf::Orientation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn problem() -> KqbfProblem {
        let mut c = vec![vec![0.0; 4]; 4];
        c[0][0] = 10.0;
        c[1][1] = 2.0;
        c[1][3] = -1.5;
        KqbfProblem::new(
            KqbfObjective::new(c, vec![1.0, 1.0, 2.0, 3.0], 2.0)
                .expect("valid instance")
                .inverse(),
        )
    }

    #[test]
    fn test_decode_all_zeros() {
        let p = problem();
        let s = p.decode(&Chromosome::from_bits(&[0, 0, 0, 0]));
        assert!(s.selected.is_empty());
        assert_eq!(s.cost, 0.0);
        assert_eq!(s.used_capacity, 0.0);
        assert!(p.is_feasible(&s));
    }

    #[test]
    fn test_decode_selects_set_bits_in_order() {
        let p = problem();
        let s = p.decode(&Chromosome::from_bits(&[1, 1, 0, 1]));
        assert_eq!(s.selected, vec![0, 1, 3]);
        // -(10 + 2 + 2 * -1.5)
        assert_eq!(s.cost, -9.0);
        assert_eq!(s.used_capacity, 5.0);
        assert!(!p.is_feasible(&s));
    }

    #[test]
    fn test_decode_is_deterministic() {
        let p = problem();
        let c = Chromosome::from_bits(&[0, 1, 1, 0]);
        let before = c.clone();
        assert_eq!(p.decode(&c), p.decode(&c));
        assert_eq!(c, before);
    }

    #[test]
    fn test_feasibility_boundary() {
        let p = problem();
        // used capacity exactly 2 == capacity
        let s = p.decode(&Chromosome::from_bits(&[1, 1, 0, 0]));
        assert_eq!(s.used_capacity, 2.0);
        assert!(p.is_feasible(&s));
    }

    #[test]
    fn test_to_original() {
        let p = problem();
        let s = p.decode(&Chromosome::from_bits(&[1, 0, 0, 0]));
        assert_eq!(s.cost, -10.0);
        let reported = p.to_original(s);
        assert_eq!(reported.cost, 10.0);
        assert_eq!(reported.selected, vec![0]);
        assert_eq!(reported.used_capacity, 1.0);
    }

    #[test]
    fn test_mutation_fitness_uses_qbf_value() {
        let p = problem();
        let s = p.decode(&Chromosome::from_bits(&[1, 1, 0, 1]));
        assert_eq!(s.cost, -9.0);
        assert_eq!(p.mutation_fitness(&s), 9.0);

        let original = KqbfProblem::new(p.objective().clone().with_orientation(Orientation::Original));
        let s = original.decode(&Chromosome::from_bits(&[1, 1, 0, 1]));
        assert_eq!(original.mutation_fitness(&s), 9.0);
    }

    #[test]
    fn test_generate_random_length_and_mix() {
        let p = problem();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ones = 0;
        for _ in 0..200 {
            let c = p.generate_random(&mut rng);
            assert_eq!(c.len(), 4);
            ones += c.count_ones();
        }
        assert!(ones > 300 && ones < 500, "expected about half set, got {ones}/800");
    }

    #[test]
    fn test_mutate_gene_flips() {
        let p = problem();
        let mut c = Chromosome::from_bits(&[1, 0, 0, 0]);
        p.mutate_gene(&mut c, 0);
        p.mutate_gene(&mut c, 2);
        assert_eq!(c, Chromosome::from_bits(&[0, 0, 1, 0]));
    }
}
