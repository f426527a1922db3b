//! Criterion benchmarks for the kQBF genetic algorithm.
//!
//! Uses seeded random instances so runs are comparable across changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kqbf_ga::ga::{Chromosome, CrossoverKind, GaConfig, GaProblem};
use kqbf_ga::qbf::{solve, ActiveSet, KqbfObjective, KqbfProblem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_instance(n: usize, seed: u64) -> KqbfObjective {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut c = vec![vec![0.0; n]; n];
    for (i, row) in c.iter_mut().enumerate() {
        for entry in row.iter_mut().skip(i) {
            *entry = rng.random_range(-10.0..10.0);
        }
    }
    let weights: Vec<f64> = (0..n).map(|_| rng.random_range(1.0..50.0)).collect();
    let capacity = weights.iter().sum::<f64>() / 3.0;
    KqbfObjective::new(c, weights, capacity).expect("valid instance")
}

// ===========================================================================
// Decoding
// ===========================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for &n in &[20usize, 100, 400] {
        let problem = KqbfProblem::new(random_instance(n, 1).inverse());
        let mut rng = StdRng::seed_from_u64(2);
        let chromosome: Chromosome<bool> = problem.generate_random(&mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| problem.decode(black_box(&chromosome)))
        });
    }
    group.finish();
}

// ===========================================================================
// Delta evaluation
// ===========================================================================

fn bench_deltas(c: &mut Criterion) {
    let n = 200;
    let objective = random_instance(n, 3);
    let selected: Vec<usize> = (0..n).step_by(3).collect();
    let active = ActiveSet::from_selected(n, &selected);

    c.bench_function("insertion_n200", |b| {
        b.iter(|| objective.evaluate_insertion(black_box(&active), black_box(1)))
    });
    c.bench_function("exchange_n200", |b| {
        b.iter(|| objective.evaluate_exchange(black_box(&active), black_box(1), black_box(3)))
    });
}

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_n60_50gen");
    group.sample_size(10);
    let objective = random_instance(60, 4);

    let variants = [
        ("standard", GaConfig::default()),
        (
            "uniform",
            GaConfig::default().with_crossover(CrossoverKind::Uniform),
        ),
        ("adaptive", GaConfig::default().with_adaptive_mutation(true)),
    ];

    for (name, config) in variants {
        let config = config
            .with_population_size(100)
            .with_max_generations(50)
            .with_seed(42);
        group.bench_function(name, |b| {
            b.iter(|| solve(black_box(&objective), &config).expect("valid config"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_deltas, bench_solve);
criterion_main!(benches);
