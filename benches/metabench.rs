//! Criterion benchmarks comparing the five solvers.
//!
//! Instances are generated from fixed seeds so runs are comparable across
//! machines and commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_metabench::algorithm::Algorithm;
use u_metabench::bnb::{BnbConfig, BranchAndBound};
use u_metabench::ga::{GaConfig, GeneticAlgorithm};
use u_metabench::hc::{HcConfig, HillClimbing};
use u_metabench::problem::{KnapsackProblem, TspProblem};
use u_metabench::sa::{SaConfig, SimulatedAnnealing};
use u_metabench::tabu::{TabuConfig, TabuSearch};

// ===========================================================================
// Knapsack
// ===========================================================================

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    group.sample_size(10);

    for &n in &[20usize, 50] {
        let problem = KnapsackProblem::generate_random(n, 42);

        group.bench_with_input(BenchmarkId::new("hill_climbing", n), &problem, |b, p| {
            b.iter(|| {
                let mut hc = HillClimbing::new(p, HcConfig::default().with_seed(42)).unwrap();
                black_box(hc.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("simulated_annealing", n), &problem, |b, p| {
            b.iter(|| {
                let mut sa = SimulatedAnnealing::new(p, SaConfig::default().with_seed(42)).unwrap();
                black_box(sa.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("tabu_search", n), &problem, |b, p| {
            b.iter(|| {
                let mut ts = TabuSearch::new(p, TabuConfig::default().with_seed(42)).unwrap();
                black_box(ts.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("genetic_algorithm", n), &problem, |b, p| {
            b.iter(|| {
                let mut ga = GeneticAlgorithm::new(p, GaConfig::default().with_seed(42)).unwrap();
                black_box(ga.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("branch_and_bound", n), &problem, |b, p| {
            b.iter(|| {
                let mut bnb = BranchAndBound::new(black_box(p), BnbConfig::default()).unwrap();
                black_box(bnb.run())
            })
        });
    }
    group.finish();
}

// ===========================================================================
// TSP
// ===========================================================================

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    group.sample_size(10);

    for &n in &[10usize, 30] {
        let problem = TspProblem::generate_random(n, 42);

        group.bench_with_input(BenchmarkId::new("hill_climbing", n), &problem, |b, p| {
            b.iter(|| {
                let mut hc = HillClimbing::new(p, HcConfig::default().with_seed(42)).unwrap();
                black_box(hc.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("simulated_annealing", n), &problem, |b, p| {
            b.iter(|| {
                let mut sa = SimulatedAnnealing::new(p, SaConfig::default().with_seed(42)).unwrap();
                black_box(sa.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("tabu_search", n), &problem, |b, p| {
            b.iter(|| {
                let mut ts = TabuSearch::new(p, TabuConfig::default().with_seed(42)).unwrap();
                black_box(ts.run())
            })
        });
        group.bench_with_input(BenchmarkId::new("genetic_algorithm", n), &problem, |b, p| {
            b.iter(|| {
                let mut ga = GeneticAlgorithm::new(p, GaConfig::default().with_seed(42)).unwrap();
                black_box(ga.run())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_tsp);
criterion_main!(benches);
