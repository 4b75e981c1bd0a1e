//! Criterion benchmarks for pricer_pricing Monte Carlo simulation.
//!
//! Benchmarks cover:
//! - RNG stream performance
//! - European option pricing with varying path counts
//! - Sequential against parallel batch execution

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::{ContractSpec, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloSimulator};
use pricer_pricing::rng::PricerRng;

fn atm_call() -> ContractSpec {
    ContractSpec::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
}

/// Benchmark RNG generation (foundation for MC simulations).
fn bench_rng_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("normal_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::for_stream(42, 0);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark Monte Carlo pricing with varying path counts.
fn bench_mc_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_pricing");
    group.sample_size(30);

    let contract = atm_call();

    for n_paths in [10_000, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("european_call_exact", n_paths),
            &n_paths,
            |b, &n| {
                let config = MonteCarloConfig::builder()
                    .n_paths(n)
                    .n_steps(1)
                    .seed(42)
                    .build()
                    .unwrap();
                let simulator = MonteCarloSimulator::new(config).unwrap();
                b.iter(|| simulator.simulate(black_box(&contract), OptionType::Call));
            },
        );
    }

    group.finish();
}

/// Benchmark batch scheduling with a multi-step discretisation.
fn bench_parallel_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("mc_batches");
    group.sample_size(20);

    let contract = atm_call();

    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(BenchmarkId::new("stepped_52", label), |b| {
            let config = MonteCarloConfig::builder()
                .n_paths(100_000)
                .n_steps(52)
                .seed(42)
                .parallel(parallel)
                .build()
                .unwrap();
            let simulator = MonteCarloSimulator::new(config).unwrap();
            b.iter(|| simulator.simulate(black_box(&contract), OptionType::Put));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_generation,
    bench_mc_pricing,
    bench_parallel_batches
);
criterion_main!(benches);
