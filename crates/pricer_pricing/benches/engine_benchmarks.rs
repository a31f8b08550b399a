//! Criterion benchmarks for random streams and Monte Carlo pricing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_models::instruments::{OptionSpec, OptionType};
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
use pricer_pricing::path_dependent::AsianPayoff;
use pricer_pricing::rng::PricerRng;

fn bench_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng");
    let mut buffer = vec![0.0; 4096];
    group.throughput(Throughput::Elements(buffer.len() as u64));

    group.bench_function("fill_uniform", |b| {
        let mut rng = PricerRng::from_seed(42);
        b.iter(|| rng.fill_uniform(black_box(&mut buffer)))
    });
    group.bench_function("fill_normal", |b| {
        let mut rng = PricerRng::from_seed(42);
        b.iter(|| rng.fill_normal(black_box(&mut buffer)))
    });
    group.bench_function("skip_1e9", |b| {
        b.iter(|| PricerRng::for_stream(42, black_box(1_000_000_000)))
    });
    group.finish();
}

fn bench_asian(c: &mut Criterion) {
    let spec = OptionSpec::new(100.0, 0.05, 1.0, 100.0, 0.2).unwrap();
    let payoff = AsianPayoff::arithmetic(OptionType::Call, 100.0);

    let mut group = c.benchmark_group("asian_mc");
    group.sample_size(10);
    for n_paths in [10_000_usize, 100_000] {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(52)
            .seed(42)
            .build()
            .unwrap();
        let pricer = MonteCarloPricer::new(config).unwrap();

        group.bench_with_input(BenchmarkId::new("sequential", n_paths), &n_paths, |b, _| {
            b.iter(|| pricer.price_asian(black_box(&spec), &payoff))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n_paths), &n_paths, |b, _| {
            b.iter(|| pricer.price_asian_parallel(black_box(&spec), &payoff))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rng, bench_asian);
criterion_main!(benches);
