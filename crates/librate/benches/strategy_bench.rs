//! Benchmarks for the period integral.
//!
//! Includes:
//! - The three evaluation strategies across amplitudes
//! - The AGM closed form the strategies are checked against
//! - The bare weighted primitive on a Chebyshev-type integral

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use librate_pendulum::{reference_integral, Amplitude, SingularIntegralEvaluator, Strategy};
use librate_quadrature::{integrate_weighted, AlgebraicWeight, QuadratureConfig};

/// Benchmark each strategy at a small, a moderate and a large amplitude.
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_integral");
    let evaluator = SingularIntegralEvaluator::default();

    for theta_max in [0.1, std::f64::consts::PI / 10.0, 2.0] {
        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), format!("{theta_max:.3}")),
                &theta_max,
                |b, &theta_max| b.iter(|| evaluator.evaluate(black_box(theta_max), strategy)),
            );
        }
    }

    group.finish();
}

/// Benchmark the closed-form reference.
fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_integral");

    for theta_max in [0.1, 2.0, 3.14] {
        let amplitude = Amplitude::new(theta_max).unwrap();
        group.bench_with_input(BenchmarkId::new("agm", theta_max), &amplitude, |b, &amplitude| {
            b.iter(|| reference_integral(black_box(amplitude)))
        });
    }

    group.finish();
}

/// Benchmark the weighted primitive at tightening tolerances.
fn bench_weighted_primitive(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_primitive");
    let weight = AlgebraicWeight::new(-0.5, -0.5).unwrap();

    for tol in [1e-8, 1e-10, 1e-12] {
        let config = QuadratureConfig::default().with_tolerance(tol);
        group.bench_with_input(BenchmarkId::new("chebyshev_cos", tol), &config, |b, config| {
            b.iter(|| integrate_weighted(&|x: f64| x.cos(), -1.0, 1.0, weight, &[], black_box(config)))
        });
    }

    group.finish();
}

criterion_group!(
    strategy_benches,
    bench_strategies,
    bench_reference,
    bench_weighted_primitive,
);

criterion_main!(strategy_benches);
