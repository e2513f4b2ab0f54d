//! Benchmarks for baryfit-model regressions.
#![allow(missing_docs)]

use baryfit_model::{InterpolationConfig, RegressionKind, build_regression};
use baryfit_traits::{Interpolant, Regression};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

fn noisy_samples(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = rand::thread_rng();
    let x: Vec<f64> = (0..n).map(|i| 10.0 * i as f64 / n as f64).collect();
    let y = x.iter().map(|v| v.powi(3) * (1.0 + rng.gen_range(-0.03..0.03))).collect();
    (x, y)
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_fit");

    let kinds = [
        ("linear", RegressionKind::Linear),
        ("interpolation_10", RegressionKind::Interpolation(InterpolationConfig::default())),
        (
            "interpolation_50",
            RegressionKind::Interpolation(InterpolationConfig { size: 50, degree: 0 }),
        ),
    ];

    for size in [100, 1000, 10000, 100000] {
        group.throughput(Throughput::Elements(size as u64));
        for (name, kind) in kinds {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &size| {
                let regression = build_regression(kind);
                let (x, y) = noisy_samples(size);
                b.iter(|| regression.fit(black_box(&x), black_box(&y)).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression_eval");

    for buckets in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &buckets, |b, &buckets| {
            let config = InterpolationConfig { size: buckets, degree: 0 };
            let (x, y) = noisy_samples(10 * buckets);
            let f = build_regression(RegressionKind::Interpolation(config)).fit(&x, &y).unwrap();
            let points: Vec<f64> = (0..256).map(|i| 0.013 + i as f64 * 0.039).collect();
            b.iter(|| f.eval_many(black_box(&points)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_eval);
criterion_main!(benches);
