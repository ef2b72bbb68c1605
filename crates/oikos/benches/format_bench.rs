//! Benchmarks for fraction canonicalization and equation rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use oikos::prelude::*;

fn bench_fraction_approx(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_approx");

    group.bench_function("exact_small", |b| {
        b.iter(|| Fraction::approx(black_box(0.75), black_box(5)));
    });

    group.bench_function("decimal_fallback", |b| {
        b.iter(|| Fraction::approx(black_box(121.0 / 3.0), black_box(5)));
    });

    group.bench_function("deep_expansion", |b| {
        b.iter(|| Fraction::approx(black_box(17.0 / 36.0), black_box(36)));
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let term = Term::new(-0.5, "q", -2.0);
    group.bench_function("term", |b| {
        b.iter(|| black_box(&term).render(PrintOptions::default()));
    });

    let poly = Polynomial::from_slices(
        &[12.0, -0.5, 0.25, -1.0],
        "x",
        &[0.0, 1.0, 2.0, 3.0],
    );
    group.bench_function("polynomial", |b| {
        b.iter(|| black_box(&poly).render(PrintOptions::default()));
    });

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let market = LinearMarket::new(
        LinearDemand::new(120.0, 1.0).unwrap(),
        LinearSupply::new(0.0, 2.0).unwrap(),
    );
    c.bench_function("linear_market_solve", |b| {
        b.iter(|| black_box(&market).solve().unwrap());
    });
}

criterion_group!(benches, bench_fraction_approx, bench_rendering, bench_solve);
criterion_main!(benches);
