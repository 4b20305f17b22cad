// ============================================================================
// Pricing Kernel Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Primitives - Isolated transcendental kernels (exp, ln, sqrt, CDF)
// 2. Pricing - Full call/put pricing through validation
// 3. Greeks - Sensitivity calculations
//
// Every operation is a fixed, input-independent number of integer
// multiplications/divisions, so distributions should be extremely tight.
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricing_kernel::prelude::*;

// ============================================================================
// Primitive Benchmarks
// ============================================================================

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    for &value in ["0.5", "4.2", "27.9"].iter() {
        let x: SignedWad = value.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("exp", value), &x, |b, &x| {
            b.iter(|| black_box(exp(black_box(x)).unwrap()))
        });
    }

    for &value in ["0.001", "42.0", "8000000.0"].iter() {
        let x: Wad = value.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("ln", value), &x, |b, &x| {
            b.iter(|| black_box(ln(black_box(x)).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("sqrt", value), &x, |b, &x| {
            b.iter(|| black_box(sqrt(black_box(x)).unwrap()))
        });
    }

    let z: SignedWad = "-1.25".parse().unwrap();
    group.bench_function("std_norm_cdf", |b| {
        b.iter(|| black_box(std_norm_cdf(black_box(z)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Pricing Benchmarks
// ============================================================================

fn benchmark_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing");

    let params = OptionParams::new(
        Wad::from_integer(1000).unwrap(),
        Wad::from_integer(980).unwrap(),
        60 * 86_400,
        "0.6".parse().unwrap(),
        "0.05".parse().unwrap(),
    );

    group.bench_function("future_price", |b| {
        b.iter(|| {
            black_box(
                future_price(params.spot, params.time_to_expiry_secs, params.rate).unwrap(),
            )
        })
    });
    group.bench_function("call_price", |b| {
        b.iter(|| black_box(call_price(black_box(&params)).unwrap()))
    });
    group.bench_function("put_price", |b| {
        b.iter(|| black_box(put_price(black_box(&params)).unwrap()))
    });

    group.finish();
}

// ============================================================================
// Greeks Benchmarks
// ============================================================================

fn benchmark_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");

    let params = OptionParams::new(
        Wad::from_integer(1000).unwrap(),
        Wad::from_integer(980).unwrap(),
        60 * 86_400,
        "0.6".parse().unwrap(),
        "0.05".parse().unwrap(),
    );

    group.bench_function("delta", |b| {
        b.iter(|| black_box(delta(black_box(&params)).unwrap()))
    });
    group.bench_function("gamma", |b| {
        b.iter(|| black_box(gamma(black_box(&params)).unwrap()))
    });
    group.bench_function("vega", |b| {
        b.iter(|| black_box(vega(black_box(&params)).unwrap()))
    });
    group.bench_function("theta", |b| {
        b.iter(|| black_box(theta(black_box(&params)).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_pricing,
    benchmark_greeks
);
criterion_main!(benches);
