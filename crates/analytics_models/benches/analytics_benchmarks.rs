//! Criterion benchmarks for the options analytics hot paths.
//!
//! The Taylor repricer exists because it is cheaper than a full reprice;
//! the price/greeks/reprice trio here documents that gap.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use analytics_models::analytical::{taylor_reprice, BlackScholes, MarketShift};
use analytics_models::instruments::{OptionParams, OptionType};

fn reference_params() -> OptionParams<f64> {
    OptionParams::new(1277.5, 1270.0, 21.0 / 365.0, 0.066256, 0.201, OptionType::Put).unwrap()
}

fn bench_price(c: &mut Criterion) {
    let params = reference_params();

    c.bench_function("black_scholes_price", |b| {
        b.iter(|| BlackScholes::new(black_box(params)).price());
    });
}

fn bench_greeks(c: &mut Criterion) {
    let params = reference_params();

    c.bench_function("black_scholes_greeks", |b| {
        b.iter(|| BlackScholes::new(black_box(params)).greeks());
    });
}

fn bench_taylor_reprice(c: &mut Criterion) {
    let model = BlackScholes::new(reference_params());
    let base_price = model.price();
    let greeks = model.greeks();
    let shift = MarketShift::new(2.5, 1.0, 0.5, 0.0);

    c.bench_function("taylor_reprice", |b| {
        b.iter(|| {
            taylor_reprice(
                black_box(base_price),
                black_box(&greeks),
                black_box(&shift),
            )
        });
    });
}

criterion_group!(benches, bench_price, bench_greeks, bench_taylor_reprice);
criterion_main!(benches);
