use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trading_common::Tick;
use trading_core::{ScalpingStrategy, Strategy};

fn create_test_ticks(count: usize) -> Vec<Tick> {
    // sawtooth: five rising ticks then a drop, so every branch gets exercised
    (0..count)
        .map(|i| {
            let step = Decimal::from((i % 6) as u32) * dec!(0.25);
            Tick::new("AAPL", dec!(540) + step, 100).unwrap()
        })
        .collect()
}

fn bench_single_tick(c: &mut Criterion) {
    let mut strategy = ScalpingStrategy::new(dec!(0.1), dec!(0.15));
    let tick = Tick::new("AAPL", dec!(543.5), 100).unwrap();

    c.bench_function("single_tick", |b| {
        b.iter(|| strategy.handle_tick(black_box(&tick)));
    });
}

fn bench_tick_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_stream");

    for size in [100, 1_000, 10_000].iter() {
        let ticks = create_test_ticks(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ticks, |b, ticks| {
            b.iter(|| {
                let mut strategy = ScalpingStrategy::new(dec!(0.1), dec!(0.15));
                ticks
                    .iter()
                    .filter_map(|tick| strategy.handle_tick(black_box(tick)).ok().flatten())
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_tick, bench_tick_stream);
criterion_main!(benches);
