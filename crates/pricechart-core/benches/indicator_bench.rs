use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricechart_core::{compute_samples, BarRecord, BarSeries, IndicatorConfig};

fn gen_bars(n: usize) -> BarSeries {
    let first = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let mut price = 100.0f64;
    let records = (0..n).map(|i| {
        let o = price;
        let c = o + if i % 3 == 0 { -0.4 } else { 0.3 };
        price = c;
        BarRecord {
            date: first + Duration::days(i as i64),
            open: o,
            high: o.max(c) + 1.0,
            low: o.min(c) - 1.0,
            close: c,
            volume: 10_000.0,
            turnover_value: c * 10_000.0,
        }
    });
    BarSeries::from_records(records).unwrap()
}

fn bench_samples(c: &mut Criterion) {
    let mut config = IndicatorConfig::default();
    config.sma_periods = vec![20, 50, 75, 100, 200];
    config.bollinger.enabled = true;
    config.rsi.enabled = true;
    config.macd.enabled = true;

    let mut group = c.benchmark_group("compute_samples");
    for &n in &[1_000usize, 10_000usize] {
        let bars = gen_bars(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &bars, |b, bars| {
            b.iter(|| black_box(compute_samples(bars.bars(), &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_samples);
criterion_main!(benches);
