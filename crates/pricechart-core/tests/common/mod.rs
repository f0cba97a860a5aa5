// File: crates/pricechart-core/tests/common/mod.rs
// Purpose: Shared bar builders for the integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use pricechart_core::{BarRecord, BarSeries};

/// Daily bars from a list of closes; open is the previous close, wicks are ±1.
pub fn bars_from_closes(closes: &[f64]) -> BarSeries {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut prev = closes.first().copied().unwrap_or(0.0);
    let records: Vec<BarRecord> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = prev;
            prev = close;
            BarRecord {
                date: first + Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1_000.0,
                turnover_value: close * 1_000.0,
            }
        })
        .collect();
    BarSeries::from_records(records).unwrap()
}

/// `n` bars with closes 100, 101, 102, ...
pub fn ascending(n: usize) -> BarSeries {
    let closes: Vec<f64> = (0..n).map(|i| 100.0 + i as f64).collect();
    bars_from_closes(&closes)
}

/// Deterministic zig-zag so RSI/MACD see both gains and losses.
pub fn zigzag(n: usize) -> BarSeries {
    let closes: Vec<f64> = (0..n)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 8.0 + (i % 3) as f64)
        .collect();
    bars_from_closes(&closes)
}
