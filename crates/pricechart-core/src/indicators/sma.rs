// File: crates/pricechart-core/src/indicators/sma.rs
// Summary: Simple moving average over bar closes.

use crate::series::Bar;

use super::closes;

/// Trailing arithmetic mean of `close` over `period` bars (inclusive).
/// Indices before `period - 1` are `None`.
pub fn compute_sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    sma_of(&closes(bars), period)
}

pub(crate) fn sma_of(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    // Each window is summed on its own; a rolling sum drifts on long series.
    for (i, window) in values.windows(period).enumerate() {
        out[i + period - 1] = Some(window.iter().sum::<f64>() / period as f64);
    }
    out
}
