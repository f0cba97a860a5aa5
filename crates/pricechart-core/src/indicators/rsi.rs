// File: crates/pricechart-core/src/indicators/rsi.rs
// Summary: Relative Strength Index with Wilder smoothing.

use crate::series::Bar;

use super::closes;

/// Stand-in for a zero average loss. Not the mathematical limit (which would be
/// RSI = 100); charts built on this engine have always shown the approximated value.
pub const RSI_ZERO_LOSS_EPSILON: f64 = 0.001;

/// RSI per bar. The first value sits at index `period`; everything is `None`
/// unless there are more than `period` bars.
pub fn compute_rsi(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    let n = bars.len();
    let mut out = vec![None; n];
    if period == 0 || n <= period {
        return out;
    }

    let closes = closes(bars);
    // changes[j] = close[j + 1] - close[j]
    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let p = period as f64;

    let (gains, losses) = changes[..period].iter().fold((0.0, 0.0), |(g, l), &c| {
        if c > 0.0 { (g + c, l) } else { (g, l - c) }
    });
    let mut avg_gain = gains / p;
    let mut avg_loss = losses / p;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in (period + 1)..n {
        let change = changes[i - 1];
        avg_gain = (avg_gain * (p - 1.0) + change.max(0.0)) / p;
        avg_loss = (avg_loss * (p - 1.0) + (-change).max(0.0)) / p;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let loss = if avg_loss == 0.0 { RSI_ZERO_LOSS_EPSILON } else { avg_loss };
    let rs = avg_gain / loss;
    100.0 - 100.0 / (1.0 + rs)
}
