// File: crates/pricechart-core/src/indicators/macd.rs
// Summary: MACD line, signal line and histogram built on SMA-seeded EMAs.

use crate::series::Bar;

use super::closes;

/// MACD output, one entry per bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Macd {
    /// Fast EMA - slow EMA.
    pub macd_line: Vec<Option<f64>>,
    /// EMA of the MACD line.
    pub signal_line: Vec<Option<f64>>,
    /// MACD - signal.
    pub histogram: Vec<Option<f64>>,
}

pub fn compute_macd(bars: &[Bar], fast_period: usize, slow_period: usize, signal_period: usize) -> Macd {
    let closes = closes(bars);
    let n = closes.len();
    let fast = ema_of(&closes, fast_period);
    let slow = ema_of(&closes, slow_period);

    let macd_line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();

    // The signal EMA runs over the defined MACD suffix only and is then shifted
    // back so that signal_line[start + j] lines up with macd_line[start + j].
    let mut signal_line = vec![None; n];
    if let Some(start) = macd_line.iter().position(Option::is_some) {
        let suffix: Vec<f64> = macd_line[start..].iter().map_while(|v| *v).collect();
        for (j, v) in ema_of(&suffix, signal_period).into_iter().enumerate() {
            signal_line[start + j] = v;
        }
    }

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| Some((*m)? - (*s)?))
        .collect();

    Macd { macd_line, signal_line, histogram }
}

/// EMA seeded with the SMA of the first `period` values; the first
/// `period - 1` entries are `None`.
pub(crate) fn ema_of(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let mut prev = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(prev);
    for i in period..values.len() {
        prev = (values[i] - prev) * k + prev;
        out[i] = Some(prev);
    }
    out
}
