// File: crates/pricechart-core/src/indicators/bollinger.rs
// Summary: Bollinger Bands (SMA ± k · population standard deviation).

use crate::series::Bar;

use super::closes;
use super::sma::sma_of;

/// Upper/middle/lower band values, one entry per bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<Option<f64>>,
    pub middle: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
}

pub fn compute_bollinger_bands(bars: &[Bar], period: usize, std_dev_multiplier: f64) -> BollingerBands {
    let closes = closes(bars);
    let middle = sma_of(&closes, period);
    let mut upper = vec![None; closes.len()];
    let mut lower = vec![None; closes.len()];

    for (i, mean) in middle.iter().enumerate() {
        let Some(mean) = *mean else { continue };
        let window = &closes[i + 1 - period..=i];
        // population variance: denominator is `period`, not `period - 1`
        let variance = window.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / period as f64;
        let band = std_dev_multiplier * variance.sqrt();
        upper[i] = Some(mean + band);
        lower[i] = Some(mean - band);
    }

    BollingerBands { upper, middle, lower }
}
