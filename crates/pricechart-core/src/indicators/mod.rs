// File: crates/pricechart-core/src/indicators/mod.rs
// Summary: Technical-indicator engine; pure functions over an ordered bar slice.
// Notes:
// - Every function returns exactly one entry per input bar. `None` marks the
//   warm-up window (or a disabled indicator once samples are assembled).
// - Nothing here fails: short input or a zero period degrade to all-`None`.

mod bollinger;
mod macd;
mod rsi;
mod sma;

pub use bollinger::{compute_bollinger_bands, BollingerBands};
pub use macd::{compute_macd, Macd};
pub use rsi::{compute_rsi, RSI_ZERO_LOSS_EPSILON};
pub use sma::compute_sma;

use crate::config::IndicatorConfig;
use crate::series::Bar;

/// Fixed SMA periods offered by the chart.
pub const SMA_PERIODS: [usize; 5] = [20, 50, 75, 100, 200];

/// Indicators that can be switched on and off as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma(usize),
    Bollinger,
    Rsi,
    Macd,
}

impl IndicatorKind {
    pub fn id(&self) -> &'static str {
        match self {
            IndicatorKind::Sma(_) => "sma",
            IndicatorKind::Bollinger => "bollinger",
            IndicatorKind::Rsi => "rsi",
            IndicatorKind::Macd => "macd",
        }
    }

    /// Whether the indicator shares the price axis (and so the price domain).
    pub fn is_overlay(&self) -> bool {
        matches!(self, IndicatorKind::Sma(_) | IndicatorKind::Bollinger)
    }
}

/// Derived values attached to one bar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorSample {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub sma75: Option<f64>,
    pub sma100: Option<f64>,
    pub sma200: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub rsi: Option<f64>,
    pub macd_line: Option<f64>,
    pub signal_line: Option<f64>,
    pub histogram: Option<f64>,
}

impl IndicatorSample {
    /// SMA value for one of [`SMA_PERIODS`]; other periods read as `None`.
    pub fn sma(&self, period: usize) -> Option<f64> {
        match period {
            20 => self.sma20,
            50 => self.sma50,
            75 => self.sma75,
            100 => self.sma100,
            200 => self.sma200,
            _ => None,
        }
    }

    fn sma_slot(&mut self, period: usize) -> Option<&mut Option<f64>> {
        match period {
            20 => Some(&mut self.sma20),
            50 => Some(&mut self.sma50),
            75 => Some(&mut self.sma75),
            100 => Some(&mut self.sma100),
            200 => Some(&mut self.sma200),
            _ => None,
        }
    }

    /// Defined values drawn on the price axis (SMAs and Bollinger bands).
    pub fn price_overlay_values(&self) -> impl Iterator<Item = f64> {
        [
            self.sma20,
            self.sma50,
            self.sma75,
            self.sma100,
            self.sma200,
            self.bollinger_upper,
            self.bollinger_middle,
            self.bollinger_lower,
        ]
        .into_iter()
        .flatten()
    }
}

/// Run every enabled indicator and zip the results per bar.
pub fn compute_samples(bars: &[Bar], config: &IndicatorConfig) -> Vec<IndicatorSample> {
    let mut samples = vec![IndicatorSample::default(); bars.len()];

    for &period in &config.sma_periods {
        let values = compute_sma(bars, period);
        for (sample, v) in samples.iter_mut().zip(values) {
            if let Some(slot) = sample.sma_slot(period) {
                *slot = v;
            }
        }
    }

    if config.bollinger.enabled {
        let bands = compute_bollinger_bands(bars, config.bollinger.period, config.bollinger.std_dev);
        for (i, sample) in samples.iter_mut().enumerate() {
            sample.bollinger_upper = bands.upper[i];
            sample.bollinger_middle = bands.middle[i];
            sample.bollinger_lower = bands.lower[i];
        }
    }

    if config.rsi.enabled {
        for (sample, v) in samples.iter_mut().zip(compute_rsi(bars, config.rsi.period)) {
            sample.rsi = v;
        }
    }

    if config.macd.enabled {
        let m = compute_macd(bars, config.macd.fast, config.macd.slow, config.macd.signal);
        for (i, sample) in samples.iter_mut().enumerate() {
            sample.macd_line = m.macd_line[i];
            sample.signal_line = m.signal_line[i];
            sample.histogram = m.histogram[i];
        }
    }

    samples
}

fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
