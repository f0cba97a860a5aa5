// File: crates/pricechart-core/src/config.rs
// Summary: Indicator/surface configuration, loadable from TOML and validated
//          against the option sets the chart offers.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::indicators::{IndicatorKind, SMA_PERIODS};
use crate::types::{HEIGHT, WIDTH};

pub const BOLLINGER_PERIODS: [usize; 4] = [10, 20, 25, 50];
pub const BOLLINGER_STD_DEVS: [f64; 4] = [1.0, 2.0, 2.5, 3.0];
pub const RSI_PERIODS: [usize; 4] = [5, 9, 14, 21];
pub const MACD_FAST_PERIODS: [usize; 3] = [8, 12, 16];
pub const MACD_SLOW_PERIODS: [usize; 3] = [21, 26, 30];
pub const MACD_SIGNAL_PERIODS: [usize; 3] = [7, 9, 12];

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub indicators: IndicatorConfig,
    pub surface: SurfaceConfig,
}

impl ChartConfig {
    /// Load and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChartConfig = toml::from_str(content)?;
        config.indicators.validate()?;
        Ok(config)
    }
}

/// Initial plot-area size in pixels; the host updates it on resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: WIDTH as f64, height: HEIGHT as f64 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Enabled SMA periods, each one of [`SMA_PERIODS`].
    pub sma_periods: Vec<usize>,
    pub bollinger: BollingerConfig,
    pub rsi: RsiConfig,
    pub macd: MacdConfig,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_periods: vec![20, 50],
            bollinger: BollingerConfig::default(),
            rsi: RsiConfig::default(),
            macd: MacdConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerConfig {
    pub enabled: bool,
    pub period: usize,
    pub std_dev: f64,
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self { enabled: false, period: 20, std_dev: 2.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RsiConfig {
    pub enabled: bool,
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { enabled: false, period: 14 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdConfig {
    pub enabled: bool,
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self { enabled: false, fast: 12, slow: 26, signal: 9 }
    }
}

impl IndicatorConfig {
    /// Reject parameters outside the offered option sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for p in &self.sma_periods {
            check("sma_periods", p, &SMA_PERIODS)?;
        }
        check("bollinger.period", &self.bollinger.period, &BOLLINGER_PERIODS)?;
        check("bollinger.std_dev", &self.bollinger.std_dev, &BOLLINGER_STD_DEVS)?;
        check("rsi.period", &self.rsi.period, &RSI_PERIODS)?;
        check("macd.fast", &self.macd.fast, &MACD_FAST_PERIODS)?;
        check("macd.slow", &self.macd.slow, &MACD_SLOW_PERIODS)?;
        check("macd.signal", &self.macd.signal, &MACD_SIGNAL_PERIODS)?;
        Ok(())
    }

    pub fn is_enabled(&self, kind: IndicatorKind) -> bool {
        match kind {
            IndicatorKind::Sma(p) => self.sma_periods.contains(&p),
            IndicatorKind::Bollinger => self.bollinger.enabled,
            IndicatorKind::Rsi => self.rsi.enabled,
            IndicatorKind::Macd => self.macd.enabled,
        }
    }

    /// Flip one indicator; returns the new enabled state. SMA periods outside
    /// [`SMA_PERIODS`] are ignored and read as disabled.
    pub fn toggle(&mut self, kind: IndicatorKind) -> bool {
        match kind {
            IndicatorKind::Sma(p) if !SMA_PERIODS.contains(&p) => false,
            IndicatorKind::Sma(p) => {
                if let Some(pos) = self.sma_periods.iter().position(|&q| q == p) {
                    self.sma_periods.remove(pos);
                    false
                } else {
                    self.sma_periods.push(p);
                    self.sma_periods.sort_unstable();
                    true
                }
            }
            IndicatorKind::Bollinger => flip(&mut self.bollinger.enabled),
            IndicatorKind::Rsi => flip(&mut self.rsi.enabled),
            IndicatorKind::Macd => flip(&mut self.macd.enabled),
        }
    }
}

fn flip(flag: &mut bool) -> bool {
    *flag = !*flag;
    *flag
}

fn check<T: PartialEq + Display>(field: &'static str, value: &T, allowed: &[T]) -> Result<(), ConfigError> {
    if allowed.contains(value) {
        return Ok(());
    }
    Err(ConfigError::Unsupported {
        field,
        value: value.to_string(),
        allowed: allowed.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", "),
    })
}
