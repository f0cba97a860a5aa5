// File: crates/pricechart-core/src/lib.rs
// Summary: Core library entry point; exports the indicator engine and the
//          viewport / drawing / crosshair state behind ChartState.

pub mod chart;
pub mod config;
pub mod crosshair;
pub mod drawing;
pub mod error;
pub mod geometry;
pub mod indicators;
pub mod input;
pub mod scale;
pub mod series;
pub mod types;
pub mod view;

pub use chart::{ChartFrame, ChartState, ChartStyle};
pub use config::{ChartConfig, IndicatorConfig};
pub use crosshair::{CrosshairSample, CrosshairTracker};
pub use drawing::{DrawingLine, DrawingMode, DrawingToolController, LineId, LineKind, PointerContext};
pub use error::{ConfigError, SeriesError};
pub use indicators::{
    compute_bollinger_bands, compute_macd, compute_rsi, compute_samples, compute_sma, BollingerBands,
    IndicatorKind, IndicatorSample, Macd,
};
pub use input::{map_key, ChartEvent, Key, KeyCommand};
pub use scale::{DataPoint, PlotMapping, PriceDomain};
pub use series::{Bar, BarRecord, BarSeries};
pub use types::{Point, Size};
pub use view::{Domain, ViewportController, WheelDirection};
