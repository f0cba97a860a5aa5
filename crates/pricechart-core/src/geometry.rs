// File: crates/pricechart-core/src/geometry.rs
// Summary: Renderer payloads: per-bar shape boxes and the cursor overlay.
// The core computes the numbers; the rendering layer decides how to paint them.

use crate::crosshair::CrosshairSample;
use crate::scale::{PlotMapping, Projection};
use crate::series::Bar;
use crate::types::Point;

/// Body width as a fraction of the spacing between bar centers.
pub const BODY_WIDTH_FRACTION: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlc {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&Bar> for Ohlc {
    fn from(b: &Bar) -> Self {
        Self { open: b.open, high: b.high, low: b.low, close: b.close }
    }
}

/// Pixel box spanning a bar's high..low, centred on its index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub index: usize,
    pub ohlc: Ohlc,
}

/// Boxes for every bar in `bars` under the given mapping.
pub fn layout_bars(bars: &[Bar], mapping: &PlotMapping) -> Vec<BarGeometry> {
    let width = (mapping.x.bar_spacing() * BODY_WIDTH_FRACTION).max(1.0);
    bars.iter()
        .map(|b| {
            let cx = mapping.x.to_px(b.index as f64);
            let top = mapping.y.to_px(b.high);
            let bottom = mapping.y.to_px(b.low);
            BarGeometry {
                x: cx - width * 0.5,
                y: top,
                width,
                height: (bottom - top).max(1.0),
                index: b.index,
                ohlc: Ohlc::from(b),
            }
        })
        .collect()
}

/// What the cursor layer needs: the vertical guide through the snapped bar,
/// whether to draw the crosshair at all, and the readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorOverlay {
    /// Top and bottom of the vertical guide.
    pub points: [Point; 2],
    pub show_crosshair: bool,
    pub sample: Option<CrosshairSample>,
}
