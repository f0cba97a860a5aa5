// File: crates/pricechart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, window limits).

/// Default plot-area width in pixels.
pub const WIDTH: i32 = 1024;
/// Default plot-area height in pixels.
pub const HEIGHT: i32 = 640;

/// Smallest visible window, in bars, that zoom will allow.
pub const MIN_VISIBLE_BARS: f64 = 5.0;

/// Fraction of the price span added above and below the visible extrema.
pub const PRICE_PADDING: f64 = 0.05;

/// Pixel position relative to the plot area's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Plot-area size in pixels.
/// Contract: a non-positive dimension makes every pointer mapping a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }

    pub fn is_drawable(&self) -> bool { self.width > 0.0 && self.height > 0.0 }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH as f64, HEIGHT as f64)
    }
}
