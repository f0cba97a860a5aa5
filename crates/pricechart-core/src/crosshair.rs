// File: crates/pricechart-core/src/crosshair.rs
// Summary: Pointer → (nearest bar, price) projection for the value readout.

use crate::geometry::CursorOverlay;
use crate::scale::{PlotMapping, PriceDomain, Projection};
use crate::types::{Point, Size};
use crate::view::ViewportController;

/// Transient readout under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrosshairSample {
    pub bar_index: usize,
    pub price: f64,
    /// Pixel x of the snapped bar's center.
    pub x: f64,
    /// Pixel y of the pointer.
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrosshairTracker {
    enabled: bool,
    sample: Option<CrosshairSample>,
}

impl Default for CrosshairTracker {
    fn default() -> Self {
        Self { enabled: true, sample: None }
    }
}

impl CrosshairTracker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, sample: None }
    }

    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Flip the toggle; turning it off drops any sample.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.sample = None;
        }
        self.enabled
    }

    pub fn sample(&self) -> Option<CrosshairSample> { self.sample }

    /// Recompute the sample for a pointer move. Produces nothing while disabled,
    /// with no bars, or without a price domain.
    pub fn track(
        &mut self,
        pointer: Point,
        viewport: &ViewportController,
        price: Option<PriceDomain>,
        size: Size,
    ) -> Option<CrosshairSample> {
        self.sample = if self.enabled { project(pointer, viewport, price, size) } else { None };
        self.sample
    }

    /// Pointer left the plot.
    pub fn clear(&mut self) {
        self.sample = None;
    }

    pub fn overlay(&self, size: Size) -> CursorOverlay {
        let x = self.sample.map_or(0.0, |s| s.x);
        CursorOverlay {
            points: [Point::new(x, 0.0), Point::new(x, size.height)],
            show_crosshair: self.enabled && self.sample.is_some(),
            sample: self.sample,
        }
    }
}

fn project(
    pointer: Point,
    viewport: &ViewportController,
    price: Option<PriceDomain>,
    size: Size,
) -> Option<CrosshairSample> {
    let count = viewport.bar_count();
    if count == 0 {
        return None;
    }
    let mapping = PlotMapping::new(viewport.resolved(), price?, size)?;
    let data = mapping.pixel_to_data(pointer);
    let bar_index = data.index.round().clamp(0.0, (count - 1) as f64) as usize;
    Some(CrosshairSample {
        bar_index,
        price: data.price,
        x: mapping.x.to_px(bar_index as f64),
        y: pointer.y,
    })
}
