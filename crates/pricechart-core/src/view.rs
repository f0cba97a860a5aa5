// File: crates/pricechart-core/src/view.rs
// Summary: Visible index window over the bar sequence, with zoom/pan/reset.
// Notes:
// - Nothing here fails: every mutation clamps to `0 <= start <= end <= N-1`
//   with `end - start >= MIN_VISIBLE_BARS` (or the whole range when shorter).
// - "Unset" (`None`) means the full range and is what `reset` restores.

use std::ops::Range;

use tracing::trace;

use crate::types::MIN_VISIBLE_BARS;

/// Real-valued window `[start, end]` over bar indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub const fn new(start: f64, end: f64) -> Self { Self { start, end } }

    /// Width of the window in bars.
    pub fn range(&self) -> f64 { self.end - self.start }

    pub fn midpoint(&self) -> f64 { (self.start + self.end) * 0.5 }
}

/// Which way the wheel turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    /// Away from the user: zoom out.
    Away,
    /// Toward the user: zoom in.
    Toward,
}

impl WheelDirection {
    /// Browser-style wheel delta: positive `delta_y` scrolls down, i.e. away.
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { WheelDirection::Away } else { WheelDirection::Toward }
    }

    pub fn factor(&self) -> f64 {
        match self {
            WheelDirection::Away => ZOOM_OUT_FACTOR,
            WheelDirection::Toward => ZOOM_IN_FACTOR,
        }
    }
}

pub const ZOOM_OUT_FACTOR: f64 = 1.1;
pub const ZOOM_IN_FACTOR: f64 = 0.9;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportController {
    bar_count: usize,
    domain: Option<Domain>,
}

impl ViewportController {
    pub fn new(bar_count: usize) -> Self {
        Self { bar_count, domain: None }
    }

    pub fn bar_count(&self) -> usize { self.bar_count }

    /// A new data load starts from the full range again.
    pub fn set_bar_count(&mut self, bar_count: usize) {
        self.bar_count = bar_count;
        self.domain = None;
    }

    /// The explicit domain, or `None` when showing the full range.
    pub fn domain(&self) -> Option<Domain> { self.domain }

    /// The effective window, with "unset" resolved to the full range.
    pub fn resolved(&self) -> Domain {
        self.domain.unwrap_or_else(|| self.full())
    }

    pub fn is_zoomed(&self) -> bool { self.domain.is_some() }

    /// Wheel zoom keeping the point at `anchor_ratio` (0 = left edge, 1 = right edge) fixed.
    pub fn zoom(&mut self, direction: WheelDirection, anchor_ratio: f64) -> Domain {
        self.zoom_by_factor(direction.factor(), anchor_ratio)
    }

    /// Keyboard zoom around the window's own midpoint.
    pub fn zoom_centered(&mut self, factor: f64) -> Domain {
        self.zoom_by_factor(factor, 0.5)
    }

    /// Rescale the window width by `factor` around `anchor_ratio`.
    pub fn zoom_by_factor(&mut self, factor: f64, anchor_ratio: f64) -> Domain {
        let current = self.resolved();
        if self.bar_count == 0 || !factor.is_finite() || factor <= 0.0 {
            return current;
        }
        let anchor = if anchor_ratio.is_finite() { anchor_ratio.clamp(0.0, 1.0) } else { 0.5 };
        let max = self.max_index();
        let range = current.range();

        let new_range = (range * factor).clamp(self.min_width(), self.bar_count as f64);
        let mut new_start = (current.start + (range - new_range) * anchor).clamp(0.0, max);
        let new_end = (new_start + new_range).clamp(0.0, max);
        if new_end >= max {
            // saturated on the right: give the width back on the left
            new_start = (new_end - new_range).max(0.0);
        }
        self.commit(Domain::new(new_start, new_end))
    }

    /// Drag pan: `pixel_delta` across a plot `viewport_pixel_width` wide moves the
    /// window by the same fraction of its width.
    pub fn pan(&mut self, pixel_delta: f64, viewport_pixel_width: f64) -> Domain {
        if !(viewport_pixel_width > 0.0) || !pixel_delta.is_finite() {
            return self.resolved();
        }
        let range = self.resolved().range();
        self.shift((pixel_delta / viewport_pixel_width) * range)
    }

    /// Keyboard pan by a signed fraction of the current width (negative = left).
    pub fn pan_by_fraction(&mut self, fraction: f64) -> Domain {
        if !fraction.is_finite() {
            return self.resolved();
        }
        let range = self.resolved().range();
        self.shift(fraction * range)
    }

    pub fn reset(&mut self) -> Domain {
        trace!("viewport reset to full range");
        self.domain = None;
        self.resolved()
    }

    /// Bars touched by the window: `floor(start) ..= ceil(end)`, clipped.
    pub fn visible_range(&self) -> Range<usize> {
        if self.bar_count == 0 {
            return 0..0;
        }
        let d = self.resolved();
        let start = d.start.floor().max(0.0) as usize;
        let end = (d.end.ceil().max(0.0) as usize + 1).min(self.bar_count);
        start.min(end)..end
    }

    fn shift(&mut self, index_delta: f64) -> Domain {
        let current = self.resolved();
        if self.bar_count == 0 {
            return current;
        }
        let max = self.max_index();
        let width = current.range();
        let mut start = current.start + index_delta;
        let mut end = current.end + index_delta;
        if start < 0.0 {
            start = 0.0;
            end = width.min(max);
        }
        if end > max {
            end = max;
            start = (max - width).max(0.0);
        }
        self.commit(Domain::new(start, end))
    }

    fn commit(&mut self, domain: Domain) -> Domain {
        trace!(start = domain.start, end = domain.end, "viewport domain");
        self.domain = Some(domain);
        domain
    }

    fn full(&self) -> Domain {
        Domain::new(0.0, self.max_index())
    }

    fn max_index(&self) -> f64 {
        self.bar_count.saturating_sub(1) as f64
    }

    fn min_width(&self) -> f64 {
        MIN_VISIBLE_BARS.min(self.max_index())
    }
}
