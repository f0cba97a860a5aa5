// File: crates/pricechart-core/src/scale.rs
// Summary: Index (X) and price (Y) projections between pixels and data space,
//          plus the padded price domain used for the Y axis.

use crate::indicators::IndicatorSample;
use crate::series::{Bar, BarSeries};
use crate::types::{Point, Size};
use crate::view::Domain;

/// A point in data space: fractional bar index and price.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DataPoint {
    pub index: f64,
    pub price: f64,
}

impl DataPoint {
    pub const fn new(index: f64, price: f64) -> Self { Self { index, price } }
}

/// Visible price range `[min, max]` of the Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    /// `None` unless both bounds are finite and `min <= max`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    /// Widen both ends by `fraction` of the span. A flat range is widened
    /// around its value so the axis never collapses.
    pub fn padded(&self, fraction: f64) -> Self {
        let span = self.span();
        let pad = if span > 0.0 {
            span * fraction
        } else if self.min != 0.0 {
            self.min.abs() * fraction
        } else {
            1.0
        };
        Self { min: self.min - pad, max: self.max + pad }
    }

    /// Visible OHLC range plus the defined price-axis indicator values,
    /// widened by `padding`. `samples` is aligned with `bars`.
    pub fn autoscale(bars: &[Bar], samples: &[IndicatorSample], padding: f64) -> Option<Self> {
        let (mut lo, mut hi) = BarSeries::price_extent(bars)?;
        for v in samples.iter().flat_map(IndicatorSample::price_overlay_values) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Self::new(lo, hi).map(|d| d.padded(padding))
    }
}

/// One-dimensional linear mapping between data and pixels.
pub trait Projection {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
}

/// Horizontal scale: the viewport domain spread over the plot width.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub domain: Domain,
    pub width: f64,
}

impl IndexScale {
    pub fn new(domain: Domain, width: f64) -> Self { Self { domain, width } }

    /// Pixels per bar.
    pub fn bar_spacing(&self) -> f64 {
        self.width / self.domain.range().max(1.0)
    }
}

impl Projection for IndexScale {
    #[inline]
    fn to_px(&self, index: f64) -> f64 {
        let span = self.domain.range().max(1e-12);
        (index - self.domain.start) / span * self.width
    }
    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        self.domain.start + (px / self.width) * self.domain.range()
    }
}

/// Vertical scale: price domain mapped to `[0, height]`, max at the top.
#[derive(Clone, Copy, Debug)]
pub struct PriceScale {
    pub domain: PriceDomain,
    pub height: f64,
}

impl PriceScale {
    pub fn new(domain: PriceDomain, height: f64) -> Self { Self { domain, height } }
}

impl Projection for PriceScale {
    #[inline]
    fn to_px(&self, price: f64) -> f64 {
        let span = self.domain.span().max(1e-12);
        (self.domain.max - price) / span * self.height
    }
    #[inline]
    fn from_px(&self, py: f64) -> f64 {
        self.domain.max - (py / self.height) * self.domain.span()
    }
}

/// Both axes together, for pointer and geometry mapping.
#[derive(Clone, Copy, Debug)]
pub struct PlotMapping {
    pub x: IndexScale,
    pub y: PriceScale,
}

impl PlotMapping {
    /// `None` when the surface has no area to map against.
    pub fn new(domain: Domain, price: PriceDomain, size: Size) -> Option<Self> {
        if !size.is_drawable() {
            return None;
        }
        Some(Self { x: IndexScale::new(domain, size.width), y: PriceScale::new(price, size.height) })
    }

    /// Unrounded data position under a pixel.
    pub fn pixel_to_data(&self, p: Point) -> DataPoint {
        DataPoint::new(self.x.from_px(p.x), self.y.from_px(p.y))
    }

    pub fn data_to_pixel(&self, d: DataPoint) -> Point {
        Point::new(self.x.to_px(d.index), self.y.to_px(d.price))
    }
}
