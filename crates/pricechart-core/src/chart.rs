// File: crates/pricechart-core/src/chart.rs
// Summary: ChartState, the composition root: owns bars, indicator samples and
//          the interaction controllers, and applies host events one at a time.
// Notes:
// - `handle` runs each event to completion. Anything that changes the bars or
//   the indicator parameters recomputes the samples before returning, so a
//   frame is never sliced from stale samples.
// - This is also where the padded price domain is derived for the controllers.

use std::ops::Range;

use tracing::debug;

use crate::config::{ChartConfig, IndicatorConfig};
use crate::crosshair::{CrosshairSample, CrosshairTracker};
use crate::drawing::{DrawingLine, DrawingMode, DrawingToolController, LineId, PointerContext, ProvisionalLine};
use crate::geometry::{layout_bars, BarGeometry, CursorOverlay};
use crate::indicators::{compute_samples, IndicatorKind, IndicatorSample};
use crate::input::{map_key, ChartEvent, Key, KeyCommand};
use crate::scale::{PlotMapping, PriceDomain};
use crate::series::{Bar, BarSeries};
use crate::types::{Point, Size, PRICE_PADDING};
use crate::view::{Domain, ViewportController, WheelDirection};

/// How the price series is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartStyle {
    #[default]
    Candlestick,
    Ohlc,
    Line,
    Area,
}

impl ChartStyle {
    /// `'1'..='4'` in toolbar order.
    pub fn from_digit(d: char) -> Option<Self> {
        match d {
            '1' => Some(ChartStyle::Candlestick),
            '2' => Some(ChartStyle::Ohlc),
            '3' => Some(ChartStyle::Line),
            '4' => Some(ChartStyle::Area),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartStyle::Candlestick => "candlestick",
            ChartStyle::Ohlc => "ohlc",
            ChartStyle::Line => "line",
            ChartStyle::Area => "area",
        }
    }
}

/// What the rendering layer paints after an event.
#[derive(Clone, Debug)]
pub struct ChartFrame<'a> {
    /// Visible bars and their samples, index-aligned.
    pub bars: &'a [Bar],
    pub samples: &'a [IndicatorSample],
    /// `None` = full range.
    pub domain: Option<Domain>,
    pub resolved: Domain,
    pub price: Option<PriceDomain>,
    pub lines: &'a [DrawingLine],
    pub provisional: Option<ProvisionalLine>,
    pub selected: Option<LineId>,
    pub crosshair: Option<CrosshairSample>,
    pub style: ChartStyle,
    pub drawing_mode: DrawingMode,
    pub indicators: &'a IndicatorConfig,
    pub show_help: bool,
}

impl<'a> ChartFrame<'a> {
    pub fn visible(&self) -> impl Iterator<Item = (&'a Bar, &'a IndicatorSample)> {
        self.bars.iter().zip(self.samples)
    }
}

#[derive(Debug)]
pub struct ChartState {
    bars: BarSeries,
    indicators: IndicatorConfig,
    samples: Vec<IndicatorSample>,
    viewport: ViewportController,
    drawing: DrawingToolController,
    crosshair: CrosshairTracker,
    style: ChartStyle,
    show_help: bool,
    size: Size,
}

impl ChartState {
    pub fn new(bars: BarSeries, config: &ChartConfig) -> Self {
        let mut state = Self {
            viewport: ViewportController::new(bars.len()),
            bars,
            indicators: config.indicators.clone(),
            samples: Vec::new(),
            drawing: DrawingToolController::new(),
            crosshair: CrosshairTracker::default(),
            style: ChartStyle::default(),
            show_help: false,
            size: Size::new(config.surface.width, config.surface.height),
        };
        state.recompute();
        state
    }

    pub fn bars(&self) -> &BarSeries { &self.bars }
    pub fn samples(&self) -> &[IndicatorSample] { &self.samples }
    pub fn indicators(&self) -> &IndicatorConfig { &self.indicators }
    pub fn viewport(&self) -> &ViewportController { &self.viewport }
    pub fn drawing(&self) -> &DrawingToolController { &self.drawing }
    pub fn crosshair(&self) -> &CrosshairTracker { &self.crosshair }
    pub fn style(&self) -> ChartStyle { self.style }
    pub fn show_help(&self) -> bool { self.show_help }
    pub fn size(&self) -> Size { self.size }

    pub fn handle(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::PointerDown(p) => self.pointer_down(p),
            ChartEvent::PointerMove(p) => self.pointer_move(p),
            ChartEvent::PointerUp(p) => {
                let ctx = self.pointer_ctx();
                self.drawing.pointer_up(p, &self.viewport, ctx);
            }
            ChartEvent::PointerLeave => {
                self.drawing.pointer_leave();
                self.crosshair.clear();
            }
            ChartEvent::Wheel { delta_y, x } => {
                let anchor = if self.size.width > 0.0 { x / self.size.width } else { 0.5 };
                self.viewport.zoom(WheelDirection::from_delta(delta_y), anchor);
            }
            ChartEvent::Key(key) => self.key(key),
            ChartEvent::SelectLine(id) => {
                self.drawing.select(id);
            }
            ChartEvent::DeleteLine(id) => {
                self.drawing.delete_line(id);
            }
            ChartEvent::Resize(size) => self.size = size,
            ChartEvent::LoadBars(bars) => {
                self.viewport.set_bar_count(bars.len());
                self.bars = bars;
                self.crosshair.clear();
                self.recompute();
            }
            ChartEvent::SetIndicators(config) => {
                self.indicators = config;
                self.recompute();
            }
            ChartEvent::ToggleIndicator(kind) => self.toggle_indicator(kind),
            ChartEvent::SetStyle(style) => self.style = style,
        }
    }

    /// Padded price range over the visible bars and price-axis indicators.
    pub fn price_domain(&self) -> Option<PriceDomain> {
        let range = self.viewport.visible_range();
        PriceDomain::autoscale(self.bars.slice(range.clone()), clip(&self.samples, range), PRICE_PADDING)
    }

    pub fn frame(&self) -> ChartFrame<'_> {
        let range = self.viewport.visible_range();
        ChartFrame {
            bars: self.bars.slice(range.clone()),
            samples: clip(&self.samples, range),
            domain: self.viewport.domain(),
            resolved: self.viewport.resolved(),
            price: self.price_domain(),
            lines: self.drawing.lines(),
            provisional: self.drawing.provisional_line(),
            selected: self.drawing.selected(),
            crosshair: self.crosshair.sample(),
            style: self.style,
            drawing_mode: self.drawing.mode(),
            indicators: &self.indicators,
            show_help: self.show_help,
        }
    }

    /// Pixel boxes for the visible bars; empty without a price domain.
    pub fn bar_geometry(&self) -> Vec<BarGeometry> {
        let Some(price) = self.price_domain() else { return Vec::new() };
        match PlotMapping::new(self.viewport.resolved(), price, self.size) {
            Some(mapping) => layout_bars(self.bars.slice(self.viewport.visible_range()), &mapping),
            None => Vec::new(),
        }
    }

    pub fn cursor_overlay(&self) -> CursorOverlay {
        self.crosshair.overlay(self.size)
    }

    fn pointer_down(&mut self, p: Point) {
        let ctx = self.pointer_ctx();
        if self.drawing.mode() == DrawingMode::None {
            self.drawing.select_at(p, &self.viewport, ctx);
        }
        self.drawing.pointer_down(p, &self.viewport, ctx);
    }

    fn pointer_move(&mut self, p: Point) {
        let ctx = self.pointer_ctx();
        self.drawing.pointer_move(p, &mut self.viewport, ctx);
        // the pan above may have moved the window, so re-derive the price range
        let price = self.price_domain();
        self.crosshair.track(p, &self.viewport, price, self.size);
    }

    fn key(&mut self, key: Key) {
        let Some(cmd) = map_key(key) else { return };
        match cmd {
            KeyCommand::Pan(fraction) => {
                self.viewport.pan_by_fraction(fraction);
            }
            KeyCommand::Zoom(factor) => {
                self.viewport.zoom_centered(factor);
            }
            KeyCommand::ResetAndCancel => {
                self.viewport.reset();
                self.drawing.cancel();
            }
            KeyCommand::ToggleCrosshair => {
                self.crosshair.toggle();
            }
            KeyCommand::ToggleDrawing(mode) => {
                self.drawing.toggle_mode(mode);
            }
            KeyCommand::ToggleIndicator(kind) => self.toggle_indicator(kind),
            KeyCommand::SetStyle(style) => self.style = style,
            KeyCommand::ToggleHelp => self.show_help = !self.show_help,
            KeyCommand::DeleteSelected => {
                self.drawing.delete_selected();
            }
        }
    }

    fn toggle_indicator(&mut self, kind: IndicatorKind) {
        let enabled = self.indicators.toggle(kind);
        debug!(indicator = kind.id(), overlay = kind.is_overlay(), enabled, "indicator toggled");
        self.recompute();
    }

    fn recompute(&mut self) {
        self.samples = compute_samples(self.bars.bars(), &self.indicators);
        debug!(bars = self.bars.len(), "indicator samples recomputed");
    }

    fn pointer_ctx(&self) -> PointerContext {
        PointerContext { size: self.size, price: self.price_domain() }
    }
}

fn clip<T>(items: &[T], range: Range<usize>) -> &[T] {
    let end = range.end.min(items.len());
    &items[range.start.min(end)..end]
}
