// File: crates/pricechart-core/src/drawing.rs
// Summary: Annotation tool state machine (trendline / horizontal line), the
//          pan-by-drag path it shares the pointer surface with, and selection.
// Notes:
// - With no drawing mode the pointer pans: Idle -> Panning -> Idle.
// - With a mode active it draws: Idle -> Drawing(start, provisional end) -> commit -> Idle.
// - Pointer positions are plot-relative pixels; data positions come from the
//   viewport domain and a caller-supplied price domain.

use std::fmt;

use tracing::debug;

use crate::scale::{DataPoint, PlotMapping, PriceDomain};
use crate::types::{Point, Size};
use crate::view::ViewportController;

/// Colors handed to new lines, cycling in creation order.
pub const LINE_PALETTE: [&str; 5] = ["#2962ff", "#ff6d00", "#00c853", "#d500f9", "#ffd600"];

/// How close (in pixels) a click must land to select a line.
pub const HIT_TOLERANCE_PX: f64 = 6.0;

/// Active annotation tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    None,
    Trendline,
    Horizontal,
}

impl DrawingMode {
    pub fn line_kind(&self) -> Option<LineKind> {
        match self {
            DrawingMode::None => None,
            DrawingMode::Trendline => Some(LineKind::Trendline),
            DrawingMode::Horizontal => Some(LineKind::Horizontal),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DrawingMode::None => "none",
            DrawingMode::Trendline => "trendline",
            DrawingMode::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Trendline,
    Horizontal,
}

/// Identity of a committed line, unique within one controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line-{}", self.0)
    }
}

/// A committed annotation. Horizontal lines always have `start.price == end.price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingLine {
    pub id: LineId,
    pub kind: LineKind,
    pub start: DataPoint,
    pub end: DataPoint,
    pub color: &'static str,
}

/// The line being dragged out, not yet committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProvisionalLine {
    pub kind: LineKind,
    pub start: DataPoint,
    pub end: DataPoint,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Panning { last_x: f64 },
    Drawing { start: DataPoint, end: DataPoint },
}

/// Outside inputs a pointer event is mapped against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerContext {
    pub size: Size,
    /// Padded visible price range; `None` when there is nothing to map against.
    pub price: Option<PriceDomain>,
}

#[derive(Debug, Default)]
pub struct DrawingToolController {
    mode: DrawingMode,
    state: PointerState,
    lines: Vec<DrawingLine>,
    selected: Option<LineId>,
    next_id: u64,
}

impl DrawingToolController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawingMode { self.mode }

    pub fn state(&self) -> PointerState { self.state }

    pub fn lines(&self) -> &[DrawingLine] { &self.lines }

    pub fn selected(&self) -> Option<LineId> { self.selected }

    pub fn is_panning(&self) -> bool { matches!(self.state, PointerState::Panning { .. }) }

    /// Exclusive toggle: picking the active mode turns drawing off, picking the
    /// other one switches to it. Any half-drawn line is dropped.
    pub fn toggle_mode(&mut self, mode: DrawingMode) -> DrawingMode {
        self.mode = if self.mode == mode { DrawingMode::None } else { mode };
        self.state = PointerState::Idle;
        debug!(mode = self.mode.name(), "drawing mode");
        self.mode
    }

    /// Drop the in-progress line and leave drawing mode.
    pub fn cancel(&mut self) {
        self.state = PointerState::Idle;
        self.mode = DrawingMode::None;
    }

    pub fn pointer_down(&mut self, pointer: Point, viewport: &ViewportController, ctx: PointerContext) {
        match self.mode {
            DrawingMode::None => {
                self.state = PointerState::Panning { last_x: pointer.x };
            }
            DrawingMode::Trendline | DrawingMode::Horizontal => {
                // no bars or no price range: nothing is captured, so nothing commits
                if let Some(start) = pixel_to_data(pointer, viewport, ctx) {
                    self.state = PointerState::Drawing { start, end: start };
                }
            }
        }
    }

    pub fn pointer_move(&mut self, pointer: Point, viewport: &mut ViewportController, ctx: PointerContext) {
        match self.state {
            PointerState::Idle => {}
            PointerState::Panning { last_x } => {
                // dragging right brings earlier bars into view
                viewport.pan(last_x - pointer.x, ctx.size.width);
                self.state = PointerState::Panning { last_x: pointer.x };
            }
            PointerState::Drawing { start, end } => {
                let end = pixel_to_data(pointer, viewport, ctx).unwrap_or(end);
                self.state = PointerState::Drawing { start, end: self.constrain(start, end) };
            }
        }
    }

    /// Finish the gesture. Returns the id of a newly committed line, if any.
    pub fn pointer_up(&mut self, pointer: Point, viewport: &ViewportController, ctx: PointerContext) -> Option<LineId> {
        match std::mem::take(&mut self.state) {
            PointerState::Drawing { start, end } => {
                let kind = self.mode.line_kind()?;
                let end = pixel_to_data(pointer, viewport, ctx).unwrap_or(end);
                Some(self.commit(kind, start, self.constrain(start, end)))
            }
            PointerState::Panning { .. } | PointerState::Idle => None,
        }
    }

    /// Pointer left the surface: a pan ends, a drawing stays in progress.
    pub fn pointer_leave(&mut self) {
        if self.is_panning() {
            self.state = PointerState::Idle;
        }
    }

    pub fn provisional_line(&self) -> Option<ProvisionalLine> {
        match (self.state, self.mode.line_kind()) {
            (PointerState::Drawing { start, end }, Some(kind)) => Some(ProvisionalLine {
                kind,
                start,
                end,
                color: self.next_color(),
            }),
            _ => None,
        }
    }

    /// Select a committed line; unknown ids are ignored.
    pub fn select(&mut self, id: LineId) -> bool {
        if self.lines.iter().any(|l| l.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Click handling: select the line under the pointer, or clear the selection on a miss.
    pub fn select_at(&mut self, pointer: Point, viewport: &ViewportController, ctx: PointerContext) -> Option<LineId> {
        self.selected = self.line_at(pointer, viewport, ctx);
        self.selected
    }

    /// Topmost (most recent) line within [`HIT_TOLERANCE_PX`] of the pointer.
    pub fn line_at(&self, pointer: Point, viewport: &ViewportController, ctx: PointerContext) -> Option<LineId> {
        let mapping = PlotMapping::new(viewport.resolved(), ctx.price?, ctx.size)?;
        self.lines
            .iter()
            .rev()
            .find(|line| distance_px(line, &mapping, pointer) <= HIT_TOLERANCE_PX)
            .map(|line| line.id)
    }

    pub fn delete_line(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        let removed = self.lines.len() != before;
        if removed {
            debug!(%id, "line deleted");
        }
        removed
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(id) => self.delete_line(id),
            None => false,
        }
    }

    fn constrain(&self, start: DataPoint, mut end: DataPoint) -> DataPoint {
        if self.mode == DrawingMode::Horizontal {
            end.price = start.price;
        }
        end
    }

    fn next_color(&self) -> &'static str {
        LINE_PALETTE[self.lines.len() % LINE_PALETTE.len()]
    }

    fn commit(&mut self, kind: LineKind, start: DataPoint, end: DataPoint) -> LineId {
        self.next_id += 1;
        let id = LineId(self.next_id);
        let color = self.next_color();
        self.lines.push(DrawingLine { id, kind, start, end, color });
        debug!(%id, ?kind, start_index = start.index, end_index = end.index, color, "line committed");
        id
    }
}

/// Pointer → data position with the index rounded to the nearest bar.
/// `None` when there are no bars, no price domain or no surface.
pub fn pixel_to_data(pointer: Point, viewport: &ViewportController, ctx: PointerContext) -> Option<DataPoint> {
    if viewport.bar_count() == 0 {
        return None;
    }
    let mapping = PlotMapping::new(viewport.resolved(), ctx.price?, ctx.size)?;
    let d = mapping.pixel_to_data(pointer);
    Some(DataPoint::new(d.index.round(), d.price))
}

fn distance_px(line: &DrawingLine, mapping: &PlotMapping, p: Point) -> f64 {
    let a = mapping.data_to_pixel(line.start);
    match line.kind {
        LineKind::Horizontal => (p.y - a.y).abs(),
        LineKind::Trendline => segment_distance(p, a, mapping.data_to_pixel(line.end)),
    }
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    ((p.x - cx).powi(2) + (p.y - cy).powi(2)).sqrt()
}
