// File: crates/pricechart-core/src/input.rs
// Summary: Host input events and the keyboard shortcut map.
// The host owns the real event subscription and forwards plain values here.

use crate::chart::ChartStyle;
use crate::config::IndicatorConfig;
use crate::drawing::{DrawingMode, LineId};
use crate::indicators::IndicatorKind;
use crate::series::BarSeries;
use crate::types::{Point, Size};

/// Fraction of the visible width one arrow key press pans.
pub const KEY_PAN_FRACTION: f64 = 0.1;
/// Centered zoom factor for `+` (20% narrower).
pub const KEY_ZOOM_IN_FACTOR: f64 = 0.8;
/// Centered zoom factor for `-` (20% wider).
pub const KEY_ZOOM_OUT_FACTOR: f64 = 1.2;

/// Keys the chart reacts to; anything else arrives as `Char` and is ignored
/// unless mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Delete,
    Backspace,
    Char(char),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyCommand {
    /// Signed fraction of the visible width (negative = left).
    Pan(f64),
    /// Centered zoom factor.
    Zoom(f64),
    ResetAndCancel,
    ToggleCrosshair,
    ToggleDrawing(DrawingMode),
    ToggleIndicator(IndicatorKind),
    SetStyle(ChartStyle),
    ToggleHelp,
    DeleteSelected,
}

pub fn map_key(key: Key) -> Option<KeyCommand> {
    let cmd = match key {
        Key::ArrowLeft => KeyCommand::Pan(-KEY_PAN_FRACTION),
        Key::ArrowRight => KeyCommand::Pan(KEY_PAN_FRACTION),
        Key::Escape => KeyCommand::ResetAndCancel,
        Key::Delete | Key::Backspace => KeyCommand::DeleteSelected,
        Key::Char(c) => match c.to_ascii_lowercase() {
            '+' | '=' => KeyCommand::Zoom(KEY_ZOOM_IN_FACTOR),
            '-' => KeyCommand::Zoom(KEY_ZOOM_OUT_FACTOR),
            'c' => KeyCommand::ToggleCrosshair,
            't' => KeyCommand::ToggleDrawing(DrawingMode::Trendline),
            'h' => KeyCommand::ToggleDrawing(DrawingMode::Horizontal),
            'r' => KeyCommand::ToggleIndicator(IndicatorKind::Rsi),
            'm' => KeyCommand::ToggleIndicator(IndicatorKind::Macd),
            'b' => KeyCommand::ToggleIndicator(IndicatorKind::Bollinger),
            '?' => KeyCommand::ToggleHelp,
            d @ '1'..='4' => KeyCommand::SetStyle(ChartStyle::from_digit(d)?),
            _ => return None,
        },
    };
    Some(cmd)
}

/// Shortcut table for the help overlay, in display order.
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("← / →", "pan 10%"),
    ("+ / -", "zoom in / out"),
    ("Esc", "reset zoom, cancel drawing"),
    ("C", "toggle crosshair"),
    ("T", "trendline tool"),
    ("H", "horizontal line tool"),
    ("R / M / B", "toggle RSI / MACD / Bollinger"),
    ("1-4", "candlestick / OHLC / line / area"),
    ("Del", "delete selected line"),
    ("?", "toggle this help"),
];

/// Everything the host can feed into [`crate::ChartState::handle`].
#[derive(Clone, Debug)]
pub enum ChartEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    PointerLeave,
    /// Wheel over the plot; `x` is the pointer's plot-relative x.
    Wheel { delta_y: f64, x: f64 },
    Key(Key),
    /// A rendered line was clicked directly.
    SelectLine(LineId),
    DeleteLine(LineId),
    Resize(Size),
    LoadBars(BarSeries),
    SetIndicators(IndicatorConfig),
    ToggleIndicator(IndicatorKind),
    SetStyle(ChartStyle),
}
