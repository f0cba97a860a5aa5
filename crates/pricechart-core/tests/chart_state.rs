// File: crates/pricechart-core/tests/chart_state.rs
// Purpose: Event dispatch through ChartState: keyboard contract, pointer routing,
//          indicator recompute and frame assembly.

mod common;

use common::{ascending, zigzag};
use pricechart_core::scale::PlotMapping;
use pricechart_core::{
    compute_bollinger_bands, compute_macd, compute_rsi, ChartConfig, ChartEvent, ChartState, ChartStyle,
    DrawingMode, IndicatorConfig, IndicatorKind, Key, LineKind, Point, Size,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn state(n: usize) -> ChartState {
    ChartState::new(ascending(n), &ChartConfig::default())
}

fn key(s: &mut ChartState, c: char) {
    s.handle(ChartEvent::Key(Key::Char(c)));
}

#[test]
fn plus_zooms_centered_and_arrows_pan_a_tenth() {
    let mut s = state(200);
    key(&mut s, '+');
    let d = s.viewport().resolved();
    assert!(approx(d.range(), 199.0 * 0.8));
    assert!(approx(d.midpoint(), 99.5));

    s.handle(ChartEvent::Key(Key::ArrowRight));
    let moved = s.viewport().resolved();
    assert!(approx(moved.start - d.start, d.range() * 0.1));
    assert!(approx(moved.range(), d.range()));

    s.handle(ChartEvent::Key(Key::ArrowLeft));
    assert!(approx(s.viewport().resolved().start, d.start));

    key(&mut s, '-');
    assert!(approx(s.viewport().resolved().range(), 199.0 * 0.8 * 1.2));
}

#[test]
fn escape_resets_zoom_and_cancels_drawing() {
    let mut s = state(200);
    key(&mut s, '=');
    key(&mut s, 't');
    assert_eq!(s.drawing().mode(), DrawingMode::Trendline);
    s.handle(ChartEvent::PointerDown(Point::new(300.0, 300.0)));
    assert!(s.drawing().provisional_line().is_some());

    s.handle(ChartEvent::Key(Key::Escape));
    assert_eq!(s.viewport().domain(), None);
    assert_eq!(s.drawing().mode(), DrawingMode::None);
    assert!(s.drawing().provisional_line().is_none());
    assert!(s.drawing().lines().is_empty());
}

#[test]
fn letter_and_digit_shortcuts() {
    let mut s = state(50);
    assert!(s.crosshair().is_enabled());
    key(&mut s, 'c');
    assert!(!s.crosshair().is_enabled());

    key(&mut s, 'h');
    assert_eq!(s.drawing().mode(), DrawingMode::Horizontal);
    key(&mut s, 'T');
    assert_eq!(s.drawing().mode(), DrawingMode::Trendline);
    key(&mut s, 't');
    assert_eq!(s.drawing().mode(), DrawingMode::None);

    key(&mut s, '2');
    assert_eq!(s.style(), ChartStyle::Ohlc);
    key(&mut s, '4');
    assert_eq!(s.style(), ChartStyle::Area);
    key(&mut s, '9');
    assert_eq!(s.style(), ChartStyle::Area);

    assert!(!s.show_help());
    key(&mut s, '?');
    assert!(s.show_help());
}

#[test]
fn indicator_toggles_recompute_samples() {
    let mut s = ChartState::new(zigzag(60), &ChartConfig::default());
    assert!(s.samples().iter().all(|x| x.rsi.is_none()));

    key(&mut s, 'r');
    assert!(s.indicators().rsi.enabled);
    assert!(s.samples()[13].rsi.is_none());
    assert!(s.samples()[14].rsi.is_some());

    key(&mut s, 'm');
    assert!(s.samples()[33].signal_line.is_some());

    key(&mut s, 'b');
    assert!(s.samples()[19].bollinger_upper.is_some());

    key(&mut s, 'r');
    assert!(s.samples().iter().all(|x| x.rsi.is_none()));

    s.handle(ChartEvent::ToggleIndicator(IndicatorKind::Sma(20)));
    assert!(s.samples().iter().all(|x| x.sma20.is_none()));
}

#[test]
fn parameter_change_recomputes_before_next_frame() {
    let bars = zigzag(60);
    let mut s = ChartState::new(bars.clone(), &ChartConfig::default());

    let mut config = IndicatorConfig::default();
    config.rsi.enabled = true;
    config.rsi.period = 5;
    config.bollinger.enabled = true;
    config.bollinger.period = 10;
    config.macd.enabled = true;
    config.macd.fast = 8;
    config.macd.slow = 21;
    config.macd.signal = 7;
    s.handle(ChartEvent::SetIndicators(config));

    let samples = s.samples();
    assert!(samples[4].rsi.is_none() && samples[5].rsi.is_some());
    assert!(samples[8].bollinger_upper.is_none() && samples[9].bollinger_upper.is_some());
    assert!(samples[19].macd_line.is_none() && samples[20].macd_line.is_some());
    assert!(samples[25].signal_line.is_none() && samples[26].signal_line.is_some());

    // full range is visible, so the frame carries every recomputed sample
    let frame = s.frame();
    assert_eq!(frame.samples.len(), 60);
    let rsi = compute_rsi(bars.bars(), 5);
    let bb = compute_bollinger_bands(bars.bars(), 10, 2.0);
    let macd = compute_macd(bars.bars(), 8, 21, 7);
    for i in 0..60 {
        assert_eq!(frame.samples[i].rsi, rsi[i]);
        assert_eq!(frame.samples[i].bollinger_middle, bb.middle[i]);
        assert_eq!(frame.samples[i].signal_line, macd.signal_line[i]);
    }
}

#[test]
fn sma_toggle_outside_fixed_periods_changes_nothing() {
    let mut s = ChartState::new(zigzag(60), &ChartConfig::default());
    let before = s.samples().to_vec();
    s.handle(ChartEvent::ToggleIndicator(IndicatorKind::Sma(30)));
    assert_eq!(s.indicators().sma_periods, vec![20, 50]);
    assert_eq!(s.samples(), &before[..]);
}

#[test]
fn load_bars_resets_window_and_recomputes() {
    let mut s = state(200);
    key(&mut s, '+');
    s.handle(ChartEvent::LoadBars(ascending(30)));
    assert_eq!(s.viewport().domain(), None);
    assert_eq!(s.viewport().bar_count(), 30);
    assert_eq!(s.samples().len(), 30);
    assert!(s.samples()[19].sma20.is_some());
}

#[test]
fn pointer_move_tracks_nearest_bar() {
    let mut s = state(200);
    // 1024 px over [0, 199]: x = 256 sits at index 49.75
    s.handle(ChartEvent::PointerMove(Point::new(256.0, 100.0)));
    let sample = s.crosshair().sample().expect("crosshair sample");
    assert_eq!(sample.bar_index, 50);
    assert_eq!(sample.y, 100.0);
    assert!(s.cursor_overlay().show_crosshair);

    s.handle(ChartEvent::PointerLeave);
    assert!(s.crosshair().sample().is_none());
    assert!(!s.cursor_overlay().show_crosshair);

    s.handle(ChartEvent::Resize(Size::new(0.0, 0.0)));
    s.handle(ChartEvent::PointerMove(Point::new(256.0, 100.0)));
    assert!(s.crosshair().sample().is_none());
}

#[test]
fn disabled_crosshair_produces_no_sample() {
    let mut s = state(200);
    s.handle(ChartEvent::PointerMove(Point::new(256.0, 100.0)));
    assert!(s.crosshair().sample().is_some());

    // switching off drops the live sample
    key(&mut s, 'c');
    assert!(s.crosshair().sample().is_none());
    assert!(!s.cursor_overlay().show_crosshair);
    assert!(s.frame().crosshair.is_none());

    s.handle(ChartEvent::PointerMove(Point::new(300.0, 120.0)));
    assert!(s.crosshair().sample().is_none());
    assert!(!s.cursor_overlay().show_crosshair);

    key(&mut s, 'c');
    s.handle(ChartEvent::PointerMove(Point::new(300.0, 120.0)));
    assert!(s.crosshair().sample().is_some());
    assert!(s.cursor_overlay().show_crosshair);
}

#[test]
fn wheel_zoom_anchors_at_pointer() {
    let mut s = state(200);
    s.handle(ChartEvent::Wheel { delta_y: -120.0, x: 0.0 });
    let d = s.viewport().resolved();
    assert!(approx(d.start, 0.0));
    assert!(approx(d.range(), 199.0 * 0.9));

    s.handle(ChartEvent::Wheel { delta_y: 120.0, x: 0.0 });
    assert!(approx(s.viewport().resolved().range(), 199.0 * 0.9 * 1.1));
}

#[test]
fn draw_select_and_delete_through_events() {
    let mut s = state(100);
    key(&mut s, 't');
    s.handle(ChartEvent::PointerDown(Point::new(200.0, 300.0)));
    s.handle(ChartEvent::PointerMove(Point::new(600.0, 200.0)));
    s.handle(ChartEvent::PointerUp(Point::new(600.0, 200.0)));
    assert_eq!(s.drawing().lines().len(), 1);
    let line = s.drawing().lines()[0];
    assert_eq!(line.kind, LineKind::Trendline);
    key(&mut s, 't');

    let frame = s.frame();
    let mapping = PlotMapping::new(frame.resolved, frame.price.unwrap(), s.size()).unwrap();
    let on_line = mapping.data_to_pixel(line.start);
    s.handle(ChartEvent::PointerDown(on_line));
    s.handle(ChartEvent::PointerUp(on_line));
    assert_eq!(s.drawing().selected(), Some(line.id));

    s.handle(ChartEvent::Key(Key::Backspace));
    assert!(s.drawing().lines().is_empty());
    assert_eq!(s.drawing().selected(), None);
}

#[test]
fn frame_slices_visible_window() {
    let mut s = state(200);
    s.handle(ChartEvent::Wheel { delta_y: -1.0, x: 512.0 });
    let range = s.viewport().visible_range();
    let frame = s.frame();
    assert_eq!(frame.bars.len(), range.len());
    assert_eq!(frame.samples.len(), range.len());
    assert_eq!(frame.bars[0].index, range.start);
    assert_eq!(frame.visible().count(), range.len());
    assert_eq!(s.bar_geometry().len(), range.len());

    let price = frame.price.unwrap();
    for b in frame.bars {
        assert!(price.min < b.low && b.high < price.max);
    }
}

#[test]
fn empty_series_degrades_quietly() {
    let mut s = ChartState::new(ascending(0), &ChartConfig::default());
    s.handle(ChartEvent::Wheel { delta_y: -1.0, x: 10.0 });
    s.handle(ChartEvent::Key(Key::ArrowRight));
    s.handle(ChartEvent::PointerMove(Point::new(10.0, 10.0)));
    assert!(s.price_domain().is_none());
    assert!(s.frame().bars.is_empty());
    assert!(s.bar_geometry().is_empty());
    assert!(s.crosshair().sample().is_none());
}
