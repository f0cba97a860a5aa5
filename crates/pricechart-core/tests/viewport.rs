// File: crates/pricechart-core/tests/viewport.rs
// Purpose: Zoom/pan/reset arithmetic and the window clamping invariants.

use pricechart_core::view::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use pricechart_core::{Domain, ViewportController, WheelDirection};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn zoomed_to(n: usize, start: f64, end: f64) -> ViewportController {
    // shape the window with a left-anchored zoom and a pan
    let mut v = ViewportController::new(n);
    let full = v.resolved().range();
    v.zoom_by_factor((end - start) / full, 0.0);
    v.pan_by_fraction((start - v.resolved().start) / v.resolved().range());
    v
}

fn assert_valid(v: &ViewportController) {
    let d = v.resolved();
    let max = (v.bar_count() - 1) as f64;
    assert!(d.start >= 0.0 && d.end <= max + 1e-9, "out of bounds: {d:?}");
    assert!(d.start <= d.end);
    assert!(d.range() >= 5f64.min(max) - 1e-9, "too narrow: {d:?}");
}

#[test]
fn wheel_away_widens_by_ten_percent_around_anchor() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    assert!(approx(v.resolved().start, 50.0) && approx(v.resolved().end, 150.0));

    let d = v.zoom(WheelDirection::Away, 0.5);
    assert!(approx(d.range(), 110.0));
    assert!(approx(d.start, 45.0));
    assert!(approx(d.end, 155.0));
}

#[test]
fn wheel_toward_narrows_by_ten_percent() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    let d = v.zoom(WheelDirection::Toward, 0.5);
    assert!(approx(d.range(), 90.0));
    assert!(approx(d.start, 55.0));
}

#[test]
fn anchor_at_left_edge_keeps_start() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    let d = v.zoom(WheelDirection::Toward, 0.0);
    assert!(approx(d.start, 50.0));
    assert!(approx(d.end, 140.0));
}

#[test]
fn zoom_in_floors_at_five_bars() {
    let mut v = ViewportController::new(200);
    for _ in 0..200 {
        v.zoom(WheelDirection::Toward, 0.3);
    }
    assert!(approx(v.resolved().range(), 5.0));
    assert_valid(&v);
}

#[test]
fn zoom_out_saturates_at_full_range() {
    let mut v = zoomed_to(200, 80.0, 120.0);
    for _ in 0..100 {
        v.zoom(WheelDirection::Away, 0.9);
        assert_valid(&v);
    }
    let d = v.resolved();
    assert!(approx(d.start, 0.0));
    assert!(approx(d.end, 199.0));
}

#[test]
fn right_edge_saturation_keeps_width() {
    let mut v = zoomed_to(200, 180.0, 199.0);
    let d = v.zoom(WheelDirection::Away, 1.0);
    assert!(approx(d.end, 199.0));
    assert!(approx(d.range(), 19.0 * ZOOM_OUT_FACTOR));
}

#[test]
fn zoom_in_then_out_roughly_restores_width() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    v.zoom_by_factor(ZOOM_IN_FACTOR, 0.5);
    let d = v.zoom_by_factor(1.0 / ZOOM_IN_FACTOR, 0.5);
    assert!(approx(d.range(), 100.0));
    assert!(approx(d.midpoint(), 100.0));
}

#[test]
fn pan_preserves_width_and_clamps() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    // half the plot width = half the window, stopped at the last bar
    let d = v.pan(400.0, 800.0);
    assert!(approx(d.start, 99.0) && approx(d.end, 199.0));
    assert!(approx(d.range(), 100.0));

    let d = v.pan(10_000.0, 800.0);
    assert!(approx(d.end, 199.0));
    assert!(approx(d.start, 99.0));

    let d = v.pan(-10_000.0, 800.0);
    assert!(approx(d.start, 0.0));
    assert!(approx(d.range(), 100.0));
    assert_valid(&v);
}

#[test]
fn keyboard_pan_moves_a_fraction_of_the_window() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    let d = v.pan_by_fraction(0.1);
    assert!(approx(d.start, 60.0) && approx(d.end, 160.0));
    let d = v.pan_by_fraction(-0.1);
    assert!(approx(d.start, 50.0));
}

#[test]
fn zero_width_surface_does_not_pan() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    let before = v.resolved();
    assert_eq!(v.pan(40.0, 0.0), before);
}

#[test]
fn reset_restores_full_range() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    assert!(v.is_zoomed());
    let d = v.reset();
    assert!(!v.is_zoomed());
    assert_eq!(v.domain(), None);
    assert_eq!(d, Domain::new(0.0, 199.0));
}

#[test]
fn tiny_series_shrinks_minimum_window() {
    let mut v = ViewportController::new(3);
    let d = v.zoom(WheelDirection::Toward, 0.5);
    assert!(approx(d.range(), 2.0));
    assert_valid(&v);

    let mut single = ViewportController::new(1);
    assert_eq!(single.zoom(WheelDirection::Toward, 0.5), Domain::new(0.0, 0.0));
    assert_eq!(single.visible_range(), 0..1);
}

#[test]
fn new_bar_count_resets_window() {
    let mut v = zoomed_to(200, 50.0, 150.0);
    v.set_bar_count(50);
    assert_eq!(v.domain(), None);
    assert_eq!(v.resolved(), Domain::new(0.0, 49.0));
}
