//! Tests for pointer events and pixel-to-cell conversion.

use super::{CellMetrics, Modifiers, MouseButton, PointerAction, PointerEvent};
use crate::index::{CellPoint, Column, Line};

fn metrics(w: f64, h: f64) -> CellMetrics {
    CellMetrics::new(w, h).expect("valid metrics")
}

#[test]
fn button_ordinals() {
    assert_eq!(MouseButton::Button1.ordinal(), 1);
    assert_eq!(MouseButton::Button3.ordinal(), 3);
    assert_eq!(MouseButton::Button5.ordinal(), 5);
    for n in 1..=5 {
        let button = MouseButton::from_ordinal(n).expect("known button");
        assert_eq!(button.ordinal(), n);
    }
    assert_eq!(MouseButton::from_ordinal(0), None);
    assert_eq!(MouseButton::from_ordinal(6), None);
}

#[test]
fn only_four_and_five_are_wheel() {
    assert!(!MouseButton::Button1.is_wheel());
    assert!(!MouseButton::Button3.is_wheel());
    assert!(MouseButton::Button4.is_wheel());
    assert!(MouseButton::Button5.is_wheel());
}

#[test]
fn constructors_set_action_and_button() {
    let press = PointerEvent::press(MouseButton::Button2, 1.0, 2.0);
    assert_eq!(press.action, PointerAction::Press);
    assert_eq!(press.button, Some(MouseButton::Button2));
    assert!(press.modifiers.is_empty());

    let release = PointerEvent::release(MouseButton::Button1, 0.0, 0.0);
    assert_eq!(release.action, PointerAction::Release);

    let motion = PointerEvent::motion(None, 3.0, 4.0);
    assert_eq!(motion.action, PointerAction::Move);
    assert_eq!(motion.button, None);
}

#[test]
fn with_modifiers_replaces_modifiers() {
    let event = PointerEvent::press(MouseButton::Button1, 0.0, 0.0)
        .with_modifiers(Modifiers::SHIFT | Modifiers::META);
    assert!(event.modifiers.contains(Modifiers::SHIFT));
    assert!(event.modifiers.contains(Modifiers::META));
    assert!(!event.modifiers.contains(Modifiers::CONTROL));
}

#[test]
fn metrics_reject_degenerate_sizes() {
    assert!(CellMetrics::new(0.0, 16.0).is_none());
    assert!(CellMetrics::new(8.0, -1.0).is_none());
    assert!(CellMetrics::new(f64::NAN, 16.0).is_none());
    assert!(CellMetrics::new(8.0, f64::INFINITY).is_none());
    assert!(CellMetrics::new(8.0, 16.0).is_some());
}

#[test]
fn default_metrics_are_valid() {
    let m = CellMetrics::default();
    assert_eq!(CellMetrics::new(m.cell_width(), m.cell_height()), Some(m));
}

#[test]
fn origin_is_cell_one_one() {
    for (w, h) in [(1.0, 1.0), (8.0, 16.0), (7.5, 13.25)] {
        assert_eq!(metrics(w, h).cell_at(0.0, 0.0), CellPoint::default());
    }
}

#[test]
fn position_floors_then_adds_one() {
    let m = metrics(10.0, 20.0);
    assert_eq!(m.cell_at(15.0, 25.0), CellPoint::new(Column(2), Line(2)));
    // Right edge of the first cell still belongs to it.
    assert_eq!(m.cell_at(9.999, 19.999), CellPoint::new(Column(1), Line(1)));
    // Exactly on a boundary moves to the next cell.
    assert_eq!(m.cell_at(10.0, 20.0), CellPoint::new(Column(2), Line(2)));
}

#[test]
fn fractional_cell_sizes() {
    let m = metrics(7.5, 12.5);
    assert_eq!(m.cell_at(15.0, 37.4), CellPoint::new(Column(3), Line(3)));
}

#[test]
fn negative_positions_clamp_to_first_cell() {
    let m = metrics(8.0, 16.0);
    assert_eq!(m.cell_at(-5.0, -100.0), CellPoint::default());
    assert_eq!(m.cell_at(-0.5, 40.0), CellPoint::new(Column(1), Line(3)));
}

#[test]
fn nan_position_clamps_to_first_cell() {
    let m = metrics(8.0, 16.0);
    assert_eq!(m.cell_at(f64::NAN, f64::NAN), CellPoint::default());
}

#[test]
fn huge_position_saturates() {
    let m = metrics(1.0, 1.0);
    let p = m.cell_at(f64::MAX, 0.0);
    assert_eq!(p.column, Column(usize::MAX));
}
