use super::*;
use crate::geometry::path::PathCmd;

fn size() -> Size {
    Size::new(150.0, 150.0)
}

fn ring_style() -> StyleConfig {
    StyleConfig {
        stroke_width: 15.0,
        line_cap: LineCap::Round,
        ..StyleConfig::default()
    }
}

fn radius_of(p: &PathGeometry) -> f64 {
    p.commands()
        .iter()
        .find_map(|c| match c {
            PathCmd::Arc { radius, .. } => Some(*radius),
            _ => None,
        })
        .unwrap()
}

#[test]
fn ring_layers_use_source_insets() {
    let g = build_ring(Progress::new(0.3), size(), &ring_style()).unwrap();
    assert_eq!(radius_of(&g.groove), 65.0);
    assert_eq!(radius_of(&g.disc), 40.0);
    assert_eq!(radius_of(&g.arc), 47.5);
    assert_eq!(g.groove_stroke.width, 20.0);
    assert_eq!(g.arc_stroke.cap, LineCap::Round);
    assert_eq!(g.sweep_degrees, 108.0);
}

#[test]
fn ring_zero_progress_hides_arc() {
    let g = build_ring(Progress::ZERO, size(), &ring_style()).unwrap();
    assert!(g.arc.is_empty());
}

#[test]
fn dial_knob_travels_half_turn() {
    let start = build_dial(Progress::ZERO, size()).unwrap();
    let end = build_dial(Progress::FULL, size()).unwrap();
    assert_eq!(start.knob_angle_deg, 180.0);
    assert_eq!(end.knob_angle_deg, 360.0);

    // 150/2 - 32 = 43 from the center, pointing left at zero progress.
    assert!((start.knob_center.x - (75.0 - 43.0)).abs() < 1e-9);
    assert!((start.knob_center.y - 75.0).abs() < 1e-9);
    assert!((end.knob_center.x - (75.0 + 43.0)).abs() < 1e-9);
}

#[test]
fn dial_transform_places_knob_center() {
    let g = build_dial(Progress::new(0.5), size()).unwrap();
    let unrotated = Point::new(75.0 + 43.0, 75.0);
    let placed = g.knob_transform * unrotated;
    assert!((placed - g.knob_center).hypot() < 1e-9);
    // Half progress points straight up.
    assert!((g.knob_center.y - (75.0 - 43.0)).abs() < 1e-9);
}

#[test]
fn dial_gauge_covers_top_half() {
    let g = build_dial(Progress::new(0.1), size()).unwrap();
    match g.gauge.commands()[1] {
        PathCmd::Arc {
            start_deg,
            sweep_deg,
            radius,
            ..
        } => {
            assert_eq!(start_deg, 180.0);
            assert_eq!(sweep_deg, 180.0);
            assert_eq!(radius, 71.5);
        }
        ref other => panic!("unexpected {other:?}"),
    }
    assert_eq!(g.gauge_gradient.end_deg, 360.0);
}
