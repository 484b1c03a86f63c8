use super::*;
use crate::geometry::path::{DashSpec, PathCmd};

fn size() -> Size {
    Size::new(150.0, 150.0)
}

fn fill_sweep(ring: &RingGeometry) -> Option<f64> {
    ring.fill.commands().iter().find_map(|c| match c {
        PathCmd::Arc { sweep_deg, .. } => Some(*sweep_deg),
        _ => None,
    })
}

#[test]
fn sweep_is_linear_in_progress() {
    let style = StyleConfig::default();
    let mut last = -1.0;
    for i in 0..=20 {
        let p = f64::from(i) / 20.0;
        let ring = build(Progress::new(p), size(), &style).unwrap();
        assert_eq!(ring.sweep_degrees, 360.0 * p);
        assert!(ring.sweep_degrees > last);
        last = ring.sweep_degrees;
    }
}

#[test]
fn zero_progress_fill_is_empty() {
    let ring = build(Progress::ZERO, size(), &StyleConfig::default()).unwrap();
    assert!(ring.fill.is_empty());
    assert!(!ring.track.is_empty());
}

#[test]
fn full_progress_fill_matches_track() {
    let ring = build(Progress::FULL, size(), &StyleConfig::default()).unwrap();
    assert_eq!(ring.fill, ring.track);
    assert_eq!(fill_sweep(&ring), Some(360.0));
}

#[test]
fn fill_starts_at_twelve_oclock() {
    let ring = build(Progress::new(0.4), size(), &StyleConfig::default()).unwrap();
    match ring.fill.commands()[0] {
        PathCmd::MoveTo(p) => {
            assert!((p.x - 75.0).abs() < 1e-9);
            assert!(p.y.abs() < 1e-9);
        }
        ref other => panic!("expected move_to, got {other:?}"),
    }
}

#[test]
fn dashed_ring_shares_pattern_between_layers() {
    let style = StyleConfig {
        stroke_width: 50.0,
        dash: Some(DashSpec::new([10.0, 5.0], 0.0)),
        ..StyleConfig::default()
    };
    let ring = build(Progress::new(0.3), size(), &style).unwrap();
    assert_eq!(ring.stroke.dash, style.dash);
    // Same start point keeps dash phase aligned along both arcs.
    assert_eq!(ring.track.commands()[0], ring.fill.commands()[0]);
}

#[test]
fn radius_uses_shorter_side() {
    let ring = build(Progress::new(0.5), Size::new(200.0, 100.0), &StyleConfig::default()).unwrap();
    assert_eq!(ring.radius, 50.0);
    assert_eq!(ring.center, Point::new(100.0, 50.0));
}

#[test]
fn gradient_variant_adds_hint_only() {
    let style = StyleConfig::default();
    let plain = build(Progress::new(0.6), size(), &style).unwrap();
    let grad = build_gradient(Progress::new(0.6), size(), &style).unwrap();
    assert!(plain.gradient.is_none());
    let g = grad.gradient.unwrap();
    assert_eq!(g.end_deg - g.start_deg, 360.0);
    assert_eq!(grad.fill, plain.fill);
}

#[test]
fn invalid_style_is_rejected() {
    let style = StyleConfig {
        stroke_width: f64::NAN,
        ..StyleConfig::default()
    };
    assert!(build(Progress::new(0.5), size(), &style).is_err());
}
