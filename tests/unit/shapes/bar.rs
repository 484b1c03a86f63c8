use super::*;
use crate::geometry::path::PathCmd;

#[test]
fn filled_width_is_exact() {
    let g = build(Progress::new(0.3), Size::new(200.0, 15.0)).unwrap();
    assert_eq!(g.filled_width, 60.0);
    assert_eq!(
        g.fill.commands(),
        &[PathCmd::RoundedRect {
            rect: Rect::new(0.0, 0.0, 60.0, 15.0),
            radius: 7.5,
        }]
    );
}

#[test]
fn empty_bar_draws_no_fill() {
    let g = build(Progress::ZERO, Size::new(200.0, 15.0)).unwrap();
    assert!(g.fill.is_empty());
    assert_eq!(g.filled_width, 0.0);
}

#[test]
fn narrow_fill_keeps_capsule_shape() {
    let g = build(Progress::new(0.02), Size::new(200.0, 15.0)).unwrap();
    match g.fill.commands()[0] {
        PathCmd::RoundedRect { radius, .. } => assert_eq!(radius, 2.0),
        ref other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn clip_and_track_are_full_capsule() {
    let g = build(Progress::new(0.7), Size::new(200.0, 30.0)).unwrap();
    assert_eq!(g.track, g.clip);
    assert_eq!(
        g.track.commands(),
        &[PathCmd::RoundedRect {
            rect: Rect::new(0.0, 0.0, 200.0, 30.0),
            radius: 15.0,
        }]
    );
}

#[test]
fn overshoot_clamps() {
    let a = build(Progress::new(1.5), Size::new(200.0, 15.0)).unwrap();
    let b = build(Progress::FULL, Size::new(200.0, 15.0)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.filled_width, 200.0);
}
