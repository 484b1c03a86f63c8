use super::*;
use crate::geometry::path::PathCmd;

fn style(count: usize, radius: f64) -> StyleConfig {
    StyleConfig {
        stroke_width: 8.0,
        node_count: count,
        node_radius: radius,
        ..StyleConfig::default()
    }
}

#[test]
fn single_node_is_rejected() {
    let err = build(Progress::new(0.5), Size::new(300.0, 30.0), &style(1, 10.0)).unwrap_err();
    assert!(matches!(err, RingletError::InvalidParameter(_)));
    assert!(err.to_string().contains("at least 2 nodes"));
}

#[test]
fn three_nodes_across_three_hundred() {
    let g = build(Progress::new(0.5), Size::new(300.0, 30.0), &style(3, 10.0)).unwrap();
    assert_eq!(g.segment_length, 120.0);
    let xs: Vec<f64> = g.node_centers.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![10.0, 140.0, 270.0]);
    assert!(g.node_centers.iter().all(|p| p.y == 15.0));
}

#[test]
fn path_has_k_circles_and_k_minus_one_lines() {
    let g = build(Progress::new(0.5), Size::new(300.0, 30.0), &style(4, 10.0)).unwrap();
    let cmds = g.track.commands();
    let circles = cmds.iter().filter(|c| matches!(c, PathCmd::Ellipse(_))).count();
    let lines = cmds.iter().filter(|c| matches!(c, PathCmd::LineTo(_))).count();
    assert_eq!(circles, 4);
    assert_eq!(lines, 3);
    assert_eq!(g.track, g.fill);
}

#[test]
fn last_segment_ends_at_last_node() {
    let g = build(Progress::new(0.5), Size::new(300.0, 30.0), &style(3, 10.0)).unwrap();
    let last_line = g
        .track
        .commands()
        .iter()
        .rev()
        .find_map(|c| match c {
            PathCmd::LineTo(p) => Some(*p),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_line, Point::new(260.0, 15.0));
}

#[test]
fn mask_tracks_progress() {
    let s = style(3, 10.0);
    let g = build(Progress::new(0.25), Size::new(300.0, 30.0), &s).unwrap();
    assert_eq!(g.mask, Rect::new(0.0, 0.0, 75.0, 30.0));
    let g = build(Progress::new(2.0), Size::new(300.0, 30.0), &s).unwrap();
    assert_eq!(g.mask.width(), 300.0);
}

#[test]
fn overfull_track_is_rejected() {
    assert!(segment_length(5, 40.0, 300.0).is_err());
    assert!(segment_length(3, f64::NAN, 300.0).is_err());
    assert_eq!(segment_length(2, 10.0, 40.0).unwrap(), 0.0);
}

#[test]
fn node_count_is_bounded() {
    let err = build(
        Progress::new(0.5),
        Size::new(300.0, 30.0),
        &style(crate::shapes::style::MAX_ELEMENTS + 1, 0.0),
    )
    .unwrap_err();
    assert!(matches!(err, RingletError::InvalidParameter(_)));
}
