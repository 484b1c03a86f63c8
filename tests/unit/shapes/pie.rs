use super::*;
use crate::geometry::path::PathCmd;
use std::f64::consts::PI;

const TOL: f64 = 1e-4;

fn size() -> Size {
    Size::new(100.0, 100.0)
}

#[test]
fn zero_progress_has_no_area() {
    let pie = build(Progress::ZERO, size()).unwrap();
    assert_eq!(pie.sweep_degrees, 0.0);
    assert!(pie.sector.area(TOL) < 1e-9);
}

#[test]
fn full_progress_covers_disc() {
    let pie = build(Progress::FULL, size()).unwrap();
    let expected = PI * 50.0 * 50.0;
    assert!((pie.sector.area(TOL) - expected).abs() / expected < 1e-3);
}

#[test]
fn full_progress_has_no_radial_seam() {
    let pie = build(Progress::FULL, size()).unwrap();
    assert!(
        !pie.sector
            .commands()
            .iter()
            .any(|c| matches!(c, PathCmd::LineTo(_)))
    );
}

#[test]
fn quarter_sector_is_quarter_disc() {
    let pie = build(Progress::new(0.25), size()).unwrap();
    let expected = PI * 50.0 * 50.0 / 4.0;
    assert!((pie.sector.area(TOL) - expected).abs() / expected < 1e-3);
}

#[test]
fn partial_sector_returns_through_center() {
    let pie = build(Progress::new(0.5), size()).unwrap();
    let cmds = pie.sector.commands();
    assert_eq!(cmds[0], PathCmd::MoveTo(Point::new(100.0, 50.0)));
    assert_eq!(cmds[2], PathCmd::LineTo(Point::new(50.0, 50.0)));
    assert_eq!(cmds[3], PathCmd::LineTo(Point::new(100.0, 50.0)));
}

#[test]
fn transform_moves_start_to_top() {
    let pie = build(Progress::new(0.5), size()).unwrap();
    let top = pie.transform * Point::new(100.0, 50.0);
    assert!((top.x - 50.0).abs() < 1e-9);
    assert!(top.y.abs() < 1e-9);
}

#[test]
fn area_grows_with_progress() {
    let mut last = -1.0;
    for i in 0..=10 {
        let pie = build(Progress::new(f64::from(i) / 10.0), size()).unwrap();
        let a = pie.sector.area(TOL);
        assert!(a > last - 1e-9);
        last = a;
    }
}

#[test]
fn gradient_turns_with_the_sector() {
    let pie = build(Progress::new(0.5), size()).unwrap();
    assert_eq!(pie.gradient.center, pie.center);
    assert_eq!(pie.gradient.start_deg, 0.0);
    assert_eq!(pie.gradient.end_deg, 360.0);
    let first_stop = pie.transform * point_on_circle(pie.center, pie.radius, pie.gradient.start_deg);
    assert!((first_stop.x - 50.0).abs() < 1e-9);
    assert!(first_stop.y.abs() < 1e-9);
}
