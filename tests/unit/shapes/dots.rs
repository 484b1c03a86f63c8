use super::*;

fn size() -> Size {
    Size::new(150.0, 150.0)
}

fn ring(p: f64) -> DotRingGeometry {
    build(Progress::new(p), size(), &StyleConfig::default()).unwrap()
}

#[test]
fn half_progress_lights_first_ten() {
    let g = ring(0.5);
    assert_eq!(g.dots.len(), 20);
    assert_eq!(g.lit_count, 10);
    for (i, d) in g.dots.iter().enumerate() {
        assert_eq!(d.lit, i < 10, "dot {i}");
    }
}

#[test]
fn bounds_light_all_or_none() {
    assert_eq!(ring(1.0).lit_count, 20);
    assert_eq!(ring(0.0).lit_count, 0);
    assert_eq!(ring(1.5), ring(1.0));
    assert_eq!(ring(-0.2), ring(0.0));
}

#[test]
fn threshold_is_strict() {
    // 4 * 0.25 == 1, so only dot 0 is lit.
    assert!(is_lit(0, 4, Progress::new(0.25)));
    assert!(!is_lit(1, 4, Progress::new(0.25)));
}

#[test]
fn sizes_grow_with_index() {
    let g = ring(0.5);
    assert_eq!(g.dots[0].size, 0.0);
    assert_eq!(g.dots[7].size, 7.0);
    assert_eq!(g.dots[7].radius, 3.5);
}

#[test]
fn dots_sit_on_placement_circle_with_stagger() {
    let g = ring(0.5);
    assert_eq!(g.placement_radius, 65.0);
    let c = Point::new(75.0, 75.0);
    for d in &g.dots {
        assert!(((d.center - c).hypot() - 65.0).abs() < 1e-9);
    }
    // Dot 0 is at 12 o'clock.
    assert!((g.dots[0].center.x - 75.0).abs() < 1e-9);
    assert!((g.dots[0].center.y - 10.0).abs() < 1e-9);
    assert_eq!(stagger_angle_deg(2), TAU * 6.0);
}

#[test]
fn zero_dots_is_invalid() {
    let style = StyleConfig {
        dot_count: 0,
        ..StyleConfig::default()
    };
    let err = build(Progress::new(0.5), size(), &style).unwrap_err();
    assert!(matches!(err, RingletError::InvalidParameter(_)));
}

#[test]
fn lit_count_is_monotonic() {
    let mut last = 0;
    for i in 0..=100 {
        let n = ring(f64::from(i) / 100.0).lit_count;
        assert!(n >= last);
        last = n;
    }
}

#[test]
fn inset_past_the_center_is_invalid() {
    let style = StyleConfig {
        dot_inset: 100.0,
        ..StyleConfig::default()
    };
    let err = build(Progress::new(0.5), Size::new(20.0, 20.0), &style).unwrap_err();
    assert!(matches!(err, RingletError::InvalidParameter(_)));

    let exact = StyleConfig {
        dot_inset: 10.0,
        ..StyleConfig::default()
    };
    let g = build(Progress::new(0.5), Size::new(20.0, 20.0), &exact).unwrap();
    assert_eq!(g.placement_radius, 0.0);
}

#[test]
fn oversized_dot_count_is_invalid() {
    let style = StyleConfig {
        dot_count: crate::shapes::style::MAX_ELEMENTS + 1,
        ..StyleConfig::default()
    };
    let err = build(Progress::new(0.5), size(), &style).unwrap_err();
    assert!(matches!(err, RingletError::InvalidParameter(_)));

    let at_limit = StyleConfig {
        dot_count: crate::shapes::style::MAX_ELEMENTS,
        ..StyleConfig::default()
    };
    assert_eq!(build(Progress::new(0.5), size(), &at_limit).unwrap().dots.len(), 1024);
}
