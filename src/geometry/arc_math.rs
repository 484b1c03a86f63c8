//! Trigonometric helpers shared by the circular builders.
//!
//! Angles are in degrees and the y axis points down, so increasing angles run visually
//! clockwise starting from 3 o'clock.

use crate::foundation::core::{Point, Progress, Vec2};

/// Frame rotation that moves angle `0` from 3 o'clock to 12 o'clock.
pub const TWELVE_OCLOCK_DEG: f64 = -90.0;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

#[inline]
/// Map progress linearly onto `[0, 360]` degrees.
pub fn angle_for_progress(progress: Progress) -> f64 {
    FULL_TURN_DEG * progress.get()
}

#[inline]
/// Point at `angle_deg` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, angle_deg: f64) -> Point {
    let theta = angle_deg.to_radians();
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

#[inline]
/// End point of an arc starting at `start_deg` and sweeping `sweep_deg`.
pub fn arc_endpoint(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> Point {
    point_on_circle(center, radius, start_deg + sweep_deg)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc_math.rs"]
mod tests;
