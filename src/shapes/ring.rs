//! Stroked ring indicators: plain, dashed and angular-gradient rings.

use crate::foundation::core::{Point, Progress, Size, center_of, validate_size};
use crate::foundation::error::RingletResult;
use crate::geometry::arc_math::{TWELVE_OCLOCK_DEG, angle_for_progress, point_on_circle};
use crate::geometry::path::{PathGeometry, StrokeSpec};
use crate::shapes::style::StyleConfig;

/// Angular gradient placement hint; colors are chosen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AngularGradient {
    /// Gradient center.
    pub center: Point,
    /// Angle of the first color stop, in degrees.
    pub start_deg: f64,
    /// Angle of the last color stop, in degrees.
    pub end_deg: f64,
}

/// Background track plus the progress-trimmed arc of a ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingGeometry {
    /// Full circle behind the fill.
    pub track: PathGeometry,
    /// Arc from 12 o'clock sweeping [`RingGeometry::sweep_degrees`]; empty at zero progress.
    pub fill: PathGeometry,
    /// Stroke shared by track and fill so dash patterns line up.
    pub stroke: StrokeSpec,
    /// Clip to the bounding circle; cuts off the outer half of the stroke.
    pub clip: PathGeometry,
    /// Ring center.
    pub center: Point,
    /// Radius of the stroked center line.
    pub radius: f64,
    /// Swept angle of the fill in degrees.
    pub sweep_degrees: f64,
    /// Gradient hint for the fill, when the variant asks for one.
    pub gradient: Option<AngularGradient>,
}

/// Arc starting at `start_deg` and sweeping the progress-mapped angle.
///
/// Zero progress gives an empty path rather than a degenerate point.
pub fn trimmed_arc(center: Point, radius: f64, start_deg: f64, progress: Progress) -> PathGeometry {
    let sweep = angle_for_progress(progress);
    let mut p = PathGeometry::new();
    if sweep > 0.0 {
        p.move_to(point_on_circle(center, radius, start_deg))
            .arc(center, radius, start_deg, sweep);
    }
    p
}

/// Build ring geometry centered in a `size` box.
pub fn build(progress: Progress, size: Size, style: &StyleConfig) -> RingletResult<RingGeometry> {
    validate_size(size)?;
    style.validate()?;

    let center = center_of(size);
    let radius = size.width.min(size.height) / 2.0;

    Ok(RingGeometry {
        track: PathGeometry::circle(center, radius, TWELVE_OCLOCK_DEG),
        fill: trimmed_arc(center, radius, TWELVE_OCLOCK_DEG, progress),
        stroke: style.stroke(),
        clip: PathGeometry::circle(center, radius, TWELVE_OCLOCK_DEG),
        center,
        radius,
        sweep_degrees: angle_for_progress(progress),
        gradient: None,
    })
}

/// Build a ring whose fill carries a full-turn angular gradient hint.
pub fn build_gradient(
    progress: Progress,
    size: Size,
    style: &StyleConfig,
) -> RingletResult<RingGeometry> {
    let mut ring = build(progress, size, style)?;
    ring.gradient = Some(AngularGradient {
        center: ring.center,
        start_deg: TWELVE_OCLOCK_DEG,
        end_deg: TWELVE_OCLOCK_DEG + 360.0,
    });
    Ok(ring)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/ring.rs"]
mod tests;
