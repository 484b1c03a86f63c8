//! Filled pie-sector indicator.

use crate::foundation::core::{Affine, Point, Progress, Size, center_of, validate_size};
use crate::foundation::error::RingletResult;
use crate::geometry::arc_math::{
    FULL_TURN_DEG, TWELVE_OCLOCK_DEG, angle_for_progress, point_on_circle,
};
use crate::geometry::path::PathGeometry;
use crate::shapes::ring::AngularGradient;

/// Background disc and progress sector of a pie indicator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectorGeometry {
    /// Full disc behind the sector.
    pub background: PathGeometry,
    /// Closed sector starting at 3 o'clock in the unrotated frame.
    pub sector: PathGeometry,
    /// Render-time frame rotation moving the sector start to 12 o'clock.
    pub transform: Affine,
    /// Disc center.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
    /// Swept angle of the sector in degrees.
    pub sweep_degrees: f64,
    /// Full-turn gradient hint in the unrotated frame; `transform` carries it to 12 o'clock
    /// together with the sector.
    pub gradient: AngularGradient,
}

/// Build the sector path for `progress`.
///
/// Zero progress yields a zero-area path; full progress yields a plain closed circle with no
/// radial edges, so nothing seams at the start angle.
pub fn sector_path(center: Point, radius: f64, progress: Progress) -> PathGeometry {
    let sweep = angle_for_progress(progress);
    let start = point_on_circle(center, radius, 0.0);
    let mut p = PathGeometry::new();
    p.move_to(start).arc(center, radius, 0.0, sweep);
    if sweep < FULL_TURN_DEG {
        p.line_to(center).line_to(start);
    }
    p.close();
    p
}

/// Build pie geometry for a `size` box; the radius is half the box width.
pub fn build(progress: Progress, size: Size) -> RingletResult<SectorGeometry> {
    validate_size(size)?;

    let center = center_of(size);
    let radius = size.width / 2.0;
    let mut background = PathGeometry::circle(center, radius, 0.0);
    background.close();

    Ok(SectorGeometry {
        background,
        sector: sector_path(center, radius, progress),
        transform: Affine::rotate_about(TWELVE_OCLOCK_DEG.to_radians(), center),
        center,
        radius,
        sweep_degrees: angle_for_progress(progress),
        gradient: AngularGradient {
            center,
            start_deg: 0.0,
            end_deg: FULL_TURN_DEG,
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/pie.rs"]
mod tests;
