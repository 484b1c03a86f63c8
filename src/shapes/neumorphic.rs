//! Soft-UI ("neumorphic") ring and dial.
//!
//! Both shapes are laid out inside the largest square centered in the box. Insets are measured
//! from the square's edge to the circle's center line.

use crate::foundation::core::{Affine, Point, Progress, Rect, Size, center_of, validate_size};
use crate::foundation::error::RingletResult;
use crate::geometry::arc_math::{TWELVE_OCLOCK_DEG, point_on_circle};
use crate::geometry::path::{LineCap, PathGeometry, StrokeSpec};
use crate::shapes::ring::{AngularGradient, trimmed_arc};
use crate::shapes::style::StyleConfig;

const GROOVE_INSET: f64 = 10.0;
const GROOVE_WIDTH: f64 = 20.0;
const DISC_INSET: f64 = 35.0;
const PROGRESS_INSET: f64 = 27.5;

const GAUGE_INSET: f64 = 3.5;
const GAUGE_WIDTH: f64 = 7.0;
const DIAL_INSET: f64 = 20.0;
const KNOB_INSET: f64 = 32.0;
const KNOB_LENGTH: f64 = 14.0;
const KNOB_THICKNESS: f64 = 5.0;
const DIAL_START_DEG: f64 = 180.0;
const DIAL_TRAVEL_DEG: f64 = 180.0;

/// Groove, raised disc and progress arc of the neumorphic ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NeumorphicRingGeometry {
    /// Recessed outer circle.
    pub groove: PathGeometry,
    /// Stroke of the groove.
    pub groove_stroke: StrokeSpec,
    /// Raised inner disc, filled.
    pub disc: PathGeometry,
    /// Progress arc from 12 o'clock; empty at zero progress.
    pub arc: PathGeometry,
    /// Stroke of the progress arc.
    pub arc_stroke: StrokeSpec,
    /// Swept angle of the arc in degrees.
    pub sweep_degrees: f64,
}

/// Half-circle gauge with a rotating knob.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NeumorphicDialGeometry {
    /// Gauge arc over the top half.
    pub gauge: PathGeometry,
    /// Stroke of the gauge arc.
    pub gauge_stroke: StrokeSpec,
    /// Gradient hint along the gauge.
    pub gauge_gradient: AngularGradient,
    /// Dial face, filled.
    pub dial: PathGeometry,
    /// Knob capsule in the dial's unrotated frame.
    pub knob: PathGeometry,
    /// Rotation placing the knob at [`NeumorphicDialGeometry::knob_angle_deg`].
    pub knob_transform: Affine,
    /// Knob center after rotation.
    pub knob_center: Point,
    /// Knob angle in degrees, from 180 at zero progress to 360 when full.
    pub knob_angle_deg: f64,
}

fn square_radius(size: Size) -> f64 {
    size.width.min(size.height) / 2.0
}

/// Build the neumorphic ring; the progress arc uses `style.stroke_width` and `style.line_cap`.
pub fn build_ring(
    progress: Progress,
    size: Size,
    style: &StyleConfig,
) -> RingletResult<NeumorphicRingGeometry> {
    validate_size(size)?;
    style.validate()?;

    let center = center_of(size);
    let outer = square_radius(size);
    let sweep = crate::geometry::arc_math::angle_for_progress(progress);

    let mut disc = PathGeometry::circle(center, (outer - DISC_INSET).max(0.0), 0.0);
    disc.close();

    Ok(NeumorphicRingGeometry {
        groove: PathGeometry::circle(center, (outer - GROOVE_INSET).max(0.0), 0.0),
        groove_stroke: StrokeSpec::solid(GROOVE_WIDTH),
        disc,
        arc: trimmed_arc(
            center,
            (outer - PROGRESS_INSET).max(0.0),
            TWELVE_OCLOCK_DEG,
            progress,
        ),
        arc_stroke: StrokeSpec {
            width: style.stroke_width,
            cap: style.line_cap,
            dash: None,
        },
        sweep_degrees: sweep,
    })
}

/// Build the neumorphic dial; the knob travels half a turn over the full progress range.
pub fn build_dial(progress: Progress, size: Size) -> RingletResult<NeumorphicDialGeometry> {
    validate_size(size)?;

    let center = center_of(size);
    let outer = square_radius(size);
    let gauge_radius = (outer - GAUGE_INSET).max(0.0);

    let mut gauge = PathGeometry::new();
    gauge
        .move_to(point_on_circle(center, gauge_radius, DIAL_START_DEG))
        .arc(center, gauge_radius, DIAL_START_DEG, DIAL_TRAVEL_DEG);

    let mut dial = PathGeometry::circle(center, (outer - DIAL_INSET).max(0.0), 0.0);
    dial.close();

    let knob_distance = outer - KNOB_INSET;
    let knob_rect = Rect::from_center_size(
        Point::new(center.x + knob_distance, center.y),
        (KNOB_LENGTH, KNOB_THICKNESS),
    );
    let mut knob = PathGeometry::new();
    knob.rounded_rect(knob_rect, KNOB_THICKNESS / 2.0);

    let knob_angle_deg = DIAL_START_DEG + progress.of(DIAL_TRAVEL_DEG);

    Ok(NeumorphicDialGeometry {
        gauge,
        gauge_stroke: StrokeSpec {
            width: GAUGE_WIDTH,
            cap: LineCap::Round,
            dash: None,
        },
        gauge_gradient: AngularGradient {
            center,
            start_deg: DIAL_START_DEG,
            end_deg: DIAL_START_DEG + DIAL_TRAVEL_DEG,
        },
        dial,
        knob,
        knob_transform: Affine::rotate_about(knob_angle_deg.to_radians(), center),
        knob_center: point_on_circle(center, knob_distance, knob_angle_deg),
        knob_angle_deg,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/neumorphic.rs"]
mod tests;
