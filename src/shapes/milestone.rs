//! Milestone track: circular nodes joined by straight segments, filled left to right.

use crate::foundation::core::{Point, Progress, Rect, Size, validate_size};
use crate::foundation::error::{RingletError, RingletResult};
use crate::geometry::path::{PathGeometry, StrokeSpec};
use crate::shapes::style::StyleConfig;

/// Track outline, its filled copy and the progress mask.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MilestoneGeometry {
    /// Node outlines and connecting segments.
    pub track: PathGeometry,
    /// Same path as `track`, drawn in the fill color under `mask`.
    pub fill: PathGeometry,
    /// Clip rectangle from the left edge to `width * progress`.
    pub mask: Rect,
    /// Stroke for both paths.
    pub stroke: StrokeSpec,
    /// Node centers, left to right.
    pub node_centers: Vec<Point>,
    /// Length of each connecting segment.
    pub segment_length: f64,
}

/// Gap between neighbouring nodes for `count` nodes of `radius` across `width`.
pub fn segment_length(count: usize, radius: f64, width: f64) -> RingletResult<f64> {
    if count < 2 {
        return Err(RingletError::invalid_parameter(format!(
            "milestone track needs at least 2 nodes, got {count}"
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(RingletError::invalid_parameter(format!(
            "node radius must be finite and non-negative, got {radius}"
        )));
    }
    let nodes = count as f64;
    let seg = (width - nodes * radius * 2.0) / (nodes - 1.0);
    if seg < 0.0 {
        return Err(RingletError::invalid_parameter(format!(
            "{count} nodes of radius {radius} do not fit in width {width}"
        )));
    }
    Ok(seg)
}

/// Build the node/segment path along the horizontal midline of `size`.
pub fn track_path(count: usize, radius: f64, size: Size) -> RingletResult<(PathGeometry, f64)> {
    let seg = segment_length(count, radius, size.width)?;
    let mid_y = size.height / 2.0;
    let diameter = radius * 2.0;

    let mut path = PathGeometry::new();
    path.move_to(Point::new(0.0, mid_y));
    let mut x = 0.0;
    for i in 1..=count {
        path.ellipse(Rect::new(x, mid_y - radius, x + diameter, mid_y + radius));
        x += diameter;
        path.move_to(Point::new(x, mid_y));
        if i != count {
            x += seg;
            path.line_to(Point::new(x, mid_y));
        }
    }
    Ok((path, seg))
}

/// Build milestone geometry using `style.node_count` and `style.node_radius`.
pub fn build(
    progress: Progress,
    size: Size,
    style: &StyleConfig,
) -> RingletResult<MilestoneGeometry> {
    validate_size(size)?;
    style.validate()?;

    let count = style.node_count;
    let radius = style.node_radius;
    let (track, seg) = track_path(count, radius, size)?;
    let mid_y = size.height / 2.0;
    let node_centers = (0..count)
        .map(|i| Point::new(radius + (i as f64) * (radius * 2.0 + seg), mid_y))
        .collect();

    Ok(MilestoneGeometry {
        fill: track.clone(),
        track,
        mask: Rect::new(0.0, 0.0, progress.of(size.width), size.height),
        stroke: style.stroke(),
        node_centers,
        segment_length: seg,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/milestone.rs"]
mod tests;
