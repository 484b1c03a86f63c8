//! Linear capsule bar.

use crate::foundation::core::{Progress, Rect, Size, validate_size};
use crate::foundation::error::RingletResult;
use crate::geometry::path::PathGeometry;

/// Capsule track, left-aligned fill and the capsule clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BarGeometry {
    /// Capsule spanning the full box.
    pub track: PathGeometry,
    /// Filled region from the left edge.
    pub fill: PathGeometry,
    /// Capsule clip applied to the fill.
    pub clip: PathGeometry,
    /// Width of the filled region.
    pub filled_width: f64,
}

/// Build a bar filling `size.width * progress` from the left.
pub fn build(progress: Progress, size: Size) -> RingletResult<BarGeometry> {
    validate_size(size)?;

    let full = Rect::from_origin_size((0.0, 0.0), size);
    let corner = size.width.min(size.height) / 2.0;
    let filled_width = progress.of(size.width);

    let mut capsule = PathGeometry::new();
    capsule.rounded_rect(full, corner);
    let mut fill = PathGeometry::new();
    if filled_width > 0.0 {
        let fill_corner = filled_width.min(size.height) / 2.0;
        fill.rounded_rect(Rect::new(0.0, 0.0, filled_width, size.height), fill_corner);
    }

    Ok(BarGeometry {
        track: capsule.clone(),
        fill,
        clip: capsule,
        filled_width,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/bar.rs"]
mod tests;
