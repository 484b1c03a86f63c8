//! Dot-ring spinner layout.
//!
//! Dots are placed with the gallery's staggered rule: dot `i` sits at
//! `-90 + 2π·(3i)` degrees, so consecutive dots advance by roughly 18.85 degrees and the ring
//! wraps over itself once the count passes 19. Dot size grows with the index.

use std::f64::consts::TAU;

use crate::foundation::core::{Point, Progress, Size, center_of, validate_size};
use crate::foundation::error::{RingletError, RingletResult};
use crate::geometry::arc_math::{TWELVE_OCLOCK_DEG, point_on_circle};
use crate::shapes::style::StyleConfig;

/// One dot of the ring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dot {
    /// Dot center.
    pub center: Point,
    /// Dot radius (half of [`Dot::size`]).
    pub radius: f64,
    /// Dot diameter in size units.
    pub size: f64,
    /// Whether the dot is drawn in the foreground color.
    pub lit: bool,
}

/// Ordered dots of a dot ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotRingGeometry {
    /// Dots in index order.
    pub dots: Vec<Dot>,
    /// Number of lit dots.
    pub lit_count: usize,
    /// Distance from the center to each dot center.
    pub placement_radius: f64,
}

/// Staggered angle of dot `index`, in degrees, before the frame rotation.
pub fn stagger_angle_deg(index: usize) -> f64 {
    TAU * (index * 3) as f64
}

/// Diameter of dot `index`.
pub fn dot_size(index: usize) -> f64 {
    index as f64
}

/// Whether dot `index` of `count` is lit at `progress`.
///
/// Strict comparison: a dot exactly on the threshold stays unlit.
pub fn is_lit(index: usize, count: usize, progress: Progress) -> bool {
    (index as f64) < (count as f64) * progress.get()
}

/// Lay out `style.dot_count` dots around the center of `size`.
pub fn build(
    progress: Progress,
    size: Size,
    style: &StyleConfig,
) -> RingletResult<DotRingGeometry> {
    validate_size(size)?;
    style.validate()?;
    let count = style.dot_count;
    if count == 0 {
        return Err(RingletError::invalid_parameter("dot_count must be at least 1"));
    }

    let center = center_of(size);
    let placement_radius = size.width / 2.0 - style.dot_inset;
    if placement_radius < 0.0 {
        return Err(RingletError::invalid_parameter(format!(
            "dot_inset {} exceeds half the box width {}",
            style.dot_inset,
            size.width / 2.0
        )));
    }

    let dots: Vec<Dot> = (0..count)
        .map(|i| {
            let diameter = dot_size(i);
            Dot {
                center: point_on_circle(
                    center,
                    placement_radius,
                    TWELVE_OCLOCK_DEG + stagger_angle_deg(i),
                ),
                radius: diameter / 2.0,
                size: diameter,
                lit: is_lit(i, count, progress),
            }
        })
        .collect();
    let lit_count = dots.iter().filter(|d| d.lit).count();

    Ok(DotRingGeometry {
        dots,
        lit_count,
        placement_radius,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/dots.rs"]
mod tests;
