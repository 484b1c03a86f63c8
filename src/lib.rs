//! ringlet computes the vector geometry of progress-indicator widgets.
//!
//! Every widget is a pure function from a progress fraction in `[0, 1]`, a bounding box and a
//! [`StyleConfig`] to plain geometry data: ordered path commands ([`PathGeometry`]) or circle
//! descriptors ([`Dot`]). Nothing here holds state between calls, so a UI shell can rebuild the
//! geometry on every progress change and draw whatever it gets.
//!
//! # Pipeline overview
//!
//! 1. **Clamp**: raw `f64 -> Progress` (out-of-range values snap to the nearest bound)
//! 2. **Build**: `ShapeKind + Progress + Size + StyleConfig -> Geometry`
//! 3. **Flatten**: `Geometry -> Vec<Layer>` (role, path, fill/stroke, clip, transform)
//! 4. **Rasterize** (optional): `Layer`s to RGBA8 through [`CpuRasterizer`]
//!
//! Coordinates are in the widget's bounding box with the y axis pointing down; angles are in
//! degrees and increase clockwise on screen.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Angle helpers and the path model.
pub mod geometry;
/// Rasterization for previews.
pub mod render;
/// Shape builders and the uniform dispatch.
pub mod shapes;

pub use crate::foundation::core::{Affine, BezPath, Point, Progress, Rect, Size, Vec2};
pub use crate::foundation::error::{RingletError, RingletResult};
pub use crate::geometry::arc_math::{
    FULL_TURN_DEG, TWELVE_OCLOCK_DEG, angle_for_progress, arc_endpoint, point_on_circle,
};
pub use crate::geometry::path::{DashSpec, LineCap, PathCmd, PathGeometry, StrokeSpec};
pub use crate::render::cpu::{CpuRasterizer, FrameRGBA, Palette};
pub use crate::shapes::bar::BarGeometry;
pub use crate::shapes::dots::{Dot, DotRingGeometry};
pub use crate::shapes::kind::{Geometry, Layer, LayerRole, Paint, ShapeKind, Widget};
pub use crate::shapes::milestone::MilestoneGeometry;
pub use crate::shapes::neumorphic::{NeumorphicDialGeometry, NeumorphicRingGeometry};
pub use crate::shapes::pie::SectorGeometry;
pub use crate::shapes::ring::{AngularGradient, RingGeometry};
pub use crate::shapes::style::{StyleConfig, StyleOverrides};
