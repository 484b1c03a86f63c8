//! Geometry primitives shared by every shape builder.

/// Angle and circle-point helpers.
pub mod arc_math;
/// Path commands, stroke and dash descriptions.
pub mod path;
