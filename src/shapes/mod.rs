//! Shape builders. Each one is a pure function of progress, box size and style.

/// Capsule bar.
pub mod bar;
/// Dot spinner layout.
pub mod dots;
/// Shape kinds, uniform geometry output and paint layers.
pub mod kind;
/// Milestone track.
pub mod milestone;
/// Neumorphic ring and dial.
pub mod neumorphic;
/// Pie sector.
pub mod pie;
/// Plain, dashed and gradient rings.
pub mod ring;
/// Shared style configuration.
pub mod style;
