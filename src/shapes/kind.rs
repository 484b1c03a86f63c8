use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Affine, Point, Progress, Rect, Size};
use crate::foundation::error::{RingletError, RingletResult};
use crate::geometry::path::{DashSpec, LineCap, PathGeometry, StrokeSpec};
use crate::shapes::bar::{self, BarGeometry};
use crate::shapes::dots::{self, DotRingGeometry};
use crate::shapes::milestone::{self, MilestoneGeometry};
use crate::shapes::neumorphic::{self, NeumorphicDialGeometry, NeumorphicRingGeometry};
use crate::shapes::pie::{self, SectorGeometry};
use crate::shapes::ring::{self, AngularGradient, RingGeometry};
use crate::shapes::style::StyleConfig;

/// Every widget shape in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Capsule bar.
    Bar,
    /// Solid stroked ring.
    Ring,
    /// Ring stroked with a dash pattern.
    DashedRing,
    /// Ring whose fill carries an angular gradient hint.
    GradientRing,
    /// Filled pie sector.
    Pie,
    /// Dot spinner.
    DotRing,
    /// Milestone track.
    Milestone,
    /// Soft-UI ring with groove and raised disc.
    NeumorphicRing,
    /// Soft-UI half-turn dial.
    NeumorphicDial,
}

impl ShapeKind {
    /// All kinds in gallery order.
    pub const ALL: [Self; 9] = [
        Self::Ring,
        Self::Pie,
        Self::DashedRing,
        Self::DotRing,
        Self::Bar,
        Self::Milestone,
        Self::NeumorphicRing,
        Self::NeumorphicDial,
        Self::GradientRing,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Ring => "ring",
            Self::DashedRing => "dashed-ring",
            Self::GradientRing => "gradient-ring",
            Self::Pie => "pie",
            Self::DotRing => "dot-ring",
            Self::Milestone => "milestone",
            Self::NeumorphicRing => "neumorphic-ring",
            Self::NeumorphicDial => "neumorphic-dial",
        }
    }

    /// Style preset carrying this shape's stock constants.
    pub fn default_style(self) -> StyleConfig {
        let base = StyleConfig::default();
        match self {
            Self::Ring | Self::GradientRing | Self::Bar | Self::Pie | Self::NeumorphicDial => base,
            Self::DashedRing => StyleConfig {
                stroke_width: 50.0,
                dash: Some(DashSpec::new([10.0, 5.0], 0.0)),
                ..base
            },
            Self::DotRing => StyleConfig {
                dot_count: 20,
                dot_inset: 10.0,
                ..base
            },
            Self::Milestone => StyleConfig {
                stroke_width: 8.0,
                node_count: 3,
                node_radius: 10.0,
                ..base
            },
            Self::NeumorphicRing => StyleConfig {
                stroke_width: 15.0,
                line_cap: LineCap::Round,
                ..base
            },
        }
    }

    /// Build this shape's geometry for `progress` inside a `size` box.
    ///
    /// Progress is clamped to `[0, 1]`. Fails only when `style` or `size` make the shape
    /// undefined, e.g. a milestone track with fewer than two nodes.
    #[tracing::instrument(skip(style))]
    pub fn build(
        self,
        progress: impl Into<Progress> + fmt::Debug,
        size: Size,
        style: &StyleConfig,
    ) -> RingletResult<Geometry> {
        let progress = progress.into();
        let out = match self {
            Self::Bar => Geometry::Bar(bar::build(progress, size)?),
            Self::Ring | Self::DashedRing => Geometry::Ring(ring::build(progress, size, style)?),
            Self::GradientRing => Geometry::Ring(ring::build_gradient(progress, size, style)?),
            Self::Pie => Geometry::Pie(pie::build(progress, size)?),
            Self::DotRing => Geometry::Dots(dots::build(progress, size, style)?),
            Self::Milestone => Geometry::Milestone(milestone::build(progress, size, style)?),
            Self::NeumorphicRing => {
                Geometry::NeumorphicRing(neumorphic::build_ring(progress, size, style)?)
            }
            Self::NeumorphicDial => Geometry::NeumorphicDial(neumorphic::build_dial(progress, size)?),
        };
        tracing::debug!(progress = progress.get(), layers = out.layers().len(), "built geometry");
        Ok(out)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = RingletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| RingletError::invalid_parameter(format!("unknown shape kind '{s}'")))
    }
}

/// Output of any builder.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum Geometry {
    /// Bar output.
    Bar(BarGeometry),
    /// Plain, dashed or gradient ring output.
    Ring(RingGeometry),
    /// Pie output.
    Pie(SectorGeometry),
    /// Dot ring output.
    Dots(DotRingGeometry),
    /// Milestone output.
    Milestone(MilestoneGeometry),
    /// Neumorphic ring output.
    NeumorphicRing(NeumorphicRingGeometry),
    /// Neumorphic dial output.
    NeumorphicDial(NeumorphicDialGeometry),
}

/// What a layer stands for; the renderer maps roles to colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    /// Background drawn regardless of progress.
    Track,
    /// Foreground that grows with progress.
    Fill,
    /// Decorative surface that does not depend on progress.
    Accent,
}

/// How a layer's path is painted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Fill the interior (non-zero rule).
    Fill,
    /// Stroke the outline.
    Stroke(StrokeSpec),
}

/// One paint operation in back-to-front order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Semantic role.
    pub role: LayerRole,
    /// Path in the layer's local frame.
    pub path: PathGeometry,
    /// Fill or stroke.
    pub paint: Paint,
    /// Clip in box space, applied before `transform`.
    pub clip: Option<PathGeometry>,
    /// Local-to-box transform for `path`.
    pub transform: Affine,
    /// Angular gradient in the layer's local frame, fading from the role color to half its
    /// opacity. `None` paints the role color flat.
    pub gradient: Option<AngularGradient>,
}

impl Layer {
    fn new(role: LayerRole, path: PathGeometry, paint: Paint) -> Self {
        Self {
            role,
            path,
            paint,
            clip: None,
            transform: Affine::IDENTITY,
            gradient: None,
        }
    }

    fn clipped(mut self, clip: PathGeometry) -> Self {
        self.clip = Some(clip);
        self
    }

    fn transformed(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    fn shaded(mut self, gradient: Option<AngularGradient>) -> Self {
        self.gradient = gradient;
        self
    }
}

fn dot_path(center: Point, radius: f64) -> PathGeometry {
    let mut p = PathGeometry::new();
    p.ellipse(Rect::from_center_size(center, (radius * 2.0, radius * 2.0)));
    p
}

impl Geometry {
    /// Flatten into paint layers, back to front. Empty paths are kept so layer counts stay
    /// stable across progress values; renderers skip them.
    pub fn layers(&self) -> Vec<Layer> {
        use LayerRole::{Accent, Fill, Track};

        match self {
            Self::Bar(g) => vec![
                Layer::new(Track, g.track.clone(), Paint::Fill),
                Layer::new(Fill, g.fill.clone(), Paint::Fill).clipped(g.clip.clone()),
            ],
            Self::Ring(g) => vec![
                Layer::new(Track, g.track.clone(), Paint::Stroke(g.stroke.clone()))
                    .clipped(g.clip.clone()),
                Layer::new(Fill, g.fill.clone(), Paint::Stroke(g.stroke.clone()))
                    .clipped(g.clip.clone())
                    .shaded(g.gradient),
            ],
            Self::Pie(g) => vec![
                Layer::new(Track, g.background.clone(), Paint::Fill),
                Layer::new(Fill, g.sector.clone(), Paint::Fill)
                    .transformed(g.transform)
                    .shaded(Some(g.gradient)),
            ],
            Self::Dots(g) => {
                let track = g
                    .dots
                    .iter()
                    .map(|d| Layer::new(Track, dot_path(d.center, d.radius), Paint::Fill));
                let lit = g
                    .dots
                    .iter()
                    .filter(|d| d.lit)
                    .map(|d| Layer::new(Fill, dot_path(d.center, d.radius), Paint::Fill));
                track.chain(lit).collect()
            }
            Self::Milestone(g) => vec![
                Layer::new(Track, g.track.clone(), Paint::Stroke(g.stroke.clone())),
                Layer::new(Fill, g.fill.clone(), Paint::Stroke(g.stroke.clone()))
                    .clipped(PathGeometry::rect(g.mask)),
            ],
            Self::NeumorphicRing(g) => vec![
                Layer::new(Track, g.groove.clone(), Paint::Stroke(g.groove_stroke.clone())),
                Layer::new(Accent, g.disc.clone(), Paint::Fill),
                Layer::new(Fill, g.arc.clone(), Paint::Stroke(g.arc_stroke.clone())),
            ],
            Self::NeumorphicDial(g) => vec![
                Layer::new(Track, g.gauge.clone(), Paint::Stroke(g.gauge_stroke.clone()))
                    .shaded(Some(g.gauge_gradient)),
                Layer::new(Accent, g.dial.clone(), Paint::Fill),
                Layer::new(Fill, g.knob.clone(), Paint::Fill).transformed(g.knob_transform),
            ],
        }
    }
}

/// A shape kind paired with its style, rebuilt whenever progress changes.
///
/// Holds no progress of its own: each [`Widget::build`] call is independent, so the latest
/// value supplied is always the one drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Widget {
    /// Shape to draw.
    pub kind: ShapeKind,
    /// Style parameters.
    pub style: StyleConfig,
}

impl Widget {
    /// Widget using the kind's preset style.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            style: kind.default_style(),
        }
    }

    /// Replace the style.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Build geometry for `progress` inside `size`.
    pub fn build(&self, progress: f64, size: Size) -> RingletResult<Geometry> {
        self.kind.build(progress, size, &self.style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/kind.rs"]
mod tests;
