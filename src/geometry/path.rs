use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{RingletError, RingletResult};

/// Flattening tolerance used when converting to Bezier paths.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// One drawing command with absolute coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathCmd {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Circular arc continuing from the current point.
    ///
    /// The current point is expected to sit at `start_deg` on the circle.
    Arc {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Start angle in degrees.
        start_deg: f64,
        /// Signed sweep in degrees; positive is visually clockwise.
        sweep_deg: f64,
    },
    /// Closed ellipse inscribed in `rect`, as its own subpath.
    Ellipse(Rect),
    /// Closed rounded rectangle, as its own subpath.
    RoundedRect {
        /// Outer rectangle.
        rect: Rect,
        /// Corner radius.
        radius: f64,
    },
    /// Close the current subpath.
    Close,
}

/// Ordered sequence of [`PathCmd`] values produced by a builder.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathGeometry {
    cmds: Vec<PathCmd>,
}

impl PathGeometry {
    /// Empty path; renders nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Full circle starting at `start_deg`, as a move plus a 360 degree arc.
    pub fn circle(center: Point, radius: f64, start_deg: f64) -> Self {
        let mut p = Self::new();
        p.move_to(super::arc_math::point_on_circle(center, radius, start_deg));
        p.arc(center, radius, start_deg, super::arc_math::FULL_TURN_DEG);
        p
    }

    /// Closed axis-aligned rectangle.
    pub fn rect(rect: Rect) -> Self {
        let mut p = Self::new();
        p.move_to(Point::new(rect.x0, rect.y0))
            .line_to(Point::new(rect.x1, rect.y0))
            .line_to(Point::new(rect.x1, rect.y1))
            .line_to(Point::new(rect.x0, rect.y1))
            .close();
        p
    }

    /// Append a [`PathCmd::MoveTo`].
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo(p));
        self
    }

    /// Append a [`PathCmd::LineTo`].
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::LineTo(p));
        self
    }

    /// Append a [`PathCmd::Arc`].
    pub fn arc(&mut self, center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> &mut Self {
        self.cmds.push(PathCmd::Arc {
            center,
            radius,
            start_deg,
            sweep_deg,
        });
        self
    }

    /// Append a [`PathCmd::Ellipse`].
    pub fn ellipse(&mut self, rect: Rect) -> &mut Self {
        self.cmds.push(PathCmd::Ellipse(rect));
        self
    }

    /// Append a [`PathCmd::RoundedRect`].
    pub fn rounded_rect(&mut self, rect: Rect, radius: f64) -> &mut Self {
        self.cmds.push(PathCmd::RoundedRect { rect, radius });
        self
    }

    /// Append a [`PathCmd::Close`].
    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    /// Commands in drawing order.
    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Return `true` when the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Convert to a kurbo Bezier path with the default tolerance.
    pub fn to_bezpath(&self) -> BezPath {
        self.to_bezpath_with_tolerance(DEFAULT_TOLERANCE)
    }

    /// Convert to a kurbo Bezier path, approximating arcs within `tolerance`.
    pub fn to_bezpath_with_tolerance(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => out.move_to(p),
                PathCmd::LineTo(p) => out.line_to(p),
                PathCmd::Arc {
                    center,
                    radius,
                    start_deg,
                    sweep_deg,
                } => {
                    // Zero sweeps would add a degenerate curve segment.
                    if sweep_deg == 0.0 || radius == 0.0 {
                        continue;
                    }
                    let arc = kurbo::Arc::new(
                        center,
                        (radius, radius),
                        start_deg.to_radians(),
                        sweep_deg.to_radians(),
                        0.0,
                    );
                    out.extend(arc.append_iter(tolerance));
                }
                PathCmd::Ellipse(rect) => {
                    out.extend(kurbo::Ellipse::from_rect(rect).path_elements(tolerance));
                }
                PathCmd::RoundedRect { rect, radius } => {
                    out.extend(kurbo::RoundedRect::from_rect(rect, radius).path_elements(tolerance));
                }
                PathCmd::Close => out.close_path(),
            }
        }
        out
    }

    /// Absolute enclosed area, approximating arcs within `tolerance`.
    pub fn area(&self, tolerance: f64) -> f64 {
        self.to_bezpath_with_tolerance(tolerance).area().abs()
    }
}

/// Stroke end-cap style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat cap ending exactly at the path end.
    #[default]
    Butt,
    /// Semicircular cap.
    Round,
    /// Square cap extending half the stroke width.
    Square,
}

impl LineCap {
    /// Equivalent kurbo cap.
    pub fn to_kurbo(self) -> kurbo::Cap {
        match self {
            Self::Butt => kurbo::Cap::Butt,
            Self::Round => kurbo::Cap::Round,
            Self::Square => kurbo::Cap::Square,
        }
    }
}

/// Repeating on/off dash pattern.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashSpec {
    /// Alternating on/off lengths.
    pub pattern: Vec<f64>,
    /// Offset into the pattern at the path start.
    #[serde(default)]
    pub phase: f64,
}

impl DashSpec {
    /// Build a dash spec; call [`DashSpec::validate`] before use with untrusted input.
    pub fn new(pattern: impl Into<Vec<f64>>, phase: f64) -> Self {
        Self {
            pattern: pattern.into(),
            phase,
        }
    }

    /// Reject patterns that would stall or invert the dasher.
    pub fn validate(&self) -> RingletResult<()> {
        if self.pattern.is_empty() {
            return Err(RingletError::invalid_parameter("dash pattern must not be empty"));
        }
        if self.pattern.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(RingletError::invalid_parameter(
                "dash lengths must be finite and non-negative",
            ));
        }
        if self.pattern.iter().all(|v| *v == 0.0) {
            return Err(RingletError::invalid_parameter(
                "dash pattern must have a positive length",
            ));
        }
        if !self.phase.is_finite() {
            return Err(RingletError::invalid_parameter("dash phase must be finite"));
        }
        Ok(())
    }
}

/// How a path is stroked. Color is left to the renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeSpec {
    /// Stroke width, centered on the path.
    pub width: f64,
    /// End-cap style.
    pub cap: LineCap,
    /// Optional dash pattern.
    pub dash: Option<DashSpec>,
}

impl StrokeSpec {
    /// Solid stroke with butt caps.
    pub fn solid(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    /// Equivalent kurbo stroke style.
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let stroke = kurbo::Stroke::new(self.width).with_caps(self.cap.to_kurbo());
        match &self.dash {
            Some(d) => stroke.with_dashes(d.phase, d.pattern.iter().copied()),
            None => stroke,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
