use crate::foundation::error::{RingletError, RingletResult};
use crate::geometry::path::{DashSpec, LineCap, StrokeSpec};

/// Upper bound on `dot_count` and `node_count`; larger styles are rejected.
pub const MAX_ELEMENTS: usize = 1024;

/// Per-widget parameters shared by all shape builders.
///
/// Each builder reads only the fields it needs. Presets matching the gallery's widgets come
/// from [`crate::ShapeKind::default_style`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Stroke width for rings, arcs and milestone outlines.
    pub stroke_width: f64,
    /// End-cap style for stroked arcs.
    pub line_cap: LineCap,
    /// Optional dash pattern applied to track and fill alike.
    pub dash: Option<DashSpec>,
    /// Number of dots on the dot ring.
    pub dot_count: usize,
    /// Distance between the bounding edge and the dot ring's placement radius.
    pub dot_inset: f64,
    /// Number of milestone nodes (at least 2).
    pub node_count: usize,
    /// Milestone node radius.
    pub node_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_width: 40.0,
            line_cap: LineCap::Butt,
            dash: None,
            dot_count: 20,
            dot_inset: 10.0,
            node_count: 3,
            node_radius: 10.0,
        }
    }
}

impl StyleConfig {
    /// Stroke description derived from width, cap and dash.
    pub fn stroke(&self) -> StrokeSpec {
        StrokeSpec {
            width: self.stroke_width,
            cap: self.line_cap,
            dash: self.dash.clone(),
        }
    }

    /// Check the fields every builder relies on.
    pub fn validate(&self) -> RingletResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(RingletError::invalid_parameter(format!(
                "stroke_width must be finite and non-negative, got {}",
                self.stroke_width
            )));
        }
        if let Some(dash) = &self.dash {
            dash.validate()?;
        }
        if !self.dot_inset.is_finite() {
            return Err(RingletError::invalid_parameter("dot_inset must be finite"));
        }
        if self.dot_count > MAX_ELEMENTS || self.node_count > MAX_ELEMENTS {
            return Err(RingletError::invalid_parameter(format!(
                "dot_count and node_count must not exceed {MAX_ELEMENTS}, got {} and {}",
                self.dot_count, self.node_count
            )));
        }
        Ok(())
    }
}

/// Partial style, as read from a JSON file; unset fields keep the base value.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverrides {
    /// See [`StyleConfig::stroke_width`].
    pub stroke_width: Option<f64>,
    /// See [`StyleConfig::line_cap`].
    pub line_cap: Option<LineCap>,
    /// See [`StyleConfig::dash`].
    pub dash: Option<DashSpec>,
    /// See [`StyleConfig::dot_count`].
    pub dot_count: Option<usize>,
    /// See [`StyleConfig::dot_inset`].
    pub dot_inset: Option<f64>,
    /// See [`StyleConfig::node_count`].
    pub node_count: Option<usize>,
    /// See [`StyleConfig::node_radius`].
    pub node_radius: Option<f64>,
}

impl StyleOverrides {
    /// Parse overrides from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RingletResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Layer the set fields over `base`.
    pub fn apply(self, base: StyleConfig) -> StyleConfig {
        StyleConfig {
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            line_cap: self.line_cap.unwrap_or(base.line_cap),
            dash: self.dash.or(base.dash),
            dot_count: self.dot_count.unwrap_or(base.dot_count),
            dot_inset: self.dot_inset.unwrap_or(base.dot_inset),
            node_count: self.node_count.unwrap_or(base.node_count),
            node_radius: self.node_radius.unwrap_or(base.node_radius),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/style.rs"]
mod tests;
