use crate::foundation::error::{RingletError, RingletResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Completion fraction, always inside `[0, 1]`.
///
/// Out-of-range input is clamped to the nearest bound instead of being rejected, since
/// sliders can transiently report values just outside the range. NaN clamps to `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct Progress(f64);

impl Progress {
    /// Empty progress.
    pub const ZERO: Self = Self(0.0);
    /// Complete progress.
    pub const FULL: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            tracing::trace!("progress is NaN, clamping to 0");
            return Self::ZERO;
        }
        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            tracing::trace!(value, clamped, "progress clamped");
        }
        Self(clamped)
    }

    /// Raw fraction in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Scale a length by the fraction.
    pub fn of(self, length: f64) -> f64 {
        length * self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> serde::Deserialize<'de> for Progress {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = f64::deserialize(d)?;
        Ok(Self::new(v))
    }
}

/// Reject bounding sizes that cannot carry geometry.
pub(crate) fn validate_size(size: Size) -> RingletResult<()> {
    if !size.width.is_finite() || !size.height.is_finite() {
        return Err(RingletError::invalid_parameter(format!(
            "bounding size must be finite, got {}x{}",
            size.width, size.height
        )));
    }
    if size.width < 0.0 || size.height < 0.0 {
        return Err(RingletError::invalid_parameter(format!(
            "bounding size must be non-negative, got {}x{}",
            size.width, size.height
        )));
    }
    Ok(())
}

/// Center of a bounding box anchored at the origin.
pub(crate) fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
