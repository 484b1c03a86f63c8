/// Convenience result type used across ringlet.
pub type RingletResult<T> = Result<T, RingletError>;

/// Top-level error taxonomy used by builder and rasterizer APIs.
#[derive(thiserror::Error, Debug)]
pub enum RingletError {
    /// A style or layout parameter makes the geometry undefined.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Errors while rasterizing geometry onto a CPU surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing styles or geometry.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RingletError {
    /// Build a [`RingletError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`RingletError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RingletError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RingletError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
