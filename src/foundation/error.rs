/// Convenience result type used across facemorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Errors reported at the boundary of the interpolation core.
///
/// Blending itself never fails; these cover lookups, configuration and the
/// optional render/export stages.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Invalid caller-provided configuration or catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A name that is not present in the active catalog.
    #[error("unknown expression '{0}'")]
    UnknownExpression(String),

    /// Failures while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::UnknownExpression`] value.
    pub fn unknown_expression(name: impl Into<String>) -> Self {
        Self::UnknownExpression(name.into())
    }

    /// Build a [`MorphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
