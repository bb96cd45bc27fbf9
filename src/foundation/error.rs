/// Convenience result type used across the crate.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by sampling and analysis APIs.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// The source produced no segments or no samples.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Every sample coincides after centering, so the curve cannot be normalized.
    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),

    /// Negative truncation order.
    #[error("invalid truncation order: {0} (must be >= 0)")]
    InvalidOrder(i64),

    /// Invalid user-provided configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// SVG documents or path data that could not be parsed.
    #[error("svg error: {0}")]
    Svg(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpicycleError {
    /// Build an [`EpicycleError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build an [`EpicycleError::DegenerateCurve`] value.
    pub fn degenerate_curve(msg: impl Into<String>) -> Self {
        Self::DegenerateCurve(msg.into())
    }

    /// Build an [`EpicycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EpicycleError::Svg`] value.
    pub fn svg(msg: impl Into<String>) -> Self {
        Self::Svg(msg.into())
    }

    /// Build an [`EpicycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
