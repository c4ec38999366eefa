use thiserror::Error;

/// Top-level error type for stroke projection.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Errors raised while reading stroke style keywords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown line cap: {0:?}")]
    UnknownLineCap(String),

    #[error("unknown line join: {0:?}")]
    UnknownLineJoin(String),
}

/// Convenience type alias for results using [`StrokeError`].
pub type Result<T> = std::result::Result<T, StrokeError>;
