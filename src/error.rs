use thiserror::Error;

use crate::engine::EngineError;

pub type PlotResult<T> = Result<T, PlotError>;

/// Failures surfaced by the plotting facade.
///
/// `Value` and `Engine` carry the exact user-facing message; callers and tests
/// match on substrings of it, so the `Display` output is the message itself.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// An element of a data array could not be read as a number.
    #[error("type error: {0}")]
    Type(String),

    /// Data array had the wrong dimensionality or no elements.
    #[error("shape error: {0}")]
    Shape(String),

    #[error("contiguity error: {0}")]
    Contiguity(String),

    #[error("{0}")]
    Value(String),

    /// Reported by the engine collaborator, text preserved verbatim.
    ///
    /// Size mismatches may arrive here or as `Value`; match the text on both.
    #[error("{0}")]
    Engine(String),

    #[error("the plotter has been finished and can no longer be used")]
    UseAfterFinish,
}

impl PlotError {
    pub(crate) fn value(message: impl Into<String>) -> Self {
        Self::Value(message.into())
    }
}

impl From<EngineError> for PlotError {
    fn from(err: EngineError) -> Self {
        Self::Engine(err.message)
    }
}
