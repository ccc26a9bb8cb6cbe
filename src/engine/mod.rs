mod config_group;
mod frame;
mod null_engine;
mod request;

pub use config_group::{ConfigGroup, LabelTarget, LayoutChange};
pub use frame::FrameBuffer;
pub use null_engine::{EngineCall, NullEngine};
pub use request::PlotRequest;

use thiserror::Error;

use crate::api::PlotterConfig;
use crate::core::SubplotKey;

/// Failure reported by the engine collaborator. The message is surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Contract implemented by any native plotting backend.
///
/// Every call is synchronous. Buffers inside a [`PlotRequest`] are borrowed for
/// the duration of `submit_plot_request` only; an engine that keeps data must
/// clone the (cheaply shared) series buffers.
pub trait PlotEngine: Sized {
    fn create(config: &PlotterConfig) -> Result<Self, EngineError>;

    fn submit_plot_request(&mut self, request: &PlotRequest) -> Result<(), EngineError>;

    fn set_config(
        &mut self,
        subplot: SubplotKey,
        group: &ConfigGroup,
    ) -> Result<(), EngineError>;

    fn apply_layout(&mut self, change: &LayoutChange) -> Result<(), EngineError>;

    /// Runs the interactive session until the window is closed.
    fn start_loop(&mut self) -> Result<(), EngineError>;

    fn grab_frame(&mut self, subplot: SubplotKey) -> Result<FrameBuffer, EngineError>;

    /// Releases native resources. Called exactly once.
    fn destroy(&mut self);
}
