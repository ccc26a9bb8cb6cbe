use crate::api::PlotterConfig;
use crate::core::{Rgba, SubplotKey, Viewport};

use super::{ConfigGroup, EngineError, FrameBuffer, LayoutChange, PlotEngine, PlotRequest};

/// Call received by a [`NullEngine`], in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Plot(PlotRequest),
    Config {
        subplot: SubplotKey,
        group: ConfigGroup,
    },
    Layout(LayoutChange),
    StartLoop,
    GrabFrame(SubplotKey),
}

/// Headless engine used by tests and non-interactive runs.
///
/// It records every accepted call and still checks request buffers, so tests
/// catch malformed requests before a native backend sees them. Frames are
/// filled with the current background color.
#[derive(Debug)]
pub struct NullEngine {
    pub viewport: Viewport,
    pub background: Rgba,
    pub calls: Vec<EngineCall>,
    pub destroy_count: usize,
    fail_next: Option<EngineError>,
}

impl NullEngine {
    #[must_use]
    pub fn new(config: &PlotterConfig) -> Self {
        Self {
            viewport: config.viewport,
            background: config.color_mode.default_background(),
            calls: Vec::new(),
            destroy_count: 0,
            fail_next: None,
        }
    }

    /// Makes the next fallible call fail with `message`.
    pub fn fail_next_with(&mut self, message: impl Into<String>) {
        self.fail_next = Some(EngineError::new(message));
    }

    pub fn plot_requests(&self) -> impl Iterator<Item = &PlotRequest> {
        self.calls.iter().filter_map(|call| match call {
            EngineCall::Plot(request) => Some(request),
            _ => None,
        })
    }

    pub fn config_groups(&self) -> impl Iterator<Item = &ConfigGroup> {
        self.calls.iter().filter_map(|call| match call {
            EngineCall::Config { group, .. } => Some(group),
            _ => None,
        })
    }

    #[must_use]
    pub fn last_plot_request(&self) -> Option<&PlotRequest> {
        self.plot_requests().last()
    }

    fn take_failure(&mut self) -> Result<(), EngineError> {
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl PlotEngine for NullEngine {
    fn create(config: &PlotterConfig) -> Result<Self, EngineError> {
        Ok(Self::new(config))
    }

    fn submit_plot_request(&mut self, request: &PlotRequest) -> Result<(), EngineError> {
        self.take_failure()?;
        let len = request.data_len();
        if request.buffers.iter().any(|buffer| buffer.len() != len) {
            return Err(EngineError::new(format!(
                "{} request buffers are not all the same size.",
                request.kind()
            )));
        }
        if let Some(labels) = &request.labels {
            if labels.len() != len {
                return Err(EngineError::new(format!(
                    "Size of dates: {} is different from the data size: {len}",
                    labels.len()
                )));
            }
        }
        if let Some(positions) = &request.x_positions {
            if positions.len() != len {
                return Err(EngineError::new(format!(
                    "x size: {} does not match y size: {len}",
                    positions.len()
                )));
            }
        }
        tracing::trace!(
            kind = %request.kind(),
            subplot = %request.subplot,
            linked_subplot = request.linked_subplot,
            len,
            "null engine accepted plot request"
        );
        self.calls.push(EngineCall::Plot(request.clone()));
        Ok(())
    }

    fn set_config(
        &mut self,
        subplot: SubplotKey,
        group: &ConfigGroup,
    ) -> Result<(), EngineError> {
        self.take_failure()?;
        if let ConfigGroup::BackgroundColor(color) = group {
            self.background = *color;
        }
        self.calls.push(EngineCall::Config {
            subplot,
            group: group.clone(),
        });
        Ok(())
    }

    fn apply_layout(&mut self, change: &LayoutChange) -> Result<(), EngineError> {
        self.take_failure()?;
        self.calls.push(EngineCall::Layout(change.clone()));
        Ok(())
    }

    fn start_loop(&mut self) -> Result<(), EngineError> {
        self.take_failure()?;
        self.calls.push(EngineCall::StartLoop);
        Ok(())
    }

    fn grab_frame(&mut self, subplot: SubplotKey) -> Result<FrameBuffer, EngineError> {
        self.take_failure()?;
        self.calls.push(EngineCall::GrabFrame(subplot));
        Ok(FrameBuffer::filled(self.viewport, self.background.to_rgba8()))
    }

    fn destroy(&mut self) {
        self.destroy_count += 1;
    }
}
