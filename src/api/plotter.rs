use tracing::debug;

use crate::core::{AxisTransition, SubplotGrid, SubplotKey};
use crate::engine::{ConfigGroup, FrameBuffer, PlotEngine};
use crate::error::{PlotError, PlotResult};

use super::PlotterConfig;

/// Main facade consumed by host applications.
///
/// `Plotter` owns the engine instance together with the per-subplot axis and
/// length state the engine's buffers depend on. Every call validates locally,
/// forwards to the engine and commits state only after the engine accepted.
///
/// After [`Plotter::finish`] every operation fails with
/// [`PlotError::UseAfterFinish`].
pub struct Plotter<E: PlotEngine> {
    pub(super) engine: Option<E>,
    pub(super) config: PlotterConfig,
    pub(super) grid: SubplotGrid,
}

/// What a successful plot call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOutcome {
    pub subplot: SubplotKey,
    pub linked_subplot: usize,
    /// Number of points in the submitted series.
    pub data_len: usize,
    pub axis: AxisTransition,
}

impl<E: PlotEngine> Plotter<E> {
    /// Creates the engine through [`PlotEngine::create`].
    pub fn new(config: PlotterConfig) -> PlotResult<Self> {
        config.validate()?;
        let engine = E::create(&config)?;
        Ok(Self::with_validated_engine(engine, config))
    }

    /// Wraps an engine the caller already created.
    pub fn from_engine(engine: E, config: PlotterConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self::with_validated_engine(engine, config))
    }

    fn with_validated_engine(engine: E, config: PlotterConfig) -> Self {
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            color_mode = ?config.color_mode,
            "plotter created"
        );
        Self {
            engine: Some(engine),
            config,
            grid: SubplotGrid::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.is_none()
    }

    pub fn grid(&self) -> PlotResult<&SubplotGrid> {
        self.ensure_live()?;
        Ok(&self.grid)
    }

    pub fn engine(&self) -> PlotResult<&E> {
        self.engine.as_ref().ok_or(PlotError::UseAfterFinish)
    }

    pub fn engine_mut(&mut self) -> PlotResult<&mut E> {
        self.engine.as_mut().ok_or(PlotError::UseAfterFinish)
    }

    pub(super) fn ensure_live(&self) -> PlotResult<()> {
        if self.engine.is_none() {
            return Err(PlotError::UseAfterFinish);
        }
        Ok(())
    }

    /// Forwards a validated option group for the active subplot.
    pub(super) fn submit_config(&mut self, group: ConfigGroup) -> PlotResult<()> {
        let subplot = self.grid.active_key();
        let engine = self.engine_mut()?;
        engine.set_config(subplot, &group)?;
        debug!(group = group.name(), %subplot, "config forwarded");
        Ok(())
    }

    /// Runs the interactive session. Blocks until the engine's window closes.
    ///
    /// The engine tears its window down afterwards, so the figure starts again
    /// from a single empty subplot.
    pub fn start(&mut self) -> PlotResult<()> {
        self.engine_mut()?.start_loop()?;
        self.grid = SubplotGrid::default();
        debug!("plot session ended, subplot grid reset");
        Ok(())
    }

    /// Captures the pixels of one subplot. Defaults to the active subplot.
    pub fn grab_frame(
        &mut self,
        row: Option<usize>,
        col: Option<usize>,
    ) -> PlotResult<FrameBuffer> {
        self.ensure_live()?;
        let key = match (row, col) {
            (Some(row), Some(col)) => SubplotKey::new(row, col),
            (None, None) => self.grid.active_key(),
            _ => {
                return Err(PlotError::value(
                    "`row` and `col` must both be passed if one is.",
                ));
            }
        };
        if !self.grid.contains(key) {
            return Err(PlotError::value(format!(
                "Cannot grab frame of subplot at row: {}, col: {}, it does not exist.",
                key.row, key.col
            )));
        }
        let frame = self.engine_mut()?.grab_frame(key)?;
        frame.validate()?;
        Ok(frame)
    }

    /// Destroys the engine. Runs once; later calls fail with `UseAfterFinish`.
    ///
    /// Returns the destroyed engine so hosts can inspect or drop it.
    pub fn finish(&mut self) -> PlotResult<E> {
        let mut engine = self.engine.take().ok_or(PlotError::UseAfterFinish)?;
        engine.destroy();
        debug!("plotter finished");
        Ok(engine)
    }
}

impl<E: PlotEngine> Drop for Plotter<E> {
    fn drop(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.destroy();
        }
    }
}
