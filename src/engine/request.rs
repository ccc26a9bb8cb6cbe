use smallvec::SmallVec;

use crate::api::{PlotStyle, SeriesKind};
use crate::core::{AxisLabels, SeriesBuffer, SubplotKey};

/// A validated plot call, ready for the engine.
///
/// Candlesticks carry four buffers (open, high, low, close); every other kind
/// carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub subplot: SubplotKey,
    pub linked_subplot: usize,
    pub buffers: SmallVec<[SeriesBuffer; 4]>,
    /// Label set to install on the subplot's shared x-axis, if any.
    pub labels: Option<AxisLabels>,
    /// Scatter only: row index of every point.
    pub x_positions: Option<Vec<usize>>,
    pub style: PlotStyle,
}

impl PlotRequest {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.style.kind()
    }

    /// Length shared by all buffers of the request.
    #[must_use]
    pub fn data_len(&self) -> usize {
        self.buffers.first().map_or(0, SeriesBuffer::len)
    }
}
