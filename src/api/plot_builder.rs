use smallvec::SmallVec;

use crate::core::{
    AxisLabelKind, AxisMode, AxisResolution, AxisTransition, DateInput, LinkedSubplotState,
    ScatterIndexPolicy, ScatterX, SeriesBuffer, SubplotKey,
};
use crate::engine::PlotRequest;
use crate::error::{PlotError, PlotResult};

use super::{PlotStyle, ScatterStyle, SeriesKind};

/// A request that passed local validation, plus the state to commit once the
/// engine accepts it.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PendingPlot {
    pub request: PlotRequest,
    pub axis: AxisResolution,
    /// Whether the request fixes the linked subplot's data length.
    pub establishes_len: bool,
}

/// Validates one plot call against the targeted linked subplot and the x-axis
/// mode its subplot shares.
///
/// Reads state only; nothing is committed here.
pub(super) struct PlotRequestBuilder<'a> {
    subplot: SubplotKey,
    linked_subplot: usize,
    axis: &'a AxisMode,
    target: &'a LinkedSubplotState,
}

impl<'a> PlotRequestBuilder<'a> {
    pub fn new(
        subplot: SubplotKey,
        linked_subplot: usize,
        axis: &'a AxisMode,
        target: &'a LinkedSubplotState,
    ) -> Self {
        Self {
            subplot,
            linked_subplot,
            axis,
            target,
        }
    }

    /// Candlestick, line and bar requests.
    pub fn series(
        self,
        buffers: SmallVec<[SeriesBuffer; 4]>,
        dates: Option<DateInput>,
        style: PlotStyle,
    ) -> PlotResult<PendingPlot> {
        let kind = style.kind();
        let labels = dates.map(DateInput::into_labels).transpose()?;

        let data_len = buffers.first().map_or(0, SeriesBuffer::len);
        if buffers.iter().any(|buffer| buffer.len() != data_len) {
            return Err(PlotError::value(mismatched_buffers_message(kind)));
        }

        if let Some(labels) = &labels {
            if labels.len() != data_len {
                return Err(PlotError::value(format!(
                    "Size of dates: {} is different from the data size: {data_len}",
                    labels.len()
                )));
            }
        }

        if let Some(existing) = self.target.data_len {
            if existing != data_len {
                return Err(PlotError::value(format!(
                    "ySize: {data_len} does not match the number of datapoints on the plot \
                     {existing}. All plots must have the same number of data points."
                )));
            }
        }

        let axis = self.axis.resolve(labels.as_ref())?;

        Ok(PendingPlot {
            request: PlotRequest {
                subplot: self.subplot,
                linked_subplot: self.linked_subplot,
                buffers,
                labels,
                x_positions: None,
                style,
            },
            axis,
            establishes_len: true,
        })
    }

    /// Scatter overlays: resolves x to row positions without touching the axis.
    pub fn scatter(
        self,
        x: ScatterX,
        y: SeriesBuffer,
        style: ScatterStyle,
        policy: ScatterIndexPolicy,
    ) -> PlotResult<PendingPlot> {
        let Some(data_len) = self.target.data_len.filter(|_| self.target.has_data()) else {
            return Err(PlotError::value(
                "`scatter` cannot be the first plot. It must be overlaid onto another plot.",
            ));
        };

        if x.len() != y.len() {
            return Err(PlotError::value(format!(
                "Scatter x size: {} is different from the y size: {}",
                x.len(),
                y.len()
            )));
        }

        let positions = match x {
            ScatterX::Indices(indices) => {
                self.check_index_policy(policy)?;
                if let Some(index) = indices.iter().find(|index| **index >= data_len) {
                    return Err(PlotError::value(format!(
                        "x index {index} is out of range for a plot with {data_len} data points."
                    )));
                }
                indices
            }
            ScatterX::Dates(dates) => {
                let labels = dates.into_labels()?;
                self.axis.index_positions(&labels)?
            }
        };

        Ok(PendingPlot {
            request: PlotRequest {
                subplot: self.subplot,
                linked_subplot: self.linked_subplot,
                buffers: SmallVec::from_iter([y]),
                labels: None,
                x_positions: Some(positions),
                style: PlotStyle::Scatter(style),
            },
            axis: AxisResolution {
                transition: AxisTransition::Unchanged,
                next: self.axis.clone(),
            },
            establishes_len: false,
        })
    }

    fn check_index_policy(&self, policy: ScatterIndexPolicy) -> PlotResult<()> {
        let current = self.axis.label_kind();
        match (policy, current) {
            (ScatterIndexPolicy::RequireMatchingLabels, AxisLabelKind::String)
            | (ScatterIndexPolicy::RequireMatchingLabels, AxisLabelKind::Timepoint) => {
                Err(PlotError::value(format!(
                    "The x-axis data must always be string, index or chrono timepoint. \
                     Currently it is {current}, but index data was passed."
                )))
            }
            _ => Ok(()),
        }
    }
}

fn mismatched_buffers_message(kind: SeriesKind) -> String {
    match kind {
        SeriesKind::Candlestick => {
            "Candlestick open, high, low, close vectors are not all the same size.".to_owned()
        }
        other => format!("{other} vectors are not all the same size."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LineStyle, ScatterStyle};
    use crate::core::normalize;

    fn line(values: &[f32]) -> SmallVec<[SeriesBuffer; 4]> {
        SmallVec::from_iter([normalize(values).expect("buffer")])
    }

    #[test]
    fn existing_length_mismatch_names_both_sizes() {
        let mut state = LinkedSubplotState::new(1.0);
        state.data_len = Some(149);
        state.series_count = 1;
        let err = PlotRequestBuilder::new(SubplotKey::default(), 0, &AxisMode::Indexed, &state)
            .series(line(&[0.0; 100]), None, PlotStyle::Line(LineStyle::default()))
            .expect_err("length mismatch");
        let message = err.to_string();
        assert!(message.contains("100") && message.contains("149"), "{message}");
    }

    #[test]
    fn scatter_index_policy_is_enforced_on_labeled_axes() {
        let axis = AxisMode::StringLabeled(vec!["a".into(), "b".into()]);
        let mut state = LinkedSubplotState::new(1.0);
        state.data_len = Some(2);
        state.series_count = 1;
        let y = normalize([1.0_f32]).expect("y");

        let overlay = PlotRequestBuilder::new(SubplotKey::default(), 0, &axis, &state).scatter(
            ScatterX::Indices(vec![1]),
            y.clone(),
            ScatterStyle::default(),
            ScatterIndexPolicy::AllowOverlay,
        );
        assert!(overlay.is_ok());

        let strict = PlotRequestBuilder::new(SubplotKey::default(), 0, &axis, &state).scatter(
            ScatterX::Indices(vec![1]),
            y,
            ScatterStyle::default(),
            ScatterIndexPolicy::RequireMatchingLabels,
        );
        let message = strict.expect_err("strict").to_string();
        assert!(message.contains("Currently it is string, but index data"), "{message}");
    }
}
