use chrono::{DateTime, Utc};

use crate::core::{AxisLabels, ColorInput, normalize_required_color};
use crate::engine::{ConfigGroup, LabelTarget, PlotEngine};
use crate::error::{PlotError, PlotResult};

use super::validation::{
    validate_axis_settings, validate_camera_settings, validate_crosshair_settings,
    validate_draw_line_settings, validate_hover_value_settings, validate_label, validate_legend,
    validate_y_limits,
};
use super::{
    AxisSettings, CameraSettings, CrosshairSettings, DrawLineSettings, HoverValueSettings,
    LabelSettings, LegendEntry, LegendSettings, Plotter,
};

/// One end of an x-axis range, in the representation of the committed axis.
#[derive(Debug, Clone, PartialEq)]
pub enum XLimit {
    Index(usize),
    Label(String),
    Timestamp(DateTime<Utc>),
}

impl From<usize> for XLimit {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for XLimit {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<DateTime<Utc>> for XLimit {
    fn from(time: DateTime<Utc>) -> Self {
        Self::Timestamp(time)
    }
}

impl<E: PlotEngine> Plotter<E> {
    pub fn set_background_color(&mut self, color: impl Into<ColorInput>) -> PlotResult<()> {
        self.ensure_live()?;
        let color = normalize_required_color(color)?;
        self.submit_config(ConfigGroup::BackgroundColor(color))
    }

    /// `linked_subplot: None` applies to every linked subplot.
    pub fn set_camera_settings(
        &mut self,
        settings: CameraSettings,
        linked_subplot: Option<usize>,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        validate_camera_settings(&settings)?;
        let linked = self.grid.active()?.resolve_targets(linked_subplot)?;
        self.submit_config(ConfigGroup::Camera { linked, settings })
    }

    pub fn set_crosshair_settings(&mut self, settings: CrosshairSettings) -> PlotResult<()> {
        self.ensure_live()?;
        validate_crosshair_settings(&settings)?;
        self.submit_config(ConfigGroup::Crosshair(settings))
    }

    pub fn set_hover_value_settings(&mut self, settings: HoverValueSettings) -> PlotResult<()> {
        self.ensure_live()?;
        validate_hover_value_settings(&settings)?;
        self.submit_config(ConfigGroup::HoverValue(settings))
    }

    pub fn set_draw_line_settings(&mut self, settings: DrawLineSettings) -> PlotResult<()> {
        self.ensure_live()?;
        validate_draw_line_settings(&settings)?;
        self.submit_config(ConfigGroup::DrawLine(settings))
    }

    /// `linked_subplot: None` applies to every linked subplot.
    pub fn set_x_axis_settings(
        &mut self,
        settings: AxisSettings,
        linked_subplot: Option<usize>,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        validate_axis_settings(&settings)?;
        let linked = self.grid.active()?.resolve_targets(linked_subplot)?;
        self.submit_config(ConfigGroup::XAxis { linked, settings })
    }

    /// `linked_subplot: None` applies to every linked subplot.
    pub fn set_y_axis_settings(
        &mut self,
        settings: AxisSettings,
        linked_subplot: Option<usize>,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        validate_axis_settings(&settings)?;
        let linked = self.grid.active()?.resolve_targets(linked_subplot)?;
        self.submit_config(ConfigGroup::YAxis { linked, settings })
    }

    /// Sets one legend item per plot on the linked subplot, in plotting order.
    ///
    /// `linked_subplot: None` targets the most recently added linked subplot.
    pub fn set_legend<I, L>(
        &mut self,
        labels: I,
        linked_subplot: Option<usize>,
        settings: LegendSettings,
    ) -> PlotResult<()>
    where
        I: IntoIterator<Item = L>,
        L: Into<LegendEntry>,
    {
        self.ensure_live()?;
        let entries: Vec<LegendEntry> = labels.into_iter().map(Into::into).collect();
        validate_legend(&entries, &settings)?;

        let subplot = self.grid.active()?;
        let linked = subplot.resolve_index(linked_subplot)?;
        let plot_count = subplot.linked(linked)?.series_count;
        if entries.len() != plot_count {
            return Err(PlotError::value(format!(
                "The number of labels in the legend being set must equal the number of plots. \
                 There are {} labels, but {plot_count} plots.",
                entries.len()
            )));
        }
        self.submit_config(ConfigGroup::Legend {
            linked,
            entries,
            settings,
        })
    }

    pub fn set_x_label(&mut self, text: &str, settings: LabelSettings) -> PlotResult<()> {
        self.set_label(LabelTarget::XAxis, text, settings)
    }

    pub fn set_y_label(&mut self, text: &str, settings: LabelSettings) -> PlotResult<()> {
        self.set_label(LabelTarget::YAxis, text, settings)
    }

    /// Title of the active subplot. See [`LabelSettings::title`] for the usual defaults.
    pub fn set_title(&mut self, text: &str, settings: LabelSettings) -> PlotResult<()> {
        self.set_label(LabelTarget::Title, text, settings)
    }

    fn set_label(
        &mut self,
        target: LabelTarget,
        text: &str,
        settings: LabelSettings,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        validate_label(text, &settings)?;
        self.submit_config(ConfigGroup::Label {
            target,
            text: text.to_owned(),
            settings,
        })
    }

    /// Pins the y-axis to the min/max of the data in view.
    pub fn pin_y_axis(&mut self, on: bool, linked_subplot: Option<usize>) -> PlotResult<()> {
        self.ensure_live()?;
        let linked = self.grid.active()?.resolve_targets(linked_subplot)?;
        self.submit_config(ConfigGroup::PinYAxis { linked, on })
    }

    /// Zooms and pans the y-axes of all linked subplots together.
    ///
    /// Linking unpins every y-axis.
    pub fn link_y_axes(&mut self, on: bool) -> PlotResult<()> {
        self.ensure_live()?;
        let linked = self.grid.active()?.resolve_targets(None)?;
        self.submit_config(ConfigGroup::LinkYAxes(on))?;
        self.submit_config(ConfigGroup::PinYAxis { linked, on: false })
    }

    /// Only takes effect while the y-axis is unpinned.
    pub fn set_y_limits(
        &mut self,
        min: Option<f64>,
        max: Option<f64>,
        linked_subplot: Option<usize>,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        validate_y_limits(min, max)?;
        let linked = self.grid.active()?.resolve_targets(linked_subplot)?;
        self.submit_config(ConfigGroup::YLimits { linked, min, max })
    }

    /// Limits the x-axis view. Unset ends fall back to the edge of the data.
    ///
    /// Labels and timestamps are looked up in the axis of the first linked
    /// subplot and forwarded as row indices.
    pub fn set_x_limits(&mut self, min: Option<XLimit>, max: Option<XLimit>) -> PlotResult<()> {
        self.ensure_live()?;
        let min = min.map(|limit| self.resolve_x_limit(limit)).transpose()?;
        let max = max.map(|limit| self.resolve_x_limit(limit)).transpose()?;
        if let (Some(min), Some(max)) = (min, max) {
            if min >= max {
                return Err(PlotError::value(format!(
                    "x-limit min (index {min}) must be smaller than max (index {max})"
                )));
            }
        }
        self.submit_config(ConfigGroup::XLimits { min, max })
    }

    fn resolve_x_limit(&self, limit: XLimit) -> PlotResult<usize> {
        let subplot = self.grid.active()?;
        let first = subplot.linked(0)?;
        let index = match limit {
            XLimit::Index(index) => index,
            XLimit::Label(label) => single_position(
                subplot.axis.index_positions(&AxisLabels::Strings(vec![label]))?,
            )?,
            XLimit::Timestamp(time) => single_position(
                subplot.axis.index_positions(&AxisLabels::Timestamps(vec![time]))?,
            )?,
        };
        if let Some(data_len) = first.data_len {
            if index >= data_len {
                return Err(PlotError::value(format!(
                    "x-limit index {index} is out of range for a plot with {data_len} data points."
                )));
            }
        }
        Ok(index)
    }
}

fn single_position(positions: Vec<usize>) -> PlotResult<usize> {
    positions
        .first()
        .copied()
        .ok_or_else(|| PlotError::value("x-limit could not be resolved to an index"))
}
