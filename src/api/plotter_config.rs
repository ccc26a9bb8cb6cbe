use serde::{Deserialize, Serialize};

use crate::core::{Rgba, ScatterIndexPolicy, Viewport};
use crate::error::{PlotError, PlotResult};

pub const MAX_ANTI_ALIASING_SAMPLES: u32 = 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Figure background used until `set_background_color` is called.
    #[must_use]
    pub const fn default_background(self) -> Rgba {
        match self {
            Self::Light => Rgba::rgba(0.9999, 0.9999, 0.9999, 1.0),
            Self::Dark => Rgba::rgba(0.122, 0.122, 0.122, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    #[default]
    Arial,
    Consola,
}

/// Figure-wide options passed to the engine when it is created.
///
/// Serializable so hosts can persist a figure setup next to their data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Zero disables anti-aliasing.
    #[serde(default)]
    pub anti_aliasing_samples: u32,
    #[serde(default)]
    pub axis_tick_label_font: Font,
    #[serde(default = "default_axis_tick_label_font_size")]
    pub axis_tick_label_font_size: u32,
    /// y-axis on the right of the plot when `true`.
    #[serde(default = "default_axis_right")]
    pub axis_right: bool,
    #[serde(default = "default_width_margin_size")]
    pub width_margin_size: u32,
    #[serde(default = "default_height_margin_size")]
    pub height_margin_size: u32,
    #[serde(default)]
    pub scatter_index_policy: ScatterIndexPolicy,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl PlotterConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            color_mode: ColorMode::default(),
            anti_aliasing_samples: 0,
            axis_tick_label_font: Font::default(),
            axis_tick_label_font_size: default_axis_tick_label_font_size(),
            axis_right: default_axis_right(),
            width_margin_size: default_width_margin_size(),
            height_margin_size: default_height_margin_size(),
            scatter_index_policy: ScatterIndexPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    #[must_use]
    pub fn with_anti_aliasing_samples(mut self, samples: u32) -> Self {
        self.anti_aliasing_samples = samples;
        self
    }

    #[must_use]
    pub fn with_axis_tick_label_font(mut self, font: Font, font_size: u32) -> Self {
        self.axis_tick_label_font = font;
        self.axis_tick_label_font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_axis_right(mut self, axis_right: bool) -> Self {
        self.axis_right = axis_right;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, width_margin_size: u32, height_margin_size: u32) -> Self {
        self.width_margin_size = width_margin_size;
        self.height_margin_size = height_margin_size;
        self
    }

    #[must_use]
    pub fn with_scatter_index_policy(mut self, policy: ScatterIndexPolicy) -> Self {
        self.scatter_index_policy = policy;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.anti_aliasing_samples > MAX_ANTI_ALIASING_SAMPLES {
            return Err(PlotError::value(format!(
                "anti_aliasing_samples must be <= {MAX_ANTI_ALIASING_SAMPLES}, got {}",
                self.anti_aliasing_samples
            )));
        }
        if self.axis_tick_label_font_size == 0 {
            return Err(PlotError::value(
                "axis_tick_label_font_size must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::value(format!("failed to serialize plotter config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::value(format!("failed to parse plotter config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(800, 600)
}

fn default_axis_tick_label_font_size() -> u32 {
    12
}

fn default_axis_right() -> bool {
    true
}

fn default_width_margin_size() -> u32 {
    50
}

fn default_height_margin_size() -> u32 {
    25
}
