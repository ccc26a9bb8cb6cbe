use serde::{Deserialize, Serialize};

use crate::core::{ColorInput, Rgba, normalize_required_color};
use crate::error::PlotResult;

use super::Font;

/// Pan and zoom speeds of the interactive camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub key_zoom_speed: f64,
    pub mouse_zoom_speed: f64,
    pub key_pan_speed: f64,
    pub mouse_pan_speed: f64,
    pub wheel_speed: f64,
    /// Locks zoom and pan to the most recent x position.
    pub lock_most_recent_date: bool,
    pub fix_zoom_at_edge: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            key_zoom_speed: 2.5,
            mouse_zoom_speed: 0.004,
            key_pan_speed: 0.35,
            mouse_pan_speed: 0.70,
            wheel_speed: 0.002,
            lock_most_recent_date: false,
            fix_zoom_at_edge: false,
        }
    }
}

impl CameraSettings {
    #[must_use]
    pub fn with_zoom_speeds(mut self, key: f64, mouse: f64, wheel: f64) -> Self {
        self.key_zoom_speed = key;
        self.mouse_zoom_speed = mouse;
        self.wheel_speed = wheel;
        self
    }

    #[must_use]
    pub fn with_pan_speeds(mut self, key: f64, mouse: f64) -> Self {
        self.key_pan_speed = key;
        self.mouse_pan_speed = mouse;
        self
    }

    #[must_use]
    pub fn with_lock_most_recent_date(mut self, on: bool) -> Self {
        self.lock_most_recent_date = on;
        self
    }
}

/// Crosshair that follows the mouse. Unset colors follow the color mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairSettings {
    pub on: bool,
    pub font: Font,
    pub font_size: u32,
    pub linewidth: f64,
    pub line_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub font_color: Option<Rgba>,
}

impl Default for CrosshairSettings {
    fn default() -> Self {
        Self {
            on: true,
            font: Font::Arial,
            font_size: 10,
            linewidth: 1.0,
            line_color: None,
            background_color: None,
            font_color: None,
        }
    }
}

impl CrosshairSettings {
    #[must_use]
    pub fn with_on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn with_line_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.line_color = Some(normalize_required_color(color)?);
        Ok(self)
    }

    pub fn with_background_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.background_color = Some(normalize_required_color(color)?);
        Ok(self)
    }

    pub fn with_font_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.font_color = Some(normalize_required_color(color)?);
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverValueDisplayMode {
    #[default]
    AlwaysShow,
    OnlyUnderMouse,
    Off,
}

/// Pop-up value label shown on hover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverValueSettings {
    pub display_mode: HoverValueDisplayMode,
    pub font: Font,
    pub font_size: u32,
    pub font_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
}

impl Default for HoverValueSettings {
    fn default() -> Self {
        Self {
            display_mode: HoverValueDisplayMode::default(),
            font: Font::Arial,
            font_size: 10,
            font_color: None,
            background_color: None,
            border_color: None,
        }
    }
}

impl HoverValueSettings {
    #[must_use]
    pub fn with_display_mode(mut self, display_mode: HoverValueDisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn with_border_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.border_color = Some(normalize_required_color(color)?);
        Ok(self)
    }
}

/// Lines the user draws on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawLineSettings {
    pub linewidth: f64,
    pub color: Option<Rgba>,
}

impl Default for DrawLineSettings {
    fn default() -> Self {
        Self {
            linewidth: 0.25,
            color: None,
        }
    }
}

impl DrawLineSettings {
    pub fn with_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.color = Some(normalize_required_color(color)?);
        Ok(self)
    }
}

/// Tick and line options for one axis.
///
/// x and y axes share the type but not the defaults, see
/// [`AxisSettings::x_axis`] and [`AxisSettings::y_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSettings {
    pub min_num_ticks: u32,
    pub max_num_ticks: u32,
    pub init_num_ticks: u32,
    pub show_ticks: bool,
    pub tick_linewidth: f64,
    pub tick_size: f64,
    pub show_gridline: bool,
    pub gridline_width: f64,
    pub axis_linewidth: f64,
    /// y-axis only.
    pub tick_label_decimal_places: Option<u32>,
    pub gridline_color: Option<Rgba>,
    pub axis_color: Option<Rgba>,
    pub font_color: Option<Rgba>,
}

impl AxisSettings {
    #[must_use]
    pub fn x_axis() -> Self {
        Self {
            min_num_ticks: 6,
            max_num_ticks: 12,
            init_num_ticks: 8,
            show_ticks: true,
            tick_linewidth: 1.0,
            tick_size: 0.025,
            show_gridline: true,
            gridline_width: 0.4,
            axis_linewidth: 1.0,
            tick_label_decimal_places: None,
            gridline_color: None,
            axis_color: None,
            font_color: None,
        }
    }

    #[must_use]
    pub fn y_axis() -> Self {
        Self {
            init_num_ticks: 12,
            show_ticks: false,
            tick_label_decimal_places: Some(2),
            ..Self::x_axis()
        }
    }

    #[must_use]
    pub fn with_tick_counts(mut self, min: u32, init: u32, max: u32) -> Self {
        self.min_num_ticks = min;
        self.init_num_ticks = init;
        self.max_num_ticks = max;
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, places: Option<u32>) -> Self {
        self.tick_label_decimal_places = places;
        self
    }

    pub fn with_gridline_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.gridline_color = Some(normalize_required_color(color)?);
        Ok(self)
    }

    pub fn with_axis_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.axis_color = Some(normalize_required_color(color)?);
        Ok(self)
    }

    pub fn with_font_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.font_color = Some(normalize_required_color(color)?);
        Ok(self)
    }
}

/// Layout of the legend box pinned to the top-right of a linked subplot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendSettings {
    pub legend_size_scaler: f64,
    pub x_box_pad: f64,
    pub y_box_pad: f64,
    pub line_width: f64,
    pub line_height: f64,
    pub x_line_pad_left: f64,
    pub x_line_pad_right: f64,
    pub x_text_pad_right: f64,
    pub y_inter_item_pad: f64,
    pub y_item_pad: f64,
    pub font: Font,
    pub font_size: u32,
    pub font_color: Option<Rgba>,
    pub box_color: Rgba,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self {
            legend_size_scaler: 1.0,
            x_box_pad: 10.0,
            y_box_pad: 2.0,
            line_width: 35.0,
            line_height: 7.5,
            x_line_pad_left: 5.0,
            x_line_pad_right: 5.0,
            x_text_pad_right: 2.0,
            y_inter_item_pad: 5.0,
            y_item_pad: 2.0,
            font: Font::Arial,
            font_size: 15,
            font_color: None,
            // invisible
            box_color: Rgba::rgba(1.0, 1.0, 1.0, 0.0),
        }
    }
}

impl LegendSettings {
    #[must_use]
    pub fn with_size_scaler(mut self, scaler: f64) -> Self {
        self.legend_size_scaler = scaler;
        self
    }

    pub fn with_box_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.box_color = normalize_required_color(color)?;
        Ok(self)
    }
}

/// One legend item. Colors left unset are taken from the matching plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub left_color: Option<Rgba>,
    pub right_color: Option<Rgba>,
}

impl LegendEntry {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left_color: None,
            right_color: None,
        }
    }

    pub fn with_color(self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        let color = normalize_required_color(color)?;
        Ok(Self {
            left_color: Some(color),
            right_color: Some(color),
            ..self
        })
    }

    /// Legend bar drawn as a left-to-right gradient.
    pub fn with_gradient(
        self,
        left: impl Into<ColorInput>,
        right: impl Into<ColorInput>,
    ) -> PlotResult<Self> {
        Ok(Self {
            left_color: Some(normalize_required_color(left)?),
            right_color: Some(normalize_required_color(right)?),
            ..self
        })
    }
}

impl From<&str> for LegendEntry {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for LegendEntry {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    Normal,
    Regular,
    Medium,
    DemiBold,
    Bold,
    ExtraBold,
    Black,
}

/// Text options for axis labels and the subplot title.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelSettings {
    pub font: Font,
    pub weight: FontWeight,
    pub font_size: u32,
    pub color: Option<Rgba>,
}

impl LabelSettings {
    #[must_use]
    pub fn axis_label() -> Self {
        Self {
            font: Font::Arial,
            weight: FontWeight::Bold,
            font_size: 12,
            color: None,
        }
    }

    #[must_use]
    pub fn title() -> Self {
        Self {
            weight: FontWeight::ExtraBold,
            ..Self::axis_label()
        }
    }

    #[must_use]
    pub fn with_font(mut self, font: Font, weight: FontWeight, font_size: u32) -> Self {
        self.font = font;
        self.weight = weight;
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.color = Some(normalize_required_color(color)?);
        Ok(self)
    }
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self::axis_label()
    }
}
