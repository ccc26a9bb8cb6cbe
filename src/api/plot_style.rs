use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ColorInput, DateInput, Rgba, normalize_color, normalize_required_color};
use crate::error::PlotResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Candlestick,
    Line,
    Bar,
    Scatter,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Candlestick => "candlestick",
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Scatter => "scatter",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandlestickMode {
    /// Body with capped shadows.
    Full,
    BodyOnly,
    #[default]
    NoCaps,
    /// Line through the open prices.
    LineOpen,
    /// Line through the close prices.
    LineClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlestickStyle {
    /// Close above open.
    pub up_color: Rgba,
    /// Close below open.
    pub down_color: Rgba,
    pub mode: CandlestickMode,
    pub candle_width_ratio: f64,
    pub cap_width_ratio: f64,
    pub line_mode_linewidth: f64,
    pub line_mode_miter_limit: f64,
    pub line_mode_basic_line: bool,
}

impl Default for CandlestickStyle {
    fn default() -> Self {
        Self {
            up_color: Rgba::rgba(0.0314, 0.6, 0.506, 1.0),
            down_color: Rgba::rgba(0.957, 0.204, 0.266, 1.0),
            mode: CandlestickMode::default(),
            candle_width_ratio: 0.75,
            cap_width_ratio: 0.5,
            line_mode_linewidth: 1.0,
            line_mode_miter_limit: 3.0,
            line_mode_basic_line: false,
        }
    }
}

impl CandlestickStyle {
    #[must_use]
    pub fn with_mode(mut self, mode: CandlestickMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_width_ratios(mut self, candle: f64, cap: f64) -> Self {
        self.candle_width_ratio = candle;
        self.cap_width_ratio = cap;
        self
    }

    pub fn with_colors(
        mut self,
        up: impl Into<ColorInput>,
        down: impl Into<ColorInput>,
    ) -> PlotResult<Self> {
        self.up_color = normalize_required_color(up)?;
        self.down_color = normalize_required_color(down)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// `None` lets the engine pick its theme color.
    pub color: Option<Rgba>,
    pub width: f64,
    pub miter_limit: f64,
    /// Fixed-width fast path; `width` and `miter_limit` are ignored.
    pub basic_line: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Some(Rgba::rgba(0.5, 0.5, 0.5, 1.0)),
            width: 0.5,
            miter_limit: 3.0,
            basic_line: false,
        }
    }
}

impl LineStyle {
    pub fn with_color(mut self, color: Option<ColorInput>) -> PlotResult<Self> {
        self.color = normalize_color(color)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_basic_line(mut self, basic_line: bool) -> Self {
        self.basic_line = basic_line;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub color: Option<Rgba>,
    pub width_ratio: f64,
    /// Bar baseline. The engine pads below the data minimum when unset.
    pub min_value: Option<f64>,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            color: Some(Rgba::rgba(0.03137, 0.6, 0.50588, 0.75)),
            width_ratio: 0.5,
            min_value: None,
        }
    }
}

impl BarStyle {
    pub fn with_color(mut self, color: Option<ColorInput>) -> PlotResult<Self> {
        self.color = normalize_color(color)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_width_ratio(mut self, width_ratio: f64) -> Self {
        self.width_ratio = width_ratio;
        self
    }

    #[must_use]
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterShape {
    #[default]
    Circle,
    TriangleUp,
    TriangleDown,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterStyle {
    pub shape: ScatterShape,
    pub color: Rgba,
    /// Same marker size at every zoom level when `true`.
    pub fixed_size: bool,
    pub marker_size_fixed: f64,
    pub marker_size_free: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            shape: ScatterShape::default(),
            color: Rgba::rgba(0.12, 0.46, 0.70, 1.0),
            fixed_size: true,
            marker_size_fixed: 0.025,
            marker_size_free: 10.0,
        }
    }
}

impl ScatterStyle {
    #[must_use]
    pub fn with_shape(mut self, shape: ScatterShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_color(mut self, color: impl Into<ColorInput>) -> PlotResult<Self> {
        self.color = normalize_required_color(color)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_fixed_size(mut self, fixed_size: bool) -> Self {
        self.fixed_size = fixed_size;
        self
    }
}

/// Kind-specific style of a plot request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlotStyle {
    Candlestick(CandlestickStyle),
    Line(LineStyle),
    Bar(BarStyle),
    Scatter(ScatterStyle),
}

impl PlotStyle {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Candlestick(_) => SeriesKind::Candlestick,
            Self::Line(_) => SeriesKind::Line,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Scatter(_) => SeriesKind::Scatter,
        }
    }
}

/// Where a date-bearing plot lands and which x labels it carries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotPlacement {
    pub dates: Option<DateInput>,
    /// `None` targets the most recently added linked subplot.
    pub linked_subplot: Option<usize>,
}

impl PlotPlacement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dates(mut self, dates: impl Into<DateInput>) -> Self {
        self.dates = Some(dates.into());
        self
    }

    #[must_use]
    pub fn on_linked_subplot(mut self, index: usize) -> Self {
        self.linked_subplot = Some(index);
        self
    }
}
