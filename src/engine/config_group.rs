use crate::api::{
    AxisSettings, CameraSettings, CrosshairSettings, DrawLineSettings, HoverValueSettings,
    LabelSettings, LegendEntry, LegendSettings,
};
use crate::core::{Rgba, SubplotKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTarget {
    XAxis,
    YAxis,
    Title,
}

/// One validated option group, forwarded verbatim to the engine.
///
/// `linked` lists the linked subplots the group applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigGroup {
    BackgroundColor(Rgba),
    Camera {
        linked: Vec<usize>,
        settings: CameraSettings,
    },
    Crosshair(CrosshairSettings),
    HoverValue(HoverValueSettings),
    DrawLine(DrawLineSettings),
    XAxis {
        linked: Vec<usize>,
        settings: AxisSettings,
    },
    YAxis {
        linked: Vec<usize>,
        settings: AxisSettings,
    },
    Legend {
        linked: usize,
        entries: Vec<LegendEntry>,
        settings: LegendSettings,
    },
    Label {
        target: LabelTarget,
        text: String,
        settings: LabelSettings,
    },
    PinYAxis {
        linked: Vec<usize>,
        on: bool,
    },
    LinkYAxes(bool),
    YLimits {
        linked: Vec<usize>,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Row-index bounds; labeled limits are resolved before forwarding.
    XLimits {
        min: Option<usize>,
        max: Option<usize>,
    },
}

impl ConfigGroup {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BackgroundColor(_) => "background_color",
            Self::Camera { .. } => "camera",
            Self::Crosshair(_) => "crosshair",
            Self::HoverValue(_) => "hover_value",
            Self::DrawLine(_) => "draw_line",
            Self::XAxis { .. } => "x_axis",
            Self::YAxis { .. } => "y_axis",
            Self::Legend { .. } => "legend",
            Self::Label { .. } => "label",
            Self::PinYAxis { .. } => "pin_y_axis",
            Self::LinkYAxes(_) => "link_y_axes",
            Self::YLimits { .. } => "y_limits",
            Self::XLimits { .. } => "x_limits",
        }
    }
}

/// Structural change to the figure grid.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutChange {
    AddSubplot {
        key: SubplotKey,
        row_span: usize,
        col_span: usize,
    },
    SetActiveSubplot(SubplotKey),
    AddLinkedSubplot {
        subplot: SubplotKey,
        height_as_proportion: f64,
    },
    ResizeLinkedSubplots {
        subplot: SubplotKey,
        heights: Vec<f64>,
    },
}
