mod layout_controller;
mod plot_builder;
mod plot_controller;
mod plot_style;
mod plotter;
mod plotter_config;
mod settings;
mod settings_controller;
mod shared;
mod validation;

pub use plot_style::{
    BarStyle, CandlestickMode, CandlestickStyle, LineStyle, PlotPlacement, PlotStyle,
    ScatterShape, ScatterStyle, SeriesKind,
};
pub use plotter::{PlotOutcome, Plotter};
pub use plotter_config::{ColorMode, Font, MAX_ANTI_ALIASING_SAMPLES, PlotterConfig};
pub use settings::{
    AxisSettings, CameraSettings, CrosshairSettings, DrawLineSettings, FontWeight,
    HoverValueDisplayMode, HoverValueSettings, LabelSettings, LegendEntry, LegendSettings,
};
pub use settings_controller::XLimit;
pub use shared::SharedPlotter;
pub use validation::{MAX_NUM_TICKS, MAX_TICK_LABEL_DECIMAL_PLACES};
