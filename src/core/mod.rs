pub mod axis;
pub mod color;
pub mod ohlc;
pub mod series_buffer;
pub mod subplot;
pub mod table;
pub mod types;

pub use axis::{
    AxisLabelKind, AxisLabels, AxisMode, AxisResolution, AxisTransition, DateInput,
    ScatterIndexPolicy, ScatterX,
};
pub use color::{ColorInput, Rgba, normalize_color, normalize_required_color};
pub use ohlc::OhlcColumns;
pub use series_buffer::{ArrayInput, SeriesBuffer, normalize};
pub use subplot::{LinkedSubplotRegion, LinkedSubplotState, SubplotGrid, SubplotState};
pub use table::{Column, Table};
pub use types::{SubplotKey, Viewport};
