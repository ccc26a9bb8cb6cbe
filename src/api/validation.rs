use crate::core::Rgba;
use crate::error::{PlotError, PlotResult};

use super::{
    AxisSettings, BarStyle, CameraSettings, CandlestickStyle, CrosshairSettings,
    DrawLineSettings, HoverValueSettings, LabelSettings, LegendEntry, LegendSettings, LineStyle,
    ScatterStyle,
};

pub const MAX_NUM_TICKS: u32 = 50;
pub const MAX_TICK_LABEL_DECIMAL_PLACES: u32 = 12;

fn validate_positive(fields: &[(&str, f64)]) -> PlotResult<()> {
    for (name, value) in fields {
        if !value.is_finite() || *value <= 0.0 {
            return Err(PlotError::value(format!(
                "`{name}` must be finite and > 0, got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_non_negative(fields: &[(&str, f64)]) -> PlotResult<()> {
    for (name, value) in fields {
        if !value.is_finite() || *value < 0.0 {
            return Err(PlotError::value(format!(
                "`{name}` must be finite and >= 0, got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_ratios(fields: &[(&str, f64)]) -> PlotResult<()> {
    for (name, value) in fields {
        if !value.is_finite() || *value <= 0.0 || *value > 1.0 {
            return Err(PlotError::value(format!(
                "`{name}` must be in (0, 1], got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_font_size(font_size: u32) -> PlotResult<()> {
    if font_size == 0 {
        return Err(PlotError::value("`font_size` must be greater than 0"));
    }
    Ok(())
}

fn validate_colors<'a>(colors: impl IntoIterator<Item = &'a Option<Rgba>>) -> PlotResult<()> {
    for color in colors.into_iter().flatten() {
        color.validate()?;
    }
    Ok(())
}

pub(super) fn validate_text(text: &str) -> PlotResult<()> {
    if !text.is_ascii() {
        return Err(PlotError::value(
            "Only basic ASCII characters (0–127) are supported.",
        ));
    }
    Ok(())
}

pub(super) fn validate_candlestick_style(style: &CandlestickStyle) -> PlotResult<()> {
    style.up_color.validate()?;
    style.down_color.validate()?;
    validate_ratios(&[
        ("candle_width_ratio", style.candle_width_ratio),
        ("cap_width_ratio", style.cap_width_ratio),
    ])?;
    validate_positive(&[
        ("line_mode_linewidth", style.line_mode_linewidth),
        ("line_mode_miter_limit", style.line_mode_miter_limit),
    ])
}

pub(super) fn validate_line_style(style: &LineStyle) -> PlotResult<()> {
    validate_colors([&style.color])?;
    validate_positive(&[("width", style.width), ("miter_limit", style.miter_limit)])
}

pub(super) fn validate_bar_style(style: &BarStyle) -> PlotResult<()> {
    validate_colors([&style.color])?;
    validate_ratios(&[("width_ratio", style.width_ratio)])?;
    if let Some(min_value) = style.min_value {
        if !min_value.is_finite() {
            return Err(PlotError::value("`min_value` must be finite"));
        }
    }
    Ok(())
}

pub(super) fn validate_scatter_style(style: &ScatterStyle) -> PlotResult<()> {
    style.color.validate()?;
    validate_positive(&[
        ("marker_size_fixed", style.marker_size_fixed),
        ("marker_size_free", style.marker_size_free),
    ])
}

pub(super) fn validate_camera_settings(settings: &CameraSettings) -> PlotResult<()> {
    validate_positive(&[
        ("key_zoom_speed", settings.key_zoom_speed),
        ("mouse_zoom_speed", settings.mouse_zoom_speed),
        ("key_pan_speed", settings.key_pan_speed),
        ("mouse_pan_speed", settings.mouse_pan_speed),
        ("wheel_speed", settings.wheel_speed),
    ])
}

pub(super) fn validate_crosshair_settings(settings: &CrosshairSettings) -> PlotResult<()> {
    validate_font_size(settings.font_size)?;
    validate_positive(&[("linewidth", settings.linewidth)])?;
    validate_colors([
        &settings.line_color,
        &settings.background_color,
        &settings.font_color,
    ])
}

pub(super) fn validate_hover_value_settings(settings: &HoverValueSettings) -> PlotResult<()> {
    validate_font_size(settings.font_size)?;
    validate_colors([
        &settings.font_color,
        &settings.background_color,
        &settings.border_color,
    ])
}

pub(super) fn validate_draw_line_settings(settings: &DrawLineSettings) -> PlotResult<()> {
    validate_positive(&[("linewidth", settings.linewidth)])?;
    validate_colors([&settings.color])
}

pub(super) fn validate_axis_settings(settings: &AxisSettings) -> PlotResult<()> {
    if settings.min_num_ticks < 1 {
        return Err(PlotError::value("min_num_ticks must be bigger than 0."));
    }
    if settings.max_num_ticks > MAX_NUM_TICKS {
        return Err(PlotError::value(format!(
            "max_num_ticks must be at most {MAX_NUM_TICKS}."
        )));
    }
    for (name, value) in [
        ("min_num_ticks", settings.min_num_ticks),
        ("max_num_ticks", settings.max_num_ticks),
        ("init_num_ticks", settings.init_num_ticks),
    ] {
        if value % 2 != 0 {
            return Err(PlotError::value(format!(
                "{name} must be a multiple of 2, got {value}."
            )));
        }
    }
    if settings.min_num_ticks > settings.max_num_ticks {
        return Err(PlotError::value(
            "min_num_ticks must be smaller or equal to max_num_ticks.",
        ));
    }
    if settings.init_num_ticks < settings.min_num_ticks
        || settings.init_num_ticks > settings.max_num_ticks
    {
        return Err(PlotError::value(
            "init_num_ticks must be between min_num_ticks and max_num_ticks.",
        ));
    }
    if let Some(places) = settings.tick_label_decimal_places {
        if places > MAX_TICK_LABEL_DECIMAL_PLACES {
            return Err(PlotError::value(format!(
                "tick_label_decimal_places must be <= {MAX_TICK_LABEL_DECIMAL_PLACES}."
            )));
        }
    }
    validate_positive(&[
        ("tick_linewidth", settings.tick_linewidth),
        ("tick_size", settings.tick_size),
        ("gridline_width", settings.gridline_width),
        ("axis_linewidth", settings.axis_linewidth),
    ])?;
    validate_colors([
        &settings.gridline_color,
        &settings.axis_color,
        &settings.font_color,
    ])
}

pub(super) fn validate_legend(
    entries: &[LegendEntry],
    settings: &LegendSettings,
) -> PlotResult<()> {
    for entry in entries {
        validate_text(&entry.name)?;
        validate_colors([&entry.left_color, &entry.right_color])?;
    }
    validate_positive(&[("legend_size_scaler", settings.legend_size_scaler)])?;
    validate_non_negative(&[
        ("x_box_pad", settings.x_box_pad),
        ("y_box_pad", settings.y_box_pad),
        ("line_width", settings.line_width),
        ("line_height", settings.line_height),
        ("x_line_pad_left", settings.x_line_pad_left),
        ("x_line_pad_right", settings.x_line_pad_right),
        ("x_text_pad_right", settings.x_text_pad_right),
        ("y_inter_item_pad", settings.y_inter_item_pad),
        ("y_item_pad", settings.y_item_pad),
    ])?;
    validate_font_size(settings.font_size)?;
    settings.box_color.validate()?;
    validate_colors([&settings.font_color])
}

pub(super) fn validate_label(text: &str, settings: &LabelSettings) -> PlotResult<()> {
    validate_text(text)?;
    validate_font_size(settings.font_size)?;
    validate_colors([&settings.color])
}

pub(super) fn validate_y_limits(min: Option<f64>, max: Option<f64>) -> PlotResult<()> {
    for (name, value) in [("min", min), ("max", max)] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(PlotError::value(format!(
                    "y-limit `{name}` must be finite, got {value}"
                )));
            }
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min >= max {
            return Err(PlotError::value(format!(
                "y-limit min ({min}) must be smaller than max ({max})"
            )));
        }
    }
    Ok(())
}
