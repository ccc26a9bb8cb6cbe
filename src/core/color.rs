use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::series_buffer::json_type_name;
use crate::error::{PlotError, PlotResult};

const COLOR_LENGTH_MESSAGE: &str = "Color must be an array of length 1-4 (RGBA)";
const COLOR_RANGE_MESSAGE: &str = "Color RGBA entries must be a value between 0 and 1.";

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    #[must_use]
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Channel values scaled to 8-bit, in RGBA order.
    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        self.to_array()
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn validate(self) -> PlotResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(PlotError::value(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Caller-supplied color before canonicalization.
///
/// A scalar is treated as the red channel alone; component lists may hold one
/// to four entries.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Scalar(f64),
    Components(SmallVec<[f64; 4]>),
}

impl From<f64> for ColorInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<f32> for ColorInput {
    fn from(value: f32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<Rgba> for ColorInput {
    fn from(color: Rgba) -> Self {
        Self::Components(color.to_array().iter().copied().map(f64::from).collect())
    }
}

impl<const N: usize> From<[f32; N]> for ColorInput {
    fn from(components: [f32; N]) -> Self {
        Self::Components(components.iter().copied().map(f64::from).collect())
    }
}

impl<const N: usize> From<[f64; N]> for ColorInput {
    fn from(components: [f64; N]) -> Self {
        Self::Components(components.iter().copied().collect())
    }
}

impl From<&[f32]> for ColorInput {
    fn from(components: &[f32]) -> Self {
        Self::Components(components.iter().copied().map(f64::from).collect())
    }
}

impl From<&[f64]> for ColorInput {
    fn from(components: &[f64]) -> Self {
        Self::Components(components.iter().copied().collect())
    }
}

impl From<Vec<f32>> for ColorInput {
    fn from(components: Vec<f32>) -> Self {
        components.as_slice().into()
    }
}

impl From<Vec<f64>> for ColorInput {
    fn from(components: Vec<f64>) -> Self {
        components.as_slice().into()
    }
}

impl TryFrom<&Value> for ColorInput {
    type Error = PlotError;

    fn try_from(value: &Value) -> PlotResult<Self> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Self::Scalar)
                .ok_or_else(|| PlotError::value(COLOR_RANGE_MESSAGE)),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64().ok_or_else(|| {
                        PlotError::value(format!(
                            "Color entries must be numeric, got {}",
                            json_type_name(item)
                        ))
                    })
                })
                .collect::<PlotResult<SmallVec<[f64; 4]>>>()
                .map(Self::Components),
            other => Err(PlotError::value(format!(
                "Color must be numeric or an array of numbers, got {}",
                json_type_name(other)
            ))),
        }
    }
}

/// Canonicalizes an optional color.
///
/// `None` passes through so the engine can apply its theme default.
pub fn normalize_color(color: Option<ColorInput>) -> PlotResult<Option<Rgba>> {
    color.map(canonicalize).transpose()
}

/// Canonicalizes a color that has no theme default.
pub fn normalize_required_color(color: impl Into<ColorInput>) -> PlotResult<Rgba> {
    canonicalize(color.into())
}

fn canonicalize(color: ColorInput) -> PlotResult<Rgba> {
    let components: SmallVec<[f64; 4]> = match color {
        ColorInput::Scalar(value) => SmallVec::from_slice(&[value]),
        ColorInput::Components(components) => components,
    };

    if components.is_empty() || components.len() > 4 {
        return Err(PlotError::value(COLOR_LENGTH_MESSAGE));
    }
    if components
        .iter()
        .any(|value| !value.is_finite() || !(0.0..=1.0).contains(value))
    {
        return Err(PlotError::value(COLOR_RANGE_MESSAGE));
    }

    let mut channels = [0.0_f32, 0.0, 0.0, 1.0];
    for (slot, value) in channels.iter_mut().zip(components.iter()) {
        *slot = *value as f32;
    }
    Ok(Rgba::rgba(channels[0], channels[1], channels[2], channels[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fills_red_only() {
        let color = normalize_required_color(0.4_f32).expect("scalar");
        assert_eq!(color, Rgba::rgba(0.4, 0.0, 0.0, 1.0));
    }

    #[test]
    fn partial_components_are_padded() {
        let color = normalize_required_color([0.1_f32, 0.2]).expect("two");
        assert_eq!(color, Rgba::rgba(0.1, 0.2, 0.0, 1.0));
    }

    #[test]
    fn none_passes_through() {
        assert_eq!(normalize_color(None).expect("none"), None);
    }

    #[test]
    fn rejects_bad_lengths_and_values() {
        assert!(normalize_required_color(Vec::<f32>::new()).is_err());
        assert!(normalize_required_color([0.1_f32, 0.2, 0.3, 0.4, 0.5]).is_err());
        assert!(normalize_required_color([1.5_f32]).is_err());
        assert!(normalize_required_color([f32::NAN]).is_err());
    }

    #[test]
    fn json_strings_are_value_errors() {
        let err = ColorInput::try_from(&serde_json::json!("red")).expect_err("string");
        assert!(matches!(err, PlotError::Value(_)));
    }
}
