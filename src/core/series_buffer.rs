use std::ops::Deref;
use std::sync::Arc;

use ndarray::{ArrayBase, Data, Dimension};
use num_traits::ToPrimitive;
use serde_json::Value;

use crate::error::{PlotError, PlotResult};

const NOT_ONE_DIMENSIONAL: &str = "Only one-dimensional data can be displayed on the plot.";

/// One contiguous, immutable channel of single-precision samples.
///
/// Invariants:
/// - at least one value
/// - backed by a single contiguous allocation, shared on clone
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    values: Arc<[f32]>,
}

impl SeriesBuffer {
    fn from_vec(values: Vec<f32>) -> PlotResult<Self> {
        if values.is_empty() {
            return Err(PlotError::Shape(
                "data arrays must contain at least one value".to_owned(),
            ));
        }
        Ok(Self {
            values: values.into(),
        })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Number of samples. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Deref for SeriesBuffer {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

/// Any ordered numeric collection that can become a [`SeriesBuffer`].
///
/// Implementations convert every element to `f32` and enforce the buffer
/// contract: one dimension, contiguous, non-empty.
pub trait ArrayInput {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer>;
}

/// Coerces `input` into a validated series buffer.
pub fn normalize<A: ArrayInput>(input: A) -> PlotResult<SeriesBuffer> {
    input.into_series_buffer()
}

fn convert_numeric<'a, T, I>(items: I) -> PlotResult<Vec<f32>>
where
    T: ToPrimitive + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.to_f32().ok_or_else(|| {
                PlotError::Type(format!(
                    "value at index {index} cannot be represented as a 32-bit float"
                ))
            })
        })
        .collect()
}

impl ArrayInput for SeriesBuffer {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        Ok(self)
    }
}

impl ArrayInput for &SeriesBuffer {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        Ok(self.clone())
    }
}

impl<T: ToPrimitive> ArrayInput for &[T] {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        SeriesBuffer::from_vec(convert_numeric(self)?)
    }
}

impl<T: ToPrimitive> ArrayInput for &Vec<T> {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        self.as_slice().into_series_buffer()
    }
}

impl<T: ToPrimitive> ArrayInput for Vec<T> {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        self.as_slice().into_series_buffer()
    }
}

impl<T: ToPrimitive, const N: usize> ArrayInput for [T; N] {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        self.as_slice().into_series_buffer()
    }
}

/// n-dimensional arrays are accepted only when one-dimensional and laid out
/// contiguously; strided views are rejected rather than silently copied so the
/// caller keeps control over materialization.
impl<S, D, T> ArrayInput for &ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: ToPrimitive,
{
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        if self.ndim() != 1 {
            return Err(PlotError::Shape(NOT_ONE_DIMENSIONAL.to_owned()));
        }
        let slice = self.as_slice().ok_or_else(|| {
            PlotError::Contiguity(
                "All passed arrays must be contiguous in memory. \
                 Call `as_standard_layout()` on the array before passing."
                    .to_owned(),
            )
        })?;
        slice.into_series_buffer()
    }
}

impl<S, D, T> ArrayInput for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: ToPrimitive,
{
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        (&self).into_series_buffer()
    }
}

/// Dynamically typed input, e.g. a JSON column. Must be a flat array of numbers.
impl ArrayInput for &Value {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        match self {
            Value::Array(items) => SeriesBuffer::from_vec(convert_json_items(items)?),
            Value::Number(_) => Err(PlotError::Shape(NOT_ONE_DIMENSIONAL.to_owned())),
            other => Err(PlotError::Type(format!(
                "expected an array of numbers, got {}",
                json_type_name(other)
            ))),
        }
    }
}

pub(crate) fn convert_json_items(items: &[Value]) -> PlotResult<Vec<f32>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Number(number) => number.as_f64().map(|v| v as f32).ok_or_else(|| {
                PlotError::Type(format!("value at index {index} is not a finite number"))
            }),
            Value::Array(_) => Err(PlotError::Shape(NOT_ONE_DIMENSIONAL.to_owned())),
            other => Err(PlotError::Type(format!(
                "value at index {index} is {}, expected a number",
                json_type_name(other)
            ))),
        })
        .collect()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, s};
    use rust_decimal::Decimal;

    #[test]
    fn converts_f64_slices_to_f32() {
        let buffer = normalize(vec![1.5_f64, -2.25, 3.0]).expect("normalize");
        assert_eq!(buffer.as_slice(), &[1.5_f32, -2.25, 3.0]);
    }

    #[test]
    fn converts_integer_and_decimal_columns() {
        let ints = normalize([1_i64, 2, 3]).expect("ints");
        assert_eq!(ints.len(), 3);

        let decimals = vec![Decimal::new(10125, 2), Decimal::new(-5, 1)];
        let buffer = normalize(&decimals).expect("decimals");
        assert_eq!(buffer.as_slice(), &[101.25_f32, -0.5]);
    }

    #[test]
    fn rejects_empty_input() {
        let err = normalize(Vec::<f32>::new()).expect_err("empty must fail");
        assert!(matches!(err, PlotError::Shape(_)));
    }

    #[test]
    fn rejects_two_dimensional_arrays() {
        let grid = Array2::<f64>::zeros((2, 3));
        let err = normalize(&grid).expect_err("2d must fail");
        assert!(matches!(err, PlotError::Shape(_)));
    }

    #[test]
    fn rejects_strided_views() {
        let data = Array1::from_iter((0..10).map(f64::from));
        let strided = data.slice(s![..;2]);
        let err = normalize(&strided).expect_err("strided must fail");
        assert!(matches!(err, PlotError::Contiguity(_)));

        let contiguous = data.slice(s![2..5]);
        let buffer = normalize(&contiguous).expect("contiguous slice");
        assert_eq!(buffer.as_slice(), &[2.0_f32, 3.0, 4.0]);
    }

    #[test]
    fn json_input_reports_type_and_shape_errors() {
        let text = serde_json::json!([1.0, "x", 3.0]);
        assert!(matches!(normalize(&text), Err(PlotError::Type(_))));

        let nested = serde_json::json!([[1.0], [2.0]]);
        assert!(matches!(normalize(&nested), Err(PlotError::Shape(_))));

        let flat = serde_json::json!([1, 2.5]);
        let buffer = normalize(&flat).expect("flat json");
        assert_eq!(buffer.as_slice(), &[1.0_f32, 2.5]);
    }
}
