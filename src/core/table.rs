use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::axis::DateInput;
use crate::core::series_buffer::{
    ArrayInput, SeriesBuffer, convert_json_items, json_type_name, normalize,
};
use crate::error::{PlotError, PlotResult};

/// One named column of caller-supplied tabular data.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    /// Exact decimal prices, narrowed to `f32` when plotted.
    Decimal(Vec<Decimal>),
    Text(Vec<String>),
    Timestamps(Vec<DateTime<FixedOffset>>),
    /// Cells of mixed or unknown type, kept as parsed.
    Raw(Vec<Value>),
}

impl Column {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Decimal(values) => values.len(),
            Self::Text(values) => values.len(),
            Self::Timestamps(values) => values.len(),
            Self::Raw(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Interprets the column as an x-axis date argument.
    pub fn to_dates(&self) -> PlotResult<DateInput> {
        match self {
            Self::Text(labels) => Ok(DateInput::Labels(labels.clone())),
            Self::Timestamps(times) => Ok(DateInput::Timestamps(times.clone())),
            Self::Numeric(_) | Self::Decimal(_) | Self::Raw(_) => Err(PlotError::value(
                "`dates` must be list of string labels or UTC datetimes.",
            )),
        }
    }

    /// Parses a text column of RFC 3339 timestamps.
    pub fn parse_rfc3339(&self) -> PlotResult<Self> {
        let Self::Text(values) = self else {
            return Err(PlotError::value("only text columns can be parsed as timestamps"));
        };
        values
            .iter()
            .map(|value| {
                DateTime::parse_from_rfc3339(value).map_err(|e| {
                    PlotError::value(format!("failed to parse timestamp \"{value}\": {e}"))
                })
            })
            .collect::<PlotResult<Vec<_>>>()
            .map(Self::Timestamps)
    }
}

impl ArrayInput for &Column {
    fn into_series_buffer(self) -> PlotResult<SeriesBuffer> {
        match self {
            Column::Numeric(values) => normalize(values),
            Column::Decimal(values) => normalize(values),
            Column::Raw(values) => {
                let converted = convert_json_items(values)?;
                normalize(converted)
            }
            Column::Text(_) => Err(PlotError::Type(
                "text column cannot be converted to 32-bit floats".to_owned(),
            )),
            Column::Timestamps(_) => Err(PlotError::Type(
                "timestamp column cannot be converted to 32-bit floats".to_owned(),
            )),
        }
    }
}

/// Column-oriented table with case-insensitive name lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: IndexMap<String, Column>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.insert(name, column);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> Option<Column> {
        self.columns.insert(name.into(), column)
    }

    /// Exact-name lookup first, then the first column whose lowercase name matches.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name).or_else(|| {
            let wanted = name.to_lowercase();
            self.columns
                .iter()
                .find(|(key, _)| key.to_lowercase() == wanted)
                .map(|(_, column)| column)
        })
    }

    /// Builds a table from JSON records (`[{"Open": 1.0, ...}, ...]`).
    ///
    /// Columns where every cell is a number become `Numeric`, every cell a
    /// string become `Text`; anything else is kept as `Raw`.
    pub fn from_json_records(input: &str) -> PlotResult<Self> {
        let records: Vec<IndexMap<String, Value>> = serde_json::from_str(input)
            .map_err(|e| PlotError::value(format!("failed to parse table records: {e}")))?;

        let mut cells: IndexMap<String, Vec<Value>> = IndexMap::new();
        for (row, record) in records.into_iter().enumerate() {
            for (name, value) in record {
                let column = cells.entry(name.clone()).or_default();
                if column.len() != row {
                    return Err(PlotError::value(format!(
                        "column `{name}` is missing a value before row {row}"
                    )));
                }
                column.push(value);
            }
        }

        let row_count = cells.values().map(Vec::len).max().unwrap_or(0);
        let mut table = Self::new();
        for (name, values) in cells {
            if values.len() != row_count {
                return Err(PlotError::value(format!(
                    "column `{name}` has {} values, expected {row_count}",
                    values.len()
                )));
            }
            table.insert(name, infer_column(values));
        }
        Ok(table)
    }
}

fn infer_column(values: Vec<Value>) -> Column {
    if values.iter().all(Value::is_number) {
        return Column::Numeric(values.iter().filter_map(Value::as_f64).collect());
    }
    if values.iter().all(Value::is_string) {
        return Column::Text(
            values
                .into_iter()
                .filter_map(|value| match value {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        );
    }
    tracing::trace!(
        first_non_numeric = values
            .iter()
            .find(|value| !value.is_number())
            .map(json_type_name),
        "keeping mixed column as raw cells"
    );
    Column::Raw(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = Table::new().with_column("Open", Column::Numeric(vec![1.0]));
        assert!(table.column("open").is_some());
        assert!(table.column("OPEN").is_some());
        assert!(table.column("close").is_none());
    }

    #[test]
    fn json_records_infer_column_types() {
        let table = Table::from_json_records(
            r#"[{"Open": 1.0, "Date": "a", "Note": 1},
                {"Open": 2.5, "Date": "b", "Note": "x"}]"#,
        )
        .expect("parse");
        assert_eq!(table.column("open"), Some(&Column::Numeric(vec![1.0, 2.5])));
        assert!(matches!(table.column("date"), Some(Column::Text(_))));
        assert!(matches!(table.column("note"), Some(Column::Raw(_))));

        let err = normalize(table.column("note").expect("note")).expect_err("mixed");
        assert!(matches!(err, PlotError::Type(_)));
    }
}
