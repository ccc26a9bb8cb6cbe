use crate::core::series_buffer::{ArrayInput, SeriesBuffer};
use crate::core::table::Table;
use crate::error::{PlotError, PlotResult};

/// Open/high/low/close channels of one candlestick series.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcColumns {
    pub open: SeriesBuffer,
    pub high: SeriesBuffer,
    pub low: SeriesBuffer,
    pub close: SeriesBuffer,
}

impl OhlcColumns {
    pub fn new(
        open: impl ArrayInput,
        high: impl ArrayInput,
        low: impl ArrayInput,
        close: impl ArrayInput,
    ) -> PlotResult<Self> {
        Ok(Self {
            open: open.into_series_buffer()?,
            high: high.into_series_buffer()?,
            low: low.into_series_buffer()?,
            close: close.into_series_buffer()?,
        })
    }

    /// Reads `open`, `high`, `low` and `close` columns, matched case-insensitively.
    pub fn from_table(table: &Table) -> PlotResult<Self> {
        let column = |name: &str| {
            table.column(name).ok_or_else(|| {
                PlotError::value(format!(
                    "{name} (or {}) not found in the passed table.",
                    title_case(name)
                ))
            })
        };
        let open = column("open")?;
        let high = column("high")?;
        let low = column("low")?;
        let close = column("close")?;
        Self::new(open, high, low, close)
    }

    #[must_use]
    pub fn into_buffers(self) -> [SeriesBuffer; 4] {
        [self.open, self.high, self.low, self.close]
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
