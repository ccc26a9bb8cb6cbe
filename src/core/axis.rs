//! x-axis representation of a linked subplot.
//!
//! A linked subplot's x-axis is either the implicit row index or one committed
//! label set: string labels or UTC timestamps. The committed kind never changes
//! for the lifetime of the subplot; a later label set of the same kind replaces
//! the current one and is reported as a warning-level transition.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

const DATES_MUST_BE_UTC: &str = "`dates` must be UTC datetime.";

/// Date argument of a plot call, as supplied by the caller.
///
/// Timestamps keep their offset until validation so that non-UTC and naive
/// inputs can be rejected instead of silently reinterpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Labels(Vec<String>),
    Timestamps(Vec<DateTime<FixedOffset>>),
    Naive(Vec<NaiveDateTime>),
}

impl DateInput {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Labels(labels) => labels.len(),
            Self::Timestamps(times) => times.len(),
            Self::Naive(times) => times.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates timezone information and converts into an axis label set.
    pub fn into_labels(self) -> PlotResult<AxisLabels> {
        match self {
            Self::Labels(labels) => Ok(AxisLabels::Strings(labels)),
            Self::Timestamps(times) => {
                if times
                    .iter()
                    .any(|time| time.offset().local_minus_utc() != 0)
                {
                    return Err(PlotError::value(DATES_MUST_BE_UTC));
                }
                Ok(AxisLabels::Timestamps(
                    times.into_iter().map(|time| time.with_timezone(&Utc)).collect(),
                ))
            }
            Self::Naive(_) => Err(PlotError::value(DATES_MUST_BE_UTC)),
        }
    }
}

impl From<Vec<String>> for DateInput {
    fn from(labels: Vec<String>) -> Self {
        Self::Labels(labels)
    }
}

impl From<Vec<&str>> for DateInput {
    fn from(labels: Vec<&str>) -> Self {
        Self::Labels(labels.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<DateTime<Utc>>> for DateInput {
    fn from(times: Vec<DateTime<Utc>>) -> Self {
        Self::Timestamps(times.into_iter().map(|time| time.fixed_offset()).collect())
    }
}

impl From<Vec<DateTime<FixedOffset>>> for DateInput {
    fn from(times: Vec<DateTime<FixedOffset>>) -> Self {
        Self::Timestamps(times)
    }
}

impl From<Vec<NaiveDateTime>> for DateInput {
    fn from(times: Vec<NaiveDateTime>) -> Self {
        Self::Naive(times)
    }
}

/// Validated x-axis labels handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisLabels {
    Strings(Vec<String>),
    Timestamps(Vec<DateTime<Utc>>),
}

impl AxisLabels {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Strings(labels) => labels.len(),
            Self::Timestamps(times) => times.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind(&self) -> AxisLabelKind {
        match self {
            Self::Strings(_) => AxisLabelKind::String,
            Self::Timestamps(_) => AxisLabelKind::Timepoint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelKind {
    Index,
    String,
    Timepoint,
}

impl fmt::Display for AxisLabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Index => "index",
            Self::String => "string",
            Self::Timepoint => "timepoint",
        };
        f.write_str(name)
    }
}

/// Committed x-axis state of one linked subplot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AxisMode {
    #[default]
    Unset,
    Indexed,
    StringLabeled(Vec<String>),
    TimestampLabeled(Vec<DateTime<Utc>>),
}

/// What a resolved plot call does to the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisTransition {
    /// Axis unchanged: no labels passed, or identical labels re-sent.
    Unchanged,
    /// First plot without labels; the row index is used.
    Indexed,
    /// First label set committed.
    Committed,
    /// Same-kind labels with different values replaced the committed set.
    Replaced,
}

/// Result of resolving a date argument against the current axis mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisResolution {
    pub transition: AxisTransition,
    pub next: AxisMode,
}

impl AxisMode {
    #[must_use]
    pub fn label_kind(&self) -> AxisLabelKind {
        match self {
            Self::Unset | Self::Indexed => AxisLabelKind::Index,
            Self::StringLabeled(_) => AxisLabelKind::String,
            Self::TimestampLabeled(_) => AxisLabelKind::Timepoint,
        }
    }

    #[must_use]
    pub fn labels(&self) -> Option<AxisLabels> {
        match self {
            Self::Unset | Self::Indexed => None,
            Self::StringLabeled(labels) => Some(AxisLabels::Strings(labels.clone())),
            Self::TimestampLabeled(times) => Some(AxisLabels::Timestamps(times.clone())),
        }
    }

    /// Computes the next axis mode for a plot call carrying `labels`.
    ///
    /// Pure: the caller commits `AxisResolution::next` once the engine has
    /// accepted the request.
    pub fn resolve(&self, labels: Option<&AxisLabels>) -> PlotResult<AxisResolution> {
        let unchanged = || AxisResolution {
            transition: AxisTransition::Unchanged,
            next: self.clone(),
        };

        let Some(labels) = labels else {
            return Ok(match self {
                Self::Unset => AxisResolution {
                    transition: AxisTransition::Indexed,
                    next: Self::Indexed,
                },
                _ => unchanged(),
            });
        };

        match (self, labels) {
            (Self::Unset | Self::Indexed, labels) => Ok(AxisResolution {
                transition: AxisTransition::Committed,
                next: Self::from_labels(labels),
            }),
            (Self::StringLabeled(current), AxisLabels::Strings(incoming)) => {
                if current == incoming {
                    Ok(unchanged())
                } else {
                    Ok(AxisResolution {
                        transition: AxisTransition::Replaced,
                        next: Self::StringLabeled(incoming.clone()),
                    })
                }
            }
            (Self::TimestampLabeled(current), AxisLabels::Timestamps(incoming)) => {
                if current == incoming {
                    Ok(unchanged())
                } else {
                    Ok(AxisResolution {
                        transition: AxisTransition::Replaced,
                        next: Self::TimestampLabeled(incoming.clone()),
                    })
                }
            }
            (Self::StringLabeled(_), AxisLabels::Timestamps(_)) => Err(PlotError::value(
                "Dates are already set with string labels. Cannot now set a timepoint vector as dates.",
            )),
            (Self::TimestampLabeled(_), AxisLabels::Strings(_)) => Err(PlotError::value(
                "Dates are already set with timepoint labels. Cannot now set a string vector as dates.",
            )),
        }
    }

    fn from_labels(labels: &AxisLabels) -> Self {
        match labels {
            AxisLabels::Strings(labels) => Self::StringLabeled(labels.clone()),
            AxisLabels::Timestamps(times) => Self::TimestampLabeled(times.clone()),
        }
    }

    /// Maps a labeled x value to its row index on this axis.
    ///
    /// `x` must be of the committed label kind.
    pub fn index_positions(&self, x: &AxisLabels) -> PlotResult<Vec<usize>> {
        match (self, x) {
            (Self::StringLabeled(axis), AxisLabels::Strings(wanted)) => {
                lookup_positions(axis, wanted, |label| format!("\"{label}\""))
            }
            (Self::TimestampLabeled(axis), AxisLabels::Timestamps(wanted)) => {
                lookup_positions(axis, wanted, |time| time.to_rfc3339())
            }
            _ => Err(PlotError::value(format!(
                "The x-axis data must always be string, index or chrono timepoint. \
                 Currently it is {}, but {} data was passed.",
                self.label_article(),
                x.kind()
            ))),
        }
    }

    fn label_article(&self) -> String {
        match self.label_kind() {
            AxisLabelKind::Index => "an index".to_owned(),
            kind => kind.to_string(),
        }
    }
}

fn lookup_positions<T, F>(axis: &[T], wanted: &[T], describe: F) -> PlotResult<Vec<usize>>
where
    T: Eq + Hash,
    F: Fn(&T) -> String,
{
    // Duplicate labels resolve to their last occurrence.
    let positions: HashMap<&T, usize> = axis
        .iter()
        .enumerate()
        .map(|(index, label)| (label, index))
        .collect();
    wanted
        .iter()
        .map(|label| {
            positions.get(label).copied().ok_or_else(|| {
                PlotError::value(format!(
                    "x value {} not found in x-axis labels.",
                    describe(label)
                ))
            })
        })
        .collect()
}

/// How numeric scatter x positions interact with a labeled axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterIndexPolicy {
    /// Row indices may overlay any axis mode.
    #[default]
    AllowOverlay,
    /// On a labeled axis, scatter x must use the committed label kind.
    RequireMatchingLabels,
}

/// x argument of a scatter call.
#[derive(Debug, Clone, PartialEq)]
pub enum ScatterX {
    Indices(Vec<usize>),
    Dates(DateInput),
}

impl ScatterX {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Indices(indices) => indices.len(),
            Self::Dates(dates) => dates.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<usize>> for ScatterX {
    fn from(indices: Vec<usize>) -> Self {
        Self::Indices(indices)
    }
}

impl From<DateInput> for ScatterX {
    fn from(dates: DateInput) -> Self {
        Self::Dates(dates)
    }
}

impl From<Vec<String>> for ScatterX {
    fn from(labels: Vec<String>) -> Self {
        Self::Dates(labels.into())
    }
}

impl From<Vec<&str>> for ScatterX {
    fn from(labels: Vec<&str>) -> Self {
        Self::Dates(labels.into())
    }
}

impl From<Vec<DateTime<Utc>>> for ScatterX {
    fn from(times: Vec<DateTime<Utc>>) -> Self {
        Self::Dates(times.into())
    }
}
