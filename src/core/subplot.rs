use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::axis::AxisMode;
use crate::core::types::SubplotKey;
use crate::error::{PlotError, PlotResult};

const HEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Mutable state of one linked subplot (an x-axis-sharing row of a subplot).
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedSubplotState {
    /// Length every series on this linked subplot must share, once set.
    pub data_len: Option<usize>,
    pub series_count: usize,
    pub height_proportion: f64,
}

impl LinkedSubplotState {
    #[must_use]
    pub fn new(height_proportion: f64) -> Self {
        Self {
            data_len: None,
            series_count: 0,
            height_proportion,
        }
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.series_count > 0
    }
}

/// Vertical extent of one linked subplot, as proportions of the subplot height.
///
/// `start` is measured from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkedSubplotRegion {
    pub index: usize,
    pub start: f64,
    pub height: f64,
}

/// One cell (or spanned block of cells) of the figure grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotState {
    /// X-axis mode shared by every linked subplot of this subplot.
    pub axis: AxisMode,
    linked: Vec<LinkedSubplotState>,
    pub row_span: usize,
    pub col_span: usize,
}

impl Default for SubplotState {
    fn default() -> Self {
        Self {
            axis: AxisMode::Unset,
            linked: vec![LinkedSubplotState::new(1.0)],
            row_span: 1,
            col_span: 1,
        }
    }
}

impl SubplotState {
    #[must_use]
    pub fn linked_subplots(&self) -> &[LinkedSubplotState] {
        &self.linked
    }

    #[must_use]
    pub fn linked_count(&self) -> usize {
        self.linked.len()
    }

    /// Resolves a caller-facing linked-subplot index.
    ///
    /// `None` targets the most recently added linked subplot.
    pub fn resolve_index(&self, index: Option<usize>) -> PlotResult<usize> {
        let count = self.linked.len();
        match index {
            None => Ok(count.saturating_sub(1)),
            Some(index) if index < count => Ok(index),
            Some(index) => Err(PlotError::value(format!(
                "linkedSubplotIdx: {index} is larger than the number of plots: {count}"
            ))),
        }
    }

    /// Resolves a settings target: `None` addresses every linked subplot.
    pub fn resolve_targets(&self, index: Option<usize>) -> PlotResult<Vec<usize>> {
        match index {
            None => Ok((0..self.linked.len()).collect()),
            Some(_) => Ok(vec![self.resolve_index(index)?]),
        }
    }

    pub fn linked(&self, index: usize) -> PlotResult<&LinkedSubplotState> {
        let count = self.linked.len();
        self.linked.get(index).ok_or_else(|| {
            PlotError::value(format!(
                "linkedSubplotIdx: {index} is larger than the number of plots: {count}"
            ))
        })
    }

    pub fn linked_mut(&mut self, index: usize) -> PlotResult<&mut LinkedSubplotState> {
        let count = self.linked.len();
        self.linked.get_mut(index).ok_or_else(|| {
            PlotError::value(format!(
                "linkedSubplotIdx: {index} is larger than the number of plots: {count}"
            ))
        })
    }

    /// Heights after adding a linked subplot of `height_as_proportion`.
    ///
    /// The new subplot's height is taken from the first linked subplot.
    pub fn heights_after_add(&self, height_as_proportion: f64) -> PlotResult<Vec<f64>> {
        validate_height(height_as_proportion, "height_as_proportion")?;
        let mut heights: Vec<f64> = self.linked.iter().map(|l| l.height_proportion).collect();
        let first = heights[0] - height_as_proportion;
        if first <= 0.0 {
            return Err(PlotError::value(format!(
                "height_as_proportion {height_as_proportion} leaves no height for the first \
                 linked subplot ({:.4} available)",
                heights[0]
            )));
        }
        heights[0] = first;
        heights.push(height_as_proportion);
        Ok(heights)
    }

    pub fn push_linked(&mut self, heights: &[f64]) -> usize {
        self.linked.push(LinkedSubplotState::new(0.0));
        self.apply_heights(heights);
        self.linked.len() - 1
    }

    pub fn validate_heights(&self, heights: &[f64]) -> PlotResult<()> {
        if heights.len() != self.linked.len() {
            return Err(PlotError::value(
                "Number of subplot heights must match the number of subplots",
            ));
        }
        for height in heights {
            validate_height(*height, "y_heights")?;
        }
        let sum: f64 = heights.iter().sum();
        if (sum - 1.0).abs() > HEIGHT_SUM_TOLERANCE {
            return Err(PlotError::value(format!(
                "y_heights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }

    pub fn apply_heights(&mut self, heights: &[f64]) {
        for (linked, height) in self.linked.iter_mut().zip(heights) {
            linked.height_proportion = *height;
        }
    }

    /// Stacks linked subplots top to bottom; the last one sits on the bottom edge.
    #[must_use]
    pub fn layout_regions(&self) -> Vec<LinkedSubplotRegion> {
        let mut start = 0.0;
        let mut regions: Vec<LinkedSubplotRegion> = self
            .linked
            .iter()
            .enumerate()
            .rev()
            .map(|(index, linked)| {
                let region = LinkedSubplotRegion {
                    index,
                    start,
                    height: linked.height_proportion,
                };
                start += linked.height_proportion;
                region
            })
            .collect();
        regions.reverse();
        regions
    }
}

fn validate_height(height: f64, name: &str) -> PlotResult<()> {
    if !height.is_finite() || height <= 0.0 || height > 1.0 {
        return Err(PlotError::value(format!(
            "{name} must be in (0, 1], got {height}"
        )));
    }
    Ok(())
}

/// Figure grid of subplots keyed by their top-left cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotGrid {
    subplots: IndexMap<SubplotKey, SubplotState>,
    active: SubplotKey,
}

impl Default for SubplotGrid {
    fn default() -> Self {
        let mut subplots = IndexMap::new();
        subplots.insert(SubplotKey::default(), SubplotState::default());
        Self {
            subplots,
            active: SubplotKey::default(),
        }
    }
}

impl SubplotGrid {
    #[must_use]
    pub fn active_key(&self) -> SubplotKey {
        self.active
    }

    #[must_use]
    pub fn contains(&self, key: SubplotKey) -> bool {
        self.subplots.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = SubplotKey> + '_ {
        self.subplots.keys().copied()
    }

    #[must_use]
    pub fn get(&self, key: SubplotKey) -> Option<&SubplotState> {
        self.subplots.get(&key)
    }

    pub fn active(&self) -> PlotResult<&SubplotState> {
        self.subplots
            .get(&self.active)
            .ok_or_else(|| missing_subplot(self.active))
    }

    pub fn active_mut(&mut self) -> PlotResult<&mut SubplotState> {
        let key = self.active;
        self.subplots
            .get_mut(&key)
            .ok_or_else(|| missing_subplot(key))
    }

    pub fn validate_spans(row_span: usize, col_span: usize) -> PlotResult<()> {
        for (name, value) in [("row_span", row_span), ("col_span", col_span)] {
            if value == 0 {
                return Err(PlotError::value(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Inserts (or re-spans) a subplot and makes it active.
    ///
    /// Returns `true` when a new subplot was created.
    pub fn add_subplot(
        &mut self,
        key: SubplotKey,
        row_span: usize,
        col_span: usize,
    ) -> PlotResult<bool> {
        Self::validate_spans(row_span, col_span)?;
        let created = match self.subplots.get_mut(&key) {
            Some(existing) => {
                existing.row_span = row_span;
                existing.col_span = col_span;
                false
            }
            None => {
                self.subplots.insert(
                    key,
                    SubplotState {
                        row_span,
                        col_span,
                        ..SubplotState::default()
                    },
                );
                true
            }
        };
        self.active = key;
        Ok(created)
    }

    pub fn set_active(&mut self, key: SubplotKey) -> PlotResult<()> {
        if !self.contains(key) {
            return Err(missing_subplot(key));
        }
        self.active = key;
        Ok(())
    }
}

fn missing_subplot(key: SubplotKey) -> PlotError {
    PlotError::value(format!(
        "Cannot activate subplot at row: {}, col: {}, it does not exist.",
        key.row, key.col
    ))
}
