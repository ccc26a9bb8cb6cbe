use tracing::debug;

use crate::core::{SubplotGrid, SubplotKey};
use crate::engine::{LayoutChange, PlotEngine};
use crate::error::PlotResult;

use super::Plotter;

impl<E: PlotEngine> Plotter<E> {
    /// Adds a subplot at `(row, col)` spanning `row_span` x `col_span` cells and
    /// makes it active. An existing subplot at that cell is re-spanned.
    pub fn add_subplot(
        &mut self,
        row: usize,
        col: usize,
        row_span: usize,
        col_span: usize,
    ) -> PlotResult<()> {
        self.ensure_live()?;
        SubplotGrid::validate_spans(row_span, col_span)?;
        let key = SubplotKey::new(row, col);
        self.engine_mut()?.apply_layout(&LayoutChange::AddSubplot {
            key,
            row_span,
            col_span,
        })?;
        let created = self.grid.add_subplot(key, row_span, col_span)?;
        debug!(%key, row_span, col_span, created, "subplot added");
        Ok(())
    }

    /// Makes the subplot whose top-left cell is `(row, col)` the target of later calls.
    pub fn set_active_subplot(&mut self, row: usize, col: usize) -> PlotResult<()> {
        self.ensure_live()?;
        let key = SubplotKey::new(row, col);
        if !self.grid.contains(key) {
            return self.grid.set_active(key);
        }
        self.engine_mut()?
            .apply_layout(&LayoutChange::SetActiveSubplot(key))?;
        self.grid.set_active(key)
    }

    /// Adds a linked subplot below the existing ones and returns its index.
    ///
    /// Its height is taken from the first linked subplot.
    pub fn add_linked_subplot(&mut self, height_as_proportion: f64) -> PlotResult<usize> {
        self.ensure_live()?;
        let subplot = self.grid.active_key();
        let heights = self.grid.active()?.heights_after_add(height_as_proportion)?;
        self.engine_mut()?.apply_layout(&LayoutChange::AddLinkedSubplot {
            subplot,
            height_as_proportion,
        })?;
        let index = self.grid.active_mut()?.push_linked(&heights);
        debug!(%subplot, index, height_as_proportion, "linked subplot added");
        Ok(index)
    }

    /// Sets every linked subplot's height. `heights` must sum to 1.
    pub fn resize_linked_subplots(&mut self, heights: &[f64]) -> PlotResult<()> {
        self.ensure_live()?;
        let subplot = self.grid.active_key();
        self.grid.active()?.validate_heights(heights)?;
        self.engine_mut()?
            .apply_layout(&LayoutChange::ResizeLinkedSubplots {
                subplot,
                heights: heights.to_vec(),
            })?;
        self.grid.active_mut()?.apply_heights(heights);
        Ok(())
    }
}
