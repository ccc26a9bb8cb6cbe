use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{ArrayInput, AxisTransition, OhlcColumns, ScatterX, SeriesBuffer, Table};
use crate::engine::PlotEngine;
use crate::error::{PlotError, PlotResult};

use super::plot_builder::{PendingPlot, PlotRequestBuilder};
use super::validation::{
    validate_bar_style, validate_candlestick_style, validate_line_style, validate_scatter_style,
};
use super::{
    BarStyle, CandlestickStyle, LineStyle, PlotOutcome, PlotPlacement, PlotStyle, Plotter,
    ScatterStyle,
};

impl<E: PlotEngine> Plotter<E> {
    pub fn candlestick(
        &mut self,
        ohlc: OhlcColumns,
        placement: PlotPlacement,
        style: CandlestickStyle,
    ) -> PlotResult<PlotOutcome> {
        self.ensure_live()?;
        validate_candlestick_style(&style)?;
        let buffers = SmallVec::from_iter(ohlc.into_buffers());
        self.plot_series(buffers, placement, PlotStyle::Candlestick(style))
    }

    /// Candlestick from a table with `open`/`high`/`low`/`close` columns,
    /// matched case-insensitively.
    pub fn candlestick_from_table(
        &mut self,
        table: &Table,
        placement: PlotPlacement,
        style: CandlestickStyle,
    ) -> PlotResult<PlotOutcome> {
        self.ensure_live()?;
        let ohlc = OhlcColumns::from_table(table)?;
        self.candlestick(ohlc, placement, style)
    }

    pub fn line(
        &mut self,
        y: impl ArrayInput,
        placement: PlotPlacement,
        style: LineStyle,
    ) -> PlotResult<PlotOutcome> {
        self.ensure_live()?;
        validate_line_style(&style)?;
        let y = y.into_series_buffer()?;
        self.plot_series(SmallVec::from_iter([y]), placement, PlotStyle::Line(style))
    }

    pub fn bar(
        &mut self,
        y: impl ArrayInput,
        placement: PlotPlacement,
        style: BarStyle,
    ) -> PlotResult<PlotOutcome> {
        self.ensure_live()?;
        validate_bar_style(&style)?;
        let y = y.into_series_buffer()?;
        self.plot_series(SmallVec::from_iter([y]), placement, PlotStyle::Bar(style))
    }

    /// Overlays markers on a linked subplot that already holds a plot.
    ///
    /// `x` is either row indices or labels of the committed axis kind.
    pub fn scatter(
        &mut self,
        x: impl Into<ScatterX>,
        y: impl ArrayInput,
        linked_subplot: Option<usize>,
        style: ScatterStyle,
    ) -> PlotResult<PlotOutcome> {
        self.ensure_live()?;
        validate_scatter_style(&style)?;
        let y = y.into_series_buffer()?;
        let subplot_key = self.grid.active_key();
        let subplot = self.grid.active()?;
        let linked = subplot.resolve_index(linked_subplot)?;
        let target = subplot.linked(linked)?;
        let pending = PlotRequestBuilder::new(subplot_key, linked, &subplot.axis, target)
            .scatter(x.into(), y, style, self.config.scatter_index_policy)?;
        self.submit_plot(pending)
    }

    fn plot_series(
        &mut self,
        buffers: SmallVec<[SeriesBuffer; 4]>,
        placement: PlotPlacement,
        style: PlotStyle,
    ) -> PlotResult<PlotOutcome> {
        let subplot_key = self.grid.active_key();
        let subplot = self.grid.active()?;
        let linked = subplot.resolve_index(placement.linked_subplot)?;
        let target = subplot.linked(linked)?;
        let pending = PlotRequestBuilder::new(subplot_key, linked, &subplot.axis, target)
            .series(buffers, placement.dates, style)?;
        self.submit_plot(pending)
    }

    fn submit_plot(&mut self, pending: PendingPlot) -> PlotResult<PlotOutcome> {
        let engine = self.engine.as_mut().ok_or(PlotError::UseAfterFinish)?;
        engine.submit_plot_request(&pending.request)?;

        let PendingPlot {
            request,
            axis,
            establishes_len,
        } = pending;
        let data_len = request.data_len();
        let subplot = self.grid.active_mut()?;

        if axis.transition == AxisTransition::Replaced {
            warn!(
                subplot = %request.subplot,
                linked_subplot = request.linked_subplot,
                label_kind = %axis.next.label_kind(),
                "x-axis labels replaced by a new label set of the same kind"
            );
        }
        subplot.axis = axis.next;
        let state = subplot.linked_mut(request.linked_subplot)?;
        state.series_count += 1;
        if establishes_len {
            state.data_len = Some(data_len);
        }

        debug!(
            kind = %request.kind(),
            subplot = %request.subplot,
            linked_subplot = request.linked_subplot,
            data_len,
            series_count = state.series_count,
            "plot submitted"
        );
        Ok(PlotOutcome {
            subplot: request.subplot,
            linked_subplot: request.linked_subplot,
            data_len,
            axis: axis.transition,
        })
    }
}
