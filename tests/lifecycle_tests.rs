use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rallyplot::api::{LineStyle, PlotPlacement, Plotter, PlotterConfig};
use rallyplot::core::{SubplotKey, Viewport};
use rallyplot::engine::{
    ConfigGroup, EngineCall, EngineError, FrameBuffer, LayoutChange, PlotRequest,
};
use rallyplot::{NullEngine, PlotEngine, PlotError};

/// Engine that only counts teardown calls.
struct CountingEngine {
    destroys: Arc<AtomicUsize>,
}

impl PlotEngine for CountingEngine {
    fn create(_config: &PlotterConfig) -> Result<Self, EngineError> {
        Ok(Self {
            destroys: Arc::new(AtomicUsize::new(0)),
        })
    }

    fn submit_plot_request(&mut self, _request: &PlotRequest) -> Result<(), EngineError> {
        Ok(())
    }

    fn set_config(
        &mut self,
        _subplot: SubplotKey,
        _group: &ConfigGroup,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    fn apply_layout(&mut self, _change: &LayoutChange) -> Result<(), EngineError> {
        Ok(())
    }

    fn start_loop(&mut self) -> Result<(), EngineError> {
        Ok(())
    }

    fn grab_frame(&mut self, _subplot: SubplotKey) -> Result<FrameBuffer, EngineError> {
        // Deliberately short: one pixel for any viewport.
        Ok(FrameBuffer::new(Viewport::new(2, 2), vec![0; 4]))
    }

    fn destroy(&mut self) {
        self.destroys.fetch_add(1, Ordering::SeqCst);
    }
}

fn plotter() -> Plotter<NullEngine> {
    Plotter::new(PlotterConfig::default()).expect("plotter init")
}

#[test]
fn finish_destroys_once_and_later_calls_fail() {
    let mut plotter = plotter();
    let engine = plotter.finish().expect("first finish");
    assert_eq!(engine.destroy_count, 1);
    assert!(plotter.is_finished());

    assert!(matches!(plotter.finish(), Err(PlotError::UseAfterFinish)));
    assert!(matches!(
        plotter.line(vec![1.0, 2.0], PlotPlacement::new(), LineStyle::default()),
        Err(PlotError::UseAfterFinish)
    ));
    assert!(matches!(plotter.start(), Err(PlotError::UseAfterFinish)));
    assert!(matches!(
        plotter.grab_frame(None, None),
        Err(PlotError::UseAfterFinish)
    ));
    assert!(matches!(plotter.grid(), Err(PlotError::UseAfterFinish)));
    assert!(matches!(
        plotter.set_background_color([0.1_f64, 0.2, 0.3]),
        Err(PlotError::UseAfterFinish)
    ));
    assert!(matches!(
        plotter.add_linked_subplot(0.2),
        Err(PlotError::UseAfterFinish)
    ));
}

#[test]
fn drop_destroys_engine_unless_finished() {
    let destroys = Arc::new(AtomicUsize::new(0));
    let engine = || CountingEngine {
        destroys: Arc::clone(&destroys),
    };

    {
        let _plotter =
            Plotter::from_engine(engine(), PlotterConfig::default()).expect("plotter init");
    }
    assert_eq!(destroys.load(Ordering::SeqCst), 1);

    let mut finished =
        Plotter::from_engine(engine(), PlotterConfig::default()).expect("plotter init");
    finished.finish().expect("finish");
    drop(finished);
    assert_eq!(destroys.load(Ordering::SeqCst), 2);
}

#[test]
fn grab_frame_requires_row_and_col_together() {
    let mut plotter = plotter();
    for (row, col) in [(Some(0), None), (None, Some(0))] {
        let err = plotter.grab_frame(row, col).expect_err("partial coordinates");
        assert_eq!(
            err.to_string(),
            "`row` and `col` must both be passed if one is."
        );
    }
}

#[test]
fn grab_frame_returns_full_rgba_buffer_of_background() {
    let config = PlotterConfig::new(Viewport::new(40, 30));
    let mut plotter = Plotter::<NullEngine>::new(config).expect("plotter init");
    plotter
        .set_background_color([1.0_f64, 0.0, 0.0])
        .expect("background");

    let frame = plotter.grab_frame(Some(0), Some(0)).expect("frame");
    assert_eq!(frame.pixels.len(), 40 * 30 * 4);
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(39, 29), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(40, 0), None);

    let engine = plotter.engine().expect("engine");
    assert_eq!(
        engine.calls.last(),
        Some(&EngineCall::GrabFrame(SubplotKey::new(0, 0)))
    );
}

#[test]
fn grab_frame_of_unknown_subplot_fails() {
    let mut plotter = plotter();
    let err = plotter.grab_frame(Some(2), Some(3)).expect_err("no subplot");
    assert!(err.to_string().contains("row: 2, col: 3"), "{err}");
}

#[test]
fn grab_frame_rejects_wrongly_sized_engine_frames() {
    let mut plotter =
        Plotter::<CountingEngine>::new(PlotterConfig::default()).expect("plotter init");
    let err = plotter.grab_frame(None, None).expect_err("short frame");
    assert!(err.to_string().contains("expected 16"), "{err}");
}

#[test]
fn start_resets_the_subplot_grid() {
    let mut plotter = plotter();
    plotter
        .line(vec![1.0, 2.0, 3.0], PlotPlacement::new(), LineStyle::default())
        .expect("line");
    plotter.add_linked_subplot(0.3).expect("linked subplot");
    plotter.add_subplot(0, 1, 1, 1).expect("subplot");

    plotter.start().expect("start");

    let grid = plotter.grid().expect("grid");
    assert_eq!(grid.keys().count(), 1);
    assert_eq!(grid.active_key(), SubplotKey::new(0, 0));
    let active = grid.active().expect("active");
    assert_eq!(active.linked_count(), 1);
    assert!(!active.linked_subplots()[0].has_data());

    // A fresh figure accepts any length again.
    plotter
        .line(vec![1.0; 10], PlotPlacement::new(), LineStyle::default())
        .expect("line after restart");
}

#[test]
fn engine_failure_on_start_keeps_the_grid() {
    let mut plotter = plotter();
    plotter
        .line(vec![1.0, 2.0], PlotPlacement::new(), LineStyle::default())
        .expect("line");
    plotter
        .engine_mut()
        .expect("engine")
        .fail_next_with("window could not be created");

    let err = plotter.start().expect_err("engine failure");
    assert!(matches!(err, PlotError::Engine(_)));
    assert_eq!(err.to_string(), "window could not be created");
    let grid = plotter.grid().expect("grid");
    assert_eq!(grid.active().expect("active").linked_subplots()[0].data_len, Some(2));
}

#[test]
fn invalid_viewport_is_rejected_at_creation() {
    let err = Plotter::<NullEngine>::new(PlotterConfig::new(Viewport::new(0, 600)))
        .err()
        .expect("zero width");
    assert!(matches!(
        err,
        PlotError::InvalidViewport {
            width: 0,
            height: 600
        }
    ));
}
