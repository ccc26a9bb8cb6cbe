use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};
use rallyplot::api::{LineStyle, PlotPlacement, Plotter, PlotterConfig};
use rallyplot::core::{AxisMode, AxisTransition};
use rallyplot::{NullEngine, PlotError};

fn plotter() -> Plotter<NullEngine> {
    Plotter::new(PlotterConfig::default()).expect("plotter init")
}

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

fn utc_times(n: usize) -> Vec<DateTime<Utc>> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 2, 9, 30, 0)
        .single()
        .expect("valid start");
    (0..n)
        .map(|i| start + Duration::minutes(i as i64))
        .collect()
}

fn line_with(
    plotter: &mut Plotter<NullEngine>,
    placement: PlotPlacement,
) -> Result<AxisTransition, PlotError> {
    plotter
        .line(vec![1.0_f32; 3], placement, LineStyle::default())
        .map(|outcome| outcome.axis)
}

#[test]
fn first_plot_without_dates_uses_index() {
    let mut plotter = plotter();
    let transition = line_with(&mut plotter, PlotPlacement::new()).expect("line");
    assert_eq!(transition, AxisTransition::Indexed);

    let grid = plotter.grid().expect("grid");
    let subplot = grid.active().expect("active");
    assert_eq!(subplot.axis, AxisMode::Indexed);
    assert_eq!(subplot.linked_subplots()[0].data_len, Some(3));
}

#[test]
fn string_labels_then_timestamps_fails_naming_string_labels() {
    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3))).expect("strings");

    let err = line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3)))
        .expect_err("timestamps must conflict");
    assert!(matches!(err, PlotError::Value(_)));
    assert!(err.to_string().contains("string labels"), "{err}");
}

#[test]
fn timestamps_then_string_labels_fails_naming_timepoint_labels() {
    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3))).expect("timestamps");

    let err = line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3)))
        .expect_err("strings must conflict");
    assert!(err.to_string().contains("timepoint labels"), "{err}");
}

#[test]
fn same_kind_labels_with_new_values_replace_with_warning() {
    let mut plotter = plotter();
    let first = line_with(&mut plotter, PlotPlacement::new().with_dates(labels("a", 3)))
        .expect("first labels");
    assert_eq!(first, AxisTransition::Committed);

    let second = line_with(&mut plotter, PlotPlacement::new().with_dates(labels("b", 3)))
        .expect("replacement is not an error");
    assert_eq!(second, AxisTransition::Replaced);

    let grid = plotter.grid().expect("grid");
    let subplot = grid.active().expect("active");
    assert_eq!(subplot.axis, AxisMode::StringLabeled(labels("b", 3)));
    assert_eq!(subplot.linked_subplots()[0].series_count, 2);
}

#[test]
fn identical_labels_leave_axis_unchanged() {
    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3))).expect("first");
    let again = line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3)))
        .expect("same labels");
    assert_eq!(again, AxisTransition::Unchanged);
}

#[test]
fn dateless_plot_overlays_labeled_axis() {
    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3))).expect("labels");
    let overlay = line_with(&mut plotter, PlotPlacement::new()).expect("index overlay");
    assert_eq!(overlay, AxisTransition::Unchanged);

    let grid = plotter.grid().expect("grid");
    let subplot = grid.active().expect("active");
    assert_eq!(subplot.axis.label_kind().to_string(), "string");
}

#[test]
fn utc_offset_zero_is_accepted_and_naive_is_rejected() {
    let zero = FixedOffset::east_opt(0).expect("offset");
    let aware: Vec<DateTime<FixedOffset>> = utc_times(3)
        .into_iter()
        .map(|time| time.with_timezone(&zero))
        .collect();
    let naive: Vec<NaiveDateTime> = aware.iter().map(DateTime::naive_utc).collect();

    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(aware)).expect("utc accepted");

    let mut other = Plotter::new(PlotterConfig::default()).expect("plotter init");
    let err = line_with(&mut other, PlotPlacement::new().with_dates(naive))
        .expect_err("naive rejected");
    assert!(err.to_string().contains("must be UTC"), "{err}");
}

#[test]
fn non_zero_offset_is_rejected() {
    let paris = FixedOffset::east_opt(3600).expect("offset");
    let shifted: Vec<DateTime<FixedOffset>> = utc_times(3)
        .into_iter()
        .map(|time| time.with_timezone(&paris))
        .collect();
    let mut plotter = plotter();
    let err = line_with(&mut plotter, PlotPlacement::new().with_dates(shifted))
        .expect_err("offset rejected");
    assert!(err.to_string().contains("must be UTC"), "{err}");
}

#[test]
fn linked_subplots_share_the_x_axis_mode() {
    let mut plotter = plotter();
    line_with(
        &mut plotter,
        PlotPlacement::new().with_dates(labels("d", 3)).on_linked_subplot(0),
    )
    .expect("strings on first");
    let second = plotter.add_linked_subplot(0.3).expect("linked subplot");
    assert_eq!(second, 1);

    let err = line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3)))
        .expect_err("timestamps on the new linked subplot must conflict");
    assert!(err.to_string().contains("string labels"), "{err}");

    let same = line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3)))
        .expect("same labels on the new linked subplot");
    assert_eq!(same, AxisTransition::Unchanged);

    let grid = plotter.grid().expect("grid");
    let subplot = grid.active().expect("active");
    assert_eq!(subplot.axis, AxisMode::StringLabeled(labels("d", 3)));
    assert_eq!(subplot.linked_subplots()[1].series_count, 1);
}

#[test]
fn separate_subplots_keep_their_own_x_axis_mode() {
    let mut plotter = plotter();
    line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3))).expect("strings");
    plotter.add_subplot(1, 0, 1, 1).expect("second subplot");

    let transition = line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3)))
        .expect("timestamps on another subplot");
    assert_eq!(transition, AxisTransition::Committed);
}

#[test]
fn rejected_request_leaves_axis_uncommitted() {
    let mut plotter = plotter();
    plotter
        .engine_mut()
        .expect("engine")
        .fail_next_with("engine refused");

    let err = line_with(&mut plotter, PlotPlacement::new().with_dates(labels("d", 3)))
        .expect_err("engine failure");
    assert!(matches!(err, PlotError::Engine(ref message) if message == "engine refused"));

    let grid = plotter.grid().expect("grid");
    let subplot = grid.active().expect("active");
    assert_eq!(subplot.axis, AxisMode::Unset);
    assert_eq!(subplot.linked_subplots()[0].series_count, 0);

    let transition = line_with(&mut plotter, PlotPlacement::new().with_dates(utc_times(3)))
        .expect("timestamps still accepted");
    assert_eq!(transition, AxisTransition::Committed);
}
