use ndarray::{Array1, Array2, s};
use rallyplot::api::{CandlestickStyle, LineStyle, PlotPlacement, Plotter, PlotterConfig};
use rallyplot::core::{AxisLabels, Column, OhlcColumns, Table};
use rallyplot::{NullEngine, PlotError};
use rust_decimal::Decimal;

fn plotter() -> Plotter<NullEngine> {
    Plotter::new(PlotterConfig::default()).expect("plotter init")
}

const RECORDS: &str = r#"[
    {"Date": "2024-01-02T00:00:00Z", "Open": 10.0, "High": 11.0, "Low": 9.5, "Close": 10.5},
    {"Date": "2024-01-03T00:00:00Z", "Open": 10.5, "High": 12.0, "Low": 10.1, "Close": 11.8},
    {"Date": "2024-01-04T00:00:00Z", "Open": 11.8, "High": 11.9, "Low": 10.7, "Close": 10.9}
]"#;

#[test]
fn candlestick_from_json_records_with_timestamp_dates() {
    let table = Table::from_json_records(RECORDS).expect("records");
    let dates = table
        .column("date")
        .expect("date column")
        .parse_rfc3339()
        .expect("rfc3339")
        .to_dates()
        .expect("dates");

    let mut plotter = plotter();
    let outcome = plotter
        .candlestick_from_table(
            &table,
            PlotPlacement::new().with_dates(dates),
            CandlestickStyle::default(),
        )
        .expect("candlestick");
    assert_eq!(outcome.data_len, 3);

    let request = plotter
        .engine()
        .expect("engine")
        .last_plot_request()
        .expect("request");
    assert_eq!(request.buffers[3].as_slice(), &[10.5_f32, 11.8, 10.9]);
    assert!(matches!(
        &request.labels,
        Some(AxisLabels::Timestamps(times)) if times.len() == 3
    ));
}

#[test]
fn missing_ohlc_column_is_named() {
    let table = Table::new()
        .with_column("open", Column::Numeric(vec![1.0]))
        .with_column("high", Column::Numeric(vec![1.0]))
        .with_column("close", Column::Numeric(vec![1.0]));
    let err = plotter()
        .candlestick_from_table(&table, PlotPlacement::new(), CandlestickStyle::default())
        .expect_err("no low column");
    assert_eq!(err.to_string(), "low (or Low) not found in the passed table.");
}

#[test]
fn decimal_columns_are_narrowed_to_f32() {
    let prices = vec![
        Decimal::new(10_125, 2),
        Decimal::new(10_250, 2),
        Decimal::new(9_975, 2),
    ];
    let table = Table::new().with_column("Close", Column::Decimal(prices));
    let mut plotter = plotter();
    plotter
        .line(
            table.column("close").expect("close"),
            PlotPlacement::new(),
            LineStyle::default(),
        )
        .expect("decimal line");
    let request = plotter
        .engine()
        .expect("engine")
        .last_plot_request()
        .expect("request");
    assert_eq!(request.buffers[0].as_slice(), &[101.25_f32, 102.5, 99.75]);
}

#[test]
fn text_columns_cannot_be_plotted_as_values() {
    let table = Table::new().with_column("Close", Column::Text(vec!["1.0".to_owned()]));
    let err = plotter()
        .line(
            table.column("close").expect("close"),
            PlotPlacement::new(),
            LineStyle::default(),
        )
        .expect_err("text column");
    assert!(matches!(err, PlotError::Type(_)));
}

#[test]
fn numeric_columns_cannot_be_dates() {
    let column = Column::Numeric(vec![1.0, 2.0]);
    let err = column.to_dates().expect_err("numeric dates");
    assert_eq!(
        err.to_string(),
        "`dates` must be list of string labels or UTC datetimes."
    );
}

#[test]
fn non_utc_timestamps_in_a_table_are_rejected() {
    let column = Column::Text(vec!["2024-01-02T09:00:00+02:00".to_owned()]);
    let dates = column
        .parse_rfc3339()
        .expect("rfc3339")
        .to_dates()
        .expect("dates");
    let err = plotter()
        .line(
            vec![1.0],
            PlotPlacement::new().with_dates(dates),
            LineStyle::default(),
        )
        .expect_err("offset timestamps");
    assert_eq!(err.to_string(), "`dates` must be UTC datetime.");
}

#[test]
fn ndarray_inputs_must_be_one_dimensional_and_contiguous() {
    let mut plotter = plotter();
    let closes = Array1::from_iter((0..20_i32).map(|i| 100.0 + f64::from(i)));

    let err = plotter
        .line(
            closes.slice(s![..;2]),
            PlotPlacement::new(),
            LineStyle::default(),
        )
        .expect_err("strided view");
    assert!(matches!(err, PlotError::Contiguity(_)));

    let grid = Array2::<f64>::zeros((4, 5));
    let err = plotter
        .line(&grid, PlotPlacement::new(), LineStyle::default())
        .expect_err("two dimensions");
    assert_eq!(
        err.to_string(),
        "shape error: Only one-dimensional data can be displayed on the plot."
    );

    let ohlc = OhlcColumns::new(&closes, &closes, &closes, closes.clone())
        .expect("ndarray candles");
    plotter
        .candlestick(ohlc, PlotPlacement::new(), CandlestickStyle::default())
        .expect("candlestick");
    plotter
        .line(
            closes.slice(s![..]),
            PlotPlacement::new(),
            LineStyle::default(),
        )
        .expect("contiguous view");
}

#[test]
fn empty_and_non_numeric_inputs_are_typed_errors() {
    let mut plotter = plotter();
    let err = plotter
        .line(Vec::<f64>::new(), PlotPlacement::new(), LineStyle::default())
        .expect_err("empty");
    assert!(matches!(err, PlotError::Shape(_)));

    let json = serde_json::json!([1.0, null, 3.0]);
    let err = plotter
        .line(&json, PlotPlacement::new(), LineStyle::default())
        .expect_err("null cell");
    assert!(matches!(err, PlotError::Type(_)));
}
