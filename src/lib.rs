//! rallyplot: validation and axis-reconciliation facade for a native plotting engine.
//!
//! The crate normalizes caller data (numeric arrays, date labels, colors and
//! option groups) into well-formed requests for an external engine that draws
//! candlestick, line, bar and scatter plots. Rendering itself lives behind the
//! [`engine::PlotEngine`] trait; [`engine::NullEngine`] is a headless stand-in.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;
pub mod telemetry;

pub use api::{PlotOutcome, PlotPlacement, Plotter, PlotterConfig, SharedPlotter};
pub use engine::{NullEngine, PlotEngine};
pub use error::{PlotError, PlotResult};
