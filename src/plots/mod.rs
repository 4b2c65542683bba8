//! Histogram renderers.
//!
//! - [`AsciiRenderer`]: fixed-width text for the console and the text dump
//! - [`BarChart`]: raster chart with banded bars and a smoothed trend curve

mod ascii;
mod bar_chart;

pub use ascii::{AsciiRenderer, FILE_HEADER};
pub use bar_chart::{
    trend_curve, trend_knots, Band, BarChart, ChartOptions, Theme, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    MIN_HEIGHT, MIN_WIDTH,
};
