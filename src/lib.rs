//! # Trueno-Hist
//!
//! Equal-width histograms of integer samples, rendered three ways: a
//! fixed-width text chart for the console and a plain-text dump, a summary
//! statistics report, and a PNG or JPEG bar chart with a smoothed trend curve.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) framebuffer stack:
//! charts are rasterized in pure Rust with no plotting backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_hist::prelude::*;
//!
//! let hist = Histogram::build(&[1, 2, 2, 3, 3, 3], 3)?;
//! assert_eq!(hist.counts(), &[1, 2, 3]);
//!
//! println!("{}", AsciiRenderer::render_console(&hist));
//!
//! let png = PngEncoder::to_bytes(&BarChart::from_histogram(&hist).to_framebuffer()?)?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_hist::Error>(())
//! ```
//!
//! ## References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - de Boor, C. (1978). *A Practical Guide to Splines*. Springer.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Equal-width binning.
pub mod histogram;

/// Summary statistics.
pub mod stats;

/// Sample sources (files, typed text, random generation).
pub mod input;

/// Session state and actions.
pub mod session;

/// Cubic spline interpolation.
pub mod spline;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Color types and the chart palette.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Text and raster histogram renderers.
pub mod plots;

/// Rasterization primitives and bitmap text.
pub mod render;

/// Output encoders (PNG, JPEG, terminal) and chart sinks.
pub mod output;

// ============================================================================
// Infrastructure
// ============================================================================

/// YAML configuration.
pub mod config;

/// Debug logging.
pub mod debug;

/// Error types.
pub mod error;

pub use error::{Error, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::histogram::Histogram;
    pub use crate::input::{parse_numbers, read_numbers_file, RandomSpec};
    pub use crate::output::{
        ChartSink, ImageFormat, ImageSink, JpegEncoder, PngBytesSink, PngEncoder, TerminalEncoder,
        TerminalMode, TerminalSink,
    };
    pub use crate::plots::{AsciiRenderer, Band, BarChart, ChartOptions, Theme};
    pub use crate::session::{Action, Outcome, Session};
    pub use crate::stats::Summary;
}
