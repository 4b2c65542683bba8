//! Output encoders (PNG, JPEG, terminal) and chart sinks.

mod format;
mod jpeg_encoder;
mod png_encoder;
mod sink;
mod terminal;

pub use format::ImageFormat;
pub use jpeg_encoder::JpegEncoder;
pub use png_encoder::PngEncoder;
pub use sink::{ChartSink, ImageSink, PngBytesSink, TerminalSink};
pub use terminal::{TerminalEncoder, TerminalMode};
