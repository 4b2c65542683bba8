//! Destinations for a rendered chart.
//!
//! The chart renderer produces a [`Framebuffer`]; a [`ChartSink`] decides
//! where it goes. Swapping sinks lets the same chart be saved, shown in a
//! terminal, or captured in memory by tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::format::ImageFormat;
use super::png_encoder::PngEncoder;
use super::terminal::{TerminalEncoder, TerminalMode};
use crate::error::Result;
use crate::framebuffer::Framebuffer;

const COMPONENT: &str = "sink";

/// A destination for a rendered chart.
pub trait ChartSink {
    /// Deliver the framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn present(&mut self, fb: &Framebuffer) -> Result<()>;
}

/// Writes the chart to an image file, PNG or JPEG by extension.
#[derive(Debug, Clone)]
pub struct ImageSink {
    path: PathBuf,
    format: ImageFormat,
}

impl ImageSink {
    /// Create a sink for `path`. A path without an extension gets `.png`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] for an unsupported extension.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let (path, format) = ImageFormat::resolve(path.as_ref())?;
        Ok(Self { path, format })
    }

    /// Target path, extension included.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoding used for the file.
    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }
}

impl ChartSink for ImageSink {
    fn present(&mut self, fb: &Framebuffer) -> Result<()> {
        self.format.write_to_file(fb, &self.path)?;
        crate::info!(COMPONENT, "saved chart to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the encoded PNG in memory.
#[derive(Debug, Default)]
pub struct PngBytesSink {
    bytes: Vec<u8>,
}

impl PngBytesSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Encoded bytes of the last presented chart.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the sink, returning the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl ChartSink for PngBytesSink {
    fn present(&mut self, fb: &Framebuffer) -> Result<()> {
        self.bytes = PngEncoder::to_bytes(fb)?;
        Ok(())
    }
}

/// Prints the chart as terminal text.
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    encoder: TerminalEncoder,
    out: W,
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink writing `mode` output of `columns` width to `out`.
    pub fn new(out: W, mode: TerminalMode, columns: u32) -> Self {
        Self { encoder: TerminalEncoder::new().mode(mode).width(columns), out }
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSink for TerminalSink<W> {
    fn present(&mut self, fb: &Framebuffer) -> Result<()> {
        self.out.write_all(self.encoder.render(fb).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
