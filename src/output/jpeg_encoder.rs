//! JPEG output encoder.
//!
//! Baseline JPEG through the `image` crate. JPEG has no alpha channel, so
//! pixels are written as packed RGB.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use image::codecs::jpeg::JpegEncoder as BaselineEncoder;
use image::ExtendedColorType;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// JPEG encoder for framebuffer output.
pub struct JpegEncoder;

impl JpegEncoder {
    /// Encoder quality (1-100).
    pub const QUALITY: u8 = 90;

    /// Write a framebuffer to a JPEG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or JPEG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        Self::encode(fb, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to JPEG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if JPEG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = BaselineEncoder::new_with_quality(sink, Self::QUALITY);
        encoder.encode(&fb.to_rgb_pixels(), fb.width(), fb.height(), ExtendedColorType::Rgb8)?;
        Ok(())
    }
}
