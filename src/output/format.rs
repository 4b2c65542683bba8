//! Raster image formats for saved charts.

use std::path::{Path, PathBuf};

use super::jpeg_encoder::JpegEncoder;
use super::png_encoder::PngEncoder;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// File format of a saved chart, chosen from the path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// `.png`, lossless RGBA.
    Png,
    /// `.jpg` / `.jpeg`, lossy RGB.
    Jpeg,
}

impl ImageFormat {
    /// Extension appended to paths that have none.
    pub const DEFAULT_EXTENSION: &'static str = "png";

    /// Format for `path`, matched case-insensitively. A path without an
    /// extension is PNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming an unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let Some(ext) = path.extension() else {
            return Ok(Self::Png);
        };
        let ext = ext.to_string_lossy();
        if ext.eq_ignore_ascii_case("png") {
            Ok(Self::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Ok(Self::Jpeg)
        } else {
            Err(Error::InvalidConfig(format!(
                "unsupported image format '.{ext}', expected .png, .jpg or .jpeg"
            )))
        }
    }

    /// Path the chart is written to plus its format; `.png` is appended when
    /// `path` has no extension.
    ///
    /// # Errors
    ///
    /// See [`ImageFormat::from_path`].
    pub fn resolve(path: &Path) -> Result<(PathBuf, Self)> {
        let format = Self::from_path(path)?;
        let resolved = if path.extension().is_none() {
            path.with_extension(Self::DEFAULT_EXTENSION)
        } else {
            path.to_path_buf()
        };
        Ok((resolved, format))
    }

    /// Encode `fb` to `path` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or encoding fails.
    pub fn write_to_file(self, fb: &Framebuffer, path: &Path) -> Result<()> {
        match self {
            Self::Png => PngEncoder::write_to_file(fb, path),
            Self::Jpeg => JpegEncoder::write_to_file(fb, path),
        }
    }
}
