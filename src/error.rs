//! Error types for trueno-hist operations.
//!
//! Every failure is reported at the point of the failed action and none of
//! them is fatal to a session: the caller may retry with corrected input.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-hist operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No samples to process.
    #[error("no data to process")]
    EmptyInput,

    /// An input line could not be parsed as an integer.
    #[error("line {line}: '{content}' is not an integer")]
    Format {
        /// Line number (1-indexed).
        line: usize,
        /// Offending line, trimmed.
        content: String,
    },

    /// Input file does not exist.
    #[error("input file not found: {0}")]
    NotFound(String),

    /// I/O error (output file unwritable, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid interval count, random bounds, or output settings.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file parse error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// JPEG encoding error.
    #[error("JPEG encoding error: {0}")]
    JpegEncoding(#[from] image::ImageError),

    /// Invalid dimensions for framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
