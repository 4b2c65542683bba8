//! Fixed-width text rendering of a histogram.
//!
//! Each bucket is a three-character column. Rows run from the tallest count
//! down to 1 and print ` * ` where the bucket reaches that height; the last
//! line lists the ` lower-upper ` labels.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::histogram::Histogram;

const COMPONENT: &str = "ascii";

const FILLED: &str = " * ";
const EMPTY: &str = "   ";

/// Header line of the file dump.
pub const FILE_HEADER: &str = "Histogram:";

/// Text renderer for the console and the plain-text dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    /// Render the bar rows and the label row.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_hist::histogram::Histogram;
    /// use trueno_hist::plots::AsciiRenderer;
    ///
    /// let hist = Histogram::build(&[1, 2, 2], 2).unwrap();
    /// assert_eq!(AsciiRenderer::render(&hist), "    * \n *  * \n 1-1  1-2 \n");
    /// ```
    #[must_use]
    pub fn render(hist: &Histogram) -> String {
        let counts = hist.counts();
        let rows = hist.max_count();
        let mut out = String::with_capacity((rows + 1) * (counts.len() * FILLED.len() + 1));

        for y in (1..=rows).rev() {
            for &count in counts {
                out.push_str(if count >= y { FILLED } else { EMPTY });
            }
            out.push('\n');
        }
        for bucket in hist.buckets() {
            let _ = write!(out, " {}-{} ", bucket.lower, bucket.upper);
        }
        out.push('\n');
        out
    }

    /// Console header `Min: <min>, Max: <max>, Step: <step>`.
    #[must_use]
    pub fn header(hist: &Histogram) -> String {
        format!("Min: {}, Max: {}, Step: {:?}", hist.min_value(), hist.max_value(), hist.step())
    }

    /// Header followed by the rendering, as printed to the console.
    #[must_use]
    pub fn render_console(hist: &Histogram) -> String {
        format!("{}\n{}", Self::header(hist), Self::render(hist))
    }

    /// Write the text dump (`Histogram:` header plus rendering) to `path`,
    /// replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be written.
    pub fn write_to_file(hist: &Histogram, path: &Path) -> Result<()> {
        let text = format!("{FILE_HEADER}\n{}", Self::render(hist));
        fs::write(path, text)?;
        crate::info!(COMPONENT, "wrote text histogram to {}", path.display());
        Ok(())
    }
}
