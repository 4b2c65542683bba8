//! Rendering backends and rasterization.
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: Smooth curve rendering with sub-pixel accuracy
//! - **Bresenham's Line**: Fast non-antialiased axis and tick drawing
//! - **Bitmap text**: 5x7 glyphs for labels and titles
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod primitives;
mod text;

pub use primitives::{draw_line, draw_line_aa, draw_polyline_aa, draw_rect, draw_rect_outline};
pub use text::{draw_text, draw_text_vertical, text_height, text_width, GLYPH_HEIGHT, GLYPH_WIDTH};
