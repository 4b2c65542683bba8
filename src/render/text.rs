//! Bitmap text rendering for chart labels.
//!
//! A fixed 5x7 glyph set covering digits, uppercase letters, and the
//! punctuation used in bucket labels. Lowercase input is drawn uppercase;
//! characters without a glyph advance as blanks.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character (glyph plus one column of spacing).
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Row bitmaps, top to bottom; bit 4 is the leftmost column.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        _ => return None,
    };
    Some(rows)
}

/// Width in pixels of `text` drawn at `scale`.
#[must_use]
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    (n * ADVANCE - 1) * scale.max(1)
}

/// Height in pixels of one line of text at `scale`.
#[must_use]
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale.max(1)
}

/// Draw `text` left-to-right with its top-left corner at `(x, y)`.
pub fn draw_text(fb: &mut Framebuffer, x: i32, y: i32, text: &str, scale: u32, color: Rgba) {
    let scale = scale.max(1);
    let mut pen_x = x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for_each_lit(&rows, |gx, gy| {
                fill_cell(fb, pen_x + (gx * scale) as i32, y + (gy * scale) as i32, scale, color);
            });
        }
        pen_x += (ADVANCE * scale) as i32;
    }
}

/// Draw `text` rotated 90 degrees counter-clockwise (reading bottom-to-top),
/// with the baseline start at `(x, y)`.
pub fn draw_text_vertical(fb: &mut Framebuffer, x: i32, y: i32, text: &str, scale: u32, color: Rgba) {
    let scale = scale.max(1);
    let mut pen_y = y;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for_each_lit(&rows, |gx, gy| {
                let px = x + (gy * scale) as i32;
                let py = pen_y - ((gx + 1) * scale) as i32;
                fill_cell(fb, px, py, scale, color);
            });
        }
        pen_y -= (ADVANCE * scale) as i32;
    }
}

fn for_each_lit(rows: &[u8; 7], mut f: impl FnMut(u32, u32)) {
    for (gy, row) in rows.iter().enumerate() {
        for gx in 0..GLYPH_WIDTH {
            if row & (0x10 >> gx) != 0 {
                f(gx, gy as u32);
            }
        }
    }
}

#[inline]
fn fill_cell(fb: &mut Framebuffer, x: i32, y: i32, scale: u32, color: Rgba) {
    if x < 0 || y < 0 {
        return;
    }
    fb.fill_rect(x as u32, y as u32, scale, scale, color);
}
