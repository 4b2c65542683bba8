//! Terminal output encoder (ASCII/Unicode/ANSI).
//!
//! Renders a chart framebuffer as terminal text so it can be displayed
//! without a window system:
//! - ASCII: grayscale ramp ` .:-=+*#%@`, stretched over the frame's luminance range
//! - Unicode half-blocks: `▀` with 24-bit fore/background, two pixel rows per line
//! - ANSI true color: one colored cell per sample

use crate::framebuffer::Framebuffer;
use serde::{Deserialize, Serialize};
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalMode {
    /// ASCII grayscale characters (widest compatibility)
    Ascii,
    /// Unicode half-block characters (2x vertical resolution)
    #[default]
    HalfBlock,
    /// Background-colored cells with ANSI 24-bit color
    TrueColor,
}

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    mode: TerminalMode,
    width: Option<u32>,
    height: Option<u32>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// ASCII grayscale ramp from dark to light (10 levels).
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Columns used when no width is set.
    pub const DEFAULT_COLUMNS: u32 = 100;

    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: TerminalMode::default(), width: None, height: None }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the target width in characters.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the target height in lines. If not set, it follows from the width
    /// and the framebuffer aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Render a framebuffer to a string.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        match self.mode {
            TerminalMode::Ascii => self.render_ascii(fb),
            TerminalMode::HalfBlock => self.render_half_block(fb),
            TerminalMode::TrueColor => self.render_true_color(fb),
        }
    }

    fn render_ascii(&self, fb: &Framebuffer) -> String {
        let grid = Grid::new(fb, self.dimensions(fb, 2.0));
        let mut output = String::with_capacity((grid.w + 1) as usize * grid.h as usize);
        let (lo, hi, _) = fb.luminance_stats();
        // A flat frame has no range to stretch; map it absolutely.
        let (lo, span) = if hi - lo < 1.0 { (0.0, 255.0) } else { (lo, hi - lo) };

        for y in 0..grid.h {
            for x in 0..grid.w {
                let (r, g, b) = grid.sample(fb, x, y);
                // Rec. 709 luminance
                let luma = 0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b);
                let level = ((luma - lo) / span).clamp(0.0, 1.0);
                output.push(Self::ASCII_RAMP[Self::luma_to_index(level)]);
            }
            output.push('\n');
        }
        output
    }

    fn render_half_block(&self, fb: &Framebuffer) -> String {
        let (w, h) = self.dimensions(fb, 1.0);
        // Round up to even height for half-blocks
        let grid = Grid::new(fb, (w, (h + 1) & !1));
        let mut output = String::with_capacity((grid.w * 40 + 5) as usize * (grid.h / 2) as usize);

        for y in (0..grid.h).step_by(2) {
            for x in 0..grid.w {
                let top = grid.sample(fb, x, y);
                let bottom = grid.sample(fb, x, y + 1);
                let _ = write!(
                    output,
                    "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m▀",
                    top.0, top.1, top.2, bottom.0, bottom.1, bottom.2
                );
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }

    fn render_true_color(&self, fb: &Framebuffer) -> String {
        let grid = Grid::new(fb, self.dimensions(fb, 2.0));
        let mut output = String::with_capacity((grid.w * 20 + 5) as usize * grid.h as usize);

        for y in 0..grid.h {
            for x in 0..grid.w {
                let (r, g, b) = grid.sample(fb, x, y);
                let _ = write!(output, "\x1b[48;2;{r};{g};{b}m ");
            }
            output.push_str("\x1b[0m\n");
        }
        output
    }

    /// Target grid preserving aspect ratio; `char_aspect` is the
    /// height/width ratio of a terminal cell.
    fn dimensions(&self, fb: &Framebuffer, char_aspect: f32) -> (u32, u32) {
        let fb_aspect = fb.width() as f32 / fb.height() as f32;
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w.max(1), h.max(1)),
            (None, Some(h)) => {
                let w = (h as f32 * fb_aspect * char_aspect).round() as u32;
                (w.max(1), h.max(1))
            }
            (w, None) => {
                let w = w.unwrap_or(Self::DEFAULT_COLUMNS).min(fb.width()).max(1);
                let h = (w as f32 / fb_aspect / char_aspect).round() as u32;
                (w, h.max(1))
            }
        }
    }

    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}

/// Nearest-neighbour sampling grid over a framebuffer.
struct Grid {
    w: u32,
    h: u32,
    scale_x: f32,
    scale_y: f32,
}

impl Grid {
    fn new(fb: &Framebuffer, (w, h): (u32, u32)) -> Self {
        Self {
            w,
            h,
            scale_x: fb.width() as f32 / w as f32,
            scale_y: fb.height() as f32 / h as f32,
        }
    }

    fn sample(&self, fb: &Framebuffer, x: u32, y: u32) -> (u8, u8, u8) {
        let fx = (x as f32 * self.scale_x).min((fb.width() - 1) as f32);
        let fy = (y as f32 * self.scale_y).min((fb.height() - 1) as f32);
        fb.get_pixel(fx as u32, fy as u32).map_or((0, 0, 0), |p| (p.r, p.g, p.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_ascii_render_white() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);
        assert!(output.contains('@'));
        assert!(!output.contains(' '));
    }

    #[test]
    fn test_ascii_render_black() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::BLACK);

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(5).render(&fb);
        assert!(output.chars().filter(|&c| c != '\n').all(|c| c == ' '));
    }

    #[test]
    fn test_ascii_stretches_dark_frame() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::rgb(30, 30, 30));
        fb.fill_rect(0, 0, 5, 10, Rgba::rgb(60, 60, 60));

        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(10).render(&fb);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "@@@@@     ");
    }

    #[test]
    fn test_half_block_contains_ansi() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::DARK_RED);

        let output = TerminalEncoder::new().width(5).render(&fb);
        assert!(output.contains("\x1b[38;2;139;0;0m"));
        assert!(output.contains('▀'));
        assert!(output.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_true_color_contains_escapes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::LIGHT_BLUE);

        let output = TerminalEncoder::new().mode(TerminalMode::TrueColor).width(5).render(&fb);
        assert!(output.contains("48;2;173;216;230"));
    }

    #[test]
    fn test_aspect_ratio_preservation() {
        let fb = Framebuffer::new(200, 100).unwrap();
        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).width(40).render(&fb);

        // 2:1 image, 2:1 cells: 40 columns give 10 lines.
        assert_eq!(output.lines().count(), 10);
    }

    #[test]
    fn test_custom_dimensions() {
        let fb = Framebuffer::new(100, 100).unwrap();
        let output =
            TerminalEncoder::new().mode(TerminalMode::Ascii).width(20).height(10).render(&fb);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].len(), 20);
    }

    #[test]
    fn test_default_width() {
        let fb = Framebuffer::new(1000, 100).unwrap();
        let output = TerminalEncoder::new().mode(TerminalMode::Ascii).render(&fb);
        let first = output.lines().next().unwrap();
        assert_eq!(first.len(), TerminalEncoder::DEFAULT_COLUMNS as usize);
    }

    #[test]
    fn test_mode_names() {
        let mode: TerminalMode = serde_yaml_ng::from_str("true-color").unwrap();
        assert_eq!(mode, TerminalMode::TrueColor);
    }
}
