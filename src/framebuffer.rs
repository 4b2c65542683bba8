//! Core framebuffer for chart rasterization.
//!
//! Provides a SIMD-aligned RGBA pixel buffer. Reductions over the buffer use
//! trueno for SIMD-accelerated vector operations.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Alignment for SIMD operations (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned framebuffer for efficient pixel operations.
///
/// Rows are padded to a 64-byte stride; use [`Framebuffer::to_compact_pixels`]
/// when tightly packed data is required.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_hist::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);
        let pixels = vec![0; stride * (height as usize)];

        Ok(Self { width, height, pixels, stride })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        // 64-byte pattern (16 pixels) for chunked copies
        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for px in p.chunks_exact_mut(4) {
                px.copy_from_slice(&[r, g, b, a]);
            }
            p
        };

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_end = row_start + (self.width as usize) * 4;
            let row = &mut self.pixels[row_start..row_end];

            let mut offset = 0;
            while offset + 64 <= row.len() {
                row[offset..offset + 64].copy_from_slice(&pattern);
                offset += 64;
            }
            for chunk in row[offset..].chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0) as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0) as u8;
        }
    }

    /// Count the pixels exactly matching `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let target = color.to_array();
        (0..self.height)
            .map(|y| {
                let start = (y as usize) * self.stride;
                self.pixels[start..start + (self.width as usize) * 4]
                    .chunks_exact(4)
                    .filter(|px| **px == target[..])
                    .count()
            })
            .sum()
    }

    /// Luminance statistics using SIMD-accelerated reduction.
    ///
    /// The terminal encoder stretches this range over its ASCII ramp.
    /// Returns (min_luminance, max_luminance, avg_luminance).
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        let mut luminances = Vec::with_capacity(self.pixel_count());

        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            for chunk in self.pixels[start..start + (self.width as usize) * 4].chunks_exact(4) {
                // ITU-R BT.709 luminance formula
                let lum = 0.2126 * f32::from(chunk[0])
                    + 0.7152 * f32::from(chunk[1])
                    + 0.0722 * f32::from(chunk[2]);
                luminances.push(lum);
            }
        }

        let vec = Vector::from_vec(luminances);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(255.0);
        let mean = vec.mean().unwrap_or(127.5);

        (min, max, mean)
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// PNG expects tightly-packed rows.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    /// Packed RGB bytes with alpha dropped, for formats without an alpha channel.
    #[must_use]
    pub fn to_rgb_pixels(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.pixel_count() * 3);
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            for px in self.pixels[start..start + (self.width as usize) * 4].chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % SIMD_ALIGNMENT, 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }

    #[test]
    fn test_fill_rect_clamped() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(90, 90, 50, 50, Rgba::RED);

        assert_eq!(fb.get_pixel(95, 95), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_blend_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::WHITE);
        fb.blend_pixel(5, 5, Rgba::new(255, 0, 0, 128));

        let result = fb.get_pixel(5, 5).unwrap();
        assert!(result.r > 200);
        assert!(result.g > 100 && result.g < 200);
    }

    #[test]
    fn test_luminance_stats_uniform() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::rgb(128, 128, 128));

        let (min, max, mean) = fb.luminance_stats();
        assert!((min - max).abs() < 1.0);
        assert!((mean - min).abs() < 1.0);
    }

    #[test]
    fn test_compact_pixels_len() {
        let fb = Framebuffer::new(3, 2).unwrap();
        assert_eq!(fb.to_compact_pixels().len(), 3 * 2 * 4);
    }

    #[test]
    fn test_rgb_pixels_drop_alpha() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::new(10, 20, 30, 40));
        let rgb = fb.to_rgb_pixels();
        assert_eq!(rgb.len(), 3 * 2 * 3);
        assert_eq!(&rgb[..6], &[10, 20, 30, 10, 20, 30]);
    }
}
