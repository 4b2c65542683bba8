//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for lines and rectangles.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Pixels outside the framebuffer are skipped.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Two pixels are plotted at each step along the major axis, their
/// intensities weighted by the fractional distance from the ideal line.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    plot_pair(fb, steep, xpxl1, ypxl1, yend, xgap, color);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;
    plot_pair(fb, steep, xpxl2, ypxl2, yend, xgap, color);

    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        if steep {
            plot(fb, ipart, x, color, rfpart(intery));
            plot(fb, ipart + 1, x, color, fpart(intery));
        } else {
            plot(fb, x, ipart, color, rfpart(intery));
            plot(fb, x, ipart + 1, color, fpart(intery));
        }
        intery += gradient;
    }
}

#[inline]
fn plot_pair(fb: &mut Framebuffer, steep: bool, xp: i32, yp: i32, yend: f32, gap: f32, color: Rgba) {
    if steep {
        plot(fb, yp, xp, color, rfpart(yend) * gap);
        plot(fb, yp + 1, xp, color, fpart(yend) * gap);
    } else {
        plot(fb, xp, yp, color, rfpart(yend) * gap);
        plot(fb, xp, yp + 1, color, fpart(yend) * gap);
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity) as u8;
        fb.blend_pixel(x as u32, y as u32, color.with_alpha(alpha));
    }
}

#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Draw a connected anti-aliased polyline.
///
/// Thickness above one pixel is approximated by stacking vertically offset
/// copies of the line.
pub fn draw_polyline_aa(fb: &mut Framebuffer, points: &[Point], thickness: u32, color: Rgba) {
    let thickness = thickness.max(1);
    let half = (thickness - 1) as f32 / 2.0;

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        for t in 0..thickness {
            let offset = t as f32 - half;
            draw_line_aa(fb, p1.x, p1.y + offset, p2.x, p2.y + offset, color);
        }
    }
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a filled rectangle.
pub fn draw_rect(fb: &mut Framebuffer, x: i32, y: i32, width: u32, height: u32, color: Rgba) {
    let x = x.max(0) as u32;
    let y = y.max(0) as u32;
    fb.fill_rect(x, y, width, height, color);
}

/// Draw a rectangle outline.
pub fn draw_rect_outline(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    color: Rgba,
    thickness: u32,
) {
    let thickness = thickness.max(1);
    let x = x.max(0) as u32;
    let y = y.max(0) as u32;

    // Top edge
    fb.fill_rect(x, y, width, thickness, color);
    // Bottom edge
    if height > thickness {
        fb.fill_rect(x, y + height - thickness, width, thickness, color);
    }
    // Left edge
    if height > 2 * thickness {
        fb.fill_rect(x, y + thickness, thickness, height - 2 * thickness, color);
    }
    // Right edge
    if width > thickness && height > 2 * thickness {
        fb.fill_rect(x + width - thickness, y + thickness, thickness, height - 2 * thickness, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_fb() -> Framebuffer {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = white_fb();
        draw_line(&mut fb, 10, 50, 90, 50, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = white_fb();
        draw_line(&mut fb, 10, 10, 90, 90, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = white_fb();
        draw_line(&mut fb, -10, -10, 110, 110, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_aa_darkens_path() {
        let mut fb = white_fb();
        draw_line_aa(&mut fb, 10.0, 50.0, 90.0, 50.0, Rgba::BLACK);

        let pixel = fb.get_pixel(50, 50).unwrap();
        assert!(pixel.r < 255);
    }

    #[test]
    fn test_polyline_thickness() {
        let mut fb = white_fb();
        let pts = [Point::new(10.0, 50.0), Point::new(50.0, 50.0), Point::new(90.0, 50.0)];
        draw_polyline_aa(&mut fb, &pts, 3, Rgba::BLACK);

        assert!(fb.get_pixel(30, 49).unwrap().r < 255);
        assert!(fb.get_pixel(30, 51).unwrap().r < 255);
        assert_eq!(fb.get_pixel(30, 60), Some(Rgba::WHITE));
    }

    #[test]
    fn test_polyline_single_point_noop() {
        let mut fb = white_fb();
        draw_polyline_aa(&mut fb, &[Point::new(5.0, 5.0)], 2, Rgba::BLACK);
        assert_eq!(fb.count_color(Rgba::WHITE), 100 * 100);
    }

    #[test]
    fn test_draw_rect() {
        let mut fb = white_fb();
        draw_rect(&mut fb, 20, 20, 30, 30, Rgba::RED);

        assert_eq!(fb.get_pixel(25, 25), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut fb = white_fb();
        draw_rect_outline(&mut fb, 20, 20, 30, 30, Rgba::RED, 2);

        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(49, 35), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::WHITE));
    }
}
