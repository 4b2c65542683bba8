//! Raster bar chart of a histogram with a smoothed trend curve.
//!
//! Bars are colored by height band relative to the tallest bucket and
//! outlined in black. A green curve runs over the bar centers through
//! `count + sin(i)·max/20 + max/20`, smoothed with a not-a-knot cubic spline.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::histogram::Histogram;
use crate::output::{ChartSink, ImageSink};
use crate::render::{
    draw_line, draw_polyline_aa, draw_rect, draw_rect_outline, draw_text, draw_text_vertical,
    text_height, text_width,
};
use crate::scale::{LinearScale, Scale};
use crate::spline::CubicSpline;

const COMPONENT: &str = "chart";

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 700;

const TITLE: &str = "Histogram with distribution line";
const X_TITLE: &str = "Intervals";
const Y_TITLE: &str = "Frequency";
const LEGEND: &str = "Distribution line";

const MARGIN_LEFT: u32 = 80;
const MARGIN_RIGHT: u32 = 30;
const MARGIN_TOP: u32 = 60;
const MARGIN_BOTTOM: u32 = 100;
const MIN_PLOT_HEIGHT: u32 = 40;

/// Smallest image width that leaves a plot area inside the margins. Bars
/// narrower than a pixel are drawn one pixel wide.
pub const MIN_WIDTH: u32 = MARGIN_LEFT + MARGIN_RIGHT + 1;
/// Smallest image height that leaves a usable plot area.
pub const MIN_HEIGHT: u32 = MARGIN_TOP + MARGIN_BOTTOM + MIN_PLOT_HEIGHT;

/// Fraction of a bucket slot covered by its bar.
const BAR_FILL: f32 = 0.8;
/// Headroom above the tallest bar or curve point.
const HEADROOM: f64 = 1.05;
const CURVE_THICKNESS: u32 = 2;
/// Narrower bars are drawn without an outline so the fill stays visible.
const MIN_OUTLINED_WIDTH: u32 = 3;
/// Most rows x labels are staggered over.
const MAX_LABEL_ROWS: f32 = 4.0;
const MIN_CURVE_SAMPLES: usize = 500;

/// Chart color theme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on white.
    #[default]
    Light,
    /// Light text on charcoal.
    Dark,
}

impl Theme {
    /// Background fill.
    #[must_use]
    pub const fn background(self) -> Rgba {
        match self {
            Self::Light => Rgba::WHITE,
            Self::Dark => Rgba::rgb(30, 30, 30),
        }
    }

    /// Axis and text color.
    #[must_use]
    pub const fn foreground(self) -> Rgba {
        match self {
            Self::Light => Rgba::BLACK,
            Self::Dark => Rgba::rgb(220, 220, 220),
        }
    }

    /// Horizontal grid line color.
    #[must_use]
    pub const fn grid(self) -> Rgba {
        match self {
            Self::Light => Rgba::rgb(225, 225, 225),
            Self::Dark => Rgba::rgb(70, 70, 70),
        }
    }
}

/// Height band of a bar relative to the tallest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// `count <= max/3`
    Low,
    /// `max/3 < count <= 2·max/3`
    Mid,
    /// `count > 2·max/3`
    High,
}

impl Band {
    /// Classify `count` against `max_count`. Ties fall to the lower band.
    #[must_use]
    pub fn classify(count: usize, max_count: usize) -> Self {
        let count = count as f64;
        let max = max_count as f64;
        if count <= max / 3.0 {
            Self::Low
        } else if count <= 2.0 * max / 3.0 {
            Self::Mid
        } else {
            Self::High
        }
    }

    /// Fill color of the band.
    #[must_use]
    pub const fn color(self) -> Rgba {
        match self {
            Self::Low => Rgba::LIGHT_BLUE,
            Self::Mid => Rgba::YELLOW,
            Self::High => Rgba::DARK_RED,
        }
    }
}

/// Where the rendered chart goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOptions {
    /// Save as an image; only `.png` paths are accepted.
    pub save_to: Option<PathBuf>,
    /// Hand the chart to the display sink.
    pub display: bool,
}

/// Trend knots: `sin(i)·max/20 + max/20 + counts[i]`.
#[must_use]
pub fn trend_knots(counts: &[usize]) -> Vec<f64> {
    let max = counts.iter().copied().max().unwrap_or(0) as f64;
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as f64).sin() * max / 20.0 + max / 20.0 + c as f64)
        .collect()
}

/// Smoothed trend curve as `(bucket position, height)` samples.
///
/// Sampled at `max(500, 10·n)` points across `[0, n-1]`; a single bucket is
/// drawn as a short level segment around its center.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `counts` is empty.
pub fn trend_curve(counts: &[usize]) -> Result<Vec<(f64, f64)>> {
    let spline = CubicSpline::uniform(&trend_knots(counts))?;
    let n = counts.len();
    let samples = MIN_CURVE_SAMPLES.max(10 * n);
    let (from, to) = if n > 1 { spline.domain() } else { (-0.4, 0.4) };
    Ok(spline.sample(from, to, samples))
}

/// Bar chart builder over a built histogram.
#[derive(Debug, Clone)]
pub struct BarChart {
    counts: Vec<usize>,
    labels: Vec<String>,
    width: u32,
    height: u32,
    theme: Theme,
}

/// Pixel geometry of a chart.
#[derive(Debug, Clone, Copy)]
struct Layout {
    plot: Rect,
    x: LinearScale,
    y: LinearScale,
    y_top: f64,
}

impl BarChart {
    /// Create a chart of `hist` at the default size and theme.
    #[must_use]
    pub fn from_histogram(hist: &Histogram) -> Self {
        Self {
            counts: hist.counts().to_vec(),
            labels: hist.labels(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            theme: Theme::default(),
        }
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the color theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Band of every bar, in bucket order.
    #[must_use]
    pub fn bands(&self) -> Vec<Band> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        self.counts.iter().map(|&c| Band::classify(c, max)).collect()
    }

    /// Pixel rectangle of bar `index`, or `None` if out of range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the chart is too small.
    pub fn bar_rect(&self, index: usize) -> Result<Option<Rect>> {
        let layout = self.layout()?;
        Ok(self.counts.get(index).map(|&count| self.bar_geometry(&layout, index, count)))
    }

    /// Render into an existing framebuffer of the chart's size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the chart is too small for its
    /// bars or `fb` has a different size.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        crate::time_scope!(COMPONENT, format!("render {}x{}", self.width, self.height));

        if fb.width() != self.width || fb.height() != self.height {
            return Err(Error::InvalidDimensions { width: fb.width(), height: fb.height() });
        }
        let layout = self.layout()?;
        let fg = self.theme.foreground();

        fb.clear(self.theme.background());
        self.draw_grid(fb, &layout);
        self.draw_bars(fb, &layout);

        // Axes
        let (left, bottom) = (layout.plot.x as i32, layout.plot.bottom() as i32);
        draw_line(fb, left, layout.plot.y as i32, left, bottom, fg);
        draw_line(fb, left, bottom, layout.plot.right() as i32, bottom, fg);

        self.draw_x_labels(fb, &layout);
        self.draw_titles(fb, &layout);
        self.draw_curve(fb, &layout)?;
        self.draw_legend(fb, &layout);
        Ok(())
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// See [`BarChart::render`].
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render, save when `options.save_to` is set, and hand the image to
    /// `display` when `options.display` is set.
    ///
    /// The save path is validated before anything is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a save path that is not PNG or
    /// JPEG, and any rendering, encoding, or I/O error from the sinks.
    pub fn present(
        &self,
        options: &ChartOptions,
        display: &mut dyn ChartSink,
    ) -> Result<Framebuffer> {
        let mut file = options.save_to.as_deref().map(ImageSink::new).transpose()?;
        let fb = self.to_framebuffer()?;

        if let Some(sink) = file.as_mut() {
            sink.present(&fb)?;
        }
        if options.display {
            display.present(&fb)?;
        }
        Ok(fb)
    }

    fn layout(&self) -> Result<Layout> {
        let n = self.counts.len().max(1) as u32;
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }

        let plot = Rect::new(
            MARGIN_LEFT as f32,
            MARGIN_TOP as f32,
            (self.width - MARGIN_LEFT - MARGIN_RIGHT) as f32,
            (self.height - MARGIN_TOP - MARGIN_BOTTOM) as f32,
        );

        let max_count = self.counts.iter().copied().max().unwrap_or(0) as f64;
        let curve_max = trend_knots(&self.counts).into_iter().fold(0.0, f64::max);
        let y_top = (max_count.max(curve_max) * HEADROOM).max(1.0);

        let x = LinearScale::new((-0.5, n as f32 - 0.5), (plot.x, plot.right()))?;
        let y = LinearScale::new((0.0, y_top as f32), (plot.bottom(), plot.y))?;
        Ok(Layout { plot, x, y, y_top })
    }

    fn slot_width(&self, layout: &Layout) -> f32 {
        layout.plot.width / self.counts.len().max(1) as f32
    }

    fn bar_geometry(&self, layout: &Layout, index: usize, count: usize) -> Rect {
        let slot = self.slot_width(layout);
        let bar_w = (slot * BAR_FILL).max(1.0);
        let center = layout.x.scale(index as f32);
        let top = layout.y.scale(count as f32);
        Rect::new(center - bar_w / 2.0, top, bar_w, layout.plot.bottom() - top)
    }

    fn draw_grid(&self, fb: &mut Framebuffer, layout: &Layout) {
        let fg = self.theme.foreground();
        let step = tick_step(layout.y_top);
        let left = layout.plot.x as i32;

        let mut value = 0u64;
        while value as f64 <= layout.y_top {
            let y = layout.y.scale(value as f32).round() as i32;
            if value > 0 {
                draw_line(fb, left + 1, y, layout.plot.right() as i32, y, self.theme.grid());
            }
            draw_line(fb, left - 5, y, left, y, fg);

            let label = value.to_string();
            let lx = left - 8 - text_width(&label, 1) as i32;
            draw_text(fb, lx, y - (text_height(1) / 2) as i32, &label, 1, fg);
            value += step;
        }
    }

    fn draw_bars(&self, fb: &mut Framebuffer, layout: &Layout) {
        for ((index, &count), band) in self.counts.iter().enumerate().zip(self.bands()) {
            if count == 0 {
                continue;
            }
            let rect = self.bar_geometry(layout, index, count);
            let (x, y) = (rect.x.round() as i32, rect.y.round() as i32);
            let w = rect.width.round().max(1.0) as u32;
            let h = (layout.plot.bottom().round() as i32 - y).max(1) as u32;

            draw_rect(fb, x, y, w, h, band.color());
            if w >= MIN_OUTLINED_WIDTH {
                draw_rect_outline(fb, x, y, w, h, Rgba::BLACK, 1);
            }
        }
    }

    fn draw_x_labels(&self, fb: &mut Framebuffer, layout: &Layout) {
        let fg = self.theme.foreground();
        let slot = self.slot_width(layout);
        let widest = self.labels.iter().map(|l| text_width(l, 1)).max().unwrap_or(0);
        let needed = (widest as f32 + 6.0) / slot;
        // Stagger labels over several rows when they are wider than a slot,
        // and label only every `every`-th bucket when even that overlaps.
        let rows = needed.ceil().clamp(1.0, MAX_LABEL_ROWS) as usize;
        let every = (needed / MAX_LABEL_ROWS).ceil().max(1.0) as usize;
        let top = layout.plot.bottom() as i32 + 8;

        for (nth, (index, label)) in self.labels.iter().enumerate().step_by(every).enumerate() {
            let center = layout.x.scale(index as f32);
            let x = center as i32 - (text_width(label, 1) / 2) as i32;
            let y = top + ((nth % rows) as u32 * (text_height(1) + 4)) as i32;
            draw_text(fb, x, y, label, 1, fg);
        }
    }

    fn draw_titles(&self, fb: &mut Framebuffer, layout: &Layout) {
        let fg = self.theme.foreground();
        let center_x = layout.plot.center().x as i32;

        let title_x = center_x - (text_width(TITLE, 3) / 2) as i32;
        draw_text(fb, title_x, 20, TITLE, 3, fg);

        let x_title_y = self.height as i32 - 30;
        draw_text(fb, center_x - (text_width(X_TITLE, 2) / 2) as i32, x_title_y, X_TITLE, 2, fg);

        let y_title_y = layout.plot.center().y as i32 + (text_width(Y_TITLE, 2) / 2) as i32;
        draw_text_vertical(fb, 20, y_title_y, Y_TITLE, 2, fg);
    }

    fn draw_curve(&self, fb: &mut Framebuffer, layout: &Layout) -> Result<()> {
        let points: Vec<Point> = trend_curve(&self.counts)?
            .into_iter()
            .map(|(x, y)| Point::new(layout.x.scale(x as f32), layout.y.scale(y as f32)))
            .collect();
        crate::trace!(COMPONENT, "trend curve with {} points", points.len());
        draw_polyline_aa(fb, &points, CURVE_THICKNESS, Rgba::CURVE_GREEN);
        Ok(())
    }

    fn draw_legend(&self, fb: &mut Framebuffer, layout: &Layout) {
        const SWATCH: u32 = 24;
        const PAD: u32 = 8;

        let fg = self.theme.foreground();
        let w = PAD + SWATCH + PAD + text_width(LEGEND, 1) + PAD;
        let h = text_height(1) + 2 * PAD;
        let x = layout.plot.right() as i32 - w as i32 - 10;
        let y = layout.plot.y as i32 + 10;

        draw_rect(fb, x, y, w, h, self.theme.background());
        draw_rect_outline(fb, x, y, w, h, fg, 1);

        let line_y = (y + (h / 2) as i32) as f32;
        let x0 = (x + PAD as i32) as f32;
        let swatch = [Point::new(x0, line_y), Point::new(x0 + SWATCH as f32, line_y)];
        draw_polyline_aa(fb, &swatch, CURVE_THICKNESS, Rgba::CURVE_GREEN);

        let text_x = x + (PAD + SWATCH + PAD) as i32;
        draw_text(fb, text_x, y + PAD as i32, LEGEND, 1, fg);
    }
}

/// Integer tick spacing giving at most ~8 ticks: 1, 2, or 5 times a power of 10.
fn tick_step(y_top: f64) -> u64 {
    let raw = (y_top / 8.0).max(1.0);
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);
    step.max(1.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PngBytesSink;

    fn chart(samples: &[i64], k: usize) -> BarChart {
        BarChart::from_histogram(&Histogram::build(samples, k).unwrap())
    }

    fn is_curve_green(px: Rgba) -> bool {
        i32::from(px.g) > i32::from(px.r) + 60 && i32::from(px.g) > i32::from(px.b) + 60
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(Band::classify(3, 9), Band::Low);
        assert_eq!(Band::classify(4, 9), Band::Mid);
        assert_eq!(Band::classify(6, 9), Band::Mid);
        assert_eq!(Band::classify(7, 9), Band::High);
        assert_eq!(Band::classify(3, 10), Band::Low);
        assert_eq!(Band::classify(4, 10), Band::Mid);
        assert_eq!(Band::classify(7, 10), Band::High);
        assert_eq!(Band::classify(0, 10), Band::Low);
    }

    #[test]
    fn test_band_ties_fall_low() {
        assert_eq!(Band::classify(1, 3), Band::Low);
        assert_eq!(Band::classify(2, 3), Band::Mid);
        assert_eq!(Band::classify(3, 3), Band::High);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(Band::Low.color(), Rgba::LIGHT_BLUE);
        assert_eq!(Band::Mid.color(), Rgba::YELLOW);
        assert_eq!(Band::High.color(), Rgba::DARK_RED);
    }

    #[test]
    fn test_equal_counts_all_high() {
        let samples: Vec<i64> = (1..=10).collect();
        let chart = chart(&samples, 10);
        assert!(chart.bands().iter().all(|&b| b == Band::High));

        let fb = chart.to_framebuffer().unwrap();
        assert!(fb.count_color(Rgba::DARK_RED) > 0);
        assert_eq!(fb.count_color(Rgba::LIGHT_BLUE), 0);
        assert_eq!(fb.count_color(Rgba::YELLOW), 0);
    }

    #[test]
    fn test_bar_fill_matches_band() {
        // counts [1, 5, 9]
        let mut samples = vec![0];
        samples.extend([5; 5]);
        samples.extend([10; 9]);
        let chart = chart(&samples, 3);
        assert_eq!(chart.bands(), vec![Band::Low, Band::Mid, Band::High]);

        let fb = chart.to_framebuffer().unwrap();
        for (i, band) in chart.bands().into_iter().enumerate() {
            let rect = chart.bar_rect(i).unwrap().unwrap();
            let px = fb.get_pixel(rect.x as u32 + 4, rect.bottom() as u32 - 3).unwrap();
            assert_eq!(px, band.color(), "bar {i}");
        }
    }

    #[test]
    fn test_bars_are_outlined() {
        let chart = chart(&[1, 2, 3, 3], 3);
        let fb = chart.to_framebuffer().unwrap();
        let rect = chart.bar_rect(2).unwrap().unwrap();
        let left_edge = fb.get_pixel(rect.x.round() as u32, rect.bottom() as u32 - 3).unwrap();
        assert_eq!(left_edge, Rgba::BLACK);
    }

    #[test]
    fn test_taller_bar_is_taller() {
        let chart = chart(&[1, 9, 9, 9], 2);
        let short = chart.bar_rect(0).unwrap().unwrap();
        let tall = chart.bar_rect(1).unwrap().unwrap();
        assert!(tall.height > short.height * 2.5);
        assert!(chart.bar_rect(2).unwrap().is_none());
    }

    #[test]
    fn test_curve_is_drawn() {
        let fb = chart(&[1, 2, 2, 3, 3, 3, 4, 4, 5], 5).to_framebuffer().unwrap();
        let mut green = 0;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y).is_some_and(is_curve_green) {
                    green += 1;
                }
            }
        }
        assert!(green > 500, "only {green} curve pixels");
    }

    #[test]
    fn test_single_bucket_renders() {
        let fb = chart(&[5, 5, 5], 1).to_framebuffer().unwrap();
        assert!(fb.count_color(Rgba::DARK_RED) > 0);
    }

    #[test]
    fn test_theme_background() {
        let fb = chart(&[1, 2, 3], 3).theme(Theme::Dark).to_framebuffer().unwrap();
        assert_eq!(fb.get_pixel(2, 2), Some(Theme::Dark.background()));
        let fb = chart(&[1, 2, 3], 3).to_framebuffer().unwrap();
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_too_small_rejected() {
        let err = chart(&[1, 2, 3], 3).dimensions(100, 100).to_framebuffer().unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_render_size_mismatch() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        assert!(chart(&[1, 2], 2).render(&mut fb).is_err());
    }

    #[test]
    fn test_trend_knots() {
        let knots = trend_knots(&[0, 20]);
        assert!((knots[0] - 1.0).abs() < 1e-12);
        assert!((knots[1] - (1f64.sin() + 1.0 + 20.0)).abs() < 1e-12);
    }

    #[test]
    fn test_trend_curve_samples() {
        let curve = trend_curve(&[1; 10]).unwrap();
        assert_eq!(curve.len(), 500);
        assert_eq!(curve[0].0, 0.0);
        assert_eq!(curve[499].0, 9.0);

        assert_eq!(trend_curve(&[1; 80]).unwrap().len(), 800);
        assert!(trend_curve(&[]).is_err());
    }

    #[test]
    fn test_present_display_only() {
        let mut display = PngBytesSink::new();
        let options = ChartOptions { save_to: None, display: true };
        chart(&[1, 2, 3], 3).present(&options, &mut display).unwrap();
        assert!(!display.bytes().is_empty());
    }

    #[test]
    fn test_present_saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let mut display = PngBytesSink::new();
        let options = ChartOptions { save_to: Some(path.clone()), display: false };

        chart(&[1, 2, 3], 3).present(&options, &mut display).unwrap();
        assert!(path.exists());
        assert!(display.bytes().is_empty());
    }

    #[test]
    fn test_present_saves_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.jpg");
        let mut display = PngBytesSink::new();
        let options = ChartOptions { save_to: Some(path.clone()), display: true };

        chart(&[1, 2, 3], 3).present(&options, &mut display).unwrap();
        assert_eq!(&std::fs::read(&path).unwrap()[0..3], &[0xFF, 0xD8, 0xFF]);
        assert!(!display.bytes().is_empty());
    }

    #[test]
    fn test_present_rejects_unknown_format_before_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.gif");
        let mut display = PngBytesSink::new();
        let options = ChartOptions { save_to: Some(path.clone()), display: true };
        let err = chart(&[1, 2, 3], 3).present(&options, &mut display).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(display.bytes().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_thousand_buckets_render() {
        let samples: Vec<i64> = (0..2000).collect();
        let chart = chart(&samples, 1000);
        let fb = chart.to_framebuffer().unwrap();
        assert_eq!((fb.width(), fb.height()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(fb.count_color(Rgba::DARK_RED) > 0);

        let first = chart.bar_rect(0).unwrap().unwrap();
        let last = chart.bar_rect(999).unwrap().unwrap();
        assert!(first.width >= 1.0);
        assert!(last.right() <= (DEFAULT_WIDTH - MARGIN_RIGHT) as f32 + 1.0);
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(5.0), 1);
        assert_eq!(tick_step(20.0), 5);
        assert_eq!(tick_step(100.0), 20);
        assert_eq!(tick_step(1000.0), 200);
    }

    #[test]
    fn test_theme_names() {
        let theme: Theme = serde_yaml_ng::from_str("dark").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
