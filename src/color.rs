//! Color types and the chart palette.
//!
//! Provides the RGBA color representation used by the framebuffer plus the
//! fixed colors of the histogram chart (band fills, outline, trend curve).

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Light blue, fill of low-band bars.
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    /// Yellow, fill of mid-band bars.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Dark red, fill of high-band bars.
    pub const DARK_RED: Self = Self::rgb(139, 0, 0);
    /// Green of the trend curve.
    pub const CURVE_GREEN: Self = Self::rgb(0, 128, 0);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::BLUE.b, 255);
    }

    #[test]
    fn test_band_palette_distinct() {
        assert_ne!(Rgba::LIGHT_BLUE, Rgba::YELLOW);
        assert_ne!(Rgba::YELLOW, Rgba::DARK_RED);
        assert_ne!(Rgba::LIGHT_BLUE, Rgba::DARK_RED);
    }

    #[test]
    fn test_array_roundtrip() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(Rgba::from_array(c.to_array()), c);
        assert_eq!(c.with_alpha(9).a, 9);
    }
}
