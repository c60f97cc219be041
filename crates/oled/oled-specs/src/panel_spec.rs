//! Panel specification types
//!
//! A panel is a geometry plus the controller that drives it and the cosmetic
//! look of its emitters. The look never influences rendering; it is only
//! consulted when a frame is exported for a human to inspect.

use crate::Geometry;

/// Complete description of an emulated OLED panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelSpec {
    /// Display name (e.g., "SSD1306 0.96\" White")
    pub name: &'static str,

    /// Pixel geometry of the controller RAM
    pub geometry: Geometry,

    /// Display controller chip
    pub controller: Controller,

    /// Emitter colors used when exporting frames
    pub style: PanelStyle,
}

impl PanelSpec {
    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.geometry.height()
    }
}

/// OLED controller chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Controller {
    /// Solomon Systech SSD1306 (128×64 / 128×32 / 96×16 / 64×48)
    SSD1306,
    /// Solomon Systech SSD1309 (2.42" 128×64)
    SSD1309,
    /// Sino Wealth SH1106 (1.3" 128×64, 132-column RAM)
    SH1106,
    /// Sino Wealth SH1107 (128×128 square panels)
    SH1107,
}

/// An RGB emitter color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl PanelColor {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as opaque ARGB (`0xFFRRGGBB`)
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Blend `self` over `base` with `alpha` in `0..=255`.
    // SAFETY: every product is at most 255 * 255 and the sum of both products
    // is 255 * 255, so each channel divides back into u8 range.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub const fn blend_over(self, base: PanelColor, alpha: u8) -> PanelColor {
        let a = alpha as u16;
        let inv = 255 - a;
        PanelColor {
            r: ((self.r as u16 * a + base.r as u16 * inv) / 255) as u8,
            g: ((self.g as u16 * a + base.g as u16 * inv) / 255) as u8,
            b: ((self.b as u16 * a + base.b as u16 * inv) / 255) as u8,
        }
    }
}

/// Cosmetic look of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelStyle {
    /// Color of a lit pixel
    pub foreground: PanelColor,
    /// Color of an unlit pixel
    pub background: PanelColor,
    /// Glow strength (0 = none) bleeding from lit pixels into unlit neighbours
    pub glow: u8,
}

impl PanelStyle {
    /// Plain white-on-black, no glow. Used for golden files.
    pub const MONO: PanelStyle = PanelStyle {
        foreground: PanelColor::new(0xFF, 0xFF, 0xFF),
        background: PanelColor::new(0x00, 0x00, 0x00),
        glow: 0,
    };

    /// Color of an unlit pixel with `lit_neighbours` lit 4-neighbours.
    // SAFETY: glow * lit_neighbours is at most 255 * 4 and is clamped to 255.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub const fn unlit_color(&self, lit_neighbours: u8) -> PanelColor {
        let mut alpha = self.glow as u16 * lit_neighbours as u16;
        if alpha > 255 {
            alpha = 255;
        }
        self.foreground.blend_over(self.background, alpha as u8)
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::MONO
    }
}
