//! The emulated display: a pixel plane plus the drawing state firmware sets

use oled_specs::{Geometry, PanelSpec};

use crate::color::{Color, TextAlignment};
use crate::config::EmulatorConfig;
use crate::error::Error;
use crate::font::Font;
use crate::plane::PixelPlane;

/// Emulated monochrome OLED display
///
/// Mirrors the drawing API firmware uses on the real controller: a current
/// color, text alignment and font, and drawing calls that plot through them.
/// Drawing calls live in the `drawing` and `text` modules.
#[derive(Debug, Clone)]
pub struct OledDisplay {
    plane: PixelPlane,
    color: Color,
    text_alignment: TextAlignment,
    font: Option<&'static Font>,
    config: EmulatorConfig,
}

impl OledDisplay {
    /// Create a blank display with the default configuration
    pub fn new(geometry: Geometry) -> Self {
        Self::with_config(geometry, EmulatorConfig::default())
    }

    /// Create a blank display with a custom configuration
    pub fn with_config(geometry: Geometry, config: EmulatorConfig) -> Self {
        Self {
            plane: PixelPlane::with_bounds_policy(geometry, config.bounds_policy),
            color: Color::default(),
            text_alignment: TextAlignment::default(),
            font: None,
            config,
        }
    }

    /// Create a blank display from a geometry key such as `"128x32"`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] if the key names no supported geometry.
    pub fn from_key(key: &str) -> Result<Self, Error> {
        let geometry = key
            .parse::<Geometry>()
            .map_err(|_| Error::InvalidGeometry(key.to_string()))?;
        Ok(Self::new(geometry))
    }

    /// Create a blank display matching a panel preset
    pub fn from_panel(panel: &PanelSpec) -> Self {
        tracing::debug!(panel = panel.name, "Creating display from panel preset");
        Self::new(panel.geometry)
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        i32::try_from(self.plane.width()).unwrap_or(i32::MAX)
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        i32::try_from(self.plane.height()).unwrap_or(i32::MAX)
    }

    /// Geometry preset
    pub fn geometry(&self) -> Geometry {
        self.plane.geometry()
    }

    /// Active configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Underlying pixel plane
    pub fn plane(&self) -> &PixelPlane {
        &self.plane
    }

    /// Raw packed frame buffer (see the crate docs for the layout)
    pub fn buffer(&self) -> &[u8] {
        self.plane.buffer()
    }

    /// Mutable raw frame buffer
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.plane.buffer_mut()
    }

    /// Frame buffer length in bytes
    pub fn buffer_size(&self) -> usize {
        self.plane.buffer_size()
    }

    /// Turn every pixel off. Drawing settings are kept.
    pub fn clear(&mut self) {
        self.plane.clear();
    }

    /// Rotate the frame by 180°
    pub fn flip_vertically(&mut self) {
        self.plane.flip_vertically();
    }

    /// Flush hook. The emulator renders straight from the buffer, so this
    /// only marks the frame boundary in traces.
    pub fn display(&self) {
        tracing::trace!(lit = self.plane.lit_pixel_count(), "Frame presented");
    }

    /// Plot `(x, y)` with the current color
    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.plane.set_pixel(x, y, self.color);
    }

    /// Turn `(x, y)` off regardless of the current color
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.plane.clear_pixel(x, y);
    }

    /// Whether `(x, y)` is lit
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.plane.get_pixel(x, y)
    }

    /// Number of lit pixels
    pub fn lit_pixel_count(&self) -> u32 {
        self.plane.lit_pixel_count()
    }

    /// Off-plane writes dropped so far under [`BoundsPolicy::Track`](crate::BoundsPolicy::Track)
    pub fn clipped_writes(&self) -> u64 {
        self.plane.clipped_writes()
    }

    /// Set the drawing color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current drawing color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the text alignment
    pub fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.text_alignment = alignment;
    }

    /// Current text alignment
    pub fn text_alignment(&self) -> TextAlignment {
        self.text_alignment
    }

    /// Set the font used by the text calls
    pub fn set_font(&mut self, font: &'static Font) {
        tracing::debug!(
            height = font.height,
            first_char = font.first_char,
            chars = font.char_count,
            "Font changed"
        );
        self.font = Some(font);
    }

    /// Current font, if one has been set
    pub fn font(&self) -> Option<&'static Font> {
        self.font
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fonts::FONT_6X8;

    #[test]
    fn test_defaults() {
        let display = OledDisplay::new(Geometry::G128x64);
        assert_eq!(display.width(), 128);
        assert_eq!(display.height(), 64);
        assert_eq!(display.color(), Color::White);
        assert_eq!(display.text_alignment(), TextAlignment::Left);
        assert!(display.font().is_none());
        assert_eq!(*display.config(), EmulatorConfig::DEFAULT);
    }

    #[test]
    fn test_from_key() {
        let display = OledDisplay::from_key("128x64").unwrap();
        assert_eq!(display.buffer_size(), 1024);
        assert!(display.buffer().iter().all(|&b| b == 0));

        assert!(matches!(
            OledDisplay::from_key("256x64"),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_from_panel() {
        let display = OledDisplay::from_panel(&oled_specs::presets::ssd130x::SSD1306_128X32_WHITE);
        assert_eq!(display.geometry(), Geometry::G128x32);
        assert_eq!(display.buffer_size(), 512);
    }

    #[test]
    fn test_set_pixel_follows_color() {
        let mut display = OledDisplay::new(Geometry::G64x32);
        display.set_pixel(1, 1);
        assert!(display.get_pixel(1, 1));

        display.set_color(Color::Black);
        display.set_pixel(1, 1);
        assert!(!display.get_pixel(1, 1));

        display.set_color(Color::Inverse);
        display.set_pixel(2, 2);
        assert!(display.get_pixel(2, 2));
        display.clear_pixel(2, 2);
        assert!(!display.get_pixel(2, 2));
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut display = OledDisplay::new(Geometry::G128x64);
        display.set_font(&FONT_6X8);
        display.set_color(Color::Inverse);
        display.set_pixel(0, 0);
        display.clear();
        display.display();
        assert_eq!(display.lit_pixel_count(), 0);
        assert_eq!(display.color(), Color::Inverse);
        assert!(display.font().is_some());
    }
}
