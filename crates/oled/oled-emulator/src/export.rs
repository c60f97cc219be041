//! Frame export for visual inspection
//!
//! Converts the 1bpp plane into colored pixels using a [`PanelStyle`]. The
//! style is cosmetic: two displays with equal buffers always export equal
//! images for the same style.

use std::path::Path;

use image::{Rgb, RgbImage};
use oled_specs::{PanelColor, PanelStyle};

use crate::display::OledDisplay;
use crate::error::Error;

impl OledDisplay {
    /// Number of lit 4-neighbours of `(x, y)`
    fn lit_neighbours(&self, x: i32, y: i32) -> u8 {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(|(dx, dy)| self.get_pixel(x.saturating_add(dx), y.saturating_add(dy)))
            .fold(0, |count, lit| if lit { count.saturating_add(1) } else { count })
    }

    fn panel_color(&self, x: i32, y: i32, style: &PanelStyle) -> PanelColor {
        if self.get_pixel(x, y) {
            style.foreground
        } else if style.glow == 0 {
            style.background
        } else {
            style.unlit_color(self.lit_neighbours(x, y))
        }
    }

    /// Row-major ARGB (`0xFFRRGGBB`) rendering of the frame, one word per pixel
    pub fn to_rgba(&self, style: &PanelStyle) -> Vec<u32> {
        let mut pixels = Vec::with_capacity(self.plane().geometry().buffer_size().saturating_mul(8));
        for y in 0..self.height() {
            for x in 0..self.width() {
                pixels.push(self.panel_color(x, y, style).to_argb());
            }
        }
        pixels
    }

    /// Render the frame into an image, each display pixel drawn as a
    /// `scale` × `scale` block. A scale of 0 is treated as 1.
    // SAFETY: width, height and scale are small u32 values (at most 128 x 128
    // pixels); products stay well within u32 for any sensible scale.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn to_image(&self, style: &PanelStyle, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        let width = self.plane().width();
        let height = self.plane().height();

        RgbImage::from_fn(width.saturating_mul(scale), height.saturating_mul(scale), |px, py| {
            let x = i32::try_from(px / scale).unwrap_or(i32::MAX);
            let y = i32::try_from(py / scale).unwrap_or(i32::MAX);
            let color = self.panel_color(x, y, style);
            Rgb([color.r, color.g, color.b])
        })
    }

    /// Save the frame as a PNG, upscaled by the configured scale factor
    ///
    /// # Errors
    ///
    /// [`Error::Export`] when the image cannot be encoded or written.
    pub fn screenshot(&self, path: impl AsRef<Path>, style: &PanelStyle) -> Result<(), Error> {
        let path = path.as_ref();
        let scale = self.config().scale;
        tracing::debug!(path = %path.display(), scale, "Saving screenshot");

        self.to_image(style, scale)
            .save(path)
            .map_err(|e| Error::Export(format!("{}: {}", path.display(), e)))
    }
}
