//! embedded-graphics integration
//!
//! Lets the emulator be a [`DrawTarget`] for `embedded-graphics` primitives,
//! text and images, as the `ssd1306` driver crate is on hardware.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::color::Color;
use crate::display::OledDisplay;

impl DrawTarget for OledDisplay {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    /// Plot pixels with explicit colors: `On` sets, `Off` clears. The
    /// display's drawing color is not consulted.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let saved = self.color();
        for Pixel(point, color) in pixels {
            self.set_color(match color {
                BinaryColor::On => Color::White,
                BinaryColor::Off => Color::Black,
            });
            self.set_pixel(point.x, point.y);
        }
        self.set_color(saved);
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buffer_mut().fill(fill);
        Ok(())
    }
}

impl OriginDimensions for OledDisplay {
    fn size(&self) -> Size {
        Size::new(self.plane().width(), self.plane().height())
    }
}
