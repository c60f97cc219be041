//! Monochrome OLED Display Emulator
//!
//! Desktop emulator for SSD1306-class OLED controllers. Reproduces the
//! controller's frame buffer bit for bit so firmware UI code can be developed
//! and checked without hardware.
//!
//! # Layers
//!
//! - [`PixelPlane`] - vertically byte-packed 1bpp buffer (the device's native format)
//! - Drawing primitives on [`OledDisplay`] - Bresenham lines, midpoint circles,
//!   rectangles, XBM and native image blits, progress bars
//! - Fonts - table-driven glyph lookup ([`Font`]), string measurement,
//!   alignment and greedy word wrap
//! - embedded-graphics integration via [`DrawTarget`](embedded_graphics::draw_target::DrawTarget)
//! - PNG export for visual checks
//!
//! # Buffer layout
//!
//! Byte `i`, bit `b` of [`OledDisplay::buffer`] is the pixel at
//! `(i % width, 8 * (i / width) + b)`.
//!
//! # Example
//!
//! ```
//! use oled_emulator::{fonts::FONT_6X8, Color, OledDisplay, TextAlignment};
//! use oled_specs::Geometry;
//!
//! let mut display = OledDisplay::new(Geometry::G128x64);
//! display.set_font(&FONT_6X8);
//!
//! display.draw_rect(0, 0, 128, 64);
//! display.set_text_alignment(TextAlignment::Center);
//! display.draw_string(64, 28, "Hello");
//!
//! display.set_color(Color::Inverse);
//! display.fill_rect(40, 26, 48, 12);
//!
//! assert_eq!(display.buffer_size(), 1024);
//! assert!(display.get_pixel(0, 0));
//! ```

mod color;
pub mod config;
mod display;
mod drawing;
mod error;
mod export;
pub mod font;
pub mod fonts;
mod graphics;
mod plane;
mod text;

pub use color::{Color, TextAlignment};
pub use config::{BoundsPolicy, EmulatorConfig};
pub use display::OledDisplay;
pub use drawing::QuadrantMask;
pub use error::Error;
pub use font::{Font, Glyph};
pub use plane::PixelPlane;

pub use oled_specs::{Geometry, PanelSpec, PanelStyle};
