//! OLED Screen Testing Utilities
//!
//! Headless assertions for screens drawn on the OLED emulator.
//!
//! # Quick start
//!
//! ```
//! use oled_testing::TestDisplay;
//! use oled_emulator::Geometry;
//! use embedded_graphics::{prelude::*, primitives::Rectangle};
//!
//! let mut t = TestDisplay::new(Geometry::G128x64);
//! t.fill_rect(10, 10, 40, 20);
//!
//! t.assert_pixel(20, 15, true).unwrap();
//! t.assert_region_uniform(Rectangle::new(Point::new(60, 0), Size::new(10, 10)), false)
//!     .unwrap();
//! ```
//!
//! # Golden screenshot testing
//!
//! ```no_run
//! # use oled_testing::TestDisplay;
//! # use oled_emulator::Geometry;
//! # let t = TestDisplay::new(Geometry::G128x64);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/boot.png").unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::path::Path;

use embedded_graphics::primitives::Rectangle;
use image::RgbImage;

pub use oled_emulator::{EmulatorConfig, Geometry, OledDisplay, PanelSpec, PanelStyle};

// ─────────────────────────────────────────────────────────────────────────────
// TestDisplay
// ─────────────────────────────────────────────────────────────────────────────

/// Headless OLED display for screen tests.
///
/// Wraps [`OledDisplay`] at native scale and adds:
/// - Pixel and region assertions
/// - ASCII dumps for readable failure output
/// - Screenshot capture and golden-file comparison
///
/// Derefs to [`OledDisplay`], so every drawing call works directly:
///
/// ```
/// use oled_testing::TestDisplay;
/// use oled_emulator::Geometry;
///
/// let mut t = TestDisplay::new(Geometry::G64x32);
/// t.draw_line(0, 0, 63, 0);
/// assert_eq!(t.lit_pixel_count(), 64);
/// ```
pub struct TestDisplay {
    inner: OledDisplay,
    style: PanelStyle,
}

impl TestDisplay {
    /// Create a headless display with the given geometry and plain
    /// white-on-black export style.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            inner: OledDisplay::with_config(geometry, EmulatorConfig::NATIVE),
            style: PanelStyle::MONO,
        }
    }

    /// Create a headless display sized and styled after a panel preset.
    pub fn with_panel(panel: &PanelSpec) -> Self {
        Self {
            inner: OledDisplay::with_config(panel.geometry, EmulatorConfig::NATIVE),
            style: panel.style,
        }
    }

    /// The style used for screenshots and golden comparison
    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Whether `(x, y)` is lit, or `None` if out of bounds.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<bool> {
        let inside = (0..self.inner.width()).contains(&x) && (0..self.inner.height()).contains(&y);
        inside.then(|| self.inner.get_pixel(x, y))
    }

    /// Render the frame as text, `#` for lit and `.` for dark, one line per row.
    pub fn ascii_art(&self) -> String {
        let mut out = String::new();
        for y in 0..self.inner.height() {
            for x in 0..self.inner.width() {
                out.push(if self.inner.get_pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// ASCII dump of `rect` only, clipped to the display
    pub fn ascii_region(&self, rect: Rectangle) -> String {
        let mut out = String::new();
        for y in rows(rect) {
            for x in columns(rect) {
                match self.pixel_at(x, y) {
                    Some(true) => out.push('#'),
                    Some(false) => out.push('.'),
                    None => {}
                }
            }
            out.push('\n');
        }
        out
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` is lit (`true`) or dark (`false`).
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: i32, y: i32, expected: bool) -> Result<(), String> {
        let actual = self
            .pixel_at(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual != expected {
            Err(format!(
                "assert_pixel({x}, {y}): expected {}, got {}",
                lit_name(expected),
                lit_name(actual)
            ))
        } else {
            Ok(())
        }
    }

    /// Assert that every pixel inside `rect` is lit or every one is dark.
    pub fn assert_region_uniform(&self, rect: Rectangle, lit: bool) -> Result<(), String> {
        for y in rows(rect) {
            for x in columns(rect) {
                self.assert_pixel(x, y, lit).map_err(|e| {
                    format!(
                        "assert_region_uniform failed in {rect:?}: {e}\n{}",
                        self.ascii_region(rect)
                    )
                })?;
            }
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel in the given state.
    pub fn assert_region_contains(&self, rect: Rectangle, lit: bool) -> Result<(), String> {
        let area = u64::from(rect.size.width).saturating_mul(u64::from(rect.size.height));
        let matching = if lit {
            self.count_lit_in(rect)
        } else {
            area.saturating_sub(self.count_lit_in(rect))
        };
        if matching > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {} pixel found in {rect:?}",
                lit_name(lit)
            ))
        }
    }

    /// Count lit pixels inside `rect`. Pixels outside the display count as dark.
    pub fn count_lit_in(&self, rect: Rectangle) -> u64 {
        rows(rect)
            .flat_map(|y| columns(rect).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel_at(x, y) == Some(true))
            .fold(0, |count: u64, _| count.saturating_add(1))
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// The frame as an image at native scale
    pub fn capture(&self) -> RgbImage {
        self.inner.to_image(&self.style, 1)
    }

    /// Save the current frame as a PNG.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        self.inner.screenshot(path, &self.style)?;
        Ok(())
    }

    /// Save the current frame as the golden reference PNG.
    ///
    /// Parent directories are created automatically.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let p = path.as_ref();
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.screenshot(p)
    }

    /// Assert the current frame matches a golden reference PNG exactly.
    ///
    /// Set the `UPDATE_GOLDEN=1` environment variable to **update** the golden
    /// file instead of asserting:
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(&self, golden_path: impl AsRef<Path>) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let current = self.capture();
        let golden = image::open(golden_path)
            .map_err(|e| {
                format!(
                    "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                    golden_path.display()
                )
            })?
            .to_rgb8();

        if current.dimensions() != golden.dimensions() {
            let (cw, ch) = current.dimensions();
            let (gw, gh) = golden.dimensions();
            return Err(format!(
                "Dimension mismatch: screenshot is {cw}×{ch}, golden is {gw}×{gh}"
            ));
        }

        let diff_pixels = current
            .pixels()
            .zip(golden.pixels())
            .filter(|(cp, gp)| cp != gp)
            .fold(0u64, |count, _| count.saturating_add(1));

        if diff_pixels > 0 {
            Err(format!(
                "{diff_pixels} pixels differ from golden '{}'\n{}",
                golden_path.display(),
                self.ascii_art()
            ))
        } else {
            Ok(())
        }
    }

    // ── Emulator access ──────────────────────────────────────────────────────

    /// The wrapped display
    pub fn emulator(&self) -> &OledDisplay {
        &self.inner
    }

    /// The wrapped display, mutably
    pub fn emulator_mut(&mut self) -> &mut OledDisplay {
        &mut self.inner
    }
}

impl std::ops::Deref for TestDisplay {
    type Target = OledDisplay;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl std::ops::DerefMut for TestDisplay {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

fn lit_name(lit: bool) -> &'static str {
    if lit {
        "lit"
    } else {
        "dark"
    }
}

fn columns(rect: Rectangle) -> impl Iterator<Item = i32> {
    let end = rect
        .top_left
        .x
        .saturating_add(i32::try_from(rect.size.width).unwrap_or(i32::MAX));
    rect.top_left.x..end
}

fn rows(rect: Rectangle) -> impl Iterator<Item = i32> {
    let end = rect
        .top_left
        .y
        .saturating_add(i32::try_from(rect.size.height).unwrap_or(i32::MAX));
    rect.top_left.y..end
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };
    use oled_specs::presets::ssd130x::SSD1306_128X32_WHITE;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn pixel_at_default_is_dark() {
        let t = TestDisplay::new(Geometry::G64x32);
        assert_eq!(t.pixel_at(0, 0), Some(false));
        assert_eq!(t.pixel_at(63, 31), Some(false));
    }

    #[test]
    fn pixel_at_out_of_bounds_is_none() {
        let t = TestDisplay::new(Geometry::G64x32);
        assert_eq!(t.pixel_at(64, 0), None);
        assert_eq!(t.pixel_at(0, 32), None);
        assert_eq!(t.pixel_at(-1, 0), None);
    }

    #[test]
    fn with_panel_uses_panel_geometry() {
        let t = TestDisplay::with_panel(&SSD1306_128X32_WHITE);
        assert_eq!(t.width(), 128);
        assert_eq!(t.height(), 32);
        assert_eq!(t.config().scale, 1);
    }

    #[test]
    fn assert_pixel_after_draw() {
        let mut t = TestDisplay::new(Geometry::G64x32);
        Rectangle::new(Point::new(10, 10), Size::new(10, 10))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut *t)
            .unwrap();
        assert!(t.assert_pixel(15, 15, true).is_ok());
        assert!(t.assert_pixel(0, 0, false).is_ok());
        assert!(t.assert_pixel(15, 15, false).is_err());
        assert!(t.assert_pixel(99, 0, false).is_err());
    }

    #[test]
    fn region_assertions() {
        let mut t = TestDisplay::new(Geometry::G64x32);
        t.fill_rect(5, 5, 20, 20);

        let filled = rect(5, 5, 20, 20);
        let empty = rect(30, 5, 10, 10);

        assert!(t.assert_region_uniform(filled, true).is_ok());
        assert!(t.assert_region_contains(filled, true).is_ok());
        assert!(t.assert_region_uniform(empty, false).is_ok());
        assert!(t.assert_region_contains(empty, true).is_err());
        assert!(t.assert_region_contains(rect(0, 0, 10, 10), false).is_ok());
    }

    #[test]
    fn count_lit_in_region() {
        let mut t = TestDisplay::new(Geometry::G64x32);
        t.fill_rect(0, 0, 5, 5);
        assert_eq!(t.count_lit_in(rect(0, 0, 10, 10)), 25);
        assert_eq!(t.count_lit_in(rect(2, 2, 10, 10)), 9);
        assert_eq!(t.count_lit_in(rect(-5, -5, 8, 8)), 9);
    }

    #[test]
    fn ascii_art_marks_lit_pixels() {
        let mut t = TestDisplay::new(Geometry::G64x32);
        t.set_pixel(1, 0);
        let art = t.ascii_art();
        let first = art.lines().next().unwrap();
        assert_eq!(art.lines().count(), 32);
        assert_eq!(first.len(), 64);
        assert!(first.starts_with(".#.."));
        assert_eq!(t.ascii_region(rect(0, 0, 3, 2)), ".#.\n...\n");
    }

    #[test]
    fn golden_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let golden = dir.path().join("nested").join("frame.png");

        let mut t = TestDisplay::new(Geometry::G64x32);
        t.draw_circle(32, 16, 10);
        t.save_golden(&golden).unwrap();
        assert!(t.assert_matches_golden(&golden).is_ok());

        t.set_pixel(0, 0);
        let err = t.assert_matches_golden(&golden).unwrap_err();
        assert!(err.starts_with("1 pixels differ"), "{err}");
    }

    #[test]
    fn golden_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let golden = dir.path().join("small.png");
        TestDisplay::new(Geometry::G64x32).save_golden(&golden).unwrap();

        let t = TestDisplay::new(Geometry::G128x64);
        let err = t.assert_matches_golden(&golden).unwrap_err();
        assert!(err.contains("Dimension mismatch"), "{err}");
    }

    #[test]
    fn missing_golden_reports_hint() {
        let t = TestDisplay::new(Geometry::G64x32);
        let err = t
            .assert_matches_golden("/nonexistent/oled_golden.png")
            .unwrap_err();
        assert!(err.contains("UPDATE_GOLDEN"), "{err}");
    }
}
