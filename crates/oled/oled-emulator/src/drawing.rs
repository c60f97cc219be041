//! Drawing primitives
//!
//! Everything here plots through [`OledDisplay::set_pixel`], so the current
//! color applies and off-plane pixels are dropped. Horizontal and vertical
//! spans (and therefore rectangles) iterate only over the visible part of the
//! span.

use core::ops::{BitOr, BitOrAssign, Range};

use crate::display::OledDisplay;
use crate::font::Glyph;

/// Set of circle quadrants for [`OledDisplay::draw_circle_quads`]
///
/// Quadrants are named in screen orientation (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct QuadrantMask(u8);

impl QuadrantMask {
    /// No quadrant
    pub const NONE: Self = Self(0);
    /// Upper right arc
    pub const TOP_RIGHT: Self = Self(0x1);
    /// Upper left arc
    pub const TOP_LEFT: Self = Self(0x2);
    /// Lower left arc
    pub const BOTTOM_LEFT: Self = Self(0x4);
    /// Lower right arc
    pub const BOTTOM_RIGHT: Self = Self(0x8);
    /// Full circle
    pub const ALL: Self = Self(0xF);

    /// Mask from raw firmware bits; bits above 0x8 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every quadrant of `other` is in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no quadrant is selected
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for QuadrantMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for QuadrantMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Midpoint circle walk over one octant, from `(r, 0)` until `x < y`.
///
/// Yields `(x, y)` offsets; callers mirror them into the other octants.
struct Octant {
    x: i32,
    y: i32,
    err: i64,
}

impl Octant {
    fn new(radius: i32) -> Self {
        Self {
            x: radius,
            y: 0,
            err: 0,
        }
    }
}

impl Iterator for Octant {
    type Item = (i32, i32);

    // SAFETY: x and y are i32 so 2 * y + 1 and 2 * x + 1 stay far inside i64,
    // and err is bounded by a few multiples of the radius.
    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x < self.y {
            return None;
        }
        let point = (self.x, self.y);

        self.y = self.y.saturating_add(1);
        if self.err <= 0 {
            self.err += 2 * i64::from(self.y) + 1;
        }
        if self.err > 0 {
            self.x = self.x.saturating_sub(1);
            self.err -= 2 * i64::from(self.x) + 1;
        }
        Some(point)
    }
}

/// Visible part of `[start, start + length)` within `[0, limit)`
fn clip_span(start: i32, length: i32, limit: i32) -> Range<i32> {
    let end = start.saturating_add(length.max(0)).min(limit);
    start.max(0)..end
}

impl OledDisplay {
    /// Draw a line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
    ///
    /// Integer Bresenham. Endpoints are put in a fixed order first (lower x,
    /// then lower y) so swapping them plots the same pixels.
    // SAFETY: the walk runs in i64 on i32 inputs, so deltas and 2 * err cannot
    // overflow; plotted coordinates lie between the endpoints and fit i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let (mut x, mut y) = (i64::from(x0), i64::from(y0));

        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.set_pixel(x as i32, y as i32);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw `length` pixels rightwards from `(x, y)`. Nothing is drawn when
    /// row `y` is off-plane.
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, length: i32) {
        if y < 0 || y >= self.height() {
            return;
        }
        for px in clip_span(x, length, self.width()) {
            self.set_pixel(px, y);
        }
    }

    /// Draw `length` pixels downwards from `(x, y)`. Nothing is drawn when
    /// column `x` is off-plane.
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, length: i32) {
        if x < 0 || x >= self.width() {
            return;
        }
        for py in clip_span(y, length, self.height()) {
            self.set_pixel(x, py);
        }
    }

    /// Draw a `width` × `height` rectangle outline with its top left at `(x, y)`
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let right = x.saturating_add(width).saturating_sub(1);
        let bottom = y.saturating_add(height).saturating_sub(1);
        self.draw_horizontal_line(x, y, width);
        self.draw_horizontal_line(x, bottom, width);
        self.draw_vertical_line(x, y, height);
        self.draw_vertical_line(right, y, height);
    }

    /// Fill every pixel of `[x, x + width) × [y, y + height)`
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let rows = clip_span(y, height, self.height());
        for px in clip_span(x, width, self.width()) {
            for py in rows.clone() {
                self.set_pixel(px, py);
            }
        }
    }

    /// Draw a circle outline of `radius` around `(x0, y0)`
    pub fn draw_circle(&mut self, x0: i32, y0: i32, radius: i32) {
        self.draw_circle_quads(x0, y0, radius, QuadrantMask::ALL);
    }

    /// Draw the selected quadrant arcs of a circle outline.
    pub fn draw_circle_quads(&mut self, x0: i32, y0: i32, radius: i32, quads: QuadrantMask) {
        for (x, y) in Octant::new(radius) {
            let (east, west) = (x0.saturating_add(x), x0.saturating_sub(x));
            let (south, north) = (y0.saturating_add(y), y0.saturating_sub(y));
            let (east_near, west_near) = (x0.saturating_add(y), x0.saturating_sub(y));
            let (south_far, north_far) = (y0.saturating_add(x), y0.saturating_sub(x));

            if quads.contains(QuadrantMask::TOP_RIGHT) {
                self.set_pixel(east, north);
                self.set_pixel(east_near, north_far);
            }
            if quads.contains(QuadrantMask::TOP_LEFT) {
                self.set_pixel(west_near, north_far);
                self.set_pixel(west, north);
            }
            if quads.contains(QuadrantMask::BOTTOM_LEFT) {
                self.set_pixel(west, south);
                self.set_pixel(west_near, south_far);
            }
            if quads.contains(QuadrantMask::BOTTOM_RIGHT) {
                self.set_pixel(east_near, south_far);
                self.set_pixel(east, south);
            }
        }
    }

    /// Draw a filled circle of `radius` around `(x0, y0)` as horizontal spans
    pub fn fill_circle(&mut self, x0: i32, y0: i32, radius: i32) {
        for (x, y) in Octant::new(radius) {
            let wide = x.saturating_mul(2).saturating_add(1);
            let narrow = y.saturating_mul(2).saturating_add(1);
            self.draw_horizontal_line(x0.saturating_sub(x), y0.saturating_add(y), wide);
            self.draw_horizontal_line(x0.saturating_sub(y), y0.saturating_add(x), narrow);
            self.draw_horizontal_line(x0.saturating_sub(x), y0.saturating_sub(y), wide);
            self.draw_horizontal_line(x0.saturating_sub(y), y0.saturating_sub(x), narrow);
        }
    }

    /// Draw an XBM bitmap (rows of LSB-first bytes, each row padded to a whole
    /// byte). Only set bits are plotted; bytes past the end of `bits` read as 0.
    // SAFETY: row, col < dimensions that are non-negative i32, so the byte
    // index row * ceil(w / 8) + col / 8 fits usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn draw_xbm(&mut self, x: i32, y: i32, width: i32, height: i32, bits: &[u8]) {
        let width = usize::try_from(width).unwrap_or(0);
        let height = usize::try_from(height).unwrap_or(0);
        let row_bytes = width.div_ceil(8);

        for row in 0..height {
            for col in 0..width {
                let byte = bits.get(row * row_bytes + col / 8).copied().unwrap_or(0);
                if byte & (1 << (col % 8)) != 0 {
                    self.set_pixel(offset(x, col), offset(y, row));
                }
            }
        }
    }

    /// Draw an image in the controller's native vertical packing: byte
    /// `col + page * width` holds 8 rows of column `col`. Rows past `height`
    /// within the last page are drawn too when their bits are set.
    // SAFETY: col < width and page < ceil(height / 8) with non-negative i32
    // dimensions, so every index expression fits usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn draw_fast_image(&mut self, x: i32, y: i32, width: i32, height: i32, image: &[u8]) {
        let width = usize::try_from(width).unwrap_or(0);
        let pages = usize::try_from(height).unwrap_or(0).div_ceil(8);

        for col in 0..width {
            for page in 0..pages {
                let byte = image.get(col + page * width).copied().unwrap_or(0);
                for bit in 0..8 {
                    if byte & (1 << bit) != 0 {
                        self.set_pixel(offset(x, col), offset(y, page * 8 + bit));
                    }
                }
            }
        }
    }

    /// Draw a progress bar: a `width` × `height` outline with the interior
    /// (inset by 2 px) filled proportionally to `progress`, clamped to 0..=100.
    // SAFETY: progress is clamped to 0..=100 and computed in i64, so the
    // product cannot overflow and the quotient fits back into i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    pub fn draw_progress_bar(&mut self, x: i32, y: i32, width: i32, height: i32, progress: i32) {
        let progress = progress.clamp(0, 100);
        self.draw_rect(x, y, width, height);

        let inner = i64::from(width) - 4;
        let fill = (inner * i64::from(progress)).div_euclid(100) as i32;
        self.fill_rect(
            x.saturating_add(2),
            y.saturating_add(2),
            fill,
            height.saturating_sub(4),
        );
    }

    /// Draw a font glyph with its top left at `(x, y)`.
    ///
    /// Glyph data is column-major: each column is `ceil(height / 8)` bytes,
    /// LSB at the top. Bits below the glyph height are ignored.
    pub fn draw_glyph(&mut self, x: i32, y: i32, glyph: &Glyph<'_>) {
        for col in 0..glyph.width {
            for row in 0..glyph.height {
                if glyph.pixel(col, row) {
                    self.set_pixel(
                        x.saturating_add(i32::from(col)),
                        y.saturating_add(i32::from(row)),
                    );
                }
            }
        }
    }
}

/// `origin + delta`, saturating at the i32 range
fn offset(origin: i32, delta: usize) -> i32 {
    origin.saturating_add(i32::try_from(delta).unwrap_or(i32::MAX))
}
