//! Vertically byte-packed 1bpp pixel plane
//!
//! Matches the GDDRAM layout of SSD1306-class controllers: the plane is split
//! into pages of 8 rows, each byte covers one column of a page and bit 0 is the
//! topmost row of that page.

use oled_specs::Geometry;

use crate::color::Color;
use crate::config::BoundsPolicy;
use crate::error::Error;

/// Packed monochrome frame buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPlane {
    geometry: Geometry,
    buffer: Vec<u8>,
    bounds_policy: BoundsPolicy,
    clipped_writes: u64,
}

impl PixelPlane {
    /// Create a zero-filled plane
    pub fn new(geometry: Geometry) -> Self {
        Self::with_bounds_policy(geometry, BoundsPolicy::Silent)
    }

    /// Create a zero-filled plane with an explicit out-of-range policy
    pub fn with_bounds_policy(geometry: Geometry, bounds_policy: BoundsPolicy) -> Self {
        tracing::debug!(
            width = geometry.width(),
            height = geometry.height(),
            bytes = geometry.buffer_size(),
            "Allocating pixel plane"
        );

        Self {
            geometry,
            buffer: vec![0; geometry.buffer_size()],
            bounds_policy,
            clipped_writes: 0,
        }
    }

    /// Create a plane from a geometry key such as `"128x64"`
    pub fn from_key(key: &str) -> Result<Self, Error> {
        let geometry = key
            .parse::<Geometry>()
            .map_err(|_| Error::InvalidGeometry(key.to_string()))?;
        Ok(Self::new(geometry))
    }

    /// Geometry preset of this plane
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Byte index and bit mask of `(x, y)`, or `None` when off-plane.
    // SAFETY: x < width and y < height are checked first, so x + (y / 8) * width
    // is below width * pages == buffer_size.
    #[allow(clippy::arithmetic_side_effects)]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let width = self.geometry.width() as usize;
        if x >= width || y >= self.geometry.height() as usize {
            return None;
        }
        Some((x + (y / 8) * width, 1 << (y & 7)))
    }

    /// Apply `color` to the pixel at `(x, y)`. Off-plane writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        match self.locate(x, y) {
            Some((index, mask)) => {
                if let Some(byte) = self.buffer.get_mut(index) {
                    color.apply(byte, mask);
                }
            }
            None => self.record_clip(x, y),
        }
    }

    /// Turn the pixel at `(x, y)` off
    pub fn clear_pixel(&mut self, x: i32, y: i32) {
        self.set_pixel(x, y, Color::Black);
    }

    /// Whether the pixel at `(x, y)` is lit. Off-plane pixels read as off.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .and_then(|(index, mask)| self.buffer.get(index).map(|byte| byte & mask != 0))
            .unwrap_or(false)
    }

    fn record_clip(&mut self, x: i32, y: i32) {
        if self.bounds_policy == BoundsPolicy::Track {
            self.clipped_writes = self.clipped_writes.saturating_add(1);
            tracing::trace!(x, y, "Dropped off-plane pixel write");
        }
    }

    /// Raw packed buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Mutable raw packed buffer, for uploading a frame verbatim
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Buffer length in bytes (`width * height / 8`)
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Rotate the frame by 180°.
    ///
    /// The byte for column `x` of page `p` moves to column `width - 1 - x` of
    /// page `pages - 1 - p` with its bits reversed. That maps byte index `i` to
    /// `len - 1 - i`, so the new frame is the old one reversed byte-wise with
    /// each byte bit-reversed. Applying it twice restores the original.
    pub fn flip_vertically(&mut self) {
        let flipped: Vec<u8> = self.buffer.iter().rev().map(|b| b.reverse_bits()).collect();
        self.buffer = flipped;
        tracing::trace!(bytes = self.buffer.len(), "Flipped pixel plane");
    }

    /// Number of lit pixels
    pub fn lit_pixel_count(&self) -> u32 {
        self.buffer.iter().map(|b| b.count_ones()).sum()
    }

    /// Out-of-range writes dropped so far (always 0 under [`BoundsPolicy::Silent`])
    pub fn clipped_writes(&self) -> u64 {
        self.clipped_writes
    }

    /// Current out-of-range policy
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds_policy
    }
}
