//! Table-driven bitmap fonts
//!
//! A [`Font`] is a width table plus one blob of glyph bitmaps stored back to
//! back. Glyph positions are derived from the width table on lookup, so
//! fonts are plain `'static` data with no precomputed offsets.

/// Advance used for unknown characters when the font's first width is 0
pub const DEFAULT_FALLBACK_WIDTH: u8 = 4;

/// Bitmap font in the controller library's table format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Glyph height in pixels
    pub height: u8,
    /// Character code of the first glyph
    pub first_char: u32,
    /// Number of glyphs
    pub char_count: u32,
    /// Advance width of each glyph in pixels
    pub widths: &'static [u8],
    /// Glyph bitmaps, column-major, `ceil(height / 8)` bytes per column
    pub data: &'static [u8],
}

impl Font {
    /// Bytes per glyph column
    pub const fn bytes_per_column(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }

    /// Table index of `ch`, or `None` outside the font's range
    pub fn glyph_index(&self, ch: char) -> Option<usize> {
        let index = u32::from(ch).checked_sub(self.first_char)?;
        if index < self.char_count {
            usize::try_from(index).ok()
        } else {
            None
        }
    }

    /// Byte offset of glyph `index` in [`Font::data`]
    pub fn glyph_offset(&self, index: usize) -> usize {
        let columns: usize = self.widths.iter().take(index).map(|&w| usize::from(w)).sum();
        columns.saturating_mul(self.bytes_per_column())
    }

    /// Advance for characters the font does not cover
    pub fn fallback_width(&self) -> u8 {
        match self.widths.first() {
            Some(&width) if width != 0 => width,
            _ => DEFAULT_FALLBACK_WIDTH,
        }
    }

    /// Advance width of `ch`
    pub fn char_width(&self, ch: char) -> u8 {
        self.glyph_index(ch)
            .and_then(|index| self.widths.get(index).copied())
            .unwrap_or_else(|| self.fallback_width())
    }

    /// Bitmap of `ch`, or `None` when the font does not cover it
    pub fn glyph(&self, ch: char) -> Option<Glyph<'static>> {
        let index = self.glyph_index(ch)?;
        let width = *self.widths.get(index)?;
        let start = self.glyph_offset(index);
        let len = usize::from(width).saturating_mul(self.bytes_per_column());
        let end = start.saturating_add(len).min(self.data.len());
        let data: &'static [u8] = self.data.get(start..end).unwrap_or(&[]);

        Some(Glyph {
            width,
            height: self.height,
            data,
        })
    }

    /// Total advance of `text` in pixels
    pub fn string_width(&self, text: &str) -> u32 {
        text.chars()
            .map(|ch| u32::from(self.char_width(ch)))
            .fold(0, u32::saturating_add)
    }
}

/// A single glyph bitmap borrowed from a [`Font`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Width (and advance) in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// Column-major bitmap; missing trailing bytes read as 0
    pub data: &'a [u8],
}

impl Glyph<'_> {
    /// Whether the pixel at column `col`, row `row` is set
    // SAFETY: col, row and bytes-per-column are all below 256, so the index
    // col * bpc + row / 8 fits usize.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn pixel(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let bytes_per_column = usize::from(self.height).div_ceil(8);
        let index = usize::from(col) * bytes_per_column + usize::from(row / 8);
        self.data
            .get(index)
            .is_some_and(|byte| byte & (1 << (row % 8)) != 0)
    }
}
