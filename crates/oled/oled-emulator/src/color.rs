//! Drawing color and text alignment settings

/// How a plotted pixel changes the target bit
///
/// This is a drawing setting, not a pixel value: the plane only stores on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Set the bit (pixel on)
    #[default]
    White,
    /// Clear the bit (pixel off)
    Black,
    /// Flip the bit
    Inverse,
}

impl Color {
    /// Apply this color to the byte holding the pixel selected by `mask`.
    pub(crate) fn apply(self, byte: &mut u8, mask: u8) {
        match self {
            Color::White => *byte |= mask,
            Color::Black => *byte &= !mask,
            Color::Inverse => *byte ^= mask,
        }
    }
}

/// Horizontal anchoring of `draw_string`-family calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// `x` is the left edge of the text
    #[default]
    Left,
    /// `x` is the horizontal centre of the text
    Center,
    /// `x` is the right edge of the text
    Right,
}
