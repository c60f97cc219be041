//! Shared layout constants and helpers

/// Height of the small font, shared by the header, the highlights and the row
/// grid
pub const FONT_HEIGHT_SMALL: i32 = 8;

/// Top of each text row: `[zero, first, .., fifth]`.
///
/// Row 0 sits under the header, then rows advance by `font_height - 5`. With
/// the 8 px font the pitch is 3 px, so neighbouring rows overlap.
// SAFETY: font heights are small positive constants; the largest offset is
// below 6 * font_height.
#[allow(clippy::arithmetic_side_effects)]
pub const fn text_positions(font_height: i32) -> [i32; 6] {
    let first = font_height - 1;
    let step = font_height - 5;
    [
        0,
        first,
        first + step,
        first + 2 * step,
        first + 3 * step,
        first + 4 * step,
    ]
}

/// Row grid used by every field-based screen
pub const TEXT_POSITIONS: [i32; 6] = text_positions(FONT_HEIGHT_SMALL);

/// Layout class of a panel, used to pick denser or sparser screen variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ScreenResolution {
    /// 64 px wide or 48 px tall and below
    UltraLow,
    /// Up to 128 px wide
    Low,
    /// Wider than 128 px
    High,
}

impl ScreenResolution {
    /// Classify a panel by its pixel dimensions
    pub const fn determine(width: u32, height: u32) -> Self {
        if width <= 64 || height <= 48 {
            Self::UltraLow
        } else if width > 128 {
            Self::High
        } else {
            Self::Low
        }
    }
}
