//! Controller geometry presets
//!
//! The fixed set of resolutions an SSD1306-class controller can be configured
//! for. The pixel plane size is derived from the geometry and never changes
//! after construction.

use core::fmt;
use core::str::FromStr;

/// A named `(width, height)` pixel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Geometry {
    /// 128×64, the common 0.96" / 1.3" panel
    #[cfg_attr(feature = "serde", serde(rename = "128x64"))]
    G128x64,
    /// 128×32, 0.91" strip panel
    #[cfg_attr(feature = "serde", serde(rename = "128x32"))]
    G128x32,
    /// 64×48, 0.66" micro panel
    #[cfg_attr(feature = "serde", serde(rename = "64x48"))]
    G64x48,
    /// 64×32, 0.49" micro panel
    #[cfg_attr(feature = "serde", serde(rename = "64x32"))]
    G64x32,
    /// 128×128, square SH1107 panel
    #[cfg_attr(feature = "serde", serde(rename = "128x128"))]
    G128x128,
    /// 96×16, 0.69" bar panel
    #[cfg_attr(feature = "serde", serde(rename = "96x16"))]
    G96x16,
}

impl Geometry {
    /// Every supported geometry, in declaration order.
    pub const ALL: [Geometry; 6] = [
        Geometry::G128x64,
        Geometry::G128x32,
        Geometry::G64x48,
        Geometry::G64x32,
        Geometry::G128x128,
        Geometry::G96x16,
    ];

    /// The string key this geometry is known by (e.g. `"128x64"`).
    pub const fn key(self) -> &'static str {
        match self {
            Geometry::G128x64 => "128x64",
            Geometry::G128x32 => "128x32",
            Geometry::G64x48 => "64x48",
            Geometry::G64x32 => "64x32",
            Geometry::G128x128 => "128x128",
            Geometry::G96x16 => "96x16",
        }
    }

    /// Width in pixels
    pub const fn width(self) -> u32 {
        match self {
            Geometry::G128x64 | Geometry::G128x32 | Geometry::G128x128 => 128,
            Geometry::G64x48 | Geometry::G64x32 => 64,
            Geometry::G96x16 => 96,
        }
    }

    /// Height in pixels
    pub const fn height(self) -> u32 {
        match self {
            Geometry::G128x64 => 64,
            Geometry::G128x32 | Geometry::G64x32 => 32,
            Geometry::G64x48 => 48,
            Geometry::G128x128 => 128,
            Geometry::G96x16 => 16,
        }
    }

    /// Number of 8-pixel pages (byte rows) in the vertical direction.
    pub const fn pages(self) -> u32 {
        self.height() / 8
    }

    /// Size of the vertically packed frame buffer in bytes: `width * height / 8`.
    // SAFETY: largest geometry is 128×128, so width * pages = 2048 fits in u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn buffer_size(self) -> usize {
        (self.width() * self.pages()) as usize
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Geometry {
    type Err = ParseGeometryError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Geometry::ALL
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or(ParseGeometryError)
    }
}

/// Returned when a geometry key does not name a supported preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseGeometryError;

impl fmt::Display for ParseGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized display geometry")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseGeometryError {}
