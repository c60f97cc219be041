//! SSD1306 / SSD1309 panel specifications
//!
//! Colors are measured from typical module photos, not datasheets.

use crate::{Controller, Geometry, PanelColor, PanelSpec, PanelStyle};

const BLACK: PanelColor = PanelColor::new(0x05, 0x05, 0x08);

const WHITE_STYLE: PanelStyle = PanelStyle {
    foreground: PanelColor::new(0xF2, 0xF6, 0xFF),
    background: BLACK,
    glow: 24,
};

const BLUE_STYLE: PanelStyle = PanelStyle {
    foreground: PanelColor::new(0x4F, 0xC3, 0xFF),
    background: BLACK,
    glow: 32,
};

/// SSD1306 0.96" 128×64, white emitters
///
/// The reference panel for most firmware UIs.
pub const SSD1306_128X64_WHITE: PanelSpec = PanelSpec {
    name: "SSD1306 0.96\" White",
    geometry: Geometry::G128x64,
    controller: Controller::SSD1306,
    style: WHITE_STYLE,
};

/// SSD1306 0.96" 128×64, blue emitters
pub const SSD1306_128X64_BLUE: PanelSpec = PanelSpec {
    name: "SSD1306 0.96\" Blue",
    geometry: Geometry::G128x64,
    controller: Controller::SSD1306,
    style: BLUE_STYLE,
};

/// SSD1306 0.96" 128×64, yellow header strip over blue body
///
/// The export style only carries one foreground; the yellow band is a
/// physical filter over the top 16 rows and is approximated with amber.
pub const SSD1306_128X64_DUAL: PanelSpec = PanelSpec {
    name: "SSD1306 0.96\" Yellow/Blue",
    geometry: Geometry::G128x64,
    controller: Controller::SSD1306,
    style: PanelStyle {
        foreground: PanelColor::new(0xFF, 0xD2, 0x4A),
        background: BLACK,
        glow: 28,
    },
};

/// SSD1306 0.91" 128×32 strip
pub const SSD1306_128X32_WHITE: PanelSpec = PanelSpec {
    name: "SSD1306 0.91\" White",
    geometry: Geometry::G128x32,
    controller: Controller::SSD1306,
    style: WHITE_STYLE,
};

/// SSD1306 0.66" 64×48 (Wemos D1 mini shield)
pub const SSD1306_64X48_WHITE: PanelSpec = PanelSpec {
    name: "SSD1306 0.66\" White",
    geometry: Geometry::G64x48,
    controller: Controller::SSD1306,
    style: WHITE_STYLE,
};

/// SSD1306 0.49" 64×32
pub const SSD1306_64X32_WHITE: PanelSpec = PanelSpec {
    name: "SSD1306 0.49\" White",
    geometry: Geometry::G64x32,
    controller: Controller::SSD1306,
    style: WHITE_STYLE,
};

/// SSD1306 0.69" 96×16 bar
pub const SSD1306_96X16_BLUE: PanelSpec = PanelSpec {
    name: "SSD1306 0.69\" Blue",
    geometry: Geometry::G96x16,
    controller: Controller::SSD1306,
    style: BLUE_STYLE,
};

/// SSD1309 2.42" 128×64
pub const SSD1309_128X64_WHITE: PanelSpec = PanelSpec {
    name: "SSD1309 2.42\" White",
    geometry: Geometry::G128x64,
    controller: Controller::SSD1309,
    style: PanelStyle {
        foreground: PanelColor::new(0xFF, 0xFF, 0xFF),
        background: BLACK,
        glow: 16,
    },
};
