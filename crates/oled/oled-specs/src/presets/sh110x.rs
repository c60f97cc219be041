//! SH1106 / SH1107 panel specifications

use crate::{Controller, Geometry, PanelColor, PanelSpec, PanelStyle};

/// SH1106 1.3" 128×64, blue emitters
///
/// The controller RAM is 132 columns wide; only the centred 128 are emulated.
pub const SH1106_128X64_BLUE: PanelSpec = PanelSpec {
    name: "SH1106 1.3\" Blue",
    geometry: Geometry::G128x64,
    controller: Controller::SH1106,
    style: PanelStyle {
        foreground: PanelColor::new(0x3E, 0xB8, 0xFF),
        background: PanelColor::new(0x04, 0x06, 0x0A),
        glow: 36,
    },
};

/// SH1107 1.5" 128×128
pub const SH1107_128X128_WHITE: PanelSpec = PanelSpec {
    name: "SH1107 1.5\" White",
    geometry: Geometry::G128x128,
    controller: Controller::SH1107,
    style: PanelStyle {
        foreground: PanelColor::new(0xEE, 0xF2, 0xFF),
        background: PanelColor::new(0x04, 0x04, 0x06),
        glow: 20,
    },
};
