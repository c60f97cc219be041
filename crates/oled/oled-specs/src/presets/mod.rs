//! Pre-configured panel specifications
//!
//! Common OLED modules, grouped by controller family.

pub mod sh110x;
pub mod ssd130x;

pub use sh110x::*;
pub use ssd130x::*;

use crate::PanelSpec;

/// Every built-in panel, in the order a preset picker should list them.
pub const PRESETS: &[PanelSpec] = &[
    SSD1306_128X64_WHITE,
    SSD1306_128X64_BLUE,
    SSD1306_128X64_DUAL,
    SSD1306_128X32_WHITE,
    SSD1306_64X48_WHITE,
    SSD1306_64X32_WHITE,
    SSD1306_96X16_BLUE,
    SSD1309_128X64_WHITE,
    SH1106_128X64_BLUE,
    SH1107_128X128_WHITE,
];

/// Look up a built-in panel by its display name.
pub fn preset_by_name(name: &str) -> Option<&'static PanelSpec> {
    PRESETS.iter().find(|p| p.name == name)
}
