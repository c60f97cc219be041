//! Panel Preset Example
//!
//! Lists the built-in panel presets with their geometry and frame size.
//!
//! Run with: cargo run -p oled-specs --example preset_info

#![allow(missing_docs)]

use oled_specs::presets::PRESETS;

fn main() {
    println!("{:<28} {:>8} {:>7}  controller", "panel", "geometry", "bytes");
    println!("{}", "-".repeat(60));
    for panel in PRESETS {
        println!(
            "{:<28} {:>8} {:>7}  {:?}",
            panel.name,
            panel.geometry.key(),
            panel.geometry.buffer_size(),
            panel.controller
        );
    }
}
