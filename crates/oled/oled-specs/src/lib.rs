//! Monochrome OLED Panel Specifications
//!
//! Geometry presets and panel templates for SSD1306-class OLED controllers,
//! used by the emulator to size its pixel plane and by export tooling to skin
//! rendered frames.
//!
//! # Features
//!
//! - **no_std compatible** - Works on embedded systems
//! - **Geometry presets** - The fixed set of controller resolutions (`128x64`, `128x32`, ...)
//! - **Panel templates** - Named panels pairing a geometry with a controller and a look
//! - **Serde support** - Optional serialization for config files
//!
//! # Example
//!
//! ```
//! use oled_specs::Geometry;
//!
//! let geometry: Geometry = "128x64".parse().unwrap();
//! assert_eq!(geometry.width(), 128);
//! assert_eq!(geometry.height(), 64);
//! assert_eq!(geometry.buffer_size(), 1024);
//!
//! assert!("100x100".parse::<Geometry>().is_err());
//! ```
//!
//! # Panel presets
//!
//! ```
//! use oled_specs::presets::{preset_by_name, SSD1306_128X64_WHITE};
//!
//! let panel = preset_by_name("SSD1306 0.96\" White").unwrap();
//! assert_eq!(panel.geometry, SSD1306_128X64_WHITE.geometry);
//! println!("{} uses {:?}", panel.name, panel.controller);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod geometry;
mod panel_spec;
pub mod presets;

pub use geometry::{Geometry, ParseGeometryError};
pub use panel_spec::{Controller, PanelColor, PanelSpec, PanelStyle};
