//! OLED Screen Composer
//!
//! Ready-made firmware screens for the OLED emulator, built only from the
//! drawing and text API of [`oled_emulator::OledDisplay`].
//!
//! # Modules
//!
//! - [`header`] - common header bar with battery gauge and mail indicator
//! - [`layout`] - text row grid and resolution classes
//! - [`icons`] - static XBM and native-layout icon tables
//! - [`records`] - plain data the screens display
//! - [`screens`] - the screen recipes
//!
//! # Example
//!
//! ```
//! use oled_emulator::{Geometry, OledDisplay};
//! use oled_screens::prelude::*;
//!
//! let mut display = OledDisplay::new(Geometry::G128x64);
//! let node = NodeInfo {
//!     short_name: "AB12".into(),
//!     long_name: "Base Camp".into(),
//!     node_id: "!a1b2c3d4".into(),
//!     hops_away: Some(0),
//!     ..NodeInfo::default()
//! };
//! draw_node_info_screen(&mut display, &node);
//! assert!(display.lit_pixel_count() > 0);
//! ```

pub mod header;
pub mod icons;
pub mod layout;
pub mod records;
pub mod screens;

/// Everything needed to compose screens
pub mod prelude {
    pub use crate::header::{draw_common_header, draw_rounded_highlight, HeaderOptions};
    pub use crate::icons::{draw_icon, draw_native_icon, NativeIcon, XbmIcon};
    pub use crate::layout::{text_positions, ScreenResolution, FONT_HEIGHT_SMALL, TEXT_POSITIONS};
    pub use crate::records::*;
    pub use crate::screens::*;
}
