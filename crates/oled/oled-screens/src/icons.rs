//! Icon tables
//!
//! Most icons are XBM: row-major, LSB-first bitmaps with each row padded to a
//! whole byte, the format firmware passes to `drawXbm`. Draw them with
//! [`draw_icon`]. A few small glyphs are stored in the controller's native
//! page layout instead (one byte per column per 8-row page) and go through
//! [`draw_native_icon`].

use oled_emulator::OledDisplay;

/// A static XBM bitmap with its dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XbmIcon {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// Packed rows, `ceil(width / 8)` bytes each
    pub bits: &'static [u8],
}

impl XbmIcon {
    /// Bytes per row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Draw `icon` with its top left at `(x, y)` in the display's current color
pub fn draw_icon(display: &mut OledDisplay, x: i32, y: i32, icon: &XbmIcon) {
    display.draw_xbm(x, y, i32::from(icon.width), i32::from(icon.height), icon.bits);
}

/// A static bitmap in native page layout, as taken by `drawFastImage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeIcon {
    /// Width in pixels
    pub width: u8,
    /// Height in pixels
    pub height: u8,
    /// One byte per column for each page, bit 0 at the top of the page
    pub bits: &'static [u8],
}

impl NativeIcon {
    /// Number of 8-row pages
    pub const fn pages(&self) -> usize {
        (self.height as usize).div_ceil(8)
    }
}

/// Draw a native-layout `icon` with its top left at `(x, y)`
pub fn draw_native_icon(display: &mut OledDisplay, x: i32, y: i32, icon: &NativeIcon) {
    display.draw_fast_image(x, y, i32::from(icon.width), i32::from(icon.height), icon.bits);
}

/// GPS satellite
pub const SATELLITE: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[
        0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0001_1000, 0b1101_1011, 0b1111_1111,
        0b1101_1011, 0b0001_1000,
    ],
};

/// USB plug, shown instead of the battery while on external power
pub const USB: XbmIcon = XbmIcon {
    width: 10,
    height: 8,
    bits: &[
        0x00, 0xfc, 0xf0, 0xfc, 0x88, 0xff, 0x86, 0xfe, 0x85, 0xfe, 0x89, 0xff, 0xf1, 0xfc, 0x00,
        0xfc,
    ],
};

/// Power plug, lying on its side
pub const POWER: NativeIcon = NativeIcon {
    width: 16,
    height: 8,
    bits: &[
        0x40, 0x40, 0x40, 0x58, 0x48, 0x08, 0x08, 0x08, 0x1c, 0x22, 0x22, 0x41, 0x7f, 0x22, 0x22,
        0x22,
    ],
};

/// User
pub const USER: NativeIcon = NativeIcon {
    width: 8,
    height: 8,
    bits: &[0x3c, 0x42, 0x99, 0xa5, 0xa5, 0x99, 0x42, 0x3c],
};

/// Position arrow, outline
pub const POSITION_EMPTY: NativeIcon = NativeIcon {
    width: 6,
    height: 8,
    bits: &[0x20, 0x30, 0x28, 0x24, 0x42, 0xff],
};

/// Position arrow, filled
pub const POSITION_SOLID: NativeIcon = NativeIcon {
    width: 6,
    height: 8,
    bits: &[0x20, 0x30, 0x38, 0x3c, 0x7e, 0xff],
};

/// Unread mail envelope drawn in the header
#[rustfmt::skip]
pub const MAIL: XbmIcon = XbmIcon {
    width: 10,
    height: 7,
    bits: &[
        0b1111_1111, 0b00,
        0b1000_0001, 0b00,
        0b1100_0011, 0b00,
        0b1010_0101, 0b00,
        0b1001_1001, 0b00,
        0b1000_0001, 0b00,
        0b1111_1111, 0b00,
    ],
};

/// Hop count
pub const HOP: XbmIcon = XbmIcon {
    width: 9,
    height: 10,
    bits: &[
        0x05, 0x00, 0x07, 0x00, 0x05, 0x00, 0x38, 0x00, 0x28, 0x00, 0x38, 0x00, 0xc0, 0x01, 0x40,
        0x01, 0xc0, 0x01, 0x40, 0x00,
    ],
};

/// Square mail envelope for menus
pub const MAIL_SQUARE: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[
        0b1111_1111,
        0b1000_0001,
        0b1100_0011,
        0b1010_0101,
        0b1001_1001,
        0b1000_0001,
        0b1000_0001,
        0b1111_1111,
    ],
};

/// Compass rose
pub const COMPASS: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[0x3c, 0x52, 0x91, 0x91, 0x91, 0x81, 0x42, 0x3c],
};

/// Radio waves
pub const RADIO: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[0x0f, 0x10, 0x27, 0x48, 0x93, 0xa4, 0xa8, 0xa9],
};

/// Settings cog
pub const SYSTEM: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[0x24, 0x3c, 0xc3, 0x5a, 0x5a, 0xc3, 0x3c, 0x24],
};

/// WiFi
pub const WIFI: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[
        0b0000_0000, 0b0001_1000, 0b0011_1100, 0b0111_1110, 0b1101_1011, 0b0001_1000,
        0b0001_1000, 0b0000_0000,
    ],
};

/// Node list
pub const NODES: XbmIcon = XbmIcon {
    width: 8,
    height: 8,
    bits: &[0xf9, 0x00, 0xf9, 0x00, 0xf9, 0x00, 0xf9, 0x00],
};

/// Upright battery outline with an open window for the fill level
pub const BATTERY_VERTICAL: XbmIcon = XbmIcon {
    width: 7,
    height: 11,
    bits: &[
        0b0001_1100, 0b0011_1110, 0b0100_0001, 0b0100_0001, 0b0000_0000, 0b0000_0000,
        0b0000_0000, 0b0100_0001, 0b0100_0001, 0b0100_0001, 0b0011_1110,
    ],
};

/// Side walls closing the battery window when showing a level
pub const BATTERY_SIDEGAPS: XbmIcon = XbmIcon {
    width: 8,
    height: 3,
    bits: &[0b1000_0010, 0b1000_0010, 0b1000_0010],
};

/// Charging bolt for the upright battery
pub const LIGHTNING_BOLT_VERTICAL: XbmIcon = XbmIcon {
    width: 5,
    height: 5,
    bits: &[0b0000_0100, 0b0000_0110, 0b0001_1111, 0b0000_1100, 0b0000_0100],
};

/// Lower half of the sideways battery
pub const BATTERY_HORIZONTAL_BOTTOM: XbmIcon = XbmIcon {
    width: 9,
    height: 13,
    bits: &[
        0b0001_1110, 0, 0b0000_0001, 0, 0b0000_0001, 0, 0b0000_0001, 0, 0b0000_0001, 0,
        0b0000_0001, 0, 0b0000_0001, 0, 0b0000_0001, 0, 0b0000_0001, 0, 0b0000_0001, 0,
        0b0000_0001, 0, 0b0000_0001, 0, 0b0001_1110, 0,
    ],
};

/// Upper half of the sideways battery, with the terminal nub
pub const BATTERY_HORIZONTAL_TOP: XbmIcon = XbmIcon {
    width: 9,
    height: 13,
    bits: &[
        0b0011_1100, 0, 0b0100_0000, 0, 0b0100_0000, 0, 0b0100_0000, 0, 0b0100_0000, 0,
        0b1100_0000, 0, 0b1100_0000, 0, 0b1100_0000, 0, 0b0100_0000, 0, 0b0100_0000, 0,
        0b0100_0000, 0, 0b0100_0000, 0, 0b0011_1100, 0,
    ],
};

/// Charging bolt for the sideways battery
pub const LIGHTNING_BOLT_HORIZONTAL: XbmIcon = XbmIcon {
    width: 9,
    height: 13,
    bits: &[
        0b0000_0000, 0, 0b0010_0000, 0, 0b0011_0000, 0, 0b0011_1000, 0, 0b0011_1100, 0,
        0b0001_1110, 0, 0b1111_1111, 0, 0b0111_1000, 0, 0b0011_1100, 0, 0b0001_1100, 0,
        0b0000_1100, 0, 0b0000_0100, 0, 0b0000_0000, 0,
    ],
};

/// Signal strength bars, indexed by bar count (0 to 4)
pub static SIGNAL_BARS: [XbmIcon; 5] = [
    XbmIcon {
        width: 12,
        height: 8,
        bits: &[0; 16],
    },
    XbmIcon {
        width: 12,
        height: 8,
        bits: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0b11, 0, 0b11, 0],
    },
    XbmIcon {
        width: 12,
        height: 8,
        bits: &[0, 0, 0, 0, 0, 0, 0, 0, 0b1100, 0, 0b1100, 0, 0b1111, 0, 0b1111, 0],
    },
    XbmIcon {
        width: 12,
        height: 8,
        bits: &[
            0, 0, 0, 0, 0b11_0000, 0, 0b11_0000, 0, 0b11_1100, 0, 0b11_1100, 0, 0b11_1111, 0,
            0b11_1111, 0,
        ],
    },
    XbmIcon {
        width: 12,
        height: 8,
        bits: &[
            0b1100_0000, 0, 0b1100_0000, 0, 0b1111_0000, 0, 0b1111_0000, 0, 0b1111_1100, 0,
            0b1111_1100, 0, 0b1111_1111, 0, 0b1111_1111, 0,
        ],
    },
];

/// Signal bars icon for a 0-4 bar strength; values above 4 show full bars
pub fn signal_bars(strength: u8) -> &'static XbmIcon {
    match strength {
        0 => &SIGNAL_BARS[0],
        1 => &SIGNAL_BARS[1],
        2 => &SIGNAL_BARS[2],
        3 => &SIGNAL_BARS[3],
        _ => &SIGNAL_BARS[4],
    }
}

/// 32x32 mesh logo for the boot screen
#[rustfmt::skip]
pub const LOGO: XbmIcon = XbmIcon {
    width: 32,
    height: 32,
    bits: &[
        0x00, 0x00, 0x00, 0x00, 0x00, 0xfc, 0x3f, 0x00, 0x00, 0x06, 0x60, 0x00,
        0x00, 0x03, 0xc0, 0x00, 0x80, 0x01, 0x80, 0x01, 0xc0, 0x00, 0x00, 0x03,
        0x60, 0x00, 0x00, 0x06, 0x30, 0x00, 0x00, 0x0c, 0x18, 0xf8, 0x1f, 0x18,
        0x08, 0x04, 0x20, 0x10, 0x0c, 0x02, 0x40, 0x30, 0x04, 0x01, 0x80, 0x20,
        0x06, 0x01, 0x80, 0x60, 0x02, 0xe1, 0x87, 0x40, 0x02, 0x11, 0x88, 0x40,
        0x03, 0x09, 0x90, 0xc0, 0x03, 0x09, 0x90, 0xc0, 0x02, 0x11, 0x88, 0x40,
        0x02, 0xe1, 0x87, 0x40, 0x06, 0x01, 0x80, 0x60, 0x04, 0x01, 0x80, 0x20,
        0x0c, 0x02, 0x40, 0x30, 0x08, 0x04, 0x20, 0x10, 0x18, 0xf8, 0x1f, 0x18,
        0x30, 0x00, 0x00, 0x0c, 0x60, 0x00, 0x00, 0x06, 0xc0, 0x00, 0x00, 0x03,
        0x80, 0x01, 0x80, 0x01, 0x00, 0x03, 0xc0, 0x00, 0x00, 0x06, 0x60, 0x00,
        0x00, 0xfc, 0x3f, 0x00, 0x00, 0x00, 0x00, 0x00,
    ],
};

/// Bluetooth rune
pub const BLUETOOTH: XbmIcon = XbmIcon {
    width: 8,
    height: 11,
    bits: &[
        0b0000_0000, 0b1000_0100, 0b0100_1010, 0b0010_1010, 0b0001_0100, 0b1111_1111,
        0b0001_0100, 0b0010_1010, 0b0100_1010, 0b1000_0100, 0b0000_0000,
    ],
};

/// Location pin
pub const GPS_PIN: XbmIcon = XbmIcon {
    width: 8,
    height: 12,
    bits: &[
        0b0011_1100, 0b0111_1110, 0b1111_1111, 0b1110_0111, 0b1110_0111, 0b1111_1111,
        0b0111_1110, 0b0011_1100, 0b0001_1000, 0b0001_1000, 0b0000_1000, 0b0000_0000,
    ],
};

/// Chat bubble
pub const MESSAGE: XbmIcon = XbmIcon {
    width: 10,
    height: 8,
    bits: &[
        0b1111_1111, 0b00, 0b1000_0001, 0b00, 0b1000_0001, 0b00, 0b1000_0001, 0b00,
        0b1000_0001, 0b00, 0b1111_1111, 0b00, 0b0000_0110, 0b00, 0b0000_0010, 0b00,
    ],
};

/// Every XBM icon with a stable name, for previews
pub const ALL: &[(&str, XbmIcon)] = &[
    ("satellite", SATELLITE),
    ("usb", USB),
    ("mail", MAIL),
    ("hop", HOP),
    ("mail_square", MAIL_SQUARE),
    ("compass", COMPASS),
    ("radio", RADIO),
    ("system", SYSTEM),
    ("wifi", WIFI),
    ("nodes", NODES),
    ("battery_vertical", BATTERY_VERTICAL),
    ("battery_sidegaps", BATTERY_SIDEGAPS),
    ("lightning_bolt_vertical", LIGHTNING_BOLT_VERTICAL),
    ("battery_horizontal_bottom", BATTERY_HORIZONTAL_BOTTOM),
    ("battery_horizontal_top", BATTERY_HORIZONTAL_TOP),
    ("lightning_bolt_horizontal", LIGHTNING_BOLT_HORIZONTAL),
    ("logo", LOGO),
    ("bluetooth", BLUETOOTH),
    ("gps_pin", GPS_PIN),
    ("message", MESSAGE),
];

/// Every native-layout icon with a stable name
pub const NATIVE: &[(&str, NativeIcon)] = &[
    ("power", POWER),
    ("user", USER),
    ("position_empty", POSITION_EMPTY),
    ("position_solid", POSITION_SOLID),
];

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use oled_emulator::Geometry;

    #[test]
    fn test_tables_match_dimensions() {
        let bars = SIGNAL_BARS.iter().map(|icon| ("signal_bars", *icon));
        for (name, icon) in ALL.iter().copied().chain(bars) {
            assert_eq!(
                icon.bits.len(),
                icon.row_bytes() * usize::from(icon.height),
                "{name} has the wrong byte count"
            );
        }
    }

    #[test]
    fn test_native_tables_match_dimensions() {
        for (name, icon) in NATIVE {
            assert_eq!(
                icon.bits.len(),
                usize::from(icon.width) * icon.pages(),
                "{name} has the wrong byte count"
            );
        }
    }

    #[test]
    fn test_position_arrow_is_column_major() {
        let mut display = OledDisplay::new(Geometry::G128x64);
        draw_native_icon(&mut display, 0, 0, &POSITION_SOLID);

        // Columns hold 1, 2, 3, 4, 6 and 8 lit pixels
        assert_eq!(display.lit_pixel_count(), 24);
        assert!(display.get_pixel(0, 5));
        assert!(!display.get_pixel(0, 4));
        assert!(display.get_pixel(4, 1));
        assert!(!display.get_pixel(4, 0));
        assert!((0..8).all(|y| display.get_pixel(5, y)));

        let mut fast = OledDisplay::new(Geometry::G128x64);
        fast.draw_fast_image(0, 0, 6, 8, POSITION_SOLID.bits);
        assert_eq!(display.buffer(), fast.buffer());
    }

    #[test]
    fn test_draw_icon() {
        let mut display = OledDisplay::new(Geometry::G128x64);
        draw_icon(&mut display, 10, 10, &MAIL_SQUARE);
        // Rows: 8 + 2 + 4 + 4 + 4 + 2 + 2 + 8
        assert!(display.get_pixel(10, 10));
        assert!(display.get_pixel(17, 17));
        assert!(!display.get_pixel(18, 10));
        assert_eq!(display.lit_pixel_count(), 34);
    }

    #[test]
    fn test_signal_bars_saturate() {
        assert_eq!(signal_bars(0), &SIGNAL_BARS[0]);
        assert_eq!(signal_bars(9), &SIGNAL_BARS[4]);
    }
}
