//! Common header bar: title, battery gauge and unread-mail indicator

use oled_emulator::fonts::FONT_6X8;
use oled_emulator::{Color, OledDisplay, TextAlignment};

use crate::icons::{self, draw_icon};
use crate::layout::FONT_HEIGHT_SMALL;

/// The header is drawn one pixel below the requested origin
pub const HEADER_OFFSET_Y: i32 = 1;

/// Row under a non-inverted header
pub const HEADER_RULE_Y: i32 = 14;

/// Header decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeaderOptions {
    /// White bar with black title instead of a rule under the title
    pub inverted: bool,
    /// Battery level in percent, clamped to 100
    pub battery_percent: u8,
    /// Show the charging bolt instead of the level
    pub is_charging: bool,
    /// External power present (shows the USB icon unless charging)
    pub has_usb: bool,
    /// Show the mail icon at the right edge
    pub has_unread_message: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            inverted: true,
            battery_percent: 75,
            is_charging: false,
            has_usb: false,
            has_unread_message: false,
        }
    }
}

impl HeaderOptions {
    /// Default header showing `percent` battery
    pub fn battery(percent: u8) -> Self {
        Self {
            battery_percent: percent,
            ..Self::default()
        }
    }
}

/// Fill a `w` × `h` box with corners rounded by radius `r`.
///
/// Built from three rectangles and four filled corner circles in the current
/// color.
pub fn draw_rounded_highlight(display: &mut OledDisplay, x: i32, y: i32, w: i32, h: i32, r: i32) {
    let inner_w = w.saturating_sub(r.saturating_mul(2));
    let inner_h = h.saturating_sub(r.saturating_mul(2));
    let right = x.saturating_add(w);
    let bottom = y.saturating_add(h);

    display.fill_rect(x.saturating_add(r), y, inner_w, h);
    display.fill_rect(x, y.saturating_add(r), r, inner_h);
    display.fill_rect(right.saturating_sub(r), y.saturating_add(r), r, inner_h);

    let left_cx = x.saturating_add(r).saturating_add(1);
    let right_cx = right.saturating_sub(r).saturating_sub(1);
    let top_cy = y.saturating_add(r);
    let bottom_cy = bottom.saturating_sub(r).saturating_sub(1);
    display.fill_circle(left_cx, top_cy, r);
    display.fill_circle(right_cx, top_cy, r);
    display.fill_circle(left_cx, bottom_cy, r);
    display.fill_circle(right_cx, bottom_cy, r);
}

/// Draw the header bar spanning the full display width.
///
/// Leaves the display with left alignment and white color.
pub fn draw_common_header(
    display: &mut OledDisplay,
    x: i32,
    y: i32,
    title: &str,
    options: &HeaderOptions,
) {
    let y = y.saturating_add(HEADER_OFFSET_Y);
    let screen_w = display.width();

    display.set_font(&FONT_6X8);
    display.set_color(Color::White);
    if options.inverted {
        draw_rounded_highlight(display, x, y, screen_w, FONT_HEIGHT_SMALL - 1, 2);
        display.set_color(Color::Black);
    } else {
        display.draw_line(0, HEADER_RULE_Y, screen_w, HEADER_RULE_Y);
    }

    display.set_text_alignment(TextAlignment::Center);
    display.draw_string(screen_w / 2, y, title);
    display.set_color(Color::White);

    draw_battery(display, options);

    if options.has_unread_message {
        let mail_x = screen_w
            .saturating_sub(i32::from(icons::MAIL.width))
            .saturating_sub(2);
        draw_icon(display, mail_x, y.saturating_add(2), &icons::MAIL);
    }

    display.set_text_alignment(TextAlignment::Left);
    display.set_color(Color::White);
}

/// Battery gauge at the left edge, anchored to the display top
// SAFETY: battery_percent is clamped to 100, so 8 * percent / 100 is at most
// 8 and every coordinate is a small constant offset.
#[allow(clippy::arithmetic_side_effects)]
fn draw_battery(display: &mut OledDisplay, options: &HeaderOptions) {
    let battery_x = 1;
    let battery_y = HEADER_OFFSET_Y + 1;

    if options.has_usb && !options.is_charging {
        draw_icon(display, battery_x + 1, battery_y + 2, &icons::USB);
        return;
    }

    draw_icon(display, battery_x, battery_y, &icons::BATTERY_VERTICAL);
    if options.is_charging {
        draw_icon(display, battery_x + 1, battery_y + 3, &icons::LIGHTNING_BOLT_VERTICAL);
    } else {
        draw_icon(display, battery_x - 1, battery_y + 4, &icons::BATTERY_SIDEGAPS);
        let fill_height = 8 * i32::from(options.battery_percent.min(100)) / 100;
        let fill_y = battery_y - fill_height + 10;
        display.fill_rect(battery_x + 1, fill_y, 5, fill_height);
    }
}
