//! Screen recipes
//!
//! Each recipe clears the display and lays out a header, text rows from
//! [`TEXT_POSITIONS`] and the odd icon. Recipes leave the display with left
//! alignment and white color so they can be chained with custom drawing.

use core::f64::consts::PI;

use oled_emulator::fonts::FONT_6X8;
use oled_emulator::{Color, OledDisplay, TextAlignment};

use crate::header::{draw_common_header, HeaderOptions};
use crate::icons::{self, draw_icon};
use crate::layout::{FONT_HEIGHT_SMALL, TEXT_POSITIONS};
use crate::records::{CompassInfo, GpsInfo, MessageInfo, NodeInfo, NodeSummary, SystemInfo};

/// Rows visible at once on the node list
pub const NODE_LIST_ROWS: usize = 4;

/// Arrowhead stroke length in pixels
const ARROW_HEAD_LENGTH: f64 = 8.0;

/// Arrowhead half-angle in radians
const ARROW_HEAD_ANGLE: f64 = 0.4;

fn prepare(display: &mut OledDisplay) {
    display.clear();
    display.set_font(&FONT_6X8);
    display.set_color(Color::White);
    display.set_text_alignment(TextAlignment::Left);
}

fn draw_right(display: &mut OledDisplay, y: i32, text: &str) {
    let right = display.width();
    display.set_text_alignment(TextAlignment::Right);
    display.draw_string(right, y, text);
    display.set_text_alignment(TextAlignment::Left);
}

/// Boot splash: centred logo with the firmware version underneath
// SAFETY: display dimensions are at most 128 and the logo is 32 px square,
// so every offset is a small value.
#[allow(clippy::arithmetic_side_effects)]
pub fn draw_boot_screen(display: &mut OledDisplay, version: &str) {
    tracing::trace!(version, "Rendering boot screen");
    prepare(display);

    let center_x = display.width() / 2;
    let center_y = display.height() / 2;
    let half_w = i32::from(icons::LOGO.width) / 2;
    let half_h = i32::from(icons::LOGO.height) / 2;

    draw_icon(display, center_x - half_w, center_y - half_h - 8, &icons::LOGO);

    display.set_text_alignment(TextAlignment::Center);
    display.draw_string(center_x, center_y + half_h, &format!("v{version}"));
    display.set_text_alignment(TextAlignment::Left);
}

/// Node details: bold long name, short name and id, last heard, SNR and hops
pub fn draw_node_info_screen(display: &mut OledDisplay, node: &NodeInfo) {
    tracing::trace!(node = %node.node_id, "Rendering node info screen");
    prepare(display);
    draw_common_header(display, 0, 0, "Node Info", &HeaderOptions::battery(85));

    let [_, first, second, third, fourth, _] = TEXT_POSITIONS;

    // Drawn twice one pixel apart for a bold face
    display.draw_string(0, first, &node.long_name);
    display.draw_string(1, first, &node.long_name);

    display.draw_string(
        0,
        second,
        &format!("{} \u{2022} {}", node.short_name, node.node_id),
    );

    if let Some(last_heard) = &node.last_heard {
        display.draw_string(0, third, &format!("Heard: {last_heard}"));
    }
    if let Some(snr) = node.snr {
        draw_right(display, third, &format!("SNR: {snr}dB"));
    }
    if let Some(hops) = node.hops_away {
        let hops = if hops == 0 {
            "Direct".to_string()
        } else {
            format!("{hops} hops")
        };
        display.draw_string(0, fourth, &hops);
    }
}

/// Received message with sender, time and the wrapped body
pub fn draw_message_screen(display: &mut OledDisplay, message: &MessageInfo) {
    tracing::trace!(from = %message.from, "Rendering message screen");
    prepare(display);

    let title = message.channel.as_deref().unwrap_or("Message");
    let options = HeaderOptions {
        has_unread_message: true,
        ..HeaderOptions::battery(72)
    };
    draw_common_header(display, 0, 0, title, &options);

    let [_, first, second, ..] = TEXT_POSITIONS;
    let screen_w = display.width();

    display.draw_string(0, first, &format!("From: {}", message.from));
    draw_right(display, first, &message.time);
    display.draw_string_max_width(0, second, screen_w, &message.text);
}

/// GPS fix: satellites, coordinates, altitude and speed
pub fn draw_gps_screen(display: &mut OledDisplay, gps: &GpsInfo) {
    tracing::trace!(has_lock = gps.has_lock, "Rendering GPS screen");
    prepare(display);
    draw_common_header(display, 0, 0, "GPS", &HeaderOptions::battery(90));

    let [_, first, second, third, fourth, _] = TEXT_POSITIONS;

    draw_icon(display, 0, first, &icons::SATELLITE);
    let status = if gps.has_lock {
        format!("{} sats", gps.satellites.unwrap_or(0))
    } else {
        "No Lock".to_string()
    };
    display.draw_string(12, first, &status);

    let (Some(latitude), Some(longitude)) = (gps.latitude, gps.longitude) else {
        return;
    };
    if !gps.has_lock {
        return;
    }

    display.draw_string(0, second, &format!("Lat: {}", format_fixed(latitude, 6)));
    display.draw_string(0, third, &format!("Lon: {}", format_fixed(longitude, 6)));
    if let Some(altitude) = gps.altitude {
        display.draw_string(0, fourth, &format!("Alt: {}m", format_fixed(altitude, 0)));
    }
    if let Some(speed) = gps.speed {
        draw_right(display, fourth, &format!("{} km/h", format_fixed(speed, 1)));
    }
}

/// Scrolling node list with the selected row inverted.
///
/// Shows up to [`NODE_LIST_ROWS`] nodes starting two above the selection.
pub fn draw_node_list_screen(display: &mut OledDisplay, nodes: &[NodeSummary], selected: usize) {
    tracing::trace!(nodes = nodes.len(), selected, "Rendering node list screen");
    prepare(display);
    draw_common_header(
        display,
        0,
        0,
        &format!("Nodes ({})", nodes.len()),
        &HeaderOptions::battery(80),
    );

    let screen_w = display.width();
    let start = selected.saturating_sub(NODE_LIST_ROWS / 2);
    let visible = nodes.iter().enumerate().skip(start).take(NODE_LIST_ROWS);

    for ((index, node), &row_y) in visible.zip(TEXT_POSITIONS.iter().skip(1)) {
        let is_selected = index == selected;
        if is_selected {
            display.fill_rect(0, row_y.saturating_sub(1), screen_w, FONT_HEIGHT_SMALL);
            display.set_color(Color::Black);
        }

        display.draw_string(0, row_y, &node.short_name);
        draw_right(display, row_y, &node.last_heard);

        if is_selected {
            display.set_color(Color::White);
        }
    }
}

/// Device health: uptime, utilisation, node count, voltage and free heap
pub fn draw_system_screen(display: &mut OledDisplay, system: &SystemInfo) {
    tracing::trace!("Rendering system screen");
    prepare(display);
    draw_common_header(display, 0, 0, "System", &HeaderOptions::battery(95));

    let [_, first, second, third, fourth, _] = TEXT_POSITIONS;

    display.draw_string(0, first, &format!("Uptime: {}", system.uptime));
    display.draw_string(0, second, &format!("ChUtil: {}%", format_fixed(f64::from(system.channel_util), 1)));
    draw_right(display, second, &format!("AirTx: {}%", format_fixed(f64::from(system.air_util), 1)));

    display.draw_string(0, third, &format!("Nodes: {}", system.nodes));
    if let Some(voltage) = system.battery_voltage {
        draw_right(display, third, &format!("{}V", format_fixed(f64::from(voltage), 2)));
    }

    if let Some(free) = system.free_memory {
        let kilobytes = f64::from(free) / 1024.0;
        display.draw_string(0, fourth, &format!("Free: {}KB", format_fixed(kilobytes, 0)));
    }
}

/// Nearest pixel to a computed coordinate
#[allow(clippy::cast_possible_truncation)]
fn to_pixel(value: f64) -> i32 {
    value.round() as i32
}

/// `value` with `decimals` fraction digits, exact ties rounded away from zero.
///
/// Plain `{:.N}` formatting rounds ties to even, so `2.5` would print as `2`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = value * scale;
    let value = if scaled.fract().abs() == 0.5 {
        scaled.round() / scale
    } else {
        value
    };
    format!("{value:.decimals$}")
}

/// Distance label: kilometres with one decimal from 1 km, whole metres below
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{} km", format_fixed(meters / 1000.0, 1))
    } else {
        format!("{:.0} m", (meters + 0.5).floor())
    }
}

/// Compass rose with an arrow pointing at the target relative to the heading
// SAFETY: display dimensions are at most 128, so the integer layout terms are
// small; float terms cannot overflow.
#[allow(clippy::arithmetic_side_effects)]
pub fn draw_compass_screen(display: &mut OledDisplay, compass: &CompassInfo) {
    tracing::trace!(
        heading = compass.heading,
        bearing = compass.bearing,
        "Rendering compass screen"
    );
    prepare(display);
    let title = compass.target_name.as_deref().unwrap_or("Compass");
    draw_common_header(display, 0, 0, title, &HeaderOptions::battery(70));
    display.set_font(&FONT_6X8);
    display.set_color(Color::White);

    let screen_w = display.width();
    let screen_h = display.height();
    let radius = screen_w.min(screen_h - 20) / 2 - 4;
    let center_x = screen_w / 2;
    let center_y = (screen_h + 16) / 2;

    display.draw_circle(center_x, center_y, radius);

    display.set_text_alignment(TextAlignment::Center);
    display.draw_string(center_x, center_y - radius - 10, "N");

    let relative = (compass.bearing - compass.heading) * PI / 180.0;
    let arrow_length = f64::from(radius - 6);
    let tip_x = f64::from(center_x) + relative.sin() * arrow_length;
    let tip_y = f64::from(center_y) - relative.cos() * arrow_length;
    display.draw_line(center_x, center_y, to_pixel(tip_x), to_pixel(tip_y));

    for angle in [relative + PI - ARROW_HEAD_ANGLE, relative + PI + ARROW_HEAD_ANGLE] {
        let end_x = tip_x + angle.sin() * ARROW_HEAD_LENGTH;
        let end_y = tip_y - angle.cos() * ARROW_HEAD_LENGTH;
        display.draw_line(
            to_pixel(tip_x),
            to_pixel(tip_y),
            to_pixel(end_x),
            to_pixel(end_y),
        );
    }

    if let Some(distance) = compass.distance {
        display.draw_string(center_x, screen_h - FONT_HEIGHT_SMALL, &format_distance(distance));
    }
    display.set_text_alignment(TextAlignment::Left);
}

/// Progress screen: title, bar, percentage and an optional status line.
///
/// The bar is clamped to 0..=100 but the label shows `percent` as given.
// SAFETY: display dimensions are at most 128, so every offset is small.
#[allow(clippy::arithmetic_side_effects)]
pub fn draw_progress_screen(
    display: &mut OledDisplay,
    title: &str,
    percent: i32,
    status: Option<&str>,
) {
    tracing::trace!(percent, "Rendering progress screen");
    prepare(display);
    display.set_text_alignment(TextAlignment::Center);

    let screen_w = display.width();
    let screen_h = display.height();
    let center_x = screen_w / 2;
    let center_y = screen_h / 2;

    display.draw_string(center_x, center_y - 20, title);

    let bar_height = 10;
    let bar_y = center_y - bar_height / 2;
    display.draw_progress_bar(10, bar_y, screen_w - 20, bar_height, percent);

    display.draw_string(center_x, bar_y + bar_height + 4, &format!("{percent}%"));

    if let Some(status) = status.filter(|s| !s.is_empty()) {
        display.draw_string(center_x, screen_h - FONT_HEIGHT_SMALL - 2, status);
    }
    display.set_text_alignment(TextAlignment::Left);
}

/// A complete screen with its data, for rendering from data files
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "screen", rename_all = "snake_case"))]
pub enum Screen {
    /// Boot splash
    Boot {
        /// Firmware version without the leading `v`
        version: String,
    },
    /// Node details
    NodeInfo(NodeInfo),
    /// Received message
    Message(MessageInfo),
    /// GPS fix
    Gps(GpsInfo),
    /// Node list
    NodeList {
        /// Known nodes
        nodes: Vec<NodeSummary>,
        /// Index of the highlighted node
        #[cfg_attr(feature = "serde", serde(default))]
        selected: usize,
    },
    /// Device health
    System(SystemInfo),
    /// Compass
    Compass(CompassInfo),
    /// Progress bar
    Progress {
        /// Title above the bar
        title: String,
        /// Completion in percent
        percent: i32,
        /// Optional line at the bottom
        #[cfg_attr(feature = "serde", serde(default))]
        status: Option<String>,
    },
}

impl Screen {
    /// Short identifier, used for output file names
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Boot { .. } => "boot",
            Screen::NodeInfo(_) => "node_info",
            Screen::Message(_) => "message",
            Screen::Gps(_) => "gps",
            Screen::NodeList { .. } => "node_list",
            Screen::System(_) => "system",
            Screen::Compass(_) => "compass",
            Screen::Progress { .. } => "progress",
        }
    }

    /// Draw this screen onto `display`
    pub fn render(&self, display: &mut OledDisplay) {
        match self {
            Screen::Boot { version } => draw_boot_screen(display, version),
            Screen::NodeInfo(node) => draw_node_info_screen(display, node),
            Screen::Message(message) => draw_message_screen(display, message),
            Screen::Gps(gps) => draw_gps_screen(display, gps),
            Screen::NodeList { nodes, selected } => draw_node_list_screen(display, nodes, *selected),
            Screen::System(system) => draw_system_screen(display, system),
            Screen::Compass(compass) => draw_compass_screen(display, compass),
            Screen::Progress {
                title,
                percent,
                status,
            } => draw_progress_screen(display, title, *percent, status.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(999.4), "999 m");
        assert_eq!(format_distance(12.5), "13 m");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(2345.0), "2.3 km");
        assert_eq!(format_distance(1250.0), "1.3 km");
    }

    #[test]
    fn test_format_fixed_rounds_ties_up() {
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(12.25, 1), "12.3");
        assert_eq!(format_fixed(46.519_7, 6), "46.519700");
        // 1.005 is stored just below the tie
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(f64::from(4.02_f32), 2), "4.02");
    }

    #[test]
    fn test_to_pixel_rounds() {
        assert_eq!(to_pixel(3.4), 3);
        assert_eq!(to_pixel(3.6), 4);
        assert_eq!(to_pixel(-2.6), -3);
    }

    #[test]
    fn test_screen_names_are_unique() {
        let screens = [
            Screen::Boot {
                version: String::new(),
            },
            Screen::NodeInfo(NodeInfo::default()),
            Screen::Message(MessageInfo::default()),
            Screen::Gps(GpsInfo::default()),
            Screen::NodeList {
                nodes: Vec::new(),
                selected: 0,
            },
            Screen::System(SystemInfo::default()),
            Screen::Compass(CompassInfo::default()),
            Screen::Progress {
                title: String::new(),
                percent: 0,
                status: None,
            },
        ];
        let mut names: Vec<_> = screens.iter().map(Screen::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), screens.len());
    }
}
