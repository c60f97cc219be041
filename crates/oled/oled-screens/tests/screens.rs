//! Screen recipes rendered headlessly and checked region by region.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use oled_emulator::fonts::FONT_6X8;
use oled_emulator::{Color, Geometry, TextAlignment};
use oled_screens::icons;
use oled_screens::prelude::*;
use oled_testing::TestDisplay;

fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w, h))
}

fn screen() -> TestDisplay {
    TestDisplay::new(Geometry::G128x64)
}

/// ASCII dump of `text` drawn alone at `(x, y)`, cropped to `area`
fn reference_text(x: i32, y: i32, text: &str, area: Rectangle) -> String {
    let mut t = screen();
    t.set_font(&FONT_6X8);
    t.draw_string(x, y, text);
    t.ascii_region(area)
}

/// Text at `(x, y)` with the given alignment
type Line<'a> = (i32, i32, TextAlignment, &'a str);

fn draw_lines(t: &mut TestDisplay, lines: &[Line<'_>]) {
    t.set_font(&FONT_6X8);
    for &(x, y, alignment, text) in lines {
        t.set_text_alignment(alignment);
        t.draw_string(x, y, text);
    }
    t.set_text_alignment(TextAlignment::Left);
}

/// The common header with `lines` drawn straight onto the frame below it
fn header_with_lines(title: &str, options: &HeaderOptions, lines: &[Line<'_>]) -> TestDisplay {
    let mut t = screen();
    draw_common_header(&mut t, 0, 0, title, options);
    t.set_color(Color::White);
    draw_lines(&mut t, lines);
    t
}

fn nodes(count: usize) -> Vec<NodeSummary> {
    (0..count)
        .map(|i| NodeSummary {
            short_name: format!("N{i}"),
            last_heard: format!("{i}m"),
            ..NodeSummary::default()
        })
        .collect()
}

#[test]
fn boot_screen_centres_logo_above_version() {
    let mut t = screen();
    draw_boot_screen(&mut t, "2.5.1");

    // Logo occupies 48..80 x 8..40, version row starts at y = 48
    t.assert_region_uniform(rect(0, 0, 128, 8), false).unwrap();
    t.assert_region_contains(rect(48, 8, 32, 32), true).unwrap();
    assert_eq!(t.count_lit_in(rect(0, 8, 48, 32)), 0);

    let label = "v2.5.1";
    let area = rect(0, 48, 128, 8);
    assert_eq!(
        t.ascii_region(area),
        reference_text(64 - 3 * label.len() as i32, 48, label, area)
    );
}

#[test]
fn node_info_name_is_bold() {
    let mut t = screen();
    let node = NodeInfo {
        short_name: "AB".into(),
        long_name: "  I".into(),
        node_id: "!1".into(),
        ..NodeInfo::default()
    };
    draw_node_info_screen(&mut t, &node);

    // The stem of 'I' at x = 14 is repeated one pixel to the right; row 10
    // is clear of the header and falls on a space in the id line
    t.assert_pixel(13, 10, false).unwrap();
    t.assert_pixel(14, 10, true).unwrap();
    t.assert_pixel(15, 10, true).unwrap();
    t.assert_pixel(16, 10, false).unwrap();
}

#[test]
fn node_info_fields_follow_row_grid() {
    let mut bare = screen();
    let node = NodeInfo {
        short_name: "AB".into(),
        long_name: "Base".into(),
        node_id: "!1".into(),
        ..NodeInfo::default()
    };
    draw_node_info_screen(&mut bare, &node);
    // The id line at y = 10 is the last one drawn
    bare.assert_region_uniform(rect(0, 18, 128, 46), false).unwrap();

    let mut full = screen();
    let node = NodeInfo {
        last_heard: Some("2m".into()),
        snr: Some(6.5),
        hops_away: Some(0),
        ..node
    };
    draw_node_info_screen(&mut full, &node);

    let expected = header_with_lines(
        "Node Info",
        &HeaderOptions::battery(85),
        &[
            (0, 7, TextAlignment::Left, "Base"),
            (1, 7, TextAlignment::Left, "Base"),
            (0, 10, TextAlignment::Left, "AB \u{2022} !1"),
            (0, 13, TextAlignment::Left, "Heard: 2m"),
            (128, 13, TextAlignment::Right, "SNR: 6.5dB"),
            (0, 16, TextAlignment::Left, "Direct"),
        ],
    );
    assert_eq!(full.ascii_art(), expected.ascii_art());
    full.assert_region_uniform(rect(0, 24, 128, 40), false).unwrap();
}

#[test]
fn message_body_wraps_below_sender() {
    let mut t = screen();
    let message = MessageInfo {
        from: "AB12".into(),
        text: "the quick brown fox jumps over the lazy dog".into(),
        time: "12:30".into(),
        channel: None,
    };
    draw_message_screen(&mut t, &message);

    // 21 characters fit on a 128 px line; wrapped lines advance a full font
    // height from the second row
    let options = HeaderOptions {
        has_unread_message: true,
        ..HeaderOptions::battery(72)
    };
    let expected = header_with_lines(
        "Message",
        &options,
        &[
            (0, 7, TextAlignment::Left, "From: AB12"),
            (128, 7, TextAlignment::Right, "12:30"),
            (0, 10, TextAlignment::Left, "the quick brown fox"),
            (0, 18, TextAlignment::Left, "jumps over the lazy"),
            (0, 26, TextAlignment::Left, "dog"),
        ],
    );
    assert_eq!(t.ascii_art(), expected.ascii_art());
    t.assert_region_uniform(rect(0, 34, 128, 30), false).unwrap();
}

#[test]
fn gps_without_lock_shows_status_only() {
    let mut t = screen();
    let gps = GpsInfo {
        latitude: Some(52.52),
        longitude: Some(13.405),
        has_lock: false,
        ..GpsInfo::default()
    };
    draw_gps_screen(&mut t, &gps);

    let mut expected = header_with_lines(
        "GPS",
        &HeaderOptions::battery(90),
        &[(12, 7, TextAlignment::Left, "No Lock")],
    );
    draw_icon(&mut expected, 0, 7, &icons::SATELLITE);
    assert_eq!(t.ascii_art(), expected.ascii_art());
    t.assert_region_uniform(rect(0, 15, 128, 49), false).unwrap();
}

#[test]
fn gps_with_lock_shows_coordinates() {
    let mut t = screen();
    let gps = GpsInfo {
        latitude: Some(52.52),
        longitude: Some(13.405),
        altitude: Some(34.5),
        satellites: Some(7),
        has_lock: true,
        speed: None,
    };
    draw_gps_screen(&mut t, &gps);

    // Altitude ties round up
    let mut expected = header_with_lines(
        "GPS",
        &HeaderOptions::battery(90),
        &[
            (12, 7, TextAlignment::Left, "7 sats"),
            (0, 10, TextAlignment::Left, "Lat: 52.520000"),
            (0, 13, TextAlignment::Left, "Lon: 13.405000"),
            (0, 16, TextAlignment::Left, "Alt: 35m"),
        ],
    );
    draw_icon(&mut expected, 0, 7, &icons::SATELLITE);
    assert_eq!(t.ascii_art(), expected.ascii_art());
}

#[test]
fn node_list_highlights_selected_row() {
    let mut t = screen();
    draw_node_list_screen(&mut t, &nodes(5), 0);

    // First row at y = 7; its highlight starts one pixel above and runs
    // across the bottom of the header
    t.assert_region_uniform(rect(0, 6, 128, 1), true).unwrap();
    t.assert_region_uniform(rect(0, 24, 128, 40), false).unwrap();

    let mut expected = header_with_lines("Nodes (5)", &HeaderOptions::battery(80), &[]);
    expected.fill_rect(0, 6, 128, 8);
    expected.set_color(Color::Black);
    draw_lines(
        &mut expected,
        &[(0, 7, TextAlignment::Left, "N0"), (128, 7, TextAlignment::Right, "0m")],
    );
    expected.set_color(Color::White);
    draw_lines(
        &mut expected,
        &[
            (0, 10, TextAlignment::Left, "N1"),
            (128, 10, TextAlignment::Right, "1m"),
            (0, 13, TextAlignment::Left, "N2"),
            (128, 13, TextAlignment::Right, "2m"),
            (0, 16, TextAlignment::Left, "N3"),
            (128, 16, TextAlignment::Right, "3m"),
        ],
    );
    assert_eq!(t.ascii_art(), expected.ascii_art());
}

#[test]
fn node_list_scrolls_to_keep_selection_visible() {
    let mut t = screen();
    draw_node_list_screen(&mut t, &nodes(6), 3);

    // Rows start two above the selection: N1, N2, N3 (selected), N4
    let mut expected = header_with_lines(
        "Nodes (6)",
        &HeaderOptions::battery(80),
        &[
            (0, 7, TextAlignment::Left, "N1"),
            (128, 7, TextAlignment::Right, "1m"),
            (0, 10, TextAlignment::Left, "N2"),
            (128, 10, TextAlignment::Right, "2m"),
        ],
    );
    expected.fill_rect(0, 12, 128, 8);
    expected.set_color(Color::Black);
    draw_lines(
        &mut expected,
        &[(0, 13, TextAlignment::Left, "N3"), (128, 13, TextAlignment::Right, "3m")],
    );
    expected.set_color(Color::White);
    draw_lines(
        &mut expected,
        &[(0, 16, TextAlignment::Left, "N4"), (128, 16, TextAlignment::Right, "4m")],
    );
    assert_eq!(t.ascii_art(), expected.ascii_art());

    t.assert_region_uniform(rect(0, 12, 128, 1), true).unwrap();
    t.assert_region_uniform(rect(0, 24, 128, 40), false).unwrap();
}

#[test]
fn node_list_handles_empty_and_out_of_range_selection() {
    let mut empty = screen();
    draw_node_list_screen(&mut empty, &[], 0);
    empty.assert_region_uniform(rect(0, 16, 128, 48), false).unwrap();

    let mut past_end = screen();
    draw_node_list_screen(&mut past_end, &nodes(3), 10);
    past_end.assert_region_uniform(rect(0, 16, 128, 48), false).unwrap();
}

#[test]
fn system_screen_rounds_ties_up() {
    let mut t = screen();
    let system = SystemInfo {
        uptime: "1h".into(),
        channel_util: 12.25,
        air_util: 0.25,
        battery_voltage: Some(4.125),
        nodes: 5,
        free_memory: Some(2560),
    };
    draw_system_screen(&mut t, &system);

    let expected = header_with_lines(
        "System",
        &HeaderOptions::battery(95),
        &[
            (0, 7, TextAlignment::Left, "Uptime: 1h"),
            (0, 10, TextAlignment::Left, "ChUtil: 12.3%"),
            (128, 10, TextAlignment::Right, "AirTx: 0.3%"),
            (0, 13, TextAlignment::Left, "Nodes: 5"),
            (128, 13, TextAlignment::Right, "4.13V"),
            (0, 16, TextAlignment::Left, "Free: 3KB"),
        ],
    );
    assert_eq!(t.ascii_art(), expected.ascii_art());
}

#[test]
fn compass_arrow_points_at_bearing() {
    let mut north = screen();
    draw_compass_screen(
        &mut north,
        &CompassInfo {
            heading: 0.0,
            bearing: 0.0,
            ..CompassInfo::default()
        },
    );
    // Radius 18 around (64, 40): the arrow runs from the centre up to y = 28
    north.assert_region_uniform(rect(64, 28, 1, 13), true).unwrap();
    north.assert_pixel(67, 35, true).unwrap();
    north.assert_pixel(61, 35, true).unwrap();
    north.assert_pixel(64, 22, true).unwrap();
    north.assert_region_contains(rect(61, 12, 6, 8), true).unwrap();

    let mut east = screen();
    draw_compass_screen(
        &mut east,
        &CompassInfo {
            heading: 270.0,
            bearing: 0.0,
            ..CompassInfo::default()
        },
    );
    east.assert_region_uniform(rect(64, 40, 13, 1), true).unwrap();
    east.assert_pixel(64, 30, false).unwrap();
}

#[test]
fn compass_distance_label() {
    let compass = CompassInfo {
        distance: Some(1500.0),
        target_name: Some("Camp".into()),
        ..CompassInfo::default()
    };
    let mut with = screen();
    draw_compass_screen(&mut with, &compass);
    let mut without = screen();
    draw_compass_screen(
        &mut without,
        &CompassInfo {
            distance: None,
            ..compass
        },
    );
    assert!(with.count_lit_in(rect(0, 56, 128, 8)) > without.count_lit_in(rect(0, 56, 128, 8)));
}

#[test]
fn progress_bar_fills_proportionally() {
    let mut t = screen();
    draw_progress_screen(&mut t, "Updating", 50, Some("Please wait"));

    // Bar outline at (10, 27) 108 x 10, interior fill 52 px wide
    t.assert_region_uniform(rect(10, 27, 108, 1), true).unwrap();
    t.assert_region_uniform(rect(12, 29, 52, 6), true).unwrap();
    t.assert_region_uniform(rect(64, 29, 52, 6), false).unwrap();
    t.assert_region_contains(rect(0, 54, 128, 8), true).unwrap();
}

#[test]
fn progress_label_is_not_clamped() {
    let mut over = screen();
    draw_progress_screen(&mut over, "", 150, None);
    over.assert_region_uniform(rect(12, 29, 104, 6), true).unwrap();

    let label = rect(0, 41, 128, 8);
    assert_eq!(over.ascii_region(label), reference_text(52, 41, "150%", label));
}

#[test]
fn every_screen_restores_drawing_state() {
    let screens = [
        Screen::Boot {
            version: "1.0".into(),
        },
        Screen::NodeInfo(NodeInfo::default()),
        Screen::Message(MessageInfo::default()),
        Screen::Gps(GpsInfo::default()),
        Screen::NodeList {
            nodes: nodes(3),
            selected: 1,
        },
        Screen::System(SystemInfo {
            battery_voltage: Some(4.1),
            free_memory: Some(20480),
            ..SystemInfo::default()
        }),
        Screen::Compass(CompassInfo::default()),
        Screen::Progress {
            title: "OTA".into(),
            percent: 10,
            status: None,
        },
    ];

    for screen_data in &screens {
        let mut t = screen();
        t.set_color(Color::Inverse);
        t.set_text_alignment(TextAlignment::Right);
        screen_data.render(&mut t);
        assert_eq!(t.color(), Color::White, "{}", screen_data.name());
        assert_eq!(t.text_alignment(), TextAlignment::Left, "{}", screen_data.name());
        assert!(t.lit_pixel_count() > 0, "{}", screen_data.name());
    }
}

#[test]
fn screens_render_on_every_geometry() {
    for geometry in Geometry::ALL {
        let mut t = TestDisplay::new(geometry);
        draw_system_screen(&mut t, &SystemInfo::default());
        assert!(t.lit_pixel_count() > 0, "system on {geometry:?}");
        draw_compass_screen(&mut t, &CompassInfo::default());
        assert!(t.lit_pixel_count() > 0, "compass on {geometry:?}");
        draw_progress_screen(&mut t, "Go", 75, None);
        assert!(t.lit_pixel_count() > 0, "progress on {geometry:?}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn screens_load_from_json() {
    let json = r#"[
        {"screen": "progress", "title": "OTA", "percent": 40},
        {"screen": "node_info", "short_name": "AB12", "hops_away": 2},
        {"screen": "node_list", "nodes": [{"short_name": "N0"}]}
    ]"#;
    let screens: Vec<Screen> = serde_json::from_str(json).unwrap();

    assert_eq!(
        screens[0],
        Screen::Progress {
            title: "OTA".into(),
            percent: 40,
            status: None,
        }
    );
    let Screen::NodeInfo(node) = &screens[1] else {
        panic!("expected node_info, got {}", screens[1].name());
    };
    assert_eq!(node.hops_away, Some(2));
    assert_eq!(screens[2].name(), "node_list");
}
