use anyhow::{Context, Result};
use colored::Colorize;
use oled_emulator::{EmulatorConfig, Geometry, OledDisplay};
use oled_screens::prelude::*;
use oled_specs::presets::{preset_by_name, PRESETS};
use oled_specs::PanelSpec;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

pub fn run(data: Option<&Path>, panel: &str, out: &Path, scale: u32) -> Result<()> {
    // A subscriber may already be installed when called more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    println!();
    println!("{}", "🖼  Rendering screens...".cyan().bold());
    println!();

    let start = Instant::now();
    let panel = resolve_panel(panel)?;
    let screens = match data {
        Some(path) => load_screens(path)?,
        None => sample_screens(),
    };

    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    let config = EmulatorConfig {
        scale,
        ..EmulatorConfig::DEFAULT
    };
    println!(
        "   {}",
        format!("{} ({}), scale {}", panel.name, panel.geometry, scale).dimmed()
    );

    for (index, screen) in screens.iter().enumerate() {
        let mut frame = OledDisplay::with_config(panel.geometry, config);
        screen.render(&mut frame);

        let path = out.join(format!("{index:02}_{}.png", screen.name()));
        frame
            .screenshot(&path, &panel.style)
            .with_context(|| format!("Failed to render {} screen", screen.name()))?;
        tracing::debug!(screen = screen.name(), lit = frame.lit_pixel_count(), "Rendered");

        println!("{}", format!("  ✓ {}", path.display()).green());
    }

    println!();
    println!(
        "{}",
        format!(
            "✓ Rendered {} screens in {:.2}s",
            screens.len(),
            start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

pub fn list_panels() {
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

/// Preset by exact name, else the first preset with the given geometry key
fn resolve_panel(name: &str) -> Result<&'static PanelSpec> {
    if let Some(panel) = preset_by_name(name) {
        return Ok(panel);
    }
    let geometry: Geometry = name.parse().with_context(|| {
        format!("Unknown panel '{name}'. Run 'cargo run -p xtask -- panels' to list presets")
    })?;
    PRESETS
        .iter()
        .find(|p| p.geometry == geometry)
        .with_context(|| format!("No preset uses geometry {geometry}"))
}

/// A JSON file holding either one screen object or an array of them
fn load_screens(path: &Path) -> Result<Vec<Screen>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_screens(&text).with_context(|| format!("Invalid screen data in {}", path.display()))
}

fn parse_screens(text: &str) -> Result<Vec<Screen>> {
    if text.trim_start().starts_with('[') {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(vec![serde_json::from_str(text)?])
    }
}

fn sample_screens() -> Vec<Screen> {
    let node_list = ["ALFA", "BRVO", "CHRL", "DLTA", "ECHO", "FXTR"]
        .iter()
        .zip(["now", "2m", "15m", "1h", "3h", "1d"])
        .map(|(name, heard)| NodeSummary {
            short_name: (*name).to_string(),
            long_name: format!("{name} Station"),
            last_heard: heard.to_string(),
            snr: Some(5.0),
        })
        .collect();

    vec![
        Screen::Boot {
            version: "2.3.1".to_string(),
        },
        Screen::NodeInfo(NodeInfo {
            short_name: "BC01".to_string(),
            long_name: "Base Camp".to_string(),
            node_id: "!a1b2c3d4".to_string(),
            battery_level: Some(87),
            last_heard: Some("2m ago".to_string()),
            snr: Some(7.5),
            hops_away: Some(1),
        }),
        Screen::Message(MessageInfo {
            from: "ALFA".to_string(),
            text: "Meet at the north trailhead in twenty minutes".to_string(),
            time: "14:05".to_string(),
            channel: Some("LongFast".to_string()),
        }),
        Screen::Gps(GpsInfo {
            latitude: Some(46.5197),
            longitude: Some(6.6323),
            altitude: Some(495.0),
            satellites: Some(9),
            has_lock: true,
            speed: Some(4.2),
        }),
        Screen::NodeList {
            nodes: node_list,
            selected: 3,
        },
        Screen::System(SystemInfo {
            uptime: "3d 4h".to_string(),
            channel_util: 12.4,
            air_util: 1.8,
            battery_voltage: Some(4.02),
            nodes: 17,
            free_memory: Some(92_160),
        }),
        Screen::Compass(CompassInfo {
            heading: 20.0,
            bearing: 65.0,
            distance: Some(1840.0),
            target_name: Some("Base Camp".to_string()),
        }),
        Screen::Progress {
            title: "Firmware Update".to_string(),
            percent: 64,
            status: Some("Writing flash".to_string()),
        },
    ]
}
