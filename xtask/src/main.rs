// Desktop tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod check;
mod doc;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "OLED emulator development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the workspace, the no_std specs crate, clippy and formatting
    Check,
    /// Run all tests (unit, integration and doc)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
    /// Document the OLED library crates, optionally opening the result
    Doc {
        /// Open documentation in browser
        #[arg(long)]
        open: bool,
    },
    /// Render screens to PNG files
    Render {
        /// JSON file with one screen or an array of screens.
        /// Without it the built-in sample screens are rendered.
        #[arg(long)]
        data: Option<std::path::PathBuf>,
        /// Panel preset name or geometry key such as `128x32`
        #[arg(long, default_value = "128x64")]
        panel: String,
        /// Output directory for the PNG files
        #[arg(long, default_value = "target/screens")]
        out: std::path::PathBuf,
        /// Upscale factor for each display pixel
        #[arg(long, default_value_t = 4)]
        scale: u32,
    },
    /// List the built-in panel presets
    Panels,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check::run(),
        Commands::Test { unit, integration } => test::run(unit, integration),
        Commands::Doc { open } => doc::run(open),
        Commands::Render {
            data,
            panel,
            out,
            scale,
        } => render::run(data.as_deref(), &panel, &out, scale),
        Commands::Panels => {
            render::list_panels();
            Ok(())
        }
    }
}
