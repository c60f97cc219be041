use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// Library crates that make up the API docs; xtask itself is left out.
/// `--open` shows the first one, the screen layer that links down to the rest.
const CRATES: &[&str] = &["oled-screens", "oled-emulator", "oled-specs", "oled-testing"];

/// Optional features whose items should appear in the docs
const FEATURES: &str = "oled-specs/std,oled-specs/serde,oled-screens/serde";

/// Landing page for the docs
const ENTRY_PAGE: &str = "target/doc/oled_screens/index.html";

/// Broken intra-doc links fail the build instead of rendering as plain text
const RUSTDOCFLAGS: &str = "-D rustdoc::broken_intra_doc_links";

/// Arguments for `cargo doc` over the OLED crates
fn doc_args(open: bool) -> Vec<&'static str> {
    let mut args = vec!["doc", "--no-deps", "--features", FEATURES];
    for &name in CRATES {
        args.extend(["-p", name]);
    }
    if open {
        args.push("--open");
    }
    args
}

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Documenting OLED crates...".cyan().bold());
    println!();

    let start = Instant::now();

    let output = Command::new("cargo")
        .args(doc_args(open))
        .env("RUSTDOCFLAGS", RUSTDOCFLAGS)
        .output()
        .context("Failed to run cargo doc")?;

    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!(
        "{}",
        format!(
            "✓ Documented {} crates in {:.2}s",
            CRATES.len(),
            start.elapsed().as_secs_f64()
        )
        .green()
    );

    if !open {
        let hint = if Path::new(ENTRY_PAGE).exists() {
            format!("Open {ENTRY_PAGE} in your browser")
        } else {
            format!("{ENTRY_PAGE} not found; run from the workspace root")
        };
        println!();
        println!("   {}", hint.dimmed());
    }

    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_each_library_crate_once() {
        let args = doc_args(false);
        for name in CRATES {
            assert_eq!(args.iter().filter(|a| *a == name).count(), 1, "{name}");
        }
        assert!(!args.contains(&"xtask"));
        assert!(!args.contains(&"--workspace"));
        assert!(!args.contains(&"--open"));
    }

    #[test]
    fn open_lands_on_the_screen_crate() {
        let args = doc_args(true);
        assert_eq!(args.last(), Some(&"--open"));
        let mut packages = args.iter().skip_while(|a| **a != "-p").skip(1);
        assert_eq!(packages.next(), Some(&"oled-screens"));
        assert!(ENTRY_PAGE.contains("oled_screens"));
    }

    #[test]
    fn features_name_existing_crates() {
        for feature in FEATURES.split(',') {
            let (krate, _) = feature.split_once('/').unwrap();
            assert!(CRATES.contains(&krate), "{feature}");
        }
    }
}
