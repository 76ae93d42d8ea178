//! Init command - write a starter relaunch.toml

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use relaunch::config::PROJECT_CONFIG_FILE;
use relaunch::presentation::ColorWhen;

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

/// Create `relaunch.toml` in `dir`
pub fn cmd_init(
    dir: &Path,
    scheme: Option<&str>,
    force: bool,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let scheme = match scheme {
        Some(s) => s.to_string(),
        None => dir
            .canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "App".to_string()),
    };

    fs::write(&path, render_template(&scheme))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), scheme = %scheme, "wrote config");

    if json {
        let output = serde_json::json!({
            "event": "init",
            "path": path.display().to_string(),
            "scheme": scheme,
        });
        println!("{}", output);
        return Ok(());
    }

    let caps = detect_capabilities();
    let supports_color = match color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => caps.supports_color,
    };
    println!(
        "{} Created {}",
        Icon::Success.colored(supports_color, caps.supports_unicode),
        path.display()
    );
    println!("  Run 'relaunch' to start the dev loop.");
    Ok(())
}

fn render_template(scheme: &str) -> String {
    format!(
        r#"# relaunch configuration

[build]
scheme = "{scheme}"
# project = "{scheme}.xcodeproj"
configuration = "Debug"
destination = "generic/platform=macOS"
derived_data_path = "build"
# Replace the generated xcodebuild line entirely:
# command = ["swift", "build"]

[app]
# Defaults to build/Build/Products/Debug/{scheme}.app/Contents/MacOS/{scheme}
# path = "build/Build/Products/Debug/{scheme}.app/Contents/MacOS/{scheme}"
# process_name = "{scheme}"
args = []

[watch]
source = "{scheme}"
extensions = ["swift", "entitlements", "plist"]
poll_interval_ms = 1000
debounce_ms = 500
mode = "poll"

[supervisor]
grace_period_ms = 1000
settle_ms = 500
sweep_orphans = true
"#
    )
}
