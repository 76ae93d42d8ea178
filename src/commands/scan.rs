use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::Result;
use chrono::{DateTime, Local};

use relaunch::presentation::ColorWhen;
use relaunch::SourceScanner;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Print the newest watched modification time under the source directory
pub fn cmd_scan(
    source: Option<&PathBuf>,
    config_path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let config = super::load_config(config_path, json)?.config;
    let ui = UiContext::new(json, color, &config);

    let root = source.cloned().unwrap_or_else(|| config.source_dir());
    let scanner = SourceScanner::new(&root, &config.watch.extensions);
    let summary = scanner.summarize();

    let latest_ms = summary
        .latest
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    if json {
        let output = serde_json::json!({
            "event": "scan",
            "source": root.display().to_string(),
            "extensions": scanner.extensions(),
            "files": summary.files,
            "latest_ms": latest_ms,
        });
        println!("{}", output);
        return Ok(());
    }

    if summary.files == 0 {
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!("No watched files under {}", root.display()))
                .render(ui.color)
        );
        return Ok(());
    }

    let latest: DateTime<Local> = summary.latest.into();
    println!(
        "{} {} watched files under {}",
        Icon::Success.colored(ui.color, ui.unicode),
        summary.files,
        root.display()
    );
    println!(
        "  Newest change: {}",
        ColoredText::info(latest.format("%Y-%m-%d %H:%M:%S").to_string()).render(ui.color)
    );
    Ok(())
}
