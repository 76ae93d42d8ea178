//! Subcommand implementations

pub mod build;
pub mod init;
pub mod run;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use relaunch::config::{Config, LoadedConfig};
use relaunch::DevLoopEvent;

use crate::ui::context::UiContext;
use crate::ui::output::report_loaded_config;
use crate::ui::views::devloop::render_devloop_event;

/// Resolve configuration relative to the current directory
pub(crate) fn load_config(explicit: Option<&Path>, json: bool) -> Result<LoadedConfig> {
    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let loaded = Config::resolve(explicit, &project_root)?;
    report_loaded_config(&loaded, json);
    Ok(loaded)
}

/// Event sink printing NDJSON or timestamped lines; problems go to stderr
pub(crate) fn event_printer(ui: UiContext) -> impl Fn(DevLoopEvent) {
    move |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        let rendered = render_devloop_event(&timestamp, &event, ui.color, ui.unicode);
        if event.is_problem() {
            eprint!("{rendered}");
        } else {
            print!("{rendered}");
        }
    }
}
