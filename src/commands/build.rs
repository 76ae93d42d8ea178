use std::path::Path;

use anyhow::Result;

use relaunch::domain::ports::Builder;
use relaunch::presentation::{ColorWhen, TargetArgs};
use relaunch::{CommandBuilder, DevLoopEvent};

use crate::ui::context::UiContext;

use super::{event_printer, load_config};

/// Run the build once. Returns whether it succeeded.
pub fn cmd_build(
    target: &TargetArgs,
    config_path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<bool> {
    let mut loaded = load_config(config_path, json)?;
    target.apply(&mut loaded.config);
    let config = loaded.config;
    let emit = event_printer(UiContext::new(json, color, &config));

    let builder = CommandBuilder::from_config(&config.build);
    emit(DevLoopEvent::BuildStarted {
        command: builder.describe(),
    });

    let result = builder.build();
    let duration_ms = result.duration.as_millis() as u64;
    let success = result.success;

    if success {
        emit(DevLoopEvent::BuildSucceeded { duration_ms });
    } else {
        emit(DevLoopEvent::BuildFailed {
            exit_code: result.exit_code,
            duration_ms,
            stdout: result.stdout,
            stderr: result.stderr,
        });
    }
    Ok(success)
}
