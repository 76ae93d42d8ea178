use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use relaunch::domain::ports::Builder;
use relaunch::presentation::{ColorWhen, RunArgs};
use relaunch::{
    ChangeWatcher, CommandBuilder, DevLoopEvent, DevLoopOptions, DevLoopUseCase, OsLauncher,
    ProcessSupervisor, SourceScanner, SupervisorOptions, WatchMode,
};

use crate::ui::context::UiContext;
use crate::ui::views::devloop::{render_devloop_header, HeaderInfo};

use super::{event_printer, load_config};

pub fn cmd_run(
    args: &RunArgs,
    config_path: Option<&Path>,
    json: bool,
    color: Option<ColorWhen>,
) -> Result<()> {
    let mut loaded = load_config(config_path, json)?;
    args.apply(&mut loaded.config);
    let config = loaded.config;
    let ui = UiContext::new(json, color, &config);
    let emit = event_printer(ui);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let builder = CommandBuilder::from_config(&config.build);
    let supervisor_options = SupervisorOptions::from_config(&config);
    let app_display = supervisor_options.app_path.display().to_string();
    let supervisor = ProcessSupervisor::new(OsLauncher::new(), supervisor_options);

    let scanner = SourceScanner::new(config.source_dir(), &config.watch.extensions);
    if !scanner.root().is_dir() {
        emit(DevLoopEvent::Warning {
            message: format!(
                "source directory {} does not exist; no changes will be detected until it does",
                scanner.root().display()
            ),
        });
    }

    let watcher = match config.watch.mode {
        WatchMode::Poll => ChangeWatcher::new(scanner),
        WatchMode::Notify => match ChangeWatcher::new(scanner.clone()).with_notify() {
            Ok(watcher) => watcher,
            Err(e) => {
                emit(DevLoopEvent::Warning {
                    message: format!("native file events unavailable ({e}); polling instead"),
                });
                ChangeWatcher::new(scanner)
            }
        },
    };

    if !json {
        let source = watcher.scanner().root().display().to_string();
        let build = builder.describe();
        let mode = if watcher.is_native() { "notify" } else { "poll" };
        print!(
            "{}",
            render_devloop_header(
                &HeaderInfo {
                    source: &source,
                    build: &build,
                    app: &app_display,
                    mode,
                },
                ui.color,
                ui.unicode
            )
        );
    }

    tracing::info!(
        source = %watcher.scanner().root().display(),
        app = %app_display,
        "starting dev loop"
    );

    let options = DevLoopOptions::from_config(&config).with_initial_build(!args.no_initial_build);
    let mut use_case = DevLoopUseCase::new(builder, supervisor, watcher, options);
    use_case.start(running, emit)?;

    Ok(())
}
