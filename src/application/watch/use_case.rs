//! Dev-loop use case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::supervisor::ProcessSupervisor;
use crate::config::WatchMode;
use crate::domain::ports::{Builder, ProcessLauncher};
use crate::domain::value_objects::LaunchOutcome;
use crate::error::RelaunchResult;

use super::event::{DevLoopEvent, DevLoopOptions};
use super::watcher::{pause, ChangeWatcher};

/// Build, launch, watch, repeat
///
/// ```text
/// INITIALIZING -> BUILDING -> RUNNING | BUILD_FAILED -> WATCHING -> BUILDING ...
///                                                          |
///                                                   interrupt -> EXITED
/// ```
pub struct DevLoopUseCase<B: Builder, L: ProcessLauncher> {
    builder: B,
    supervisor: ProcessSupervisor<L>,
    watcher: ChangeWatcher,
    options: DevLoopOptions,
}

impl<B: Builder, L: ProcessLauncher> DevLoopUseCase<B, L> {
    /// The watcher's baseline is taken when it is constructed, so create it
    /// right before the loop starts.
    pub fn new(
        builder: B,
        supervisor: ProcessSupervisor<L>,
        watcher: ChangeWatcher,
        options: DevLoopOptions,
    ) -> Self {
        Self {
            builder,
            supervisor,
            watcher,
            options,
        }
    }

    pub fn supervisor(&self) -> &ProcessSupervisor<L> {
        &self.supervisor
    }

    /// Run until `running` is cleared, then stop the app.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F) -> RelaunchResult<()>
    where
        F: Fn(DevLoopEvent),
    {
        let scanner = self.watcher.scanner();
        on_event(DevLoopEvent::WatchStarted {
            source: scanner.root().display().to_string(),
            extensions: scanner.extensions(),
            mode: if self.watcher.is_native() {
                WatchMode::Notify
            } else {
                WatchMode::Poll
            },
        });

        if self.options.initial_build {
            self.build_and_run(&running, &on_event);
        }

        while running.load(Ordering::SeqCst) {
            self.watcher.wait(self.options.poll_interval, &running);
            if !running.load(Ordering::SeqCst) {
                break;
            }

            if !self.watcher.poll() {
                continue;
            }
            on_event(DevLoopEvent::ChangeDetected);

            // Let editors finish writing before the build reads the tree
            if !pause(self.options.debounce, &running) {
                break;
            }
            self.build_and_run(&running, &on_event);
        }

        self.supervisor.shutdown(&on_event);
        on_event(DevLoopEvent::Shutdown);
        Ok(())
    }

    /// One BUILDING step, followed by RUNNING when the build succeeds.
    ///
    /// Returns `None` when the build failed (nothing was launched) or the loop
    /// was interrupted during the build.
    pub fn build_and_run(
        &mut self,
        running: &AtomicBool,
        on_event: &impl Fn(DevLoopEvent),
    ) -> Option<LaunchOutcome> {
        on_event(DevLoopEvent::BuildStarted {
            command: self.builder.describe(),
        });

        let result = self.builder.build();
        let duration_ms = result.duration.as_millis() as u64;

        if !result.success {
            on_event(DevLoopEvent::BuildFailed {
                exit_code: result.exit_code,
                duration_ms,
                stdout: result.stdout,
                stderr: result.stderr,
            });
            return None;
        }

        on_event(DevLoopEvent::BuildSucceeded { duration_ms });

        if !running.load(Ordering::SeqCst) {
            return None;
        }
        Some(self.supervisor.run(on_event))
    }
}
