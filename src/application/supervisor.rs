//! Process Supervisor
//!
//! Owns the single tracked application instance. Every `run()` stops the
//! previous instance (SIGTERM, grace period, SIGKILL), sweeps stray instances
//! by name, waits for the OS to settle and launches a fresh one.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::watch::DevLoopEvent;
use crate::config::Config;
use crate::domain::ports::{ChildProcess, ProcessLauncher};
use crate::domain::value_objects::LaunchOutcome;

/// Supervisor settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorOptions {
    pub app_path: PathBuf,
    pub app_args: Vec<String>,
    /// Name for the orphan sweep; `None` disables the sweep
    pub sweep_name: Option<String>,
    pub grace_period: Duration,
    pub settle_delay: Duration,
}

impl SupervisorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            app_path: config.app_path(),
            app_args: config.app.args.clone(),
            sweep_name: config
                .supervisor
                .sweep_orphans
                .then(|| config.process_name()),
            grace_period: config.grace_period(),
            settle_delay: config.settle_delay(),
        }
    }
}

pub struct ProcessSupervisor<L: ProcessLauncher> {
    launcher: L,
    options: SupervisorOptions,
    current: Option<L::Child>,
}

impl<L: ProcessLauncher> ProcessSupervisor<L> {
    pub fn new(launcher: L, options: SupervisorOptions) -> Self {
        Self {
            launcher,
            options,
            current: None,
        }
    }

    /// Pid of the tracked instance, if any
    pub fn current_pid(&self) -> Option<u32> {
        self.current.as_ref().map(|c| c.id())
    }

    /// Replace whatever is running with a fresh instance.
    pub fn run(&mut self, on_event: &impl Fn(DevLoopEvent)) -> LaunchOutcome {
        self.stop(on_event);

        let path = self.options.app_path.clone();
        on_event(DevLoopEvent::AppLaunching {
            path: path.display().to_string(),
        });

        if !self.launcher.binary_exists(&path) {
            tracing::warn!(path = %path.display(), "app binary not found");
            on_event(DevLoopEvent::AppMissing {
                path: path.display().to_string(),
            });
            return LaunchOutcome::BinaryMissing { path };
        }

        match self.launcher.spawn(&path, &self.options.app_args) {
            Ok(child) => {
                let pid = child.id();
                self.current = Some(child);
                on_event(DevLoopEvent::AppStarted {
                    pid,
                    path: path.display().to_string(),
                });
                LaunchOutcome::Launched { pid }
            }
            Err(e) => {
                let message = e.to_string();
                on_event(DevLoopEvent::AppLaunchFailed {
                    message: message.clone(),
                });
                LaunchOutcome::LaunchFailed { message }
            }
        }
    }

    /// Stop the tracked instance, sweep strays and wait for teardown.
    ///
    /// Safe to call with nothing running; the sweep still happens.
    pub fn stop(&mut self, on_event: &impl Fn(DevLoopEvent)) {
        self.stop_current(on_event);

        if let Some(name) = &self.options.sweep_name {
            if let Err(e) = self.launcher.kill_by_name(name) {
                tracing::warn!(name, error = %e, "orphan sweep failed");
                on_event(DevLoopEvent::Warning {
                    message: format!("orphan sweep for '{name}' failed: {e}"),
                });
            }
        }

        if !self.options.settle_delay.is_zero() {
            std::thread::sleep(self.options.settle_delay);
        }
    }

    /// Exit path: stop the tracked instance without sweeping or settling.
    pub fn shutdown(&mut self, on_event: &impl Fn(DevLoopEvent)) {
        self.stop_current(on_event);
    }

    fn stop_current(&mut self, on_event: &impl Fn(DevLoopEvent)) {
        let Some(mut child) = self.current.take() else {
            return;
        };
        let pid = child.id();
        on_event(DevLoopEvent::AppStopping { pid });

        if let Err(e) = child.terminate() {
            tracing::debug!(pid, error = %e, "terminate failed");
        }

        let exited = match child.wait_timeout(self.options.grace_period) {
            Ok(exited) => exited,
            Err(e) => {
                tracing::debug!(pid, error = %e, "wait failed");
                false
            }
        };
        if exited {
            return;
        }

        on_event(DevLoopEvent::AppForceKilled { pid });
        if let Err(e) = child.kill() {
            tracing::warn!(pid, error = %e, "force kill failed");
        }
    }
}
