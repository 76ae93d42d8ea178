//! Dev-loop event types and options

use std::time::Duration;

use crate::config::{Config, WatchMode};

/// Options for the main loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevLoopOptions {
    /// Build and launch once before watching
    pub initial_build: bool,
    /// Upper bound between two rescans
    pub poll_interval: Duration,
    /// Pause between detecting a change and starting the build
    pub debounce: Duration,
    pub mode: WatchMode,
}

impl DevLoopOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            initial_build: true,
            poll_interval: config.poll_interval(),
            debounce: config.debounce(),
            mode: config.watch.mode,
        }
    }

    pub fn with_initial_build(mut self, initial_build: bool) -> Self {
        self.initial_build = initial_build;
        self
    }
}

impl Default for DevLoopOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Events emitted by the loop and the supervisor, rendered by the CLI or
/// printed as NDJSON.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DevLoopEvent {
    WatchStarted {
        source: String,
        extensions: Vec<String>,
        mode: WatchMode,
    },
    ChangeDetected,
    BuildStarted {
        command: String,
    },
    BuildSucceeded {
        duration_ms: u64,
    },
    BuildFailed {
        exit_code: Option<i32>,
        duration_ms: u64,
        stdout: String,
        stderr: String,
    },
    AppStopping {
        pid: u32,
    },
    AppForceKilled {
        pid: u32,
    },
    AppLaunching {
        path: String,
    },
    AppStarted {
        pid: u32,
        path: String,
    },
    AppMissing {
        path: String,
    },
    AppLaunchFailed {
        message: String,
    },
    Warning {
        message: String,
    },
    Shutdown,
}

impl DevLoopEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether the event reports a problem (rendered on stderr)
    pub fn is_problem(&self) -> bool {
        matches!(
            self,
            DevLoopEvent::BuildFailed { .. }
                | DevLoopEvent::AppMissing { .. }
                | DevLoopEvent::AppLaunchFailed { .. }
                | DevLoopEvent::Warning { .. }
        )
    }
}
