//! Build Result Value Object

use std::time::Duration;

/// Outcome of one build invocation
///
/// Output is only kept for display; success is decided by the exit status alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal or never started
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl BuildResult {
    pub fn succeeded(duration: Duration) -> Self {
        Self {
            success: true,
            stdout: String::new(),
            stderr: String::new(),
            exit_code: Some(0),
            duration,
        }
    }

    pub fn failed(
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            success: false,
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
            duration,
        }
    }

    /// The build tool could not be started at all
    pub fn spawn_failed(program: &str, err: &std::io::Error) -> Self {
        Self::failed(
            None,
            String::new(),
            format!("failed to start '{program}': {err}"),
            Duration::ZERO,
        )
    }
}
