//! Build Command Runner
//!
//! Runs the configured build tool as a blocking subprocess with captured
//! output. The exit status is the only success signal.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::config::BuildConfig;
use crate::domain::ports::Builder;
use crate::domain::value_objects::BuildResult;

/// Builder backed by an external command
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        let (program, args) = config.command_line();
        let builder = Self::new(program, args);
        match &config.working_dir {
            Some(dir) => builder.with_working_dir(dir),
            None => builder,
        }
    }

    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl Builder for CommandBuilder {
    fn build(&self) -> BuildResult {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(command = %self.describe(), "starting build");
        let started = Instant::now();

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "build tool failed to start");
                return BuildResult::spawn_failed(&self.program, &e);
            }
        };

        let duration = started.elapsed();
        tracing::debug!(
            status = ?output.status.code(),
            elapsed_ms = duration.as_millis() as u64,
            "build finished"
        );

        if output.status.success() {
            BuildResult::succeeded(duration)
        } else {
            BuildResult::failed(
                output.status.code(),
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr),
                duration,
            )
        }
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
