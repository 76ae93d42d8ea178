//! Process ports - abstraction over OS process control
//!
//! The supervisor only ever starts, signals and reaps processes; it never
//! talks to them. These traits capture exactly that surface so the restart
//! sequence can be exercised without real processes.

use std::path::Path;
use std::time::Duration;

use crate::error::RelaunchResult;

/// A launched application instance
pub trait ChildProcess {
    /// OS process id
    fn id(&self) -> u32;

    /// Ask the process to exit (SIGTERM on Unix)
    fn terminate(&mut self) -> RelaunchResult<()>;

    /// Wait up to `timeout` for the process to exit.
    ///
    /// Returns `true` if it exited (or was already gone).
    fn wait_timeout(&mut self, timeout: Duration) -> RelaunchResult<bool>;

    /// Force the process to exit and reap it (SIGKILL on Unix)
    fn kill(&mut self) -> RelaunchResult<()>;
}

/// Starts application instances and reaps strays
pub trait ProcessLauncher {
    type Child: ChildProcess;

    /// Start `program` with inherited stdout/stderr
    fn spawn(&self, program: &Path, args: &[String]) -> RelaunchResult<Self::Child>;

    /// Force-kill every process whose name is exactly `name`.
    ///
    /// Finding nothing to kill is not an error.
    fn kill_by_name(&self, name: &str) -> RelaunchResult<()>;

    /// Whether a launchable binary exists at `path`
    fn binary_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
