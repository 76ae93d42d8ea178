//! OS Process Control
//!
//! Spawns the application with inherited stdio, stops it with SIGTERM then
//! SIGKILL, and reaps strays by name.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::domain::ports::{ChildProcess, ProcessLauncher};
use crate::error::{RelaunchError, RelaunchResult};

/// Launcher for real OS processes
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLauncher;

impl OsLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessLauncher for OsLauncher {
    type Child = OsChild;

    fn spawn(&self, program: &Path, args: &[String]) -> RelaunchResult<OsChild> {
        // stdout/stderr are inherited so the app's logs stream to this terminal
        let child = Command::new(program)
            .args(args)
            .spawn()
            .map_err(|source| RelaunchError::Spawn {
                program: program.display().to_string(),
                source,
            })?;
        tracing::debug!(pid = child.id(), program = %program.display(), "spawned app");
        Ok(OsChild { child })
    }

    fn kill_by_name(&self, name: &str) -> RelaunchResult<()> {
        let (program, args) = kill_by_name_command(name);
        let status = Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| RelaunchError::Spawn {
                program: program.to_string(),
                source,
            })?;
        // Non-zero usually just means nothing matched
        tracing::debug!(name, status = ?status.code(), "orphan sweep finished");
        Ok(())
    }
}

#[cfg(unix)]
fn kill_by_name_command(name: &str) -> (&'static str, Vec<String>) {
    (
        "pkill",
        vec!["-9".to_string(), "-x".to_string(), comm_name(name).to_string()],
    )
}

/// Linux `pkill -x` compares against `comm`, which the kernel cuts to 15 bytes
#[cfg(target_os = "linux")]
fn comm_name(name: &str) -> &str {
    const COMM_LEN: usize = 15;
    if name.len() <= COMM_LEN {
        return name;
    }
    let mut end = COMM_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

#[cfg(all(unix, not(target_os = "linux")))]
fn comm_name(name: &str) -> &str {
    name
}

#[cfg(windows)]
fn kill_by_name_command(name: &str) -> (&'static str, Vec<String>) {
    let image = if name.to_lowercase().ends_with(".exe") {
        name.to_string()
    } else {
        format!("{name}.exe")
    };
    ("taskkill", vec!["/F".to_string(), "/IM".to_string(), image])
}

/// A running application instance
#[derive(Debug)]
pub struct OsChild {
    child: Child,
}

impl OsChild {
    fn has_exited(&mut self) -> RelaunchResult<bool> {
        Ok(self.child.try_wait()?.is_some())
    }
}

impl ChildProcess for OsChild {
    fn id(&self) -> u32 {
        self.child.id()
    }

    #[cfg(unix)]
    fn terminate(&mut self) -> RelaunchResult<()> {
        use nix::errno::Errno;
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        if self.has_exited()? {
            return Ok(());
        }
        match kill(Pid::from_raw(self.child.id() as i32), Signal::SIGTERM) {
            Ok(()) | Err(Errno::ESRCH) => Ok(()),
            Err(e) => Err(RelaunchError::Signal {
                signal: "SIGTERM".to_string(),
                reason: e.to_string(),
            }),
        }
    }

    #[cfg(not(unix))]
    fn terminate(&mut self) -> RelaunchResult<()> {
        // No SIGTERM equivalent here
        self.kill()
    }

    fn wait_timeout(&mut self, timeout: Duration) -> RelaunchResult<bool> {
        Ok(self.child.wait_timeout(timeout)?.is_some())
    }

    fn kill(&mut self) -> RelaunchResult<()> {
        if self.has_exited()? {
            return Ok(());
        }
        self.child.kill()?;
        self.child.wait()?;
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sleeper(script: &str) -> OsChild {
        OsLauncher::new()
            .spawn(
                &PathBuf::from("/bin/sh"),
                &["-c".to_string(), script.to_string()],
            )
            .unwrap()
    }

    #[test]
    fn terminate_stops_cooperative_process() {
        let mut child = sleeper("sleep 30");

        child.terminate().unwrap();

        assert!(child.wait_timeout(Duration::from_secs(5)).unwrap());
    }

    #[test]
    fn kill_stops_process_ignoring_sigterm() {
        let mut child = sleeper("trap '' TERM; sleep 30");
        std::thread::sleep(Duration::from_millis(100));

        child.terminate().unwrap();
        assert!(!child.wait_timeout(Duration::from_millis(200)).unwrap());

        child.kill().unwrap();
        assert!(child.has_exited().unwrap());
    }

    #[test]
    fn signals_after_exit_are_harmless() {
        let mut child = sleeper("exit 0");
        assert!(child.wait_timeout(Duration::from_secs(5)).unwrap());

        child.terminate().unwrap();
        child.kill().unwrap();
    }

    #[test]
    fn spawn_missing_binary_is_spawn_error() {
        let err = OsLauncher::new()
            .spawn(Path::new("/nonexistent/relaunch-app"), &[])
            .unwrap_err();
        assert!(matches!(err, RelaunchError::Spawn { .. }));
    }

    #[test]
    fn kill_by_name_command_uses_exact_match_sigkill() {
        let (program, args) = kill_by_name_command("PowerUserMail");
        assert_eq!(program, "pkill");
        assert_eq!(args, vec!["-9", "-x", "PowerUserMail"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn kill_by_name_command_truncates_long_names_to_comm() {
        let (_, args) = kill_by_name_command("PowerUserMailPreview");
        assert_eq!(args, vec!["-9", "-x", "PowerUserMailPr"]);

        // Never splits a multi-byte character
        assert_eq!(comm_name("MailClientApp€x"), "MailClientApp");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn kill_by_name_reaps_process_with_long_name() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("relaunch-sweep-target");
        std::fs::copy("/bin/sleep", &exe).unwrap();

        let mut child = OsLauncher::new()
            .spawn(&exe, &["30".to_string()])
            .unwrap();
        std::thread::sleep(Duration::from_millis(100));

        OsLauncher::new()
            .kill_by_name("relaunch-sweep-target")
            .unwrap();

        assert!(child.wait_timeout(Duration::from_secs(5)).unwrap());
    }
}
