//! Test doubles for the builder and process ports

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use crate::application::watch::DevLoopEvent;
use crate::domain::ports::{Builder, ChildProcess, ProcessLauncher};
use crate::domain::value_objects::BuildResult;
use crate::error::{RelaunchError, RelaunchResult};

/// Shared, ordered record of port calls
pub type Log = Rc<RefCell<Vec<String>>>;

/// Event sink that keeps everything it receives
pub fn collect() -> (Rc<RefCell<Vec<DevLoopEvent>>>, impl Fn(DevLoopEvent)) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    (events, move |e| sink.borrow_mut().push(e))
}

pub struct FakeChild {
    pid: u32,
    exits_on_terminate: bool,
    log: Log,
}

impl ChildProcess for FakeChild {
    fn id(&self) -> u32 {
        self.pid
    }

    fn terminate(&mut self) -> RelaunchResult<()> {
        self.log.borrow_mut().push(format!("terminate {}", self.pid));
        Ok(())
    }

    fn wait_timeout(&mut self, _timeout: Duration) -> RelaunchResult<bool> {
        Ok(self.exits_on_terminate)
    }

    fn kill(&mut self) -> RelaunchResult<()> {
        self.log.borrow_mut().push(format!("kill {}", self.pid));
        Ok(())
    }
}

pub struct FakeLauncher {
    log: Log,
    next_pid: Cell<u32>,
    pub binary_present: bool,
    pub exits_on_terminate: bool,
    pub spawn_fails: bool,
}

impl FakeLauncher {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            next_pid: Cell::new(100),
            binary_present: true,
            exits_on_terminate: true,
            spawn_fails: false,
        }
    }
}

impl ProcessLauncher for FakeLauncher {
    type Child = FakeChild;

    fn spawn(&self, program: &Path, _args: &[String]) -> RelaunchResult<FakeChild> {
        if self.spawn_fails {
            return Err(RelaunchError::Spawn {
                program: program.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        let pid = self.next_pid.get();
        self.next_pid.set(pid + 1);
        self.log.borrow_mut().push(format!("spawn {pid}"));
        Ok(FakeChild {
            pid,
            exits_on_terminate: self.exits_on_terminate,
            log: self.log.clone(),
        })
    }

    fn kill_by_name(&self, name: &str) -> RelaunchResult<()> {
        self.log.borrow_mut().push(format!("sweep {name}"));
        Ok(())
    }

    fn binary_exists(&self, _path: &Path) -> bool {
        self.binary_present
    }
}

/// Builder returning scripted results in order, then repeating the last one
pub struct ScriptedBuilder {
    results: RefCell<Vec<bool>>,
    log: Log,
}

impl ScriptedBuilder {
    pub fn new(log: Log, results: &[bool]) -> Self {
        Self {
            results: RefCell::new(results.iter().rev().copied().collect()),
            log,
        }
    }
}

impl Builder for ScriptedBuilder {
    fn build(&self) -> BuildResult {
        let mut results = self.results.borrow_mut();
        let success = if results.len() > 1 {
            results.pop().unwrap_or(true)
        } else {
            results.last().copied().unwrap_or(true)
        };
        self.log.borrow_mut().push("build".to_string());
        if success {
            BuildResult::succeeded(Duration::from_millis(5))
        } else {
            BuildResult::failed(
                Some(65),
                "Compiling App.swift",
                "error: cannot find 'foo' in scope",
                Duration::from_millis(5),
            )
        }
    }

    fn describe(&self) -> String {
        "fake-build".to_string()
    }
}
