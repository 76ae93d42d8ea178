//! Relaunch - rebuild and relaunch an app whenever its sources change
//!
//! Relaunch runs an external build tool (xcodebuild by default), launches the
//! built binary, then polls the source tree and repeats the cycle on every
//! change until interrupted.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ChangeWatcher, DevLoopEvent, DevLoopOptions, DevLoopUseCase, ProcessSupervisor,
    SupervisorOptions,
};
pub use config::{Config, WatchMode};
pub use error::{RelaunchError, RelaunchResult};
pub use infrastructure::{CommandBuilder, OsLauncher, SourceScanner};
