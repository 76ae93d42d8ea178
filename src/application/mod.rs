//! Application Layer
//!
//! Orchestrates the dev loop on top of the domain ports.
//!
//! - `DevLoopUseCase` - build, launch, watch, rebuild
//! - `ProcessSupervisor` - owns the running app instance

pub mod supervisor;
pub mod watch;

#[cfg(test)]
pub(crate) mod test_support;

pub use supervisor::{ProcessSupervisor, SupervisorOptions};
pub use watch::{pause, ChangeWatcher, DevLoopEvent, DevLoopOptions, DevLoopUseCase};
