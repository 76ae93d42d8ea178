//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod builder;
pub mod process;

pub use builder::Builder;
pub use process::{ChildProcess, ProcessLauncher};
