//! Domain Layer
//!
//! The dev-loop vocabulary without I/O: build results, the watch baseline,
//! launch outcomes, and the ports the infrastructure layer implements.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (BuildResult, WatchBaseline, LaunchOutcome)
//! - `ports/` - Interface definitions for infrastructure (Builder, ProcessLauncher)

pub mod ports;
pub mod value_objects;
