//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `build/` - Build tool runner (`CommandBuilder`)
//! - `process/` - OS process control (`OsLauncher`, `OsChild`)
//! - `scan/` - Source tree modification-time scanner

pub mod build;
pub mod process;
pub mod scan;

// Re-export for convenience
pub use build::CommandBuilder;
pub use process::{OsChild, OsLauncher};
pub use scan::{ScanSummary, SourceScanner};
