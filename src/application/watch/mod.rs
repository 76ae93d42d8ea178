//! Dev Loop
//!
//! Build, launch, then watch the source tree and rebuild on change:
//! - `ChangeWatcher` - rescans the tree and compares against the baseline
//! - `DevLoopUseCase` - drives build, relaunch and shutdown
//! - `DevLoopEvent` - events emitted while the loop runs
//!
//! ## Usage
//!
//! ```ignore
//! let watcher = ChangeWatcher::new(SourceScanner::new(source, &extensions));
//! let mut use_case = DevLoopUseCase::new(builder, supervisor, watcher, options);
//! use_case.start(running, |event| { ... })?;
//! ```

mod event;
mod use_case;
mod watcher;


pub use event::{DevLoopEvent, DevLoopOptions};
pub use use_case::DevLoopUseCase;
pub use watcher::{pause, ChangeWatcher};
