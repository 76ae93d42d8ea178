//! Domain Value Objects
//!
//! Small value types passed between the loop, the builder and the supervisor.

mod baseline;
mod build_result;
mod launch_outcome;

pub use baseline::WatchBaseline;
pub use build_result::BuildResult;
pub use launch_outcome::LaunchOutcome;
