//! Builder port - abstraction over the external build tool

use crate::domain::value_objects::BuildResult;

/// Runs one build to completion
///
/// Implementations:
/// - `CommandBuilder` - spawns the configured build command
/// - test doubles returning canned results
pub trait Builder {
    /// Block until the build finishes. Never fails: a build tool that cannot
    /// be started is reported as a failed build.
    fn build(&self) -> BuildResult;

    /// Human-readable command line, for headers and logs
    fn describe(&self) -> String;
}
