use std::path::PathBuf;

/// What a supervisor `run()` ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A fresh instance is running and tracked
    Launched { pid: u32 },
    /// Nothing at the expected build-output path
    BinaryMissing { path: PathBuf },
    /// The binary exists but could not be started
    LaunchFailed { message: String },
}

impl LaunchOutcome {
    pub fn is_launched(&self) -> bool {
        matches!(self, LaunchOutcome::Launched { .. })
    }
}
