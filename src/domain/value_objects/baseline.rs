//! Watch Baseline Value Object
//!
//! The newest modification time seen so far across the watched files.

use std::time::{SystemTime, UNIX_EPOCH};

/// Change-detection threshold owned by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchBaseline {
    latest: SystemTime,
}

impl WatchBaseline {
    pub fn new(latest: SystemTime) -> Self {
        Self { latest }
    }

    pub fn latest(&self) -> SystemTime {
        self.latest
    }

    /// Record a fresh scan result.
    ///
    /// Returns `true` (and moves the baseline) only when `scanned` is strictly
    /// newer than the current baseline.
    pub fn observe(&mut self, scanned: SystemTime) -> bool {
        if scanned > self.latest {
            self.latest = scanned;
            true
        } else {
            false
        }
    }
}

impl Default for WatchBaseline {
    fn default() -> Self {
        Self::new(UNIX_EPOCH)
    }
}
