//! Change watcher
//!
//! Pairs the source scanner with the watch baseline. In `notify` mode a native
//! file watcher only shortens the wait between scans; the decision to rebuild
//! is always "newest mtime strictly exceeds the baseline".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant, SystemTime};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::value_objects::WatchBaseline;
use crate::error::RelaunchResult;
use crate::infrastructure::scan::SourceScanner;

/// Granularity at which sleeps notice an interrupt
const TICK: Duration = Duration::from_millis(50);

struct Wake {
    // Dropping the watcher stops event delivery
    _watcher: RecommendedWatcher,
    rx: Receiver<()>,
}

pub struct ChangeWatcher {
    scanner: SourceScanner,
    baseline: WatchBaseline,
    wake: Option<Wake>,
}

impl ChangeWatcher {
    /// Create a watcher whose baseline is the current state of the tree
    pub fn new(scanner: SourceScanner) -> Self {
        let baseline = WatchBaseline::new(scanner.scan());
        Self {
            scanner,
            baseline,
            wake: None,
        }
    }

    /// Wake up early on native file events for watched files
    pub fn with_notify(mut self) -> RelaunchResult<Self> {
        let (tx, rx) = channel();
        let filter = self.scanner.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    if event.paths.iter().any(|p| filter.matches(p)) {
                        let _ = tx.send(());
                    }
                }
            },
            Config::default(),
        )?;
        watcher.watch(self.scanner.root(), RecursiveMode::Recursive)?;

        self.wake = Some(Wake {
            _watcher: watcher,
            rx,
        });
        Ok(self)
    }

    pub fn scanner(&self) -> &SourceScanner {
        &self.scanner
    }

    pub fn baseline(&self) -> SystemTime {
        self.baseline.latest()
    }

    pub fn is_native(&self) -> bool {
        self.wake.is_some()
    }

    /// Rescan and report whether the tree changed since the last detection.
    ///
    /// The baseline moves immediately, so a second call without further
    /// modification returns `false`.
    pub fn poll(&mut self) -> bool {
        let scanned = self.scanner.scan();
        let changed = self.baseline.observe(scanned);
        if changed {
            tracing::debug!(root = %self.scanner.root().display(), "change detected");
        }
        changed
    }

    /// Block for up to `interval`, returning early on interrupt or (in notify
    /// mode) on a file event.
    pub fn wait(&self, interval: Duration, running: &AtomicBool) {
        let Some(wake) = &self.wake else {
            pause(interval, running);
            return;
        };

        let deadline = Instant::now() + interval;
        while running.load(Ordering::SeqCst) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            match wake.rx.recv_timeout(remaining.min(TICK)) {
                Ok(()) => {
                    // Coalesce the burst that usually accompanies one save
                    while wake.rx.try_recv().is_ok() {}
                    return;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    pause(remaining, running);
                    return;
                }
            }
        }
    }
}

/// Sleep for `duration` in small ticks. Returns `false` if interrupted.
pub fn pause(duration: Duration, running: &AtomicBool) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        if !running.load(Ordering::SeqCst) {
            return false;
        }
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return true;
        }
        std::thread::sleep(remaining.min(TICK));
    }
}
