//! Source Tree Scanner
//!
//! Walks the watched directory and reduces it to one number: the newest
//! modification time among files with a watched extension.
//!
//! Unreadable entries are skipped rather than reported, so a file deleted
//! mid-walk or a permission error never aborts a scan.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ignore::WalkBuilder;

/// Result of a full scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Newest modification time, `UNIX_EPOCH` when nothing matched
    pub latest: SystemTime,
    /// Number of watched files whose timestamp could be read
    pub files: usize,
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self {
            latest: UNIX_EPOCH,
            files: 0,
        }
    }
}

/// Scanner for one source directory
#[derive(Debug, Clone)]
pub struct SourceScanner {
    root: PathBuf,
    /// Normalized to dotted suffixes (".swift")
    suffixes: Vec<String>,
}

impl SourceScanner {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{ext}"))
            .collect();
        Self {
            root: root.into(),
            suffixes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Watched extensions without the leading dot
    pub fn extensions(&self) -> Vec<String> {
        self.suffixes
            .iter()
            .map(|s| s.trim_start_matches('.').to_string())
            .collect()
    }

    /// Whether `path` has one of the watched extensions
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Newest modification time among watched files
    pub fn scan(&self) -> SystemTime {
        self.summarize().latest
    }

    pub fn summarize(&self) -> ScanSummary {
        let mut summary = ScanSummary::default();

        // Every file counts: hidden files and ignore files get no special treatment.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walker.flatten() {
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if !(file_type.is_file() || file_type.is_symlink()) {
                continue;
            }
            if !self.matches(entry.path()) {
                continue;
            }
            // Links to files count with the target's mtime; links to directories are skipped.
            let metadata = if file_type.is_symlink() {
                std::fs::metadata(entry.path())
                    .ok()
                    .filter(|m| m.is_file())
            } else {
                entry.metadata().ok()
            };
            let Some(modified) = metadata.and_then(|m| m.modified().ok()) else {
                tracing::trace!(path = %entry.path().display(), "skipping unreadable file");
                continue;
            };
            summary.files += 1;
            if modified > summary.latest {
                summary.latest = modified;
            }
        }

        tracing::trace!(
            root = %self.root.display(),
            files = summary.files,
            "scan complete"
        );
        summary
    }
}
