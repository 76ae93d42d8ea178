//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RelaunchError, RelaunchResult};

use super::types::{Config, WatchMode};

/// File name looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "relaunch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from (`None` for built-in defaults)
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RelaunchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RelaunchError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RelaunchError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve explicit file, project config, user config or defaults, then
/// apply environment overrides.
pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> RelaunchResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                Some(project_config)
            } else {
                user_config_path().filter(|p| p.exists())
            }
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        warnings,
        path: candidate,
    })
}

/// `<config_dir>/relaunch/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("relaunch").join("config.toml"))
}

/// Apply environment variable overrides (RELAUNCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(source) = get_env("RELAUNCH_SOURCE") {
        config.watch.source = Some(PathBuf::from(source));
    }

    if let Some(scheme) = get_env("RELAUNCH_SCHEME") {
        config.build.scheme = scheme;
    }

    if let Some(project) = get_env("RELAUNCH_PROJECT") {
        config.build.project = Some(project);
    }

    if let Some(path) = get_env("RELAUNCH_APP_PATH") {
        config.app.path = Some(PathBuf::from(path));
    }

    if let Some(ms) = get_env("RELAUNCH_POLL_MS") {
        match ms.trim().parse() {
            Ok(ms) => config.watch.poll_interval_ms = ms,
            Err(_) => tracing::warn!(value = %ms, "ignoring invalid RELAUNCH_POLL_MS"),
        }
    }

    if let Some(ms) = get_env("RELAUNCH_DEBOUNCE_MS") {
        match ms.trim().parse() {
            Ok(ms) => config.watch.debounce_ms = ms,
            Err(_) => tracing::warn!(value = %ms, "ignoring invalid RELAUNCH_DEBOUNCE_MS"),
        }
    }

    if let Some(mode) = get_env("RELAUNCH_WATCH_MODE") {
        match mode.parse::<WatchMode>() {
            Ok(mode) => config.watch.mode = mode,
            Err(e) => tracing::warn!("ignoring RELAUNCH_WATCH_MODE: {e}"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "build",
        "program",
        "project",
        "scheme",
        "configuration",
        "destination",
        "derived_data_path",
        "args",
        "command",
        "working_dir",
        "app",
        "path",
        "process_name",
        "watch",
        "source",
        "extensions",
        "poll_interval_ms",
        "debounce_ms",
        "mode",
        "supervisor",
        "grace_period_ms",
        "settle_ms",
        "sweep_orphans",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
