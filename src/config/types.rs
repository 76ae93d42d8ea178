//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RelaunchResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Build tool configuration
///
/// By default the build line is generated for `xcodebuild`:
///
/// ```text
/// xcodebuild -project <project> -scheme <scheme> -configuration <configuration>
///            -destination <destination> -derivedDataPath <derived_data_path> [args...]
/// ```
///
/// Setting `command` replaces the generated line entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_program")]
    pub program: String,

    /// Project file; defaults to `<scheme>.xcodeproj`
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_configuration")]
    pub configuration: String,

    #[serde(default = "default_destination")]
    pub destination: String,

    #[serde(default = "default_derived_data_path")]
    pub derived_data_path: PathBuf,

    /// Extra arguments appended to the generated line
    #[serde(default)]
    pub args: Vec<String>,

    /// Full command line override (program followed by its arguments)
    #[serde(default)]
    pub command: Option<Vec<String>>,

    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            project: None,
            scheme: default_scheme(),
            configuration: default_configuration(),
            destination: default_destination(),
            derived_data_path: default_derived_data_path(),
            args: Vec::new(),
            command: None,
            working_dir: None,
        }
    }
}

impl BuildConfig {
    pub fn project_file(&self) -> String {
        self.project
            .clone()
            .unwrap_or_else(|| format!("{}.xcodeproj", self.scheme))
    }

    /// Program and arguments of the build invocation
    pub fn command_line(&self) -> (String, Vec<String>) {
        if let Some(command) = &self.command {
            if let Some((program, args)) = command.split_first() {
                return (program.clone(), args.to_vec());
            }
        }

        let mut args = vec![
            "-project".to_string(),
            self.project_file(),
            "-scheme".to_string(),
            self.scheme.clone(),
            "-configuration".to_string(),
            self.configuration.clone(),
            "-destination".to_string(),
            self.destination.clone(),
            "-derivedDataPath".to_string(),
            self.derived_data_path.display().to_string(),
        ];
        args.extend(self.args.iter().cloned());
        (self.program.clone(), args)
    }
}

fn default_program() -> String {
    "xcodebuild".to_string()
}

fn default_scheme() -> String {
    "App".to_string()
}

fn default_configuration() -> String {
    "Debug".to_string()
}

fn default_destination() -> String {
    "generic/platform=macOS".to_string()
}

fn default_derived_data_path() -> PathBuf {
    PathBuf::from("build")
}

/// Application launch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Binary to launch; derived from the build settings when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Name used for the orphan sweep; defaults to the binary's file name
    #[serde(default)]
    pub process_name: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,
}

/// How the loop is woken up between scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WatchMode {
    /// Sleep the poll interval, then rescan
    #[default]
    Poll,
    /// Rescan early when the OS reports a file event
    Notify,
}

impl std::str::FromStr for WatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "poll" => Ok(WatchMode::Poll),
            "notify" | "native" => Ok(WatchMode::Notify),
            other => Err(format!("unknown watch mode '{other}' (expected poll or notify)")),
        }
    }
}

/// Change watcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Source tree to scan; defaults to a directory named after the scheme
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub mode: WatchMode,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            source: None,
            extensions: default_extensions(),
            poll_interval_ms: default_poll_interval_ms(),
            debounce_ms: default_debounce_ms(),
            mode: WatchMode::default(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![
        "swift".to_string(),
        "entitlements".to_string(),
        "plist".to_string(),
    ]
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_debounce_ms() -> u64 {
    500
}

/// Process supervisor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorConfig {
    #[serde(default = "default_grace_period_ms")]
    pub grace_period_ms: u64,

    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    #[serde(default = "default_true")]
    pub sweep_orphans: bool,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            grace_period_ms: default_grace_period_ms(),
            settle_ms: default_settle_ms(),
            sweep_orphans: true,
        }
    }
}

fn default_grace_period_ms() -> u64 {
    1000
}

fn default_settle_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub supervisor: SupervisorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RelaunchResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RelaunchResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a project directory.
    ///
    /// An explicit file wins over `relaunch.toml` in the project root, which
    /// wins over the user config. Environment overrides apply last.
    pub fn resolve(explicit: Option<&Path>, project_root: &Path) -> RelaunchResult<LoadedConfig> {
        loader::resolve(explicit, project_root)
    }

    /// Binary launched after a successful build
    pub fn app_path(&self) -> PathBuf {
        if let Some(path) = &self.app.path {
            return path.clone();
        }
        let scheme = &self.build.scheme;
        self.build
            .derived_data_path
            .join("Build")
            .join("Products")
            .join(&self.build.configuration)
            .join(format!("{scheme}.app"))
            .join("Contents")
            .join("MacOS")
            .join(scheme)
    }

    /// Process name matched by the orphan sweep
    pub fn process_name(&self) -> String {
        if let Some(name) = &self.app.process_name {
            return name.clone();
        }
        self.app_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.build.scheme.clone())
    }

    /// Directory scanned for changes
    pub fn source_dir(&self) -> PathBuf {
        self.watch
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.build.scheme))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.watch.poll_interval_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.watch.debounce_ms)
    }

    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.supervisor.grace_period_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.supervisor.settle_ms)
    }
}
