//! Configuration module for relaunch
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RELAUNCH_*)
//! 3. Explicit `--config` file, else project config (./relaunch.toml)
//! 4. User config (~/.config/relaunch/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{
    AppConfig, BuildConfig, ColorMode, Config, OutputConfig, SupervisorConfig, WatchConfig,
    WatchMode,
};
