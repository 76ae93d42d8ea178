use relaunch::config::{ConfigWarning, LoadedConfig};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, w.file.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// Report where the configuration came from, then any warnings
pub fn report_loaded_config(loaded: &LoadedConfig, json: bool) {
    match &loaded.path {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::debug!("using built-in defaults"),
    }
    if !json {
        print_config_warnings(&loaded.warnings);
    }
}
