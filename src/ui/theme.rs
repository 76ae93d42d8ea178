use crossterm::style::Color;

/// Design tokens for the relaunch CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and rules must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const WATCH: &str = "⟳";
    pub const BUILD: &str = "🔨";
    pub const LAUNCH: &str = "🚀";
    pub const STOP: &str = "■";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";

    pub const WATCH: &str = "[~]";
    pub const BUILD: &str = "[BUILD]";
    pub const LAUNCH: &str = "[RUN]";
    pub const STOP: &str = "[STOP]";
}

/// Separator printed above the app's own output
pub mod rules {
    pub const LOG_SEPARATOR: &str = "────────────────────────────────────────";
    pub const LOG_SEPARATOR_ASCII: &str = "----------------------------------------";
}
