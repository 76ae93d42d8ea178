//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand is the same as `relaunch run`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, WatchMode};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Relaunch - rebuild and relaunch an app whenever its sources change
#[derive(Parser, Debug)]
#[command(name = "relaunch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'relaunch' without arguments to start the dev loop.")]
pub struct Cli {
    /// Config file (defaults to ./relaunch.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output events as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build, launch, and rebuild on every source change (default)
    Run(RunArgs),

    /// Build once and exit (non-zero on failure)
    Build {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the newest modification time in the source tree
    Scan {
        /// Directory to scan
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Create relaunch.toml in the current directory
    Init {
        /// Scheme name (defaults to the directory name)
        #[arg(long)]
        scheme: Option<String>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Overrides for the build target
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetArgs {
    /// Build scheme (also names the app and the default source directory)
    #[arg(long)]
    pub scheme: Option<String>,

    /// Project file passed to the build tool
    #[arg(long)]
    pub project: Option<String>,
}

impl TargetArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(scheme) = &self.scheme {
            config.build.scheme = scheme.clone();
        }
        if let Some(project) = &self.project {
            config.build.project = Some(project.clone());
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Source directory to watch
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// App binary to launch after a successful build
    #[arg(long, value_name = "PATH")]
    pub app: Option<PathBuf>,

    /// Milliseconds between scans
    #[arg(long, value_name = "MS")]
    pub poll_ms: Option<u64>,

    /// Milliseconds to wait after a change before building
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// How to wait between scans (poll or notify)
    #[arg(long)]
    pub mode: Option<WatchMode>,

    /// Start watching without building first
    #[arg(long)]
    pub no_initial_build: bool,

    /// Arguments passed to the app
    #[arg(last = true, value_name = "APP_ARGS")]
    pub app_args: Vec<String>,
}

impl RunArgs {
    /// Layer flags over the resolved configuration
    pub fn apply(&self, config: &mut Config) {
        self.target.apply(config);
        if let Some(source) = &self.source {
            config.watch.source = Some(source.clone());
        }
        if let Some(app) = &self.app {
            config.app.path = Some(app.clone());
        }
        if let Some(ms) = self.poll_ms {
            config.watch.poll_interval_ms = ms;
        }
        if let Some(ms) = self.debounce_ms {
            config.watch.debounce_ms = ms;
        }
        if let Some(mode) = self.mode {
            config.watch.mode = mode;
        }
        if !self.app_args.is_empty() {
            config.app.args = self.app_args.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["relaunch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "relaunch",
            "build",
            "--json",
            "--color",
            "never",
            "--config",
            "ci.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
    }

    #[test]
    fn test_cli_verbose_count() {
        let cli = Cli::try_parse_from(["relaunch", "-vv", "scan"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_run_flags() {
        let cli = Cli::try_parse_from([
            "relaunch",
            "run",
            "--scheme",
            "PowerUserMail",
            "--source",
            "Sources",
            "--poll-ms",
            "250",
            "--debounce-ms",
            "100",
            "--mode",
            "notify",
            "--no-initial-build",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.target.scheme.as_deref(), Some("PowerUserMail"));
        assert_eq!(args.source, Some(PathBuf::from("Sources")));
        assert_eq!(args.poll_ms, Some(250));
        assert_eq!(args.debounce_ms, Some(100));
        assert_eq!(args.mode, Some(WatchMode::Notify));
        assert!(args.no_initial_build);
    }

    #[test]
    fn test_cli_parse_run_app_args() {
        let cli =
            Cli::try_parse_from(["relaunch", "run", "--", "--reset-state", "-v"]).unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("Expected Run command");
        };
        assert_eq!(args.app_args, vec!["--reset-state", "-v"]);
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["relaunch", "run", "--mode", "inotify"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_init_force() {
        let cli = Cli::try_parse_from(["relaunch", "init", "--force"]).unwrap();
        if let Some(Commands::Init { force, scheme }) = cli.command {
            assert!(force);
            assert!(scheme.is_none());
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_run_args_apply_overrides_config() {
        let args = RunArgs {
            target: TargetArgs {
                scheme: Some("Mail".to_string()),
                project: Some("Mail/Mail.xcodeproj".to_string()),
            },
            app: Some(PathBuf::from("/tmp/Mail")),
            poll_ms: Some(200),
            app_args: vec!["--demo".to_string()],
            ..RunArgs::default()
        };
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.build.scheme, "Mail");
        assert_eq!(config.build.project_file(), "Mail/Mail.xcodeproj");
        assert_eq!(config.app_path(), PathBuf::from("/tmp/Mail"));
        assert_eq!(config.watch.poll_interval_ms, 200);
        assert_eq!(config.watch.debounce_ms, 500);
        assert_eq!(config.app.args, vec!["--demo"]);
        assert_eq!(config.source_dir(), PathBuf::from("Mail"));
    }

    #[test]
    fn test_run_args_default_leaves_config_untouched() {
        let mut config = Config::default();
        RunArgs::default().apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
