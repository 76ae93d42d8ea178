//! Relaunch CLI - rebuild and relaunch an app whenever its sources change
//!
//! Usage: relaunch [COMMAND]
//!
//! Commands:
//!   run    Build, launch, and rebuild on every source change (default)
//!   build  Build once and exit
//!   scan   Print the newest modification time in the source tree
//!   init   Create relaunch.toml

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use relaunch::presentation::{Cli, Commands, RunArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::error::print_error(&e, json);
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("relaunch={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch(cli: Cli) -> Result<i32> {
    let config = cli.config.as_deref();

    match cli.command {
        None => commands::run::cmd_run(&RunArgs::default(), config, cli.json, cli.color)?,
        Some(Commands::Run(args)) => commands::run::cmd_run(&args, config, cli.json, cli.color)?,
        Some(Commands::Build { target }) => {
            let ok = commands::build::cmd_build(&target, config, cli.json, cli.color)?;
            if !ok {
                return Ok(1);
            }
        }
        Some(Commands::Scan { source }) => {
            commands::scan::cmd_scan(source.as_ref(), config, cli.json, cli.color)?
        }
        Some(Commands::Init { scheme, force }) => {
            let dir = std::env::current_dir()?;
            commands::init::cmd_init(&dir, scheme.as_deref(), force, cli.json, cli.color)?
        }
    }
    Ok(0)
}
