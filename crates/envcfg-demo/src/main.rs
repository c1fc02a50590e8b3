//! envcfg-demo - Example call-site for the envcfg loader.
//!
//! Responsibilities:
//! - Initialize logging and parse command-line flags.
//! - Load `DemoConfig` from the process environment once at startup.
//! - Print the loaded values, or report the error and exit non-zero.
//!
//! Does NOT handle:
//! - Any loading logic itself (see the `envcfg` crate).
//!
//! Invariants:
//! - Configuration failures print `config error :: <error>` to stderr and exit with 1.
//! - Logs go to stderr; stdout carries only the loaded configuration.

mod args;
mod config;
mod error;

use std::io::Write;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use config::DemoConfig;
use envcfg::EnvConfig;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = run(&cli) {
        match e.exit_code() {
            ExitCode::ConfigError => eprintln!("config error :: {}", e),
            _ => eprintln!("{:#}", e),
        }
        std::process::exit(e.exit_code().as_i32());
    }
}

fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    tracing::debug!("Loaded demo configuration");

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &config)
            .context("Failed to write configuration as JSON")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "A: {}", config.a)?;
        writeln!(stdout, "B: {}", config.b)?;
        writeln!(stdout, "C: {}", config.c)?;
    }
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
