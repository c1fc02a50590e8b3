//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not read configuration (see `config` module).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "envcfg-demo")]
#[command(about = "Load A, B and C from the environment and print them", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:\n  B=42 envcfg-demo\n  A=hello B=42 C=bar envcfg-demo --json\n")]
pub struct Cli {
    /// Print the loaded configuration as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON (log level comes from RUST_LOG)
    #[arg(long, env = "ENVCFG_DEMO_LOG_JSON")]
    pub log_json: bool,
}
