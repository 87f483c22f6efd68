//! wavtrim CLI
//!
//! Command-line interface for inspecting and trimming WAVE files.

use clap::Parser;
use env_logger::Env;
use log::{debug, error};

use wavtrim::cli::{commands, Cli, Commands};
use wavtrim::Result;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `trim` output can be piped
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("wavtrim v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli) {
        error!("{} [{}]", err, err.error_code());
        for suggestion in err.recovery_suggestions() {
            eprintln!("  - {}", suggestion);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Info { path, json } => commands::info(&path, json, &config),
        Commands::Trim { path, start } => commands::trim(&path, start, &config),
    }
}
