//! Taskwire binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing (stderr, so stdout stays machine-readable)
//! 4. Run the requested subcommand and print its output

mod cli;
mod commands;

use clap::Parser;
use taskwire_core::config::TaskwireConfig;

use crate::cli::CliArgs;
use crate::commands::OutputOptions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config = if config_file.exists() {
        TaskwireConfig::load(&config_file)?
    } else {
        TaskwireConfig::default()
    };

    let log_level = args.resolve_log_level(&config);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::debug!(path = %config_file.display(), "Configuration resolved");

    let options = OutputOptions {
        format: args.resolve_format(&config),
        pretty_json: config.render.pretty_json,
    };

    match commands::run(&args.command, options, std::io::stdin().lock()) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            Err(e.into())
        }
    }
}
