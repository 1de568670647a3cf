//! CLI argument definitions for the Taskwire tool.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use taskwire_core::config::{RenderFormat, TaskwireConfig};
use taskwire_core::SecurityRisk;

/// Taskwire: build, inspect and render agent action records.
#[derive(Parser, Debug)]
#[command(name = "taskwire", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json).
    #[arg(short = 'f', long = "format", global = true)]
    pub format: Option<RenderFormat>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build an open-file action and print it.
    Open {
        /// File to open in the editor.
        file_path: String,
        /// Rationale attached to the action.
        #[arg(short = 't', long = "thought")]
        thought: Option<String>,
        /// Security risk: unknown, low, medium or high.
        #[arg(short = 'r', long = "risk")]
        risk: Option<SecurityRisk>,
    },
    /// Read an action as JSON and print it.
    Render {
        /// Input file. Reads stdin when omitted.
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
    /// Read an action as JSON and print its one-line summary.
    Summary {
        /// Input file. Reads stdin when omitted.
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > TASKWIRE_CONFIG env var > ~/.taskwire/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("TASKWIRE_CONFIG") {
            return PathBuf::from(p);
        }
        TaskwireConfig::default_path()
    }

    /// Resolve the output format: --format flag > config file value.
    pub fn resolve_format(&self, config: &TaskwireConfig) -> RenderFormat {
        self.format.unwrap_or(config.render.format)
    }

    /// Resolve the log level: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &TaskwireConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }
}
