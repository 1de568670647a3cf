//! Subcommand execution. Each command returns the text to print.

use std::path::Path;

use taskwire_action::{Action, ActionError, AnyAction, VsCodeOpenFileAction};
use taskwire_core::config::RenderFormat;
use taskwire_core::TaskwireError;

use crate::cli::Command;

/// Output options resolved from flags and config.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: RenderFormat,
    pub pretty_json: bool,
}

/// Run a command, reading JSON input from `stdin` when no input file is given.
pub fn run(
    command: &Command,
    options: OutputOptions,
    stdin: impl std::io::Read,
) -> Result<String, ActionError> {
    match command {
        Command::Open {
            file_path,
            thought,
            risk,
        } => {
            let mut builder = VsCodeOpenFileAction::builder()
                .file_path(file_path.as_str())
                .security_risk(*risk);
            if let Some(thought) = thought {
                builder = builder.thought(thought.as_str());
            }
            let action = AnyAction::from(builder.build()?);
            tracing::info!(kind = %action.kind(), "Built action");
            render(&action, options)
        }
        Command::Render { input } => {
            let action = read_action(input.as_deref(), stdin)?;
            render(&action, options)
        }
        Command::Summary { input } => {
            let action = read_action(input.as_deref(), stdin)?;
            Ok(action.message())
        }
    }
}

fn render(action: &AnyAction, options: OutputOptions) -> Result<String, ActionError> {
    match options.format {
        RenderFormat::Text => Ok(action.to_string()),
        RenderFormat::Json if options.pretty_json => action.to_json_pretty(),
        RenderFormat::Json => action.to_json(),
    }
}

fn read_action(path: Option<&Path>, mut stdin: impl std::io::Read) -> Result<AnyAction, ActionError> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path).map_err(TaskwireError::from)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(TaskwireError::from)?;
            buf
        }
    };
    AnyAction::from_json(&content)
}
