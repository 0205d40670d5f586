//! Command-line layer: argument parsing, command handlers and terminal output.

use std::env;

use anyhow::{Context, Result};

mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command, CompileCommand, ConfigArgs, StatusCommand, TranslateCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command, .. }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Init) => {
            let cwd = env::current_dir().context("Failed to read the current directory")?;
            commands::init::init(&cwd)
        }
        Some(Command::Compile(cmd)) => commands::compile::compile(cmd),
        Some(Command::Translate(cmd)) => commands::translate::translate(cmd),
        Some(Command::Status(cmd)) => commands::status::status(cmd),
        None => Ok(ExitStatus::Success),
    }
}
