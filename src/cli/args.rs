//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: create the config file and the default language's message file
//! - `compile`: generate accessor modules from the message files
//! - `translate`: fill missing translations through DeepL
//! - `status`: report translation completeness

use std::{
    env,
    path::{Path, PathBuf},
};

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{CONFIG_FILE_NAME, find_config_file};

#[derive(Debug, Parser)]
#[command(name = "d18n", author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Config file selection shared by every command that reads the config.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Path to the config file (default: nearest do-easy-i18n.config.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// The explicit path, else the nearest config file up to the git root, else
    /// `./do-easy-i18n.config.json`.
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.config {
            return path.clone();
        }
        env::current_dir()
            .ok()
            .and_then(|cwd| find_config_file(&cwd))
            .unwrap_or_else(|| Path::new(CONFIG_FILE_NAME).to_path_buf())
    }
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory for the generated modules
    #[arg(short, long, value_name = "DIR", default_value = "dist")]
    pub output: PathBuf,

    /// Write missing-translation placeholders back into the message files
    #[arg(long)]
    pub backfill: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only report keys missing in this language
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create do-easy-i18n.config.json and messages/en.json
    Init,
    /// Compile message files into typed TypeScript accessors
    Compile(CompileCommand),
    /// Fill missing translations with DeepL
    Translate(TranslateCommand),
    /// Show which keys are missing in which languages
    Status(StatusCommand),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compile_defaults() {
        let args = Arguments::try_parse_from(["d18n", "compile"]).unwrap();

        let Some(Command::Compile(cmd)) = args.command else {
            panic!("expected compile command");
        };
        assert_eq!(cmd.output, PathBuf::from("dist"));
        assert!(!cmd.backfill);
        assert_eq!(cmd.config.config, None);
    }

    #[test]
    fn test_compile_flags() {
        let args = Arguments::try_parse_from([
            "d18n", "compile", "-c", "i18n.json", "-o", "out", "--backfill", "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        let Some(Command::Compile(cmd)) = args.command else {
            panic!("expected compile command");
        };
        assert_eq!(cmd.config.resolve(), PathBuf::from("i18n.json"));
        assert_eq!(cmd.output, PathBuf::from("out"));
        assert!(cmd.backfill);
    }

    #[test]
    fn test_status_language() {
        let args = Arguments::try_parse_from(["d18n", "status", "-l", "es"]).unwrap();

        let Some(Command::Status(cmd)) = args.command else {
            panic!("expected status command");
        };
        assert_eq!(cmd.language.as_deref(), Some("es"));
    }

    #[test]
    fn test_verify_cli() {
        Arguments::command().debug_assert();
    }
}
