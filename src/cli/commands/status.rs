use std::io;

use anyhow::Result;
use tracing::warn;

use super::super::args::StatusCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_completeness_to, print_config_error_to, print_failure_to};
use crate::config::{Config, load_config};
use crate::core::{
    CompileError, Dictionaries, TranslationDictionary, completeness, load_dictionary,
};

pub fn status(cmd: StatusCommand) -> Result<ExitStatus> {
    let config = match load_config(&cmd.config.resolve()) {
        Ok(config) => config,
        Err(err) => {
            print_config_error_to(&err, &mut io::stderr().lock());
            return Ok(ExitStatus::Error);
        }
    };

    let language = match cmd.language.as_deref() {
        None => None,
        Some(code) => match config.languages.iter().find(|l| l.as_str() == code) {
            Some(language) => Some(language.clone()),
            None => {
                print_failure_to(
                    &format!("Language {} is not configured", code),
                    &mut io::stderr().lock(),
                );
                return Ok(ExitStatus::Error);
            }
        },
    };

    let dictionaries = load_for_status(&config)?;
    let report = completeness(&dictionaries);
    print_completeness_to(&report, language.as_ref(), &mut io::stdout().lock());

    let complete = match &language {
        Some(language) => report
            .coverage
            .get(language)
            .is_none_or(|coverage| coverage.missing() == 0),
        None => report.is_complete(),
    };

    if complete {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

/// Load every configured language; absent files count as empty.
fn load_for_status(config: &Config) -> Result<Dictionaries, CompileError> {
    let mut dictionaries = Dictionaries::new();
    for language in config.ordered_languages() {
        let dictionary = match load_dictionary(&language, &config.messages_path) {
            Err(CompileError::FileNotFound { path, .. }) => {
                warn!("No message file for {} at {}", language, path.display());
                TranslationDictionary::new()
            }
            other => other?,
        };
        dictionaries.insert(language, dictionary);
    }
    Ok(dictionaries)
}
