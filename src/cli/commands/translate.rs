use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_config_error_to, print_failure_to, print_fill_report_to};
use crate::config::load_config;
use crate::translate::{DeepLProvider, ProviderError, translate_unit};

pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let config = match load_config(&cmd.config.resolve()) {
        Ok(config) => config,
        Err(err) => {
            print_config_error_to(&err, &mut io::stderr().lock());
            return Ok(ExitStatus::Error);
        }
    };

    let Some(deep_l) = &config.deep_l else {
        print_failure_to(
            "No deepL section in the config file",
            &mut io::stderr().lock(),
        );
        return Ok(ExitStatus::Error);
    };
    if deep_l.api_key.is_none() {
        print_failure_to(
            &ProviderError::MissingCredentials.to_string(),
            &mut io::stderr().lock(),
        );
        return Ok(ExitStatus::Error);
    }

    let provider = DeepLProvider::from_config(deep_l)?;
    debug!("Using {:?}", provider);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let report = runtime.block_on(translate_unit(&config, &provider))?;

    print_fill_report_to(&report, &mut io::stdout().lock());

    if report.is_complete() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
