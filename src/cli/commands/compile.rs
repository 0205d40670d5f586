use std::io;

use anyhow::Result;

use super::super::args::CompileCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_compile_report_to, print_config_error_to};
use crate::compile::{CompileOptions, compile as compile_unit};
use crate::config::load_config;

pub fn compile(cmd: CompileCommand) -> Result<ExitStatus> {
    let config_path = cmd.config.resolve();
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            print_config_error_to(&err, &mut io::stderr().lock());
            return Ok(ExitStatus::Error);
        }
    };

    let options = CompileOptions {
        persist_backfill: cmd.backfill,
    };
    let report = compile_unit(&config, &cmd.output, options);

    if report.success {
        print_compile_report_to(&report, &mut io::stdout().lock());
        Ok(ExitStatus::Success)
    } else {
        print_compile_report_to(&report, &mut io::stderr().lock());
        Ok(ExitStatus::Failure)
    }
}
