use std::{env, io, process::ExitCode};

use clap::Parser;
use d18n::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !verbose => filter,
        _ => EnvFilter::new(if verbose { "d18n=debug" } else { "d18n=warn" }),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);

    match d18n::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
