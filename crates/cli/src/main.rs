//! envget - read environment variables as typed values.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Run one access mode of `generic-env` against the process environment,
//!   falling back to `./.env`.
//! - Print the result and exit with a structured code.
//!
//! Does NOT handle:
//! - Conversion or failure policy (see `crates/env`).
//!
//! Invariants:
//! - The tracing subscriber is installed before `.env` loading so its events are visible.
//! - `.env` values are a fallback layer behind the process environment; the
//!   process environment itself is never written.
//! - Values go to stdout; errors and logs go to stderr.

mod args;
mod dispatch;
mod dotenv;
mod error;
mod formatters;

use args::{Cli, Commands, Mode};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use formatters::format_report;
use generic_env::{Environment, LayeredEnv, ProcessEnv};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let dotenv_layer = match dotenv::load_dotenv() {
        Ok(layer) => layer,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let try_mode = matches!(cli.command, Commands::Get { mode: Mode::Try, .. });
    let env = Environment::with_source(LayeredEnv::new(ProcessEnv, dotenv_layer));

    let exit_code = match run_command(cli.command, &env)
        .and_then(|report| Ok((format_report(&report, cli.output)?, report.found)))
    {
        Ok((output, found)) => {
            println!("{}", output);
            if try_mode && found == Some(false) {
                ExitCode::GeneralError
            } else {
                ExitCode::Success
            }
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
