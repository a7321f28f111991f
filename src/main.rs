//! charfreq - character frequency reporter
//!
//! charfreq provides:
//! - Byte classification into letters, punctuation and symbols
//! - First non-repeating, least repeating and most repeating selection
//! - Text or JSON output
//! - Distinct exit codes per failure class

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

mod cli;
mod core;

use crate::core::error::CharFreqError;
use crate::core::render::render_failure;

fn main() -> ExitCode {
    let raw = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let cli = match cli::Cli::try_parse_from(cli::normalize_args(raw)) {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also arrive here
            if !err.use_stderr() {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            // only an unknown --output value gets this far
            let _ = err.print();
            return fail(1);
        }
    };

    if cli.verbose {
        simple_logging::log_to_stderr(LevelFilter::Debug);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            eprintln!("Error: {:#}", err);
            log::debug!("exiting with code {}", code);
            fail(code)
        }
    }
}

/// Exit code carried by the first charfreq error in the chain
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CharFreqError>())
        .map(CharFreqError::exit_code)
        .unwrap_or(1)
}

fn fail(code: u8) -> ExitCode {
    print!("{}", render_failure(code));
    ExitCode::from(code)
}
