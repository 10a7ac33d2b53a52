mod cli;
mod commands;
mod error;
mod input;
mod output;

use clap::Parser;
use stocksense_core::Envelope;

use crate::cli::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let envelope = commands::run(cli)?;
    output::render(&envelope, cli.format, cli.pretty)?;

    if cli.strict {
        enforce_strict(&envelope)?;
    }
    Ok(())
}

/// Strict mode turns any warning or partial-response error into a
/// non-zero exit, after the envelope has already been rendered.
fn enforce_strict<T>(envelope: &Envelope<T>) -> Result<(), CliError> {
    let warning_count = envelope.meta.warnings.len();
    let error_count = envelope.errors.len();
    if warning_count > 0 || error_count > 0 {
        return Err(CliError::StrictModeViolation {
            warning_count,
            error_count,
        });
    }
    Ok(())
}
