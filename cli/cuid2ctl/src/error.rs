//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{invalid} of {total} values are not valid CUID2 identifiers")]
    InvalidIdentifiers { invalid: usize, total: usize },

    #[error("unknown output format '{0}' (expected 'table' or 'json')")]
    UnknownFormat(String),

    #[error(transparent)]
    Cuid2(#[from] cuid2::Cuid2Error),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::Cuid2(cuid2::Cuid2Error::InvalidLength { min, max, .. }) => {
                eprintln!(
                    "\n{}",
                    format!("Hint: pass --length between {min} and {max}.").yellow()
                );
            }
            CliError::Cuid2(e) if e.is_environment_failure() => {
                eprintln!(
                    "\n{}",
                    "Hint: the operating system's random source is unavailable.".yellow()
                );
            }
            _ => {}
        }
    }
}
