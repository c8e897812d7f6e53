//! Format validation command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Check values against the CUID2 format.
///
/// Exits non-zero if any value is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Values to check.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "VALUE")]
    value: String,
    #[tabled(rename = "VALID")]
    valid: bool,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = validate_all(self.values);
        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidIdentifiers {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn validate_all(values: Vec<String>) -> Vec<ValidationRow> {
    values
        .into_iter()
        .map(|value| {
            let valid = cuid2::is_valid(&value);
            ValidationRow { value, valid }
        })
        .collect()
}
