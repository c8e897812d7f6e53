//! Identifier inspection command.

use anyhow::Result;
use clap::Args;
use cuid2::Cuid2;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Show the length, prefix, and body of an identifier.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Identifier to inspect.
    value: String,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct Inspection {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "LENGTH")]
    length: usize,
    #[tabled(rename = "PREFIX")]
    prefix: char,
    #[tabled(rename = "BODY")]
    body: String,
}

impl From<&Cuid2> for Inspection {
    fn from(id: &Cuid2) -> Self {
        Self {
            id: id.to_string(),
            length: id.len(),
            prefix: id.prefix(),
            body: id.body().to_string(),
        }
    }
}

impl InspectCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let id = Cuid2::parse(&self.value).map_err(CliError::from)?;
        print_single(&Inspection::from(&id), ctx.format);
        Ok(())
    }
}
