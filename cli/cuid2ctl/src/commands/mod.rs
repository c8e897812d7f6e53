//! CLI commands.

mod generate;
mod inspect;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// cuid2 - Generate and validate collision-resistant identifiers.
#[derive(Debug, Parser)]
#[command(name = "cuid2")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate identifiers.
    Generate(generate::GenerateCommand),

    /// Check values against the CUID2 format.
    Validate(validate::ValidateCommand),

    /// Show the parts of an identifier.
    Inspect(inspect::InspectCommand),
}

/// Shared state handed to every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub config: Config,
}

impl Cli {
    pub fn log_json(&self) -> bool {
        self.log_json
    }

    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format.parse()?,
            config: Config::from_env()?,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Inspect(cmd) => cmd.run(ctx),
        }
    }
}
