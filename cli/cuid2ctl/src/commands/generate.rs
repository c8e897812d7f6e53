//! Identifier generation command.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_lines;

use super::CommandContext;

/// Generate one or more identifiers.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Identifier length (24-32). Overrides CUID2_LENGTH.
    #[arg(long, short)]
    length: Option<usize>,

    /// Number of identifiers to generate.
    #[arg(long, short = 'n', default_value = "1")]
    count: usize,

    /// Generate from a named instance instead of the default one.
    /// Overrides CUID2_INSTANCE.
    #[arg(long)]
    instance: Option<String>,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let config = ctx.config.with_overrides(self.length, self.instance);
        let ids = generate_ids(config.length, self.count, config.instance.as_deref())?;
        print_lines(&ids, ctx.format);
        Ok(())
    }
}

/// Generates `count` identifiers, from a fresh named instance when `instance`
/// names anything other than the default instance.
fn generate_ids(
    length: usize,
    count: usize,
    instance: Option<&str>,
) -> Result<Vec<String>, CliError> {
    // Report a bad length before starting any instance
    cuid2::check_length(length)?;

    let handle = match instance {
        Some(name) if name != cuid2::DEFAULT_INSTANCE => cuid2::start_instance(Some(name))?,
        _ => cuid2::InstanceHandle::default_instance(),
    };
    debug!(instance = %handle, length, count, "generating identifiers");

    let ids = (0..count)
        .map(|_| cuid2::generate_in(length, &handle))
        .collect::<Result<Vec<_>, _>>();

    // Stop the instance whether or not generation succeeded
    if !handle.is_default() {
        cuid2::stop_instance(&handle)?;
    }

    Ok(ids?)
}
