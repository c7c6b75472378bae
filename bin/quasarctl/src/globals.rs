//! Container for data made accessible to all `quasarctl` commands.
use anyhow::Result;
use slog::Logger;

use crate::formatter::FormatId;
use crate::formatter::Formatter;
use crate::Cli;

/// Container for data made accessible to all `quasarctl` commands.
pub struct Globals {
    /// Parsed CLI arguments.
    pub cli: Cli,

    /// Configured process formatter for all output.
    pub formatter: Formatter,

    /// Configured process logger for advanced users feedback/debugging.
    pub logger: Logger,
}

impl Globals {
    /// Initialise `quasarctl` process [`Globals`].
    pub fn initialise(cli: Cli) -> Result<Self> {
        let logger = crate::logging::configure(&cli.log)?;
        let formatter = crate::formatter::select(&cli.format);
        Ok(Globals {
            cli,
            formatter,
            logger,
        })
    }

    /// Check if the session is interactive.
    ///
    /// Progress displays and prompts are only started for interactive human
    /// sessions, never when output is meant for machine consumption.
    pub fn interactive(&self) -> bool {
        matches!(self.cli.format.format, FormatId::Human)
    }
}
