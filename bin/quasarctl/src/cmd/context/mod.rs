//! Manage configuration of Quasar servers to access.
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use crate::Globals;

mod change;
mod configure;
mod delete;
mod list;
mod select;
mod show;

/// Manage configuration of Quasar servers to access.
#[derive(Debug, Parser)]
pub struct ContextCli {
    /// Select the `quasarctl context` command to run.
    #[command(subcommand)]
    pub command: ContextCmd,
}

/// Select the `quasarctl context` command to run.
#[derive(Debug, Subcommand)]
pub enum ContextCmd {
    /// Change scope attributes, such as tenant or project, of a context.
    Change,

    /// Configure or update the connection options for a Quasar server.
    Configure,

    /// Remove the selected context configuration.
    Delete,

    /// List known Quasar servers.
    List,

    /// Select the active context, the one used when none are specified.
    Select,

    /// Show details about the current `quasarctl` context.
    Show,
}

/// Execute the selected `quasarctl context` command.
pub async fn run(globals: &Globals, cmd: &ContextCli) -> Result<i32> {
    match cmd.command {
        ContextCmd::Change => self::change::run(globals).await,
        ContextCmd::Configure => self::configure::run(globals).await,
        ContextCmd::Delete => self::delete::run(globals).await,
        ContextCmd::List => self::list::run(globals).await,
        ContextCmd::Select => self::select::run(globals).await,
        ContextCmd::Show => self::show::run(globals).await,
    }
}
