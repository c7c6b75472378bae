//! Inspect, manage and interact with the Quasar Control Plane from a Command Line Interface.
use anyhow::Context as _;
use anyhow::Result;
use clap::Parser;

use quasar_client::Client;
use quasar_client::ClientOptions;

mod cmd;
mod context;
mod formatter;
mod globals;
mod logging;
mod utils;
mod wait;

pub mod errors;

// Re-export errors so main can provide more accurate messages.
pub use self::context::ContextNotFound;
pub use self::context::ScopeError;
pub use quasar_client::error::ApiNotFound;

pub use self::cmd::Cli;
pub use self::globals::Globals;

/// Initialise the quasarctl process and invoke a command implementation.
pub async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let globals = Globals::initialise(cli)?;

    match &globals.cli.command {
        cmd::Command::Context(cmd) => cmd::context::run(&globals, cmd).await,
        cmd::Command::Disk(cmd) => cmd::disk::run(&globals, cmd).await,
        cmd::Command::Host(cmd) => cmd::host::run(&globals, cmd).await,
        cmd::Command::Image(cmd) => cmd::image::run(&globals, cmd).await,
        cmd::Command::Network(cmd) => cmd::network::run(&globals, cmd).await,
        cmd::Command::Project(cmd) => cmd::project::run(&globals, cmd).await,
        cmd::Command::Router(cmd) => cmd::router::run(&globals, cmd).await,
        cmd::Command::Service(cmd) => cmd::service::run(&globals, cmd).await,
        cmd::Command::Subnet(cmd) => cmd::subnet::run(&globals, cmd).await,
        cmd::Command::Task(cmd) => cmd::task::run(&globals, cmd).await,
        cmd::Command::Tenant(cmd) => cmd::tenant::run(&globals, cmd).await,
        cmd::Command::Vm(cmd) => cmd::vm::run(&globals, cmd).await,
    }
}

/// Build an API client for the given context.
pub(crate) async fn client(context: &context::Context) -> Result<Client> {
    let connection = &context.connection;
    let mut options = ClientOptions::url(&connection.url);
    if let Some(path) = &connection.ca_bundle {
        let ca_bundle = tokio::fs::read(path)
            .await
            .with_context(|| format!("unable to read CA bundle from {}", path))?;
        options = options.ca_bundle(ca_bundle);
    }
    if let Some(path) = &connection.client_key {
        let client_key = tokio::fs::read(path)
            .await
            .with_context(|| format!("unable to read client key from {}", path))?;
        options = options.client_key(client_key);
    }
    Client::with(options.client())
}
