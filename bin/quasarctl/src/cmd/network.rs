//! Inspect or manipulate virtual networks.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::NetworkCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::NetworkListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate virtual networks.
#[derive(Debug, Parser)]
pub struct NetworkCli {
    /// Select the `quasarctl network` command to run.
    #[command(subcommand)]
    pub command: NetworkCmd,
}

/// Possible network commands to run.
#[derive(Debug, Subcommand)]
pub enum NetworkCmd {
    /// Create a new virtual network.
    Create(NetworkCreateOpt),

    /// Delete a virtual network.
    Delete(NetworkRef),

    /// List virtual networks known to the Control Plane.
    List,

    /// Lookup details for a virtual network.
    Show(NetworkRef),
}

/// Options to create a network with.
#[derive(Debug, Args)]
pub struct NetworkCreateOpt {
    /// Name of the network to create.
    pub name: String,

    /// Free-form description of the network.
    #[arg(long)]
    pub description: Option<String>,
}

/// Reference to a specific network.
#[derive(Debug, Args)]
pub struct NetworkRef {
    /// Identifier of the network.
    pub network: String,
}

/// Execute the selected `quasarctl network` command.
pub async fn run(globals: &Globals, cmd: &NetworkCli) -> Result<i32> {
    match &cmd.command {
        NetworkCmd::Create(opt) => create(globals, opt).await,
        NetworkCmd::Delete(opt) => delete(globals, opt).await,
        NetworkCmd::List => list(globals).await,
        NetworkCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &NetworkCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let spec = NetworkCreate {
        name: opt.name.clone(),
        description: opt.description.clone(),
    };
    let task = client.network_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Network",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &NetworkRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.network(&opt.network).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.network.clone(),
        kind: "Network",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let networks = client.networks().await?;
    let mut formatter = globals.formatter.format(globals, NetworkListOp);
    for network in &networks {
        formatter.append(network)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &NetworkRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let network = client.network(&opt.network).get().await?;
    globals.formatter.format(globals, network)?;
    Ok(0)
}
