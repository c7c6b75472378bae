//! Inspect or manipulate subnets.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::SubnetCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::SubnetListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate subnets.
#[derive(Debug, Parser)]
pub struct SubnetCli {
    /// Select the `quasarctl subnet` command to run.
    #[command(subcommand)]
    pub command: SubnetCmd,
}

/// Possible subnet commands to run.
#[derive(Debug, Subcommand)]
pub enum SubnetCmd {
    /// Create a new subnet in a network.
    Create(SubnetCreateOpt),

    /// Delete a subnet.
    Delete(SubnetRef),

    /// List subnets in a network.
    List(SubnetListOpt),

    /// Lookup details for a subnet.
    Show(SubnetRef),
}

/// Options to create a subnet with.
#[derive(Debug, Args)]
pub struct SubnetCreateOpt {
    /// Name of the subnet to create.
    pub name: String,

    /// Address range of the subnet, in CIDR notation.
    #[arg(long)]
    pub cidr: String,

    /// Identifier of the network to create the subnet in.
    #[arg(long)]
    pub network: String,
}

/// Options to list subnets with.
#[derive(Debug, Args)]
pub struct SubnetListOpt {
    /// Identifier of the network to list subnets for.
    #[arg(long)]
    pub network: String,
}

/// Reference to a specific subnet.
#[derive(Debug, Args)]
pub struct SubnetRef {
    /// Identifier of the subnet.
    pub subnet: String,
}

/// Execute the selected `quasarctl subnet` command.
pub async fn run(globals: &Globals, cmd: &SubnetCli) -> Result<i32> {
    match &cmd.command {
        SubnetCmd::Create(opt) => create(globals, opt).await,
        SubnetCmd::Delete(opt) => delete(globals, opt).await,
        SubnetCmd::List(opt) => list(globals, opt).await,
        SubnetCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &SubnetCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let spec = SubnetCreate {
        name: opt.name.clone(),
        cidr: opt.cidr.clone(),
    };
    let task = client.network(&opt.network).subnet_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Subnet",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &SubnetRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.subnet(&opt.subnet).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.subnet.clone(),
        kind: "Subnet",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals, opt: &SubnetListOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let subnets = client.network(&opt.network).subnets().await?;
    let mut formatter = globals.formatter.format(globals, SubnetListOp);
    for subnet in &subnets {
        formatter.append(subnet)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &SubnetRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let subnet = client.subnet(&opt.subnet).get().await?;
    globals.formatter.format(globals, subnet)?;
    Ok(0)
}
