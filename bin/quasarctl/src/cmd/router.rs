//! Inspect or manipulate logical routers.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::RouterCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::RouterListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate logical routers.
#[derive(Debug, Parser)]
pub struct RouterCli {
    /// Select the `quasarctl router` command to run.
    #[command(subcommand)]
    pub command: RouterCmd,
}

/// Possible router commands to run.
#[derive(Debug, Subcommand)]
pub enum RouterCmd {
    /// Create a new router in a network.
    Create(RouterCreateOpt),

    /// Delete a router.
    Delete(RouterRef),

    /// List routers in a network.
    List(RouterListOpt),

    /// Lookup details for a router.
    Show(RouterRef),
}

/// Options to create a router with.
#[derive(Debug, Args)]
pub struct RouterCreateOpt {
    /// Name of the router to create.
    pub name: String,

    /// Private IP range of the router, in CIDR notation.
    #[arg(long = "private-ip-cidr")]
    pub private_ip_cidr: String,

    /// Identifier of the network to create the router in.
    #[arg(long)]
    pub network: String,
}

/// Options to list routers with.
#[derive(Debug, Args)]
pub struct RouterListOpt {
    /// Identifier of the network to list routers for.
    #[arg(long)]
    pub network: String,
}

/// Reference to a specific router.
#[derive(Debug, Args)]
pub struct RouterRef {
    /// Identifier of the router.
    pub router: String,
}

/// Execute the selected `quasarctl router` command.
pub async fn run(globals: &Globals, cmd: &RouterCli) -> Result<i32> {
    match &cmd.command {
        RouterCmd::Create(opt) => create(globals, opt).await,
        RouterCmd::Delete(opt) => delete(globals, opt).await,
        RouterCmd::List(opt) => list(globals, opt).await,
        RouterCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &RouterCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let spec = RouterCreate {
        name: opt.name.clone(),
        private_ip_cidr: opt.private_ip_cidr.clone(),
    };
    let task = client.network(&opt.network).router_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Router",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &RouterRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.router(&opt.router).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.router.clone(),
        kind: "Router",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals, opt: &RouterListOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let routers = client.network(&opt.network).routers().await?;
    let mut formatter = globals.formatter.format(globals, RouterListOp);
    for router in &routers {
        formatter.append(router)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &RouterRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let router = client.router(&opt.router).get().await?;
    globals.formatter.format(globals, router)?;
    Ok(0)
}
