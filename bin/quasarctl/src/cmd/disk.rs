//! Inspect or manipulate persistent disks.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::DiskCreate;

use crate::context::ContextStore;
use crate::formatter::ops::DiskListOp;
use crate::formatter::ops::EntityOutcome;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate persistent disks.
#[derive(Debug, Parser)]
pub struct DiskCli {
    /// Select the `quasarctl disk` command to run.
    #[command(subcommand)]
    pub command: DiskCmd,
}

/// Possible disk commands to run.
#[derive(Debug, Subcommand)]
pub enum DiskCmd {
    /// Create a new disk in the scoped project.
    Create(DiskCreateOpt),

    /// Delete a disk.
    Delete(DiskRef),

    /// List disks in the scoped project.
    List,

    /// Lookup details for a disk.
    Show(DiskRef),
}

/// Options to create a disk with.
#[derive(Debug, Args)]
pub struct DiskCreateOpt {
    /// Name of the disk to create.
    pub name: String,

    /// Flavor (sizing profile) for the disk.
    #[arg(long)]
    pub flavor: String,

    /// Capacity of the disk, in gigabytes.
    #[arg(long = "capacity-gb")]
    pub capacity_gb: u64,
}

/// Reference to a specific disk.
#[derive(Debug, Args)]
pub struct DiskRef {
    /// Identifier of the disk.
    pub disk: String,
}

/// Execute the selected `quasarctl disk` command.
pub async fn run(globals: &Globals, cmd: &DiskCli) -> Result<i32> {
    match &cmd.command {
        DiskCmd::Create(opt) => create(globals, opt).await,
        DiskCmd::Delete(opt) => delete(globals, opt).await,
        DiskCmd::List => list(globals).await,
        DiskCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &DiskCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let spec = DiskCreate {
        name: opt.name.clone(),
        flavor: opt.flavor.clone(),
        capacity_gb: opt.capacity_gb,
    };
    let task = client.project(&project).disk_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Disk",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &DiskRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.disk(&opt.disk).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.disk.clone(),
        kind: "Disk",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let disks = client.project(&project).disks().await?;
    let mut formatter = globals.formatter.format(globals, DiskListOp);
    for disk in &disks {
        formatter.append(disk)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &DiskRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let disk = client.disk(&opt.disk).get().await?;
    globals.formatter.format(globals, disk)?;
    Ok(0)
}
