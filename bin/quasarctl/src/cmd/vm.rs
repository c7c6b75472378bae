//! Inspect or manipulate virtual machines.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::VmCreate;
use quasar_client::models::VmDiskOp;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::VmListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate virtual machines.
#[derive(Debug, Parser)]
pub struct VmCli {
    /// Select the `quasarctl vm` command to run.
    #[command(subcommand)]
    pub command: VmCmd,
}

/// Possible vm commands to run.
#[derive(Debug, Subcommand)]
pub enum VmCmd {
    /// Attach a disk to a virtual machine.
    AttachDisk(VmDiskOpt),

    /// Create a new virtual machine in the scoped project.
    Create(VmCreateOpt),

    /// Delete a virtual machine.
    Delete(VmRef),

    /// Detach a disk from a virtual machine.
    DetachDisk(VmDiskOpt),

    /// List virtual machines in the scoped project.
    List,

    /// Lookup details for a virtual machine.
    Show(VmRef),

    /// Power on a virtual machine.
    Start(VmRef),

    /// Power off a virtual machine.
    Stop(VmRef),
}

/// Options to create a virtual machine with.
#[derive(Debug, Args)]
pub struct VmCreateOpt {
    /// Name of the virtual machine to create.
    pub name: String,

    /// Flavor (sizing profile) for the virtual machine.
    #[arg(long)]
    pub flavor: String,

    /// Identifier of the image to boot the virtual machine from.
    #[arg(long = "image")]
    pub source_image_id: String,

    /// Identifiers of disks to attach at creation time.
    #[arg(long = "disk")]
    pub disk_ids: Vec<String>,
}

/// Reference to a specific virtual machine and disk.
#[derive(Debug, Args)]
pub struct VmDiskOpt {
    /// Identifier of the virtual machine.
    pub vm: String,

    /// Identifier of the disk.
    #[arg(long = "disk")]
    pub disk_id: String,
}

/// Reference to a specific virtual machine.
#[derive(Debug, Args)]
pub struct VmRef {
    /// Identifier of the virtual machine.
    pub vm: String,
}

/// Execute the selected `quasarctl vm` command.
pub async fn run(globals: &Globals, cmd: &VmCli) -> Result<i32> {
    match &cmd.command {
        VmCmd::AttachDisk(opt) => attach_disk(globals, opt).await,
        VmCmd::Create(opt) => create(globals, opt).await,
        VmCmd::Delete(opt) => delete(globals, opt).await,
        VmCmd::DetachDisk(opt) => detach_disk(globals, opt).await,
        VmCmd::List => list(globals).await,
        VmCmd::Show(opt) => show(globals, opt).await,
        VmCmd::Start(opt) => start(globals, opt).await,
        VmCmd::Stop(opt) => stop(globals, opt).await,
    }
}

async fn attach_disk(globals: &Globals, opt: &VmDiskOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let op = VmDiskOp {
        disk_id: opt.disk_id.clone(),
    };
    let task = client.vm(&opt.vm).attach_disk(&op).await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "updated",
        id: opt.vm.clone(),
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn create(globals: &Globals, opt: &VmCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let spec = VmCreate {
        name: opt.name.clone(),
        flavor: opt.flavor.clone(),
        source_image_id: opt.source_image_id.clone(),
        disk_ids: opt.disk_ids.clone(),
    };
    let task = client.project(&project).vm_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &VmRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.vm(&opt.vm).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.vm.clone(),
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn detach_disk(globals: &Globals, opt: &VmDiskOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let op = VmDiskOp {
        disk_id: opt.disk_id.clone(),
    };
    let task = client.vm(&opt.vm).detach_disk(&op).await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "updated",
        id: opt.vm.clone(),
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let vms = client.project(&project).vms().await?;
    let mut formatter = globals.formatter.format(globals, VmListOp);
    for vm in &vms {
        formatter.append(vm)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &VmRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let vm = client.vm(&opt.vm).get().await?;
    globals.formatter.format(globals, vm)?;
    Ok(0)
}

async fn start(globals: &Globals, opt: &VmRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.vm(&opt.vm).start().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "started",
        id: opt.vm.clone(),
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn stop(globals: &Globals, opt: &VmRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.vm(&opt.vm).stop().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "stopped",
        id: opt.vm.clone(),
        kind: "VM",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}
