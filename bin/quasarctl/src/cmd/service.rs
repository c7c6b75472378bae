//! Inspect or manipulate provisioned services.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::ServiceCreate;
use quasar_client::models::ServiceResize;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::ServiceListOp;
use crate::wait::ready::await_service_ready;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate provisioned services.
#[derive(Debug, Parser)]
pub struct ServiceCli {
    /// Select the `quasarctl service` command to run.
    #[command(subcommand)]
    pub command: ServiceCmd,
}

/// Possible service commands to run.
#[derive(Debug, Subcommand)]
pub enum ServiceCmd {
    /// Provision a new service in the scoped project.
    Create(ServiceCreateOpt),

    /// Delete a service.
    Delete(ServiceRef),

    /// List services in the scoped project.
    List,

    /// Resize a service to a new worker count.
    Resize(ServiceResizeOpt),

    /// Lookup details for a service.
    Show(ServiceRef),
}

/// Options to provision a service with.
#[derive(Debug, Args)]
pub struct ServiceCreateOpt {
    /// Name of the service to provision.
    pub name: String,

    /// Kind of service to provision (for example KUBERNETES or KAFKA).
    #[arg(long)]
    pub kind: String,

    /// Number of workers to provision the service with.
    #[arg(long = "worker-count")]
    pub worker_count: u32,
}

/// Options to resize a service with.
#[derive(Debug, Args)]
pub struct ServiceResizeOpt {
    /// Identifier of the service.
    pub service: String,

    /// Number of workers to resize the service to.
    #[arg(long = "worker-count")]
    pub worker_count: u32,
}

/// Reference to a specific service.
#[derive(Debug, Args)]
pub struct ServiceRef {
    /// Identifier of the service.
    pub service: String,
}

/// Execute the selected `quasarctl service` command.
pub async fn run(globals: &Globals, cmd: &ServiceCli) -> Result<i32> {
    match &cmd.command {
        ServiceCmd::Create(opt) => create(globals, opt).await,
        ServiceCmd::Delete(opt) => delete(globals, opt).await,
        ServiceCmd::List => list(globals).await,
        ServiceCmd::Resize(opt) => resize(globals, opt).await,
        ServiceCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &ServiceCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let spec = ServiceCreate {
        name: opt.name.clone(),
        kind: opt.kind.clone(),
        worker_count: opt.worker_count,
    };
    let task = client.project(&project).service_create(&spec).await?;

    // The creation task completes once the expansion is accepted, the service
    // is only usable after it reaches READY.
    let task = await_task(globals, &client, &task.id).await?;
    let service = await_service_ready(globals, &client, &task.entity.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: service.id,
        kind: "Service",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &ServiceRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.service(&opt.service).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.service.clone(),
        kind: "Service",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = context.project(&globals.cli.context)?;
    let services = client.project(&project).services().await?;
    let mut formatter = globals.formatter.format(globals, ServiceListOp);
    for service in &services {
        formatter.append(service)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn resize(globals: &Globals, opt: &ServiceResizeOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let spec = ServiceResize {
        worker_count: opt.worker_count,
    };
    let task = client.service(&opt.service).resize(&spec).await?;

    // As with creation, follow the accepted resize until the service settles.
    await_task(globals, &client, &task.id).await?;
    let service = await_service_ready(globals, &client, &opt.service).await?;
    let outcome = EntityOutcome {
        action: "resized",
        id: service.id,
        kind: "Service",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &ServiceRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let service = client.service(&opt.service).get().await?;
    globals.formatter.format(globals, service)?;
    Ok(0)
}
