//! Inspect or manipulate tenants.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::TenantCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::TenantListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate tenants.
#[derive(Debug, Parser)]
pub struct TenantCli {
    /// Select the `quasarctl tenant` command to run.
    #[command(subcommand)]
    pub command: TenantCmd,
}

/// Possible tenant commands to run.
#[derive(Debug, Subcommand)]
pub enum TenantCmd {
    /// Create a new tenant.
    Create(TenantCreateOpt),

    /// Delete a tenant (and all objects within it).
    Delete(TenantRef),

    /// List tenants known to the Control Plane.
    List,

    /// Lookup details for a tenant.
    Show(TenantRef),
}

/// Options to create a tenant with.
#[derive(Debug, Args)]
pub struct TenantCreateOpt {
    /// Name of the tenant to create.
    pub name: String,
}

/// Reference to a specific tenant.
#[derive(Debug, Args)]
pub struct TenantRef {
    /// Identifier of the tenant.
    pub tenant: String,
}

/// Execute the selected `quasarctl tenant` command.
pub async fn run(globals: &Globals, cmd: &TenantCli) -> Result<i32> {
    match &cmd.command {
        TenantCmd::Create(opt) => create(globals, opt).await,
        TenantCmd::Delete(opt) => delete(globals, opt).await,
        TenantCmd::List => list(globals).await,
        TenantCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &TenantCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let spec = TenantCreate {
        name: opt.name.clone(),
    };
    let task = client.tenant_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Tenant",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &TenantRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.tenant(&opt.tenant).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.tenant.clone(),
        kind: "Tenant",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let tenants = client.tenants().await?;
    let mut formatter = globals.formatter.format(globals, TenantListOp);
    for tenant in &tenants {
        formatter.append(tenant)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &TenantRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let tenant = client.tenant(&opt.tenant).get().await?;
    globals.formatter.format(globals, tenant)?;
    Ok(0)
}
