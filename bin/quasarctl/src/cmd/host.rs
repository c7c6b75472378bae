//! Inspect or manage physical hosts.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use inquire::Password;
use inquire::PasswordDisplayMode;

use quasar_client::models::HostCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::HostListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manage physical hosts.
#[derive(Debug, Parser)]
pub struct HostCli {
    /// Select the `quasarctl host` command to run.
    #[command(subcommand)]
    pub command: HostCmd,
}

/// Possible host commands to run.
#[derive(Debug, Subcommand)]
pub enum HostCmd {
    /// Register a physical host with the Control Plane.
    Create(HostCreateOpt),

    /// Remove a host from the Control Plane.
    Delete(HostRef),

    /// List hosts registered with the Control Plane.
    List,

    /// Lookup details for a host.
    Show(HostRef),
}

/// Options to register a host with.
#[derive(Debug, Args)]
pub struct HostCreateOpt {
    /// Address the host can be reached at.
    pub address: String,

    /// Username to manage the host with.
    #[arg(long)]
    pub username: String,

    /// Password to manage the host with, prompted for when not given.
    #[arg(long)]
    pub password: Option<String>,

    /// Usage tags to schedule workloads onto the host.
    #[arg(long = "usage-tag")]
    pub usage_tags: Vec<String>,
}

/// Reference to a specific host.
#[derive(Debug, Args)]
pub struct HostRef {
    /// Identifier of the host.
    pub host: String,
}

/// Execute the selected `quasarctl host` command.
pub async fn run(globals: &Globals, cmd: &HostCli) -> Result<i32> {
    match &cmd.command {
        HostCmd::Create(opt) => create(globals, opt).await,
        HostCmd::Delete(opt) => delete(globals, opt).await,
        HostCmd::List => list(globals).await,
        HostCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &HostCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let password = match &opt.password {
        Some(password) => password.clone(),
        None if globals.interactive() => {
            tokio::task::spawn_blocking(|| {
                Password::new("Password to manage the host with:")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()
            })
            .await??
        }
        None => anyhow::bail!("a host password is required for non-interactive sessions"),
    };

    let spec = HostCreate {
        address: opt.address.clone(),
        username: opt.username.clone(),
        password,
        usage_tags: opt.usage_tags.clone(),
    };
    let task = client.host_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "registered",
        id: task.entity.id,
        kind: "Host",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &HostRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.host(&opt.host).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.host.clone(),
        kind: "Host",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let hosts = client.hosts().await?;
    let mut formatter = globals.formatter.format(globals, HostListOp);
    for host in &hosts {
        formatter.append(host)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &HostRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let host = client.host(&opt.host).get().await?;
    globals.formatter.format(globals, host)?;
    Ok(0)
}
