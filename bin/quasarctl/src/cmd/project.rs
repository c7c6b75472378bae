//! Inspect or manipulate projects within a tenant.
//!
//! Creation and listing resolve the tenant from the context scope (or the
//! `--tenant` override), other commands address projects by ID.
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::ProjectCreate;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::ProjectListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate projects within a tenant.
#[derive(Debug, Parser)]
pub struct ProjectCli {
    /// Select the `quasarctl project` command to run.
    #[command(subcommand)]
    pub command: ProjectCmd,
}

/// Possible project commands to run.
#[derive(Debug, Subcommand)]
pub enum ProjectCmd {
    /// Create a new project in the scoped tenant.
    Create(ProjectCreateOpt),

    /// Delete a project (and all resources within it).
    Delete(ProjectRef),

    /// List projects in the scoped tenant.
    List,

    /// Lookup details for a project.
    Show(ProjectRef),
}

/// Options to create a project with.
#[derive(Debug, Args)]
pub struct ProjectCreateOpt {
    /// Name of the project to create.
    pub name: String,
}

/// Reference to a specific project.
#[derive(Debug, Args)]
pub struct ProjectRef {
    /// Identifier of the project.
    pub project: String,
}

/// Execute the selected `quasarctl project` command.
pub async fn run(globals: &Globals, cmd: &ProjectCli) -> Result<i32> {
    match &cmd.command {
        ProjectCmd::Create(opt) => create(globals, opt).await,
        ProjectCmd::Delete(opt) => delete(globals, opt).await,
        ProjectCmd::List => list(globals).await,
        ProjectCmd::Show(opt) => show(globals, opt).await,
    }
}

async fn create(globals: &Globals, opt: &ProjectCreateOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let tenant = context.tenant(&globals.cli.context)?;
    let spec = ProjectCreate {
        name: opt.name.clone(),
    };
    let task = client.tenant(&tenant).project_create(&spec).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "created",
        id: task.entity.id,
        kind: "Project",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn delete(globals: &Globals, opt: &ProjectRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.project(&opt.project).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.project.clone(),
        kind: "Project",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let tenant = context.tenant(&globals.cli.context)?;
    let projects = client.tenant(&tenant).projects().await?;
    let mut formatter = globals.formatter.format(globals, ProjectListOp);
    for project in &projects {
        formatter.append(project)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &ProjectRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let project = client.project(&opt.project).get().await?;
    globals.formatter.format(globals, project)?;
    Ok(0)
}
