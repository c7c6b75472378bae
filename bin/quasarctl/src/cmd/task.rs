//! Inspect tasks tracking asynchronous operations.
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use quasar_client::models::TaskFilter;

use crate::context::ContextStore;
use crate::formatter::ops::TaskListOp;
use crate::wait::task::await_task_timeout;
use crate::wait::task::DEFAULT_TIMEOUT;
use crate::Globals;

/// Inspect tasks tracking asynchronous operations.
#[derive(Debug, Parser)]
pub struct TaskCli {
    /// Select the `quasarctl task` command to run.
    #[command(subcommand)]
    pub command: TaskCmd,
}

/// Possible task commands to run.
#[derive(Debug, Subcommand)]
pub enum TaskCmd {
    /// List tasks known to the Control Plane.
    List(TaskListOpt),

    /// Lookup details for a task, including its steps.
    Show(TaskRef),

    /// Wait for a task to reach a terminal state.
    Wait(TaskWaitOpt),
}

/// Filters to list tasks with.
#[derive(Debug, Args)]
pub struct TaskListOpt {
    /// Only list tasks operating on the given entity.
    #[arg(long = "entity-id")]
    pub entity_id: Option<String>,

    /// Only list tasks in the given state (QUEUED, STARTED, COMPLETED, ERROR).
    #[arg(long)]
    pub state: Option<String>,
}

/// Reference to a specific task.
#[derive(Debug, Args)]
pub struct TaskRef {
    /// Identifier of the task.
    pub task: String,
}

/// Options to wait for a task with.
#[derive(Debug, Args)]
pub struct TaskWaitOpt {
    /// Identifier of the task.
    pub task: String,

    /// Give up on the task after this many seconds.
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Execute the selected `quasarctl task` command.
pub async fn run(globals: &Globals, cmd: &TaskCli) -> Result<i32> {
    match &cmd.command {
        TaskCmd::List(opt) => list(globals, opt).await,
        TaskCmd::Show(opt) => show(globals, opt).await,
        TaskCmd::Wait(opt) => wait(globals, opt).await,
    }
}

async fn list(globals: &Globals, opt: &TaskListOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let filter = TaskFilter {
        entity_id: opt.entity_id.clone(),
        state: opt.state.clone(),
    };
    let tasks = client.tasks(&filter).await?;
    let mut formatter = globals.formatter.format(globals, TaskListOp);
    for task in &tasks {
        formatter.append(task)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &TaskRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.task(&opt.task).get().await?;
    globals.formatter.format(globals, task)?;
    Ok(0)
}

async fn wait(globals: &Globals, opt: &TaskWaitOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let timeout = opt.timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT);
    let task = await_task_timeout(globals, &client, &opt.task, timeout).await?;
    globals.formatter.format(globals, task)?;
    Ok(0)
}
