//! Typed errors for terminal wait-loop outcomes.
//!
//! These errors are wrapped into [`anyhow::Error`]s and bubble unmodified to
//! the process entry point, which reports them and exits non-zero.
use std::time::Duration;

use quasar_client::models::ApiError;

/// Fetching the state of a watched task or resource failed too many times in a row.
#[derive(Debug, thiserror::Error)]
#[error("giving up on {subject} after {attempts} consecutive failed fetches")]
pub struct FetchRetriesExceeded {
    /// Number of consecutive fetch attempts that failed.
    pub attempts: u32,

    /// Description of what was being watched.
    pub subject: String,
}

/// A watched resource reported the ERROR state.
#[derive(Debug, thiserror::Error)]
#[error("{kind} '{id}' entered the ERROR state")]
pub struct ResourceFailed {
    /// Identifier of the failed resource.
    pub id: String,

    /// Kind of the failed resource.
    pub kind: &'static str,
}

/// Step-level error details observed while a task was being watched.
#[derive(Debug, thiserror::Error)]
pub struct StepErrors {
    /// Errors reported by task steps, in observation order.
    pub errors: Vec<ApiError>,
}

impl std::fmt::Display for StepErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the task reported step errors:")?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

/// A watched task reported the ERROR terminal state.
#[derive(Debug, thiserror::Error)]
pub struct TaskFailed {
    /// Step-level errors reported by the task.
    pub errors: Vec<ApiError>,

    /// Operation the task was performing.
    pub operation: String,

    /// Identifier of the failed task.
    pub task_id: String,
}

impl std::fmt::Display for TaskFailed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "task '{}' failed while performing {}",
            self.task_id, self.operation,
        )?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

/// Terminal state was not reached within the allotted time window.
#[derive(Debug, thiserror::Error)]
#[error("timed out while waiting for {subject} after {}s", timeout.as_secs())]
pub struct WaitTimeout {
    /// Description of what was being waited on.
    pub subject: String,

    /// The time budget that was exhausted.
    pub timeout: Duration,
}
