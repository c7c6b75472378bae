//! Await server-side tasks spawned by mutating API calls.
use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use quasar_client::models::ApiError;
use quasar_client::models::Task;
use quasar_client::models::TaskState;
use quasar_client::Client;

use super::bar_cursor;
use super::wait_until;
use super::Check;
use super::Frame;
use super::Progress;
use super::WaitConfig;
use super::MAX_FETCH_ERRORS;
use crate::errors::StepErrors;
use crate::errors::TaskFailed;
use crate::Globals;

/// Delay between task poll attempts.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default time budget for a task to reach a terminal state.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Wait for a task to reach a terminal state, with the default time budget.
pub async fn await_task(globals: &Globals, client: &Client, task_id: &str) -> Result<Task> {
    await_task_timeout(globals, client, task_id, DEFAULT_TIMEOUT).await
}

/// Wait for a task to reach a terminal state.
///
/// In interactive mode the task is polled and a progress bar is rendered in
/// the background while the wait is in flight; the renderer is always stopped
/// before the outcome is returned. In non-interactive mode a single blocking
/// wait call is issued to the server and nothing is drawn.
///
/// Tasks ending in the ERROR state return a [`TaskFailed`] error carrying the
/// step errors the server reported. Waits failing for any other reason attach
/// step errors observed before the failure as [`StepErrors`] context.
pub async fn await_task_timeout(
    globals: &Globals,
    client: &Client,
    task_id: &str,
    timeout: Duration,
) -> Result<Task> {
    let handle = client.task(task_id);
    if !globals.interactive() {
        let task = handle.wait().await?;
        return match task.state {
            TaskState::Error => Err(task_failure(&task).into()),
            _ => Ok(task),
        };
    }

    let progress = Progress::start();
    let result = poll_task(Some(&progress), || handle.get(), task_id, timeout).await;
    // The wait outcome matters more than a renderer that failed to stop.
    if let Err(error) = progress.finish().await {
        slog::warn!(
            globals.logger, "Progress renderer failed to stop";
            "error" => %error,
        );
    }
    result
}

/// Poll a task with the given fetch operation until it is terminal.
async fn poll_task<Fetch, FetchFut>(
    progress: Option<&Progress>,
    fetch: Fetch,
    task_id: &str,
    timeout: Duration,
) -> Result<Task>
where
    Fetch: FnMut() -> FetchFut,
    FetchFut: Future<Output = Result<Task>>,
{
    let config = WaitConfig {
        interval: POLL_INTERVAL,
        max_fetch_errors: MAX_FETCH_ERRORS,
        subject: format!("task '{}'", task_id),
        timeout,
    };
    let mut last_seen: Option<Task> = None;
    let result = wait_until(&config, fetch, |task: &Task| {
        if let Some(progress) = progress {
            progress.update(frame(task));
        }
        last_seen = Some(task.clone());
        match task.state {
            TaskState::Completed => Check::Done(task.clone()),
            TaskState::Error => Check::Failed(task_failure(task).into()),
            _ => Check::Pending,
        }
    })
    .await;

    // Task failures already carry their step errors, other failures get the
    // errors observed on the last snapshot attached as context.
    match result {
        Err(error) if error.downcast_ref::<TaskFailed>().is_none() => {
            let errors = last_seen
                .as_ref()
                .map(collect_step_errors)
                .unwrap_or_default();
            match errors.is_empty() {
                true => Err(error),
                false => Err(error.context(StepErrors { errors })),
            }
        }
        result => result,
    }
}

fn collect_step_errors(task: &Task) -> Vec<ApiError> {
    task.steps
        .iter()
        .flat_map(|step| step.errors.iter().cloned())
        .collect()
}

fn frame(task: &Task) -> Frame {
    Frame {
        cursor: bar_cursor(task),
        label: format!("{} '{}'", task.operation, task.entity.id),
        state: task.state.to_string(),
        steps: task.steps.len(),
    }
}

fn task_failure(task: &Task) -> TaskFailed {
    TaskFailed {
        errors: collect_step_errors(task),
        operation: task.operation.clone(),
        task_id: task.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use quasar_client::models::ApiError;
    use quasar_client::models::EntityRef;
    use quasar_client::models::Step;
    use quasar_client::models::Task;
    use quasar_client::models::TaskState;

    use super::poll_task;
    use super::Progress;
    use super::DEFAULT_TIMEOUT;
    use crate::errors::FetchRetriesExceeded;
    use crate::errors::StepErrors;
    use crate::errors::TaskFailed;
    use crate::errors::WaitTimeout;

    fn task(state: TaskState) -> Task {
        Task {
            id: "t-1".to_string(),
            state,
            operation: "CREATE_VM".to_string(),
            entity: EntityRef {
                id: "e-1".to_string(),
                kind: "vm".to_string(),
            },
            steps: Vec::new(),
            started_time: 1700000000000,
            end_time: -1,
        }
    }

    fn step_with_error(sequence: u64, state: TaskState) -> Step {
        Step {
            sequence,
            operation: format!("STEP_{}", sequence),
            state,
            started_time: 0,
            end_time: 0,
            errors: vec![ApiError {
                code: "QuotaError".to_string(),
                message: "near quota".to_string(),
            }],
            warnings: Vec::new(),
        }
    }

    #[tokio::test]
    async fn completed_on_first_poll() {
        let fetches = AtomicU32::new(0);
        let result = poll_task(
            None,
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Ok(task(TaskState::Completed)) }
            },
            "t-1",
            DEFAULT_TIMEOUT,
        )
        .await;
        let task = result.expect("task to complete");
        assert_eq!(task.state, TaskState::Completed);
        assert_eq!(fetches.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn failed_on_first_poll() {
        let mut failed = task(TaskState::Error);
        failed.steps.push(step_with_error(0, TaskState::Error));
        let result = poll_task(None, || async { Ok(failed.clone()) }, "t-1", DEFAULT_TIMEOUT).await;
        let error = result.expect_err("task to fail");
        let failure = error
            .downcast_ref::<TaskFailed>()
            .expect("a TaskFailed error");
        assert_eq!(failure.task_id, "t-1");
        assert_eq!(failure.operation, "CREATE_VM");
        assert_eq!(failure.errors[0].code, "QuotaError");
    }

    #[tokio::test(start_paused = true)]
    async fn queued_to_started_to_completed() {
        let fetches = AtomicU32::new(0);
        let start = tokio::time::Instant::now();
        let result = poll_task(
            None,
            || {
                let attempt = fetches.fetch_add(1, Ordering::Relaxed) + 1;
                async move {
                    let state = match attempt {
                        1 => TaskState::Queued,
                        2 => TaskState::Started,
                        _ => TaskState::Completed,
                    };
                    Ok(task(state))
                }
            },
            "t-1",
            DEFAULT_TIMEOUT,
        )
        .await;
        let task = result.expect("task to complete");
        assert_eq!(task.entity.id, "e-1");
        assert_eq!(fetches.load(Ordering::Relaxed), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn renderer_joined_after_successful_wait() {
        let progress = Progress::start();
        let fetches = AtomicU32::new(0);
        let result = poll_task(
            Some(&progress),
            || {
                let attempt = fetches.fetch_add(1, Ordering::Relaxed) + 1;
                async move {
                    let state = match attempt {
                        1 => TaskState::Queued,
                        2 => TaskState::Started,
                        _ => TaskState::Completed,
                    };
                    Ok(task(state))
                }
            },
            "t-1",
            DEFAULT_TIMEOUT,
        )
        .await;
        progress.finish().await.expect("renderer to stop cleanly");
        let task = result.expect("task to complete");
        assert_eq!(task.state, TaskState::Completed);
        assert_eq!(fetches.load(Ordering::Relaxed), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn renderer_joined_after_failed_wait() {
        let progress = Progress::start();
        let mut failed = task(TaskState::Error);
        failed.steps.push(step_with_error(0, TaskState::Error));
        let result = poll_task(
            Some(&progress),
            || async { Ok(failed.clone()) },
            "t-1",
            DEFAULT_TIMEOUT,
        )
        .await;
        progress.finish().await.expect("renderer to stop cleanly");
        let error = result.expect_err("task to fail");
        error
            .downcast_ref::<TaskFailed>()
            .expect("a TaskFailed error");
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_consecutive_fetch_failures() {
        let fetches = AtomicU32::new(0);
        let result = poll_task(
            None,
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Err(anyhow::anyhow!("connection refused")) }
            },
            "t-1",
            DEFAULT_TIMEOUT,
        )
        .await;
        let error = result.expect_err("wait to fail");
        error
            .downcast_ref::<FetchRetriesExceeded>()
            .expect("a FetchRetriesExceeded error");
        assert_eq!(fetches.load(Ordering::Relaxed), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_attaches_observed_step_errors() {
        let mut stuck = task(TaskState::Started);
        stuck.steps.push(step_with_error(0, TaskState::Started));
        let result = poll_task(
            None,
            || async { Ok(stuck.clone()) },
            "t-1",
            Duration::from_secs(2),
        )
        .await;
        let error = result.expect_err("wait to time out");
        let steps = error
            .downcast_ref::<StepErrors>()
            .expect("StepErrors context");
        assert_eq!(steps.errors[0].code, "QuotaError");
        let chain: Vec<String> = error.chain().map(|error| error.to_string()).collect();
        assert!(chain
            .iter()
            .any(|message| message.contains("timed out while waiting for task 't-1'")));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_without_step_errors() {
        let result = poll_task(
            None,
            || async { Ok(task(TaskState::Started)) },
            "t-1",
            Duration::from_secs(2),
        )
        .await;
        let error = result.expect_err("wait to time out");
        error
            .downcast_ref::<WaitTimeout>()
            .expect("a WaitTimeout error");
        assert!(error.downcast_ref::<StepErrors>().is_none());
    }
}
