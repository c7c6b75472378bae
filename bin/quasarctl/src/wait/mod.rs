//! Wait for asynchronous Control Plane operations to reach a terminal state.
//!
//! Every wait in `quasarctl` is a call site of the single [`wait_until`] loop:
//! the generic task poller and the service readiness wait only differ in the
//! fetch operation, the terminal-state inspection and the intervals they use.
use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use tokio::time::Instant;

use crate::errors::FetchRetriesExceeded;
use crate::errors::WaitTimeout;

mod progress;
mod steps;

pub mod ready;
pub mod task;

pub use self::progress::Frame;
pub use self::progress::Progress;
pub use self::steps::bar_cursor;
pub use self::steps::find_started_step;
pub use self::steps::render_bar;
pub use self::steps::sort_steps_by_sequence;

/// Consecutive fetch failures tolerated before a wait gives up.
pub const MAX_FETCH_ERRORS: u32 = 3;

/// How a wait loop interpreted the latest snapshot of the watched resource.
pub enum Check<T> {
    /// The resource reached the successful terminal state.
    Done(T),

    /// The resource reached a terminal failure state.
    Failed(anyhow::Error),

    /// The resource has not reached a terminal state yet.
    Pending,
}

/// Parameters for a [`wait_until`] loop.
pub struct WaitConfig {
    /// Delay between poll attempts.
    pub interval: Duration,

    /// Consecutive fetch failures tolerated before the wait gives up.
    pub max_fetch_errors: u32,

    /// Human readable description of what is being waited on.
    pub subject: String,

    /// Overall time budget for the wait.
    pub timeout: Duration,
}

/// Poll a remote task or resource until it reaches a terminal state.
///
/// - `fetch` grabs the latest snapshot of the watched task or resource.
/// - `inspect` decides if that snapshot is terminal and extracts the output;
///   call sites also use it to publish progress frames.
///
/// Exactly one terminal outcome is returned: the `inspect` success value, the
/// `inspect` failure, a [`FetchRetriesExceeded`] error once too many fetches
/// fail in a row, or a [`WaitTimeout`] error once the time budget is spent.
/// A successful fetch resets the consecutive-failure counter.
pub async fn wait_until<S, Fetch, FetchFut, Inspect, T>(
    config: &WaitConfig,
    mut fetch: Fetch,
    mut inspect: Inspect,
) -> Result<T>
where
    Fetch: FnMut() -> FetchFut,
    FetchFut: Future<Output = Result<S>>,
    Inspect: FnMut(&S) -> Check<T>,
{
    let start = Instant::now();
    let mut fetch_errors: u32 = 0;

    while start.elapsed() < config.timeout {
        match fetch().await {
            Ok(snapshot) => {
                fetch_errors = 0;
                match inspect(&snapshot) {
                    Check::Done(value) => return Ok(value),
                    Check::Failed(error) => return Err(error),
                    Check::Pending => (),
                }
            }
            Err(error) => {
                fetch_errors += 1;
                if fetch_errors > config.max_fetch_errors {
                    let exceeded = FetchRetriesExceeded {
                        attempts: fetch_errors,
                        subject: config.subject.clone(),
                    };
                    return Err(error.context(exceeded));
                }
            }
        }
        tokio::time::sleep(config.interval).await;
    }

    let timeout = WaitTimeout {
        subject: config.subject.clone(),
        timeout: config.timeout,
    };
    Err(timeout.into())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use anyhow::Result;

    use super::wait_until;
    use super::Check;
    use super::WaitConfig;
    use crate::errors::FetchRetriesExceeded;
    use crate::errors::WaitTimeout;

    fn config() -> WaitConfig {
        WaitConfig {
            interval: Duration::from_millis(500),
            max_fetch_errors: super::MAX_FETCH_ERRORS,
            subject: "test resource".to_string(),
            timeout: Duration::from_secs(300),
        }
    }

    #[tokio::test]
    async fn done_on_first_poll_fetches_once() {
        let fetches = AtomicU32::new(0);
        let result: Result<&str> = wait_until(
            &config(),
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Ok(()) }
            },
            |_: &()| Check::Done("done"),
        )
        .await;
        assert_eq!(result.expect("wait to succeed"), "done");
        assert_eq!(fetches.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn failed_on_first_poll_does_not_retry() {
        let fetches = AtomicU32::new(0);
        let result: Result<()> = wait_until(
            &config(),
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Ok(()) }
            },
            |_: &()| Check::Failed(anyhow::anyhow!("terminal failure")),
        )
        .await;
        let error = result.expect_err("wait to fail");
        assert_eq!(error.to_string(), "terminal failure");
        assert_eq!(fetches.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_errors_reset_on_success() {
        let fetches = AtomicU32::new(0);
        let result: Result<u32> = wait_until(
            &config(),
            || {
                let attempt = fetches.fetch_add(1, Ordering::Relaxed) + 1;
                async move {
                    // Fail three polls, succeed, fail three more, then succeed.
                    match attempt {
                        4 | 8 => Ok(attempt),
                        _ => Err(anyhow::anyhow!("transient failure")),
                    }
                }
            },
            |attempt: &u32| match attempt {
                8 => Check::Done(*attempt),
                _ => Check::Pending,
            },
        )
        .await;
        assert_eq!(result.expect("wait to succeed"), 8);
        assert_eq!(fetches.load(Ordering::Relaxed), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_consecutive_fetch_errors() {
        let fetches = AtomicU32::new(0);
        let result: Result<()> = wait_until(
            &config(),
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Err(anyhow::anyhow!("connection refused")) }
            },
            |_: &()| Check::Pending,
        )
        .await;
        let error = result.expect_err("wait to fail");
        let exceeded = error
            .downcast_ref::<FetchRetriesExceeded>()
            .expect("a FetchRetriesExceeded error");
        assert_eq!(exceeded.attempts, 4);
        assert_eq!(fetches.load(Ordering::Relaxed), 4);
        // The underlying transport failure is preserved in the chain.
        let chain = format!("{:?}", error);
        assert!(chain.contains("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_no_terminal_state() {
        let start = tokio::time::Instant::now();
        let config = WaitConfig {
            timeout: Duration::from_secs(5),
            ..config()
        };
        let result: Result<()> =
            wait_until(&config, || async { Ok(()) }, |_: &()| Check::Pending).await;
        let error = result.expect_err("wait to time out");
        error
            .downcast_ref::<WaitTimeout>()
            .expect("a WaitTimeout error");
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
