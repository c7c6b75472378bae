//! Await services reaching the READY state.
//!
//! Service creation and resize tasks complete when the server accepts the
//! operation, well before the service is usable. This wait follows up on the
//! service record itself, on a slower cadence and a much larger time budget
//! than the task poll since expansions routinely take tens of minutes.
use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use quasar_client::models::Service;
use quasar_client::models::ServiceState;
use quasar_client::Client;

use super::wait_until;
use super::Check;
use super::Frame;
use super::Progress;
use super::WaitConfig;
use super::MAX_FETCH_ERRORS;
use crate::errors::ResourceFailed;
use crate::Globals;

/// Delay between service state checks.
pub const READY_INTERVAL: Duration = Duration::from_secs(2);

/// Time budget for a service to reach the READY state.
pub const READY_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Wait for a service to reach the READY state.
///
/// In interactive mode an indeterminate progress line is rendered while the
/// wait is in flight and always cleared before the outcome is returned.
/// A service reaching the ERROR state fails the wait with [`ResourceFailed`].
pub async fn await_service_ready(
    globals: &Globals,
    client: &Client,
    service_id: &str,
) -> Result<Service> {
    let handle = client.service(service_id);
    if !globals.interactive() {
        return poll_ready(None, || handle.get(), service_id).await;
    }

    let progress = Progress::start();
    let result = poll_ready(Some(&progress), || handle.get(), service_id).await;
    // The wait outcome matters more than a renderer that failed to stop.
    if let Err(error) = progress.finish().await {
        slog::warn!(
            globals.logger, "Progress renderer failed to stop";
            "error" => %error,
        );
    }
    result
}

/// Poll a service with the given fetch operation until it is READY.
async fn poll_ready<Fetch, FetchFut>(
    progress: Option<&Progress>,
    fetch: Fetch,
    service_id: &str,
) -> Result<Service>
where
    Fetch: FnMut() -> FetchFut,
    FetchFut: Future<Output = Result<Service>>,
{
    let config = WaitConfig {
        interval: READY_INTERVAL,
        max_fetch_errors: MAX_FETCH_ERRORS,
        subject: format!("service '{}' to become ready", service_id),
        timeout: READY_TIMEOUT,
    };
    wait_until(&config, fetch, |service: &Service| {
        if let Some(progress) = progress {
            progress.update(frame(service));
        }
        match service.state {
            ServiceState::Ready => Check::Done(service.clone()),
            ServiceState::Error => {
                let failed = ResourceFailed {
                    id: service.id.clone(),
                    kind: "service",
                };
                Check::Failed(failed.into())
            }
            _ => Check::Pending,
        }
    })
    .await
}

fn frame(service: &Service) -> Frame {
    Frame {
        cursor: 0,
        label: format!("Waiting for service '{}'", service.name),
        state: service.state.to_string(),
        steps: 0,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use quasar_client::models::Service;
    use quasar_client::models::ServiceState;

    use super::poll_ready;
    use crate::errors::ResourceFailed;

    fn service(state: ServiceState) -> Service {
        Service {
            id: "s-1".to_string(),
            name: "kafka".to_string(),
            kind: "KAFKA".to_string(),
            state,
            worker_count: 3,
        }
    }

    #[tokio::test]
    async fn ready_on_first_poll() {
        let fetches = AtomicU32::new(0);
        let result = poll_ready(
            None,
            || {
                fetches.fetch_add(1, Ordering::Relaxed);
                async { Ok(service(ServiceState::Ready)) }
            },
            "s-1",
        )
        .await;
        let service = result.expect("service to become ready");
        assert_eq!(service.state, ServiceState::Ready);
        assert_eq!(fetches.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn error_state_fails_the_wait() {
        let result = poll_ready(None, || async { Ok(service(ServiceState::Error)) }, "s-1").await;
        let error = result.expect_err("wait to fail");
        let failed = error
            .downcast_ref::<ResourceFailed>()
            .expect("a ResourceFailed error");
        assert_eq!(failed.id, "s-1");
        assert_eq!(failed.kind, "service");
        assert_eq!(error.to_string(), "service 's-1' entered the ERROR state");
    }

    #[tokio::test(start_paused = true)]
    async fn resizing_then_ready() {
        let fetches = AtomicU32::new(0);
        let start = tokio::time::Instant::now();
        let result = poll_ready(
            None,
            || {
                let attempt = fetches.fetch_add(1, Ordering::Relaxed) + 1;
                async move {
                    let state = match attempt {
                        1 | 2 => ServiceState::Resizing,
                        _ => ServiceState::Ready,
                    };
                    Ok(service(state))
                }
            },
            "s-1",
        )
        .await;
        result.expect("service to become ready");
        assert_eq!(fetches.load(Ordering::Relaxed), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(4));
    }
}
