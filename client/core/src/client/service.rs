//! Implement the service methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Service;
use crate::models::ServiceResize;
use crate::models::Task;

/// Access operations on a specific service.
pub struct ServiceClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific service.
    pub fn service<'a>(&'a self, id: &'a str) -> ServiceClient<'a> {
        ServiceClient { inner: self, id }
    }
}

impl<'a> ServiceClient<'a> {
    /// Delete the service, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/services/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("service", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the service record, including its current state.
    pub async fn get(&'a self) -> Result<Service> {
        let url = format!("{}v1/services/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Service>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("service", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Start a background resize of the service, returning the task tracking
    /// the operation.
    ///
    /// The task completes when the resize is accepted, not when it finishes:
    /// callers should follow up by watching the service state until it
    /// reaches `READY`.
    pub async fn resize(&'a self, spec: &ServiceResize) -> Result<Task> {
        let url = format!("{}v1/services/{}/resize", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("service", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
