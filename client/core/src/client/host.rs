//! Implement the host methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Host;
use crate::models::HostCreate;
use crate::models::ResourceList;
use crate::models::Task;

/// Access operations on a specific host.
pub struct HostClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific host.
    pub fn host<'a>(&'a self, id: &'a str) -> HostClient<'a> {
        HostClient { inner: self, id }
    }

    /// Register a new host, returning the task tracking the operation.
    pub async fn host_create(&self, spec: &HostCreate) -> Result<Task> {
        let url = format!("{}v1/hosts", self.base);
        let response = self.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List hosts registered with the control plane.
    pub async fn hosts(&self) -> Result<Vec<Host>> {
        let url = format!("{}v1/hosts", self.base);
        let response = self.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Host>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}

impl<'a> HostClient<'a> {
    /// Deregister the host, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/hosts/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("host", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the host record.
    pub async fn get(&'a self) -> Result<Host> {
        let url = format!("{}v1/hosts/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Host>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("host", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
