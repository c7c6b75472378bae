//! Implement the virtual machine methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Task;
use crate::models::Vm;
use crate::models::VmDiskOp;

/// Access operations on a specific virtual machine.
pub struct VmClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific virtual machine.
    pub fn vm<'a>(&'a self, id: &'a str) -> VmClient<'a> {
        VmClient { inner: self, id }
    }
}

impl<'a> VmClient<'a> {
    /// Attach a disk to the virtual machine, returning the task tracking the operation.
    pub async fn attach_disk(&'a self, op: &VmDiskOp) -> Result<Task> {
        let url = format!("{}v1/vms/{}/attach_disk", self.inner.base, self.id);
        self.operation(url, Some(op)).await
    }

    /// Delete the virtual machine, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/vms/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("vm", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Detach a disk from the virtual machine, returning the task tracking the operation.
    pub async fn detach_disk(&'a self, op: &VmDiskOp) -> Result<Task> {
        let url = format!("{}v1/vms/{}/detach_disk", self.inner.base, self.id);
        self.operation(url, Some(op)).await
    }

    /// Fetch the virtual machine record.
    pub async fn get(&'a self) -> Result<Vm> {
        let url = format!("{}v1/vms/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Vm>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("vm", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Power on the virtual machine, returning the task tracking the operation.
    pub async fn start(&'a self) -> Result<Task> {
        let url = format!("{}v1/vms/{}/start", self.inner.base, self.id);
        self.operation::<()>(url, None).await
    }

    /// Power off the virtual machine, returning the task tracking the operation.
    pub async fn stop(&'a self) -> Result<Task> {
        let url = format!("{}v1/vms/{}/stop", self.inner.base, self.id);
        self.operation::<()>(url, None).await
    }

    /// POST a VM operation with an optional JSON payload.
    async fn operation<B>(&'a self, url: String, body: Option<&B>) -> Result<Task>
    where
        B: serde::Serialize,
    {
        let request = self.inner.client.post(url);
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = request.send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("vm", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
