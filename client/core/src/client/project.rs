//! Implement the project methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Disk;
use crate::models::DiskCreate;
use crate::models::Project;
use crate::models::ResourceList;
use crate::models::Service;
use crate::models::ServiceCreate;
use crate::models::Task;
use crate::models::Vm;
use crate::models::VmCreate;

/// Access operations on a specific project.
pub struct ProjectClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific project.
    pub fn project<'a>(&'a self, id: &'a str) -> ProjectClient<'a> {
        ProjectClient { inner: self, id }
    }
}

impl<'a> ProjectClient<'a> {
    /// Delete the project, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/projects/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the project record.
    pub async fn get(&'a self) -> Result<Project> {
        let url = format!("{}v1/projects/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Project>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Create a disk within the project, returning the task tracking the operation.
    pub async fn disk_create(&'a self, spec: &DiskCreate) -> Result<Task> {
        let url = format!("{}v1/projects/{}/disks", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List disks within the project.
    pub async fn disks(&'a self) -> Result<Vec<Disk>> {
        let url = format!("{}v1/projects/{}/disks", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Disk>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }

    /// Create a service within the project, returning the task tracking the operation.
    pub async fn service_create(&'a self, spec: &ServiceCreate) -> Result<Task> {
        let url = format!("{}v1/projects/{}/services", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List services within the project.
    pub async fn services(&'a self) -> Result<Vec<Service>> {
        let url = format!("{}v1/projects/{}/services", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Service>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }

    /// Create a virtual machine within the project, returning the task tracking the operation.
    pub async fn vm_create(&'a self, spec: &VmCreate) -> Result<Task> {
        let url = format!("{}v1/projects/{}/vms", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List virtual machines within the project.
    pub async fn vms(&'a self) -> Result<Vec<Vm>> {
        let url = format!("{}v1/projects/{}/vms", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Vm>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("project", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}
