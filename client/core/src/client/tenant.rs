//! Implement the tenant methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Project;
use crate::models::ProjectCreate;
use crate::models::ResourceList;
use crate::models::Task;
use crate::models::Tenant;
use crate::models::TenantCreate;

/// Access operations on a specific tenant.
pub struct TenantClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific tenant.
    pub fn tenant<'a>(&'a self, id: &'a str) -> TenantClient<'a> {
        TenantClient { inner: self, id }
    }

    /// Create a new tenant, returning the task tracking the operation.
    pub async fn tenant_create(&self, spec: &TenantCreate) -> Result<Task> {
        let url = format!("{}v1/tenants", self.base);
        let response = self.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List tenants known to the control plane.
    pub async fn tenants(&self) -> Result<Vec<Tenant>> {
        let url = format!("{}v1/tenants", self.base);
        let response = self.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Tenant>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}

impl<'a> TenantClient<'a> {
    /// Delete the tenant, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/tenants/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("tenant", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the tenant record.
    pub async fn get(&'a self) -> Result<Tenant> {
        let url = format!("{}v1/tenants/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Tenant>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("tenant", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Create a project within the tenant, returning the task tracking the operation.
    pub async fn project_create(&'a self, spec: &ProjectCreate) -> Result<Task> {
        let url = format!("{}v1/tenants/{}/projects", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("tenant", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List projects within the tenant.
    pub async fn projects(&'a self) -> Result<Vec<Project>> {
        let url = format!("{}v1/tenants/{}/projects", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Project>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("tenant", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}
