//! Implement the network methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Network;
use crate::models::NetworkCreate;
use crate::models::ResourceList;
use crate::models::Router;
use crate::models::RouterCreate;
use crate::models::Subnet;
use crate::models::SubnetCreate;
use crate::models::Task;

/// Access operations on a specific network.
pub struct NetworkClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific network.
    pub fn network<'a>(&'a self, id: &'a str) -> NetworkClient<'a> {
        NetworkClient { inner: self, id }
    }

    /// Create a new network, returning the task tracking the operation.
    pub async fn network_create(&self, spec: &NetworkCreate) -> Result<Task> {
        let url = format!("{}v1/networks", self.base);
        let response = self.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List networks known to the control plane.
    pub async fn networks(&self) -> Result<Vec<Network>> {
        let url = format!("{}v1/networks", self.base);
        let response = self.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Network>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}

impl<'a> NetworkClient<'a> {
    /// Delete the network, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/networks/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the network record.
    pub async fn get(&'a self) -> Result<Network> {
        let url = format!("{}v1/networks/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Network>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Create a router within the network, returning the task tracking the operation.
    pub async fn router_create(&'a self, spec: &RouterCreate) -> Result<Task> {
        let url = format!("{}v1/networks/{}/routers", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List routers within the network.
    pub async fn routers(&'a self) -> Result<Vec<Router>> {
        let url = format!("{}v1/networks/{}/routers", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Router>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }

    /// Create a subnet within the network, returning the task tracking the operation.
    pub async fn subnet_create(&'a self, spec: &SubnetCreate) -> Result<Task> {
        let url = format!("{}v1/networks/{}/subnets", self.inner.base, self.id);
        let response = self.inner.client.post(url).json(spec).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List subnets within the network.
    pub async fn subnets(&'a self) -> Result<Vec<Subnet>> {
        let url = format!("{}v1/networks/{}/subnets", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Subnet>>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("network", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}
