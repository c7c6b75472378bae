//! Implement the subnet methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Subnet;
use crate::models::Task;

/// Access operations on a specific subnet.
pub struct SubnetClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific subnet.
    pub fn subnet<'a>(&'a self, id: &'a str) -> SubnetClient<'a> {
        SubnetClient { inner: self, id }
    }
}

impl<'a> SubnetClient<'a> {
    /// Delete the subnet, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/subnets/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("subnet", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the subnet record.
    pub async fn get(&'a self) -> Result<Subnet> {
        let url = format!("{}v1/subnets/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Subnet>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("subnet", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
