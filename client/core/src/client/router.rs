//! Implement the router methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Router;
use crate::models::Task;

/// Access operations on a specific router.
pub struct RouterClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific router.
    pub fn router<'a>(&'a self, id: &'a str) -> RouterClient<'a> {
        RouterClient { inner: self, id }
    }
}

impl<'a> RouterClient<'a> {
    /// Delete the router, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/routers/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("router", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the router record.
    pub async fn get(&'a self) -> Result<Router> {
        let url = format!("{}v1/routers/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Router>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("router", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
