//! Implement the task methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::ResourceList;
use crate::models::Task;
use crate::models::TaskFilter;

/// Access operations on a specific task.
pub struct TaskClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific task.
    pub fn task<'a>(&'a self, id: &'a str) -> TaskClient<'a> {
        TaskClient { inner: self, id }
    }

    /// List tasks known to the control plane, optionally filtered.
    pub async fn tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut request = self.client.get(format!("{}v1/tasks", self.base));
        if let Some(entity_id) = &filter.entity_id {
            request = request.query(&[("entityId", entity_id)]);
        }
        if let Some(state) = &filter.state {
            request = request.query(&[("state", state)]);
        }
        let response = request.send().await?;
        let response = crate::error::inspect::<ResourceList<Task>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}

impl<'a> TaskClient<'a> {
    /// Fetch the current state of the task.
    pub async fn get(&'a self) -> Result<Task> {
        let url = format!("{}v1/tasks/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("task", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Block server-side until the task reaches a terminal state.
    ///
    /// Terminal-state semantics match polling [`TaskClient::get`], with the
    /// wait implemented by the API server instead of the caller.
    pub async fn wait(&'a self) -> Result<Task> {
        let url = format!("{}v1/tasks/{}/wait", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("task", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
