//! Implement the disk methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Disk;
use crate::models::Task;

/// Access operations on a specific disk.
pub struct DiskClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific disk.
    pub fn disk<'a>(&'a self, id: &'a str) -> DiskClient<'a> {
        DiskClient { inner: self, id }
    }
}

impl<'a> DiskClient<'a> {
    /// Delete the disk, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/disks/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("disk", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the disk record.
    pub async fn get(&'a self) -> Result<Disk> {
        let url = format!("{}v1/disks/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Disk>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("disk", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
