//! Implement the image methods for API clients.
use anyhow::Context;
use anyhow::Result;

use super::Client;
use crate::error::EmptyResponse;
use crate::error::ResourceIdentifier;
use crate::models::Image;
use crate::models::ResourceList;
use crate::models::Task;

/// Access operations on a specific image.
pub struct ImageClient<'a> {
    inner: &'a Client,
    id: &'a str,
}

impl Client {
    /// Operations on a specific image.
    pub fn image<'a>(&'a self, id: &'a str) -> ImageClient<'a> {
        ImageClient { inner: self, id }
    }

    /// Upload a new image, returning the task tracking the operation.
    pub async fn image_create(&self, name: &str, payload: Vec<u8>) -> Result<Task> {
        let url = format!("{}v1/images", self.base);
        let response = self
            .client
            .post(url)
            .query(&[("name", name)])
            .body(payload)
            .send()
            .await?;
        let response = crate::error::inspect::<Task>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// List images known to the control plane.
    pub async fn images(&self) -> Result<Vec<Image>> {
        let url = format!("{}v1/images", self.base);
        let response = self.client.get(url).send().await?;
        let response = crate::error::inspect::<ResourceList<Image>>(response).await?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response.items)
    }
}

impl<'a> ImageClient<'a> {
    /// Delete the image, returning the task tracking the operation.
    pub async fn delete(&'a self) -> Result<Task> {
        let url = format!("{}v1/images/{}", self.inner.base, self.id);
        let response = self.inner.client.delete(url).send().await?;
        let response = crate::error::inspect::<Task>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("image", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }

    /// Fetch the image record.
    pub async fn get(&'a self) -> Result<Image> {
        let url = format!("{}v1/images/{}", self.inner.base, self.id);
        let response = self.inner.client.get(url).send().await?;
        let response = crate::error::inspect::<Image>(response)
            .await
            .with_context(|| ResourceIdentifier::reference("image", self.id))?;
        let response = response.ok_or(EmptyResponse)?;
        Ok(response)
    }
}
