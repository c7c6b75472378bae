//! Errors encountered during API requests or reported by the remote server.
use anyhow::Result;
use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::models::ApiError;

/// The client sent an invalid API request.
#[derive(Debug, thiserror::Error)]
#[error("the client sent an invalid API request")]
pub struct ApiClientError;

/// The API server could not find the requested resource.
#[derive(Debug, thiserror::Error)]
#[error("the API server could not find the requested resource")]
pub struct ApiNotFound;

/// The server failed to process the API request.
#[derive(Debug, thiserror::Error)]
#[error("the server failed to process the API request")]
pub struct ApiServerError;

/// The API server returned an unexpected empty response.
#[derive(Debug, thiserror::Error)]
#[error("the API server returned an unexpected empty response")]
pub struct EmptyResponse;

/// Invalid API response received.
#[derive(Debug, thiserror::Error)]
#[error("invalid API response received: {response}")]
pub struct InvalidApiResponse {
    pub response: String,
}

/// Reference to the resource an API operation failed for.
#[derive(Debug, thiserror::Error)]
#[error("API request failed for {kind} '{id}'")]
pub struct ResourceIdentifier {
    id: String,
    kind: &'static str,
}

impl ResourceIdentifier {
    /// Reference a resource by kind and identifier.
    pub fn reference<S>(kind: &'static str, id: S) -> ResourceIdentifier
    where
        S: Into<String>,
    {
        let id = id.into();
        ResourceIdentifier { id, kind }
    }
}

/// Decode the body of an HTTP response and correctly handle errors in the process.
pub async fn inspect<T>(response: Response) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let code = response.status();
    if code == StatusCode::NOT_FOUND {
        anyhow::bail!(ApiNotFound);
    }
    let text = response.text().await?;

    // On error decode the API error payload and wrap it by blame.
    if code.is_client_error() || code.is_server_error() {
        let error = serde_json::from_str::<ApiError>(&text).map_err(|error| {
            let response = text.clone();
            anyhow::anyhow!(error).context(InvalidApiResponse { response })
        })?;
        let error = anyhow::anyhow!(error);
        let error = match code.is_client_error() {
            true => error.context(ApiClientError),
            false => error.context(ApiServerError),
        };
        return Err(error);
    }

    // On success decode the payload, if any, into the requested type.
    if text.is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<T>(&text)
        .map_err(|error| {
            let decode = InvalidApiResponse { response: text };
            anyhow::anyhow!(error).context(decode)
        })
        .map(Some)
}
