//! Implementation of the API client object, to keep files organised.
use anyhow::Result;
use reqwest::Certificate;
use reqwest::Client as ReqwestClient;
use reqwest::Identity;

mod disk;
mod host;
mod image;
mod network;
mod project;
mod router;
mod service;
mod subnet;
mod task;
mod tenant;
mod vm;

use crate::ClientOptions;

/// String to set as the user agent in HTTP requests.
static CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Async API client to the Quasar Control Plane.
pub struct Client {
    /// Base URL of the API server to send requests to.
    base: String,

    /// Low-level [`Client`](reqwest::Client) to perform HTTP requests with.
    client: ReqwestClient,
}

impl Client {
    /// Initialise a client with [`ClientOptions`].
    pub fn with<O>(options: O) -> Result<Client>
    where
        O: Into<ClientOptions>,
    {
        let options = options.into();
        let mut client = ReqwestClient::builder()
            .connect_timeout(options.timeout_connect)
            .timeout(options.timeout)
            .user_agent(CLIENT_USER_AGENT)
            .use_rustls_tls();
        if let Some(ca_bundle) = &options.ca_bundle {
            let ca_bundle = Certificate::from_pem(ca_bundle)?;
            client = client.add_root_certificate(ca_bundle);
        }
        if let Some(client_key) = &options.client_key {
            let client_key = Identity::from_pem(client_key)?;
            client = client.identity(client_key);
        }
        let client = Client {
            base: options.address,
            client: client.build()?,
        };
        Ok(client)
    }
}
