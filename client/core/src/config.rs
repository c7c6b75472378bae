//! Configuration options for Quasar Control Plane clients.
use std::time::Duration;

/// Options to initialise clients with.
pub struct ClientOptions {
    /// Address of the API server to connect to, with trailing slash.
    pub(crate) address: String,

    /// PEM bundle of Certificate Authorities to validate the API server with.
    pub(crate) ca_bundle: Option<Vec<u8>>,

    /// Client key and certificate PEM bundle for mutual TLS.
    pub(crate) client_key: Option<Vec<u8>>,

    /// Timeout for requests made by the client.
    pub(crate) timeout: Duration,

    /// Timeout for new connections initialised by the client.
    pub(crate) timeout_connect: Duration,
}

impl ClientOptions {
    /// Define options for API clients.
    pub fn url<S>(address: S) -> ClientOptionsBuilder
    where
        S: Into<String>,
    {
        ClientOptionsBuilder {
            address: address.into(),
            ca_bundle: None,
            client_key: None,
            timeout: Duration::from_secs(30),
            timeout_connect: Duration::from_secs(1),
        }
    }
}

/// Incrementally build [`ClientOptions`] objects.
pub struct ClientOptionsBuilder {
    address: String,
    ca_bundle: Option<Vec<u8>>,
    client_key: Option<Vec<u8>>,
    timeout: Duration,
    timeout_connect: Duration,
}

impl ClientOptionsBuilder {
    /// Trust the Certificate Authorities in the given PEM bundle.
    pub fn ca_bundle(mut self, pem: Vec<u8>) -> Self {
        self.ca_bundle = Some(pem);
        self
    }

    /// Present the client key in the given PEM bundle for mutual TLS.
    pub fn client_key(mut self, pem: Vec<u8>) -> Self {
        self.client_key = Some(pem);
        self
    }

    /// Change the timeout for requests made by the client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Change the timeout for new connections initialised by the client.
    pub fn timeout_connect(mut self, timeout: Duration) -> Self {
        self.timeout_connect = timeout;
        self
    }

    /// All options are set, get a usable options object.
    pub fn client(self) -> ClientOptions {
        self.into()
    }
}

impl From<ClientOptionsBuilder> for ClientOptions {
    fn from(value: ClientOptionsBuilder) -> Self {
        let mut address = value.address;
        if !address.ends_with('/') {
            address.push('/');
        }
        ClientOptions {
            address,
            ca_bundle: value.ca_bundle,
            client_key: value.client_key,
            timeout: value.timeout,
            timeout_connect: value.timeout_connect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientOptions;

    #[test]
    fn address_gets_trailing_slash() {
        let options = ClientOptions::url("https://quasar.test:9000").client();
        assert_eq!(options.address, "https://quasar.test:9000/");
    }

    #[test]
    fn address_keeps_trailing_slash() {
        let options = ClientOptions::url("https://quasar.test:9000/").client();
        assert_eq!(options.address, "https://quasar.test:9000/");
    }
}
