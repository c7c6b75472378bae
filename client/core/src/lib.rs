//! Async client library to interact with the Quasar Control Plane API.
mod client;
mod config;

pub mod error;
pub mod models;

pub use self::client::Client;
pub use self::config::ClientOptions;
pub use self::config::ClientOptionsBuilder;
