use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::ContextOpt;

/// Information needed to access a Quasar Control Plane API server.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Connection {
    /// Bundle of CA certificates to validate the API server with.
    #[serde(default)]
    pub ca_bundle: Option<String>,

    /// Client key and certificate PEM bundle for mutual TLS.
    #[serde(default)]
    pub client_key: Option<String>,

    /// URL to connect to the Quasar Control Plane API servers.
    pub url: String,
}

/// Contextual information used by API requests.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Context {
    /// How to reach the Quasar API server(s).
    pub connection: Connection,

    /// Selected scope for operations.
    #[serde(default)]
    pub scope: Scope,
}

impl Context {
    /// Get the selected project or fail.
    pub fn project(&self, opt: &ContextOpt) -> Result<String> {
        opt.project
            .clone()
            .or_else(|| self.scope.project.clone())
            .ok_or_else(|| ScopeError::NoProject.into())
    }

    /// Get the selected tenant or fail.
    pub fn tenant(&self, opt: &ContextOpt) -> Result<String> {
        opt.tenant
            .clone()
            .or_else(|| self.scope.tenant.clone())
            .ok_or_else(|| ScopeError::NoTenant.into())
    }
}

/// Pre-selected scope for operations to target the correct tenant and project.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct Scope {
    /// The project to operate on, if none was explicitly set.
    #[serde(default)]
    pub project: Option<String>,

    /// The tenant to operate on, if none was explicitly set.
    #[serde(default)]
    pub tenant: Option<String>,
}

/// Errors attempting to access scopes.
#[derive(thiserror::Error, Debug)]
pub enum ScopeError {
    #[error("A project must be selected.\nTry adding --project or quasarctl context change")]
    NoProject,

    #[error("A tenant must be selected.\nTry adding --tenant or quasarctl context change")]
    NoTenant,
}
