//! Contexts configure access to Quasar Control Plane servers and the
//! tenant/project scope commands operate within.
use clap::Args;

mod store;
mod structs;

pub use store::ContextStore;
pub use structs::Connection;
pub use structs::Context;
pub use structs::ScopeError;

const DEFAULT_CONTEXT: &str = "default";

/// Context-related CLI options.
#[derive(Args, Debug)]
pub struct ContextOpt {
    /// Use the specified context for all operations.
    #[arg(long = "context", global = true, env = "QCTL_CONTEXT")]
    pub name: Option<String>,

    /// Override the project to operate on.
    #[arg(short, long, global = true, env = "QCTL_PROJECT")]
    pub project: Option<String>,

    /// Override the tenant to operate on.
    #[arg(short, long, global = true, env = "QCTL_TENANT")]
    pub tenant: Option<String>,
}

/// Error indicating a context does not exist.
#[derive(thiserror::Error, Debug)]
#[error("A context named '{context}' was not found")]
pub struct ContextNotFound {
    context: String,
}

impl ContextNotFound {
    /// Create a context not found error for the given name.
    pub fn for_name<S>(name: S) -> ContextNotFound
    where
        S: Into<String>,
    {
        let context = name.into();
        ContextNotFound { context }
    }

    /// The name of the context we failed to find.
    pub fn name(&self) -> &str {
        &self.context
    }
}
