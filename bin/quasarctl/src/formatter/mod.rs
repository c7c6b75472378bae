//! Abstract how information is presented to users to enable different interaction styles.
//!
//! For example:
//!
//! - The default `Human` formatter aims to provide output suitable for an interactive session
//!   where people issue commands and review results.
//! - The `JSON` formatter aims to provide output suitable for an automated script.
//! - The `Script` formatter emits tab-separated values for quick shell pipelines.
use anyhow::Result;
use clap::Args;
use clap::ValueEnum;

use quasar_client::models::Disk;
use quasar_client::models::Host;
use quasar_client::models::Image;
use quasar_client::models::Network;
use quasar_client::models::Project;
use quasar_client::models::Router;
use quasar_client::models::Service;
use quasar_client::models::Subnet;
use quasar_client::models::Task;
use quasar_client::models::Tenant;
use quasar_client::models::Vm;

mod human;
mod json;
mod script;

pub mod ops;

use crate::context::Context;
use crate::globals::Globals;

/// Present a list of [`Context`]s to the user.
pub trait ContextList {
    /// Append a new context into the list being formatted.
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()>;

    /// Handle the now complete list of contexts and emit it to standard output.
    fn finish(&mut self) -> Result<()>;
}

/// List of available output formats.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatId {
    /// Optimise output for viewing by humans.
    #[default]
    Human,

    /// Output information as JSON documents.
    Json,

    /// Output tab-separated values for shell pipelines.
    Script,
}

/// Configure output formatting for `quasarctl`.
#[derive(Args, Debug)]
pub struct FormatOpts {
    /// Select the format to use for output.
    #[arg(
        long = "format",
        global = true,
        env = "QCTL_FORMAT",
        default_value_t,
        value_enum
    )]
    pub format: FormatId,
}

/// Present information to users in their preferred format.
pub struct Formatter {
    /// Runtime strategy to execute formatting operations with.
    strategy: Box<dyn FormatterStrategy>,
}

impl Formatter {
    /// Execute the specified formatting operation.
    pub fn format<O>(&self, globals: &Globals, op: O) -> O::Response
    where
        O: self::ops::FormatOp,
    {
        let op = op.into();
        let result = self.strategy.format(globals, op);
        O::Response::from(result)
    }
}

/// Interface to implement user output formatting.
pub trait FormatterStrategy {
    /// Execute the requested formatting operation.
    fn format(&self, globals: &Globals, op: self::ops::Ops) -> self::ops::Responses;
}

macro_rules! resource_list_trait {
    ($(#[$meta:meta])* $list:ident, $type:ty) => {
        $(#[$meta])*
        pub trait $list {
            /// Append a new entry into the list being formatted.
            fn append(&mut self, entry: &$type) -> Result<()>;

            /// Handle the now complete list of entries and emit it to standard output.
            fn finish(&mut self) -> Result<()>;
        }
    };
}

resource_list_trait!(
    /// Present a list of [`Disk`]s to the user.
    DiskList, Disk
);
resource_list_trait!(
    /// Present a list of [`Host`]s to the user.
    HostList, Host
);
resource_list_trait!(
    /// Present a list of [`Image`]s to the user.
    ImageList, Image
);
resource_list_trait!(
    /// Present a list of [`Network`]s to the user.
    NetworkList, Network
);
resource_list_trait!(
    /// Present a list of [`Project`]s to the user.
    ProjectList, Project
);
resource_list_trait!(
    /// Present a list of [`Router`]s to the user.
    RouterList, Router
);
resource_list_trait!(
    /// Present a list of [`Service`]s to the user.
    ServiceList, Service
);
resource_list_trait!(
    /// Present a list of [`Subnet`]s to the user.
    SubnetList, Subnet
);
resource_list_trait!(
    /// Present a list of [`Task`]s to the user.
    TaskList, Task
);
resource_list_trait!(
    /// Present a list of [`Tenant`]s to the user.
    TenantList, Tenant
);
resource_list_trait!(
    /// Present a list of [`Vm`]s to the user.
    VmList, Vm
);

/// Instantiate a formatter based on CLI configuration.
pub fn select(format: &FormatOpts) -> Formatter {
    let strategy: Box<dyn FormatterStrategy> = match format.format {
        FormatId::Human => Box::new(self::human::HumanFormatter),
        FormatId::Json => Box::new(self::json::JsonFormatter),
        FormatId::Script => Box::new(self::script::ScriptFormatter),
    };
    Formatter { strategy }
}
