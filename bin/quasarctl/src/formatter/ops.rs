//! Operations offered by a `quasarctl` formatter interface.
use anyhow::Result;
use serde::Serialize;

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

use crate::context::Context;

use self::sealed::SealFormatOp;

/// Internal trait to support ergonomic formatting operations.
pub trait FormatOp: Into<Ops> + SealFormatOp {
    /// Type returned by the matching format operation.
    type Response: From<Responses>;
}

/// Outcome of an operation that mutated an entity through a task.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityOutcome {
    /// Past-tense description of what happened (for example `created`).
    pub action: &'static str,

    /// Identifier of the affected entity.
    pub id: String,

    /// Kind of the affected entity, in display form (for example `Tenant`).
    pub kind: &'static str,
}

/// All known operations that must be implemented by formatters.
pub enum Ops {
    /// Format information about a [`Context`].
    Context(Context),

    /// Request a formatter to emit [`Context`] lists.
    ContextList,

    /// Format information about a [`Disk`].
    Disk(Disk),

    /// Request a formatter to emit [`Disk`] lists.
    DiskList,

    /// Format information about a [`Host`].
    Host(Host),

    /// Request a formatter to emit [`Host`] lists.
    HostList,

    /// Format information about an [`Image`].
    Image(Image),

    /// Request a formatter to emit [`Image`] lists.
    ImageList,

    /// Format information about a [`Network`].
    Network(Network),

    /// Request a formatter to emit [`Network`] lists.
    NetworkList,

    /// Report the outcome of a task-backed mutation.
    Outcome(EntityOutcome),

    /// Format information about a [`Project`].
    Project(Project),

    /// Request a formatter to emit [`Project`] lists.
    ProjectList,

    /// Format information about a [`Router`].
    Router(Router),

    /// Request a formatter to emit [`Router`] lists.
    RouterList,

    /// Format information about a [`Service`].
    Service(Service),

    /// Request a formatter to emit [`Service`] lists.
    ServiceList,

    /// Format information about a [`Subnet`].
    Subnet(Subnet),

    /// Request a formatter to emit [`Subnet`] lists.
    SubnetList,

    /// Format information about a [`Task`].
    Task(Task),

    /// Request a formatter to emit [`Task`] lists.
    TaskList,

    /// Format information about a [`Tenant`].
    Tenant(Tenant),

    /// Request a formatter to emit [`Tenant`] lists.
    TenantList,

    /// Format information about a [`Vm`].
    Vm(Vm),

    /// Request a formatter to emit [`Vm`] lists.
    VmList,
}

/// All known responses from format operations.
pub enum Responses {
    /// Return an object to format a list of [`Context`]s.
    ContextList(Box<dyn super::ContextList>),

    /// Return an object to format a list of [`Disk`]s.
    DiskList(Box<dyn super::DiskList>),

    /// Return an object to format a list of [`Host`]s.
    HostList(Box<dyn super::HostList>),

    /// Return an object to format a list of [`Image`]s.
    ImageList(Box<dyn super::ImageList>),

    /// Return an object to format a list of [`Network`]s.
    NetworkList(Box<dyn super::NetworkList>),

    /// Return an object to format a list of [`Project`]s.
    ProjectList(Box<dyn super::ProjectList>),

    /// Return an object to format a list of [`Router`]s.
    RouterList(Box<dyn super::RouterList>),

    /// Return an object to format a list of [`Service`]s.
    ServiceList(Box<dyn super::ServiceList>),

    /// Return an object to format a list of [`Subnet`]s.
    SubnetList(Box<dyn super::SubnetList>),

    /// Return an object to format a list of [`Task`]s.
    TaskList(Box<dyn super::TaskList>),

    /// Return an object to format a list of [`Tenant`]s.
    TenantList(Box<dyn super::TenantList>),

    /// Return an object to format a list of [`Vm`]s.
    VmList(Box<dyn super::VmList>),

    /// The formatting operation failed.
    Err(anyhow::Error),

    /// The formatting operation was successful.
    Success,
}

impl Responses {
    /// Wrap the result of a formatting operation that emits no object.
    pub fn done(result: Result<()>) -> Responses {
        match result {
            Ok(()) => Responses::Success,
            Err(error) => Responses::Err(error),
        }
    }
}

impl From<Responses> for Result<()> {
    fn from(value: Responses) -> Self {
        match value {
            Responses::Success => Ok(()),
            Responses::Err(error) => Err(error),
            _ => panic!("unexpected response type for formatter operation"),
        }
    }
}

/// Private module to seal implementation details.
mod sealed {
    /// Super-trait to seal the [`FormatOp`](super::FormatOp) trait.
    pub trait SealFormatOp {}
}

// --- Implement FormatOp and other traits on types for transparent operations --- //
macro_rules! show_op {
    ($type:ty => $variant:ident) => {
        impl SealFormatOp for $type {}
        impl From<$type> for Ops {
            fn from(value: $type) -> Self {
                Self::$variant(value)
            }
        }
        impl FormatOp for $type {
            type Response = Result<()>;
        }
    };
}

show_op!(Context => Context);
show_op!(Disk => Disk);
show_op!(EntityOutcome => Outcome);
show_op!(Host => Host);
show_op!(Image => Image);
show_op!(Network => Network);
show_op!(Project => Project);
show_op!(Router => Router);
show_op!(Service => Service);
show_op!(Subnet => Subnet);
show_op!(Task => Task);
show_op!(Tenant => Tenant);
show_op!(Vm => Vm);

macro_rules! list_op {
    ($(#[$meta:meta])* $op:ident => $variant:ident as $list:ident) => {
        $(#[$meta])*
        pub struct $op;
        impl SealFormatOp for $op {}
        impl From<$op> for Ops {
            fn from(_: $op) -> Self {
                Self::$variant
            }
        }
        impl FormatOp for $op {
            type Response = Box<dyn super::$list>;
        }
        impl From<Responses> for Box<dyn super::$list> {
            fn from(value: Responses) -> Self {
                match value {
                    Responses::$variant(value) => value,
                    _ => panic!("unexpected response type for formatter operation"),
                }
            }
        }
    };
}

list_op!(
    /// Request a formatter to emit [`Context`] lists.
    ContextListOp => ContextList as ContextList
);
list_op!(
    /// Request a formatter to emit [`Disk`] lists.
    DiskListOp => DiskList as DiskList
);
list_op!(
    /// Request a formatter to emit [`Host`] lists.
    HostListOp => HostList as HostList
);
list_op!(
    /// Request a formatter to emit [`Image`] lists.
    ImageListOp => ImageList as ImageList
);
list_op!(
    /// Request a formatter to emit [`Network`] lists.
    NetworkListOp => NetworkList as NetworkList
);
list_op!(
    /// Request a formatter to emit [`Project`] lists.
    ProjectListOp => ProjectList as ProjectList
);
list_op!(
    /// Request a formatter to emit [`Router`] lists.
    RouterListOp => RouterList as RouterList
);
list_op!(
    /// Request a formatter to emit [`Service`] lists.
    ServiceListOp => ServiceList as ServiceList
);
list_op!(
    /// Request a formatter to emit [`Subnet`] lists.
    SubnetListOp => SubnetList as SubnetList
);
list_op!(
    /// Request a formatter to emit [`Task`] lists.
    TaskListOp => TaskList as TaskList
);
list_op!(
    /// Request a formatter to emit [`Tenant`] lists.
    TenantListOp => TenantList as TenantList
);
list_op!(
    /// Request a formatter to emit [`Vm`] lists.
    VmListOp => VmList as VmList
);
