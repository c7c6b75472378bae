//! Data models for objects exchanged with the Quasar Control Plane API.
mod resource;
mod task;

pub use self::resource::Disk;
pub use self::resource::DiskCreate;
pub use self::resource::DiskState;
pub use self::resource::Host;
pub use self::resource::HostCreate;
pub use self::resource::Image;
pub use self::resource::Network;
pub use self::resource::NetworkCreate;
pub use self::resource::Project;
pub use self::resource::ProjectCreate;
pub use self::resource::ResourceList;
pub use self::resource::ResourceState;
pub use self::resource::Router;
pub use self::resource::RouterCreate;
pub use self::resource::Service;
pub use self::resource::ServiceCreate;
pub use self::resource::ServiceResize;
pub use self::resource::ServiceState;
pub use self::resource::Subnet;
pub use self::resource::SubnetCreate;
pub use self::resource::Tenant;
pub use self::resource::TenantCreate;
pub use self::resource::Vm;
pub use self::resource::VmCreate;
pub use self::resource::VmDiskOp;
pub use self::resource::VmState;
pub use self::task::ApiError;
pub use self::task::EntityRef;
pub use self::task::Step;
pub use self::task::Task;
pub use self::task::TaskFilter;
pub use self::task::TaskState;
