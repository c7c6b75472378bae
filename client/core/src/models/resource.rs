//! Resource models exposed by the Quasar Control Plane API.
use serde::Deserialize;
use serde::Serialize;

/// Generic container for list responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResourceList<T> {
    /// Items returned by the list operation.
    pub items: Vec<T>,
}

/// States shared by passive resources (images, networks, subnets, routers, hosts).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    Creating,
    Ready,
    Deleting,
    Error,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ResourceState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResourceState::Creating => write!(f, "CREATING"),
            ResourceState::Ready => write!(f, "READY"),
            ResourceState::Deleting => write!(f, "DELETING"),
            ResourceState::Error => write!(f, "ERROR"),
            ResourceState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// An isolation boundary grouping projects and their resources.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

/// Request to create a new tenant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantCreate {
    pub name: String,
}

/// A grouping of resources within a tenant.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tenant_id: String,
}

/// Request to create a new project within a tenant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub name: String,
}

/// A virtual machine managed by the control plane.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vm {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub state: VmState,
    #[serde(default)]
    pub source_image_id: Option<String>,
    #[serde(default)]
    pub attached_disk_ids: Vec<String>,
}

/// States a virtual machine moves through.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VmState {
    Creating,
    Stopped,
    Started,
    Deleting,
    Error,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for VmState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VmState::Creating => write!(f, "CREATING"),
            VmState::Stopped => write!(f, "STOPPED"),
            VmState::Started => write!(f, "STARTED"),
            VmState::Deleting => write!(f, "DELETING"),
            VmState::Error => write!(f, "ERROR"),
            VmState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Request to create a new virtual machine within a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmCreate {
    pub name: String,
    pub flavor: String,
    pub source_image_id: String,
    #[serde(default)]
    pub disk_ids: Vec<String>,
}

/// Request to attach or detach a disk to/from a virtual machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmDiskOp {
    pub disk_id: String,
}

/// A persistent disk managed by the control plane.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    pub id: String,
    pub name: String,
    pub flavor: String,
    pub capacity_gb: u64,
    pub state: DiskState,
}

/// States a disk moves through.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiskState {
    Creating,
    Detached,
    Attached,
    Deleting,
    Error,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for DiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiskState::Creating => write!(f, "CREATING"),
            DiskState::Detached => write!(f, "DETACHED"),
            DiskState::Attached => write!(f, "ATTACHED"),
            DiskState::Deleting => write!(f, "DELETING"),
            DiskState::Error => write!(f, "ERROR"),
            DiskState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Request to create a new disk within a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskCreate {
    pub name: String,
    pub flavor: String,
    pub capacity_gb: u64,
}

/// A machine image virtual machines can boot from.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub name: String,
    pub state: ResourceState,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// A virtual network resources can attach to.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    pub state: ResourceState,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to create a new virtual network.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An IP subnet within a virtual network.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub state: ResourceState,
}

/// Request to create a new subnet within a network.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetCreate {
    pub name: String,
    pub cidr: String,
}

/// A logical router within a virtual network.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Router {
    pub id: String,
    pub name: String,
    pub private_ip_cidr: String,
    pub state: ResourceState,
}

/// Request to create a new router within a network.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterCreate {
    pub name: String,
    pub private_ip_cidr: String,
}

/// A physical host registered with the control plane.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    pub address: String,
    pub state: ResourceState,
    #[serde(default)]
    pub usage_tags: Vec<String>,
}

/// Request to register a host with the control plane.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCreate {
    pub address: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub usage_tags: Vec<String>,
}

/// A provisioned service (such as a container orchestration cluster).
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub state: ServiceState,
    pub worker_count: u32,
}

/// States a service moves through.
///
/// Creation and resize operations only start a background expansion: the
/// service lingers in `Creating`/`Resizing` until the expansion completes and
/// the service reaches `Ready` (or fails with `Error`).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    Creating,
    Ready,
    Resizing,
    Deleting,
    Error,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ServiceState::Creating => write!(f, "CREATING"),
            ServiceState::Ready => write!(f, "READY"),
            ServiceState::Resizing => write!(f, "RESIZING"),
            ServiceState::Deleting => write!(f, "DELETING"),
            ServiceState::Error => write!(f, "ERROR"),
            ServiceState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Request to create a new service within a project.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCreate {
    pub name: String,
    pub kind: String,
    pub worker_count: u32,
}

/// Request to resize a service to a new worker count.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResize {
    pub worker_count: u32,
}
