//! Format output for easy consumption by people interacting with `quasarctl`.
use super::ops::Ops;
use super::ops::Responses;
use super::FormatterStrategy;
use crate::globals::Globals;

mod context;
mod disk;
mod host;
mod image;
mod network;
mod outcome;
mod project;
mod router;
mod service;
mod subnet;
mod task;
mod tenant;
mod vm;

/// Format output for easy consumption by people interacting with `quasarctl`.
pub struct HumanFormatter;

impl FormatterStrategy for HumanFormatter {
    fn format(&self, _: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => {
                self::context::show(&context);
                Responses::Success
            }
            Ops::ContextList => Responses::ContextList(Box::new(self::context::ContextList::new())),
            Ops::Disk(disk) => {
                self::disk::show(&disk);
                Responses::Success
            }
            Ops::DiskList => Responses::DiskList(Box::new(self::disk::DiskList::new())),
            Ops::Host(host) => {
                self::host::show(&host);
                Responses::Success
            }
            Ops::HostList => Responses::HostList(Box::new(self::host::HostList::new())),
            Ops::Image(image) => {
                self::image::show(&image);
                Responses::Success
            }
            Ops::ImageList => Responses::ImageList(Box::new(self::image::ImageList::new())),
            Ops::Network(network) => {
                self::network::show(&network);
                Responses::Success
            }
            Ops::NetworkList => Responses::NetworkList(Box::new(self::network::NetworkList::new())),
            Ops::Outcome(outcome) => {
                self::outcome::show(&outcome);
                Responses::Success
            }
            Ops::Project(project) => {
                self::project::show(&project);
                Responses::Success
            }
            Ops::ProjectList => Responses::ProjectList(Box::new(self::project::ProjectList::new())),
            Ops::Router(router) => {
                self::router::show(&router);
                Responses::Success
            }
            Ops::RouterList => Responses::RouterList(Box::new(self::router::RouterList::new())),
            Ops::Service(service) => {
                self::service::show(&service);
                Responses::Success
            }
            Ops::ServiceList => Responses::ServiceList(Box::new(self::service::ServiceList::new())),
            Ops::Subnet(subnet) => {
                self::subnet::show(&subnet);
                Responses::Success
            }
            Ops::SubnetList => Responses::SubnetList(Box::new(self::subnet::SubnetList::new())),
            Ops::Task(task) => {
                self::task::show(&task);
                Responses::Success
            }
            Ops::TaskList => Responses::TaskList(Box::new(self::task::TaskList::new())),
            Ops::Tenant(tenant) => {
                self::tenant::show(&tenant);
                Responses::Success
            }
            Ops::TenantList => Responses::TenantList(Box::new(self::tenant::TenantList::new())),
            Ops::Vm(vm) => {
                self::vm::show(&vm);
                Responses::Success
            }
            Ops::VmList => Responses::VmList(Box::new(self::vm::VmList::new())),
        }
    }
}
