//! Format output as tab-separated values for quick shell pipelines.
//!
//! Rows are emitted as entries are appended, without headers or alignment,
//! so output can be piped straight into `cut`, `awk` or `xargs`.
use anyhow::Result;

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

use super::ops::Ops;
use super::ops::Responses;
use super::FormatterStrategy;
use crate::context::Context;
use crate::globals::Globals;

/// Format output as tab-separated values for quick shell pipelines.
pub struct ScriptFormatter;

impl FormatterStrategy for ScriptFormatter {
    fn format(&self, _: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => {
                let tenant = context.scope.tenant.as_deref().unwrap_or("");
                let project = context.scope.project.as_deref().unwrap_or("");
                emit(format!(
                    "{}\t{}\t{}",
                    context.connection.url, tenant, project,
                ))
            }
            Ops::ContextList => Responses::ContextList(Box::new(ContextList)),
            Ops::Disk(disk) => emit(disk_row(&disk)),
            Ops::DiskList => Responses::DiskList(Box::new(DiskList)),
            Ops::Host(host) => emit(host_row(&host)),
            Ops::HostList => Responses::HostList(Box::new(HostList)),
            Ops::Image(image) => emit(image_row(&image)),
            Ops::ImageList => Responses::ImageList(Box::new(ImageList)),
            Ops::Network(network) => emit(network_row(&network)),
            Ops::NetworkList => Responses::NetworkList(Box::new(NetworkList)),
            // Scripts chaining commands only need the affected entity ID.
            Ops::Outcome(outcome) => emit(outcome.id),
            Ops::Project(project) => emit(project_row(&project)),
            Ops::ProjectList => Responses::ProjectList(Box::new(ProjectList)),
            Ops::Router(router) => emit(router_row(&router)),
            Ops::RouterList => Responses::RouterList(Box::new(RouterList)),
            Ops::Service(service) => emit(service_row(&service)),
            Ops::ServiceList => Responses::ServiceList(Box::new(ServiceList)),
            Ops::Subnet(subnet) => emit(subnet_row(&subnet)),
            Ops::SubnetList => Responses::SubnetList(Box::new(SubnetList)),
            Ops::Task(task) => emit(task_row(&task)),
            Ops::TaskList => Responses::TaskList(Box::new(TaskList)),
            Ops::Tenant(tenant) => emit(tenant_row(&tenant)),
            Ops::TenantList => Responses::TenantList(Box::new(TenantList)),
            Ops::Vm(vm) => emit(vm_row(&vm)),
            Ops::VmList => Responses::VmList(Box::new(VmList)),
        }
    }
}

fn emit(row: String) -> Responses {
    println!("{}", row);
    Responses::Success
}

fn context_row(name: &str, context: &Context) -> String {
    let tenant = context.scope.tenant.as_deref().unwrap_or("");
    let project = context.scope.project.as_deref().unwrap_or("");
    format!(
        "{}\t{}\t{}\t{}",
        name, context.connection.url, tenant, project,
    )
}

fn disk_row(disk: &Disk) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        disk.id, disk.name, disk.flavor, disk.capacity_gb, disk.state,
    )
}

fn host_row(host: &Host) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        host.id,
        host.address,
        host.state,
        host.usage_tags.join(","),
    )
}

fn image_row(image: &Image) -> String {
    let size = image
        .size_bytes
        .map(|size| size.to_string())
        .unwrap_or_default();
    format!("{}\t{}\t{}\t{}", image.id, image.name, image.state, size)
}

fn network_row(network: &Network) -> String {
    format!("{}\t{}\t{}", network.id, network.name, network.state)
}

fn project_row(project: &Project) -> String {
    format!("{}\t{}\t{}", project.id, project.name, project.tenant_id)
}

fn router_row(router: &Router) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        router.id, router.name, router.private_ip_cidr, router.state,
    )
}

fn service_row(service: &Service) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        service.id, service.name, service.kind, service.state, service.worker_count,
    )
}

fn subnet_row(subnet: &Subnet) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        subnet.id, subnet.name, subnet.cidr, subnet.state,
    )
}

fn task_row(task: &Task) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        task.id, task.operation, task.entity.id, task.state,
    )
}

fn tenant_row(tenant: &Tenant) -> String {
    format!("{}\t{}", tenant.id, tenant.name)
}

fn vm_row(vm: &Vm) -> String {
    format!("{}\t{}\t{}\t{}", vm.id, vm.name, vm.flavor, vm.state)
}

macro_rules! script_list {
    ($list:ident, $type:ty, $row:expr) => {
        struct $list;
        impl crate::formatter::$list for $list {
            fn append(&mut self, entry: &$type) -> Result<()> {
                let row: fn(&$type) -> String = $row;
                println!("{}", row(entry));
                Ok(())
            }

            fn finish(&mut self) -> Result<()> {
                Ok(())
            }
        }
    };
}

script_list!(DiskList, Disk, disk_row);
script_list!(HostList, Host, host_row);
script_list!(ImageList, Image, image_row);
script_list!(NetworkList, Network, network_row);
script_list!(ProjectList, Project, project_row);
script_list!(RouterList, Router, router_row);
script_list!(ServiceList, Service, service_row);
script_list!(SubnetList, Subnet, subnet_row);
script_list!(TaskList, Task, task_row);
script_list!(TenantList, Tenant, tenant_row);
script_list!(VmList, Vm, vm_row);

/// Emit one context per line, active context marked with a leading `*`.
struct ContextList;

impl crate::formatter::ContextList for ContextList {
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()> {
        let marker = if active { "*" } else { "-" };
        println!("{}\t{}", marker, context_row(name, context));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
