//! Format output as JSON documents for consumption by automated tools.
use anyhow::Context as _;
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

use super::ops::Ops;
use super::ops::Responses;
use super::FormatterStrategy;
use crate::context::Context;
use crate::globals::Globals;

/// Format output as JSON documents for consumption by automated tools.
pub struct JsonFormatter;

impl FormatterStrategy for JsonFormatter {
    fn format(&self, _: &Globals, op: Ops) -> Responses {
        match op {
            Ops::Context(context) => Responses::done(print_json(&context)),
            Ops::ContextList => Responses::ContextList(Box::<ContextList>::default()),
            Ops::Disk(disk) => Responses::done(print_json(&disk)),
            Ops::DiskList => Responses::DiskList(Box::<JsonList<Disk>>::default()),
            Ops::Host(host) => Responses::done(print_json(&host)),
            Ops::HostList => Responses::HostList(Box::<JsonList<Host>>::default()),
            Ops::Image(image) => Responses::done(print_json(&image)),
            Ops::ImageList => Responses::ImageList(Box::<JsonList<Image>>::default()),
            Ops::Network(network) => Responses::done(print_json(&network)),
            Ops::NetworkList => Responses::NetworkList(Box::<JsonList<Network>>::default()),
            Ops::Outcome(outcome) => Responses::done(print_json(&outcome)),
            Ops::Project(project) => Responses::done(print_json(&project)),
            Ops::ProjectList => Responses::ProjectList(Box::<JsonList<Project>>::default()),
            Ops::Router(router) => Responses::done(print_json(&router)),
            Ops::RouterList => Responses::RouterList(Box::<JsonList<Router>>::default()),
            Ops::Service(service) => Responses::done(print_json(&service)),
            Ops::ServiceList => Responses::ServiceList(Box::<JsonList<Service>>::default()),
            Ops::Subnet(subnet) => Responses::done(print_json(&subnet)),
            Ops::SubnetList => Responses::SubnetList(Box::<JsonList<Subnet>>::default()),
            Ops::Task(task) => Responses::done(print_json(&task)),
            Ops::TaskList => Responses::TaskList(Box::<JsonList<Task>>::default()),
            Ops::Tenant(tenant) => Responses::done(print_json(&tenant)),
            Ops::TenantList => Responses::TenantList(Box::<JsonList<Tenant>>::default()),
            Ops::Vm(vm) => Responses::done(print_json(&vm)),
            Ops::VmList => Responses::VmList(Box::<JsonList<Vm>>::default()),
        }
    }
}

/// Emit an object to standard output as a single JSON document.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let encoded = serde_json::to_string(value).context("unable to JSON encode output")?;
    println!("{}", encoded);
    Ok(())
}

/// Collect list entries and emit them as one JSON array.
struct JsonList<T> {
    items: Vec<T>,
}

impl<T> Default for JsonList<T> {
    fn default() -> Self {
        JsonList { items: Vec::new() }
    }
}

macro_rules! json_list {
    ($list:ident, $type:ty) => {
        impl crate::formatter::$list for JsonList<$type> {
            fn append(&mut self, entry: &$type) -> Result<()> {
                self.items.push(entry.clone());
                Ok(())
            }

            fn finish(&mut self) -> Result<()> {
                print_json(&self.items)
            }
        }
    };
}

json_list!(DiskList, Disk);
json_list!(HostList, Host);
json_list!(ImageList, Image);
json_list!(NetworkList, Network);
json_list!(ProjectList, Project);
json_list!(RouterList, Router);
json_list!(ServiceList, Service);
json_list!(SubnetList, Subnet);
json_list!(TaskList, Task);
json_list!(TenantList, Tenant);
json_list!(VmList, Vm);

/// Entry in a JSON encoded context list.
#[derive(Serialize)]
struct ContextEntry {
    active: bool,
    name: String,
    #[serde(flatten)]
    context: Context,
}

/// Collect contexts and emit them as one JSON array.
#[derive(Default)]
struct ContextList {
    items: Vec<ContextEntry>,
}

impl crate::formatter::ContextList for ContextList {
    fn append(&mut self, name: &str, context: &Context, active: bool) -> Result<()> {
        self.items.push(ContextEntry {
            active,
            name: name.to_string(),
            context: context.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        print_json(&self.items)
    }
}
