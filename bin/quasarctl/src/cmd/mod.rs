//! CLI interface for the Quasar Control Plane client.
use clap::Parser;
use clap::Subcommand;

pub mod context;
pub mod disk;
pub mod host;
pub mod image;
pub mod network;
pub mod project;
pub mod router;
pub mod service;
pub mod subnet;
pub mod task;
pub mod tenant;
pub mod vm;

use crate::context::ContextOpt;
use crate::formatter::FormatOpts;
use crate::logging::LogOpt;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI definition for the quasarctl binary.
#[derive(Debug, Parser)]
#[command(about)]
#[command(propagate_version = true)]
#[command(version = VERSION)]
pub struct Cli {
    /// Quasar server context selection and override arguments.
    #[command(flatten)]
    pub context: ContextOpt,

    /// Select the `quasarctl` command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Configure how `quasarctl` output is formatted.
    #[command(flatten)]
    pub format: FormatOpts,

    /// Configure `quasarctl` logging.
    #[command(flatten)]
    pub log: LogOpt,
}

/// Select the `quasarctl` command to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration of Quasar servers to access.
    Context(context::ContextCli),

    /// Inspect or manipulate persistent disks.
    Disk(disk::DiskCli),

    /// Inspect or manage physical hosts.
    Host(host::HostCli),

    /// Inspect or manipulate machine images.
    Image(image::ImageCli),

    /// Inspect or manipulate virtual networks.
    Network(network::NetworkCli),

    /// Inspect or manipulate projects within a tenant.
    Project(project::ProjectCli),

    /// Inspect or manipulate logical routers.
    Router(router::RouterCli),

    /// Inspect or manipulate provisioned services.
    #[command(alias = "svc")]
    Service(service::ServiceCli),

    /// Inspect or manipulate subnets.
    Subnet(subnet::SubnetCli),

    /// Inspect tasks tracking asynchronous operations.
    Task(task::TaskCli),

    /// Inspect or manipulate tenants.
    Tenant(tenant::TenantCli),

    /// Inspect or manipulate virtual machines.
    Vm(vm::VmCli),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn clap_integrity_check() {
        let command = crate::Cli::command();
        command.debug_assert();
    }
}
