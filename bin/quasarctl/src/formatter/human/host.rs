//! Format `Host` related objects.
use anyhow::Result;

use quasar_client::models::Host;

/// Format a list of [`Host`] objects into a table.
#[derive(Default)]
pub struct HostList {
    table: comfy_table::Table,
}

impl HostList {
    pub fn new() -> HostList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "ADDRESS", "STATE", "USAGE TAGS"]);
        HostList { table }
    }
}

impl crate::formatter::HostList for HostList {
    fn append(&mut self, entry: &Host) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.address.clone(),
            entry.state.to_string(),
            entry.usage_tags.join(", "),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Host`] for users to inspect.
pub fn show(host: &Host) {
    println!("Host ID: {}", host.id);
    println!("Address: {}", host.address);
    println!("State: {}", host.state);
    match host.usage_tags.is_empty() {
        true => println!("Usage Tags: None"),
        false => println!("Usage Tags: {}", host.usage_tags.join(", ")),
    }
}
