//! Format `Subnet` related objects.
use anyhow::Result;

use quasar_client::models::Subnet;

/// Format a list of [`Subnet`] objects into a table.
#[derive(Default)]
pub struct SubnetList {
    table: comfy_table::Table,
}

impl SubnetList {
    pub fn new() -> SubnetList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "CIDR", "STATE"]);
        SubnetList { table }
    }
}

impl crate::formatter::SubnetList for SubnetList {
    fn append(&mut self, entry: &Subnet) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.cidr.clone(),
            entry.state.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Subnet`] for users to inspect.
pub fn show(subnet: &Subnet) {
    println!("Subnet ID: {}", subnet.id);
    println!("Name: {}", subnet.name);
    println!("CIDR: {}", subnet.cidr);
    println!("State: {}", subnet.state);
}
