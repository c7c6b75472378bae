//! Format `Network` related objects.
use anyhow::Result;

use quasar_client::models::Network;

use crate::utils::value_or_not_set;

/// Format a list of [`Network`] objects into a table.
#[derive(Default)]
pub struct NetworkList {
    table: comfy_table::Table,
}

impl NetworkList {
    pub fn new() -> NetworkList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "STATE"]);
        NetworkList { table }
    }
}

impl crate::formatter::NetworkList for NetworkList {
    fn append(&mut self, entry: &Network) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.state.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Network`] for users to inspect.
pub fn show(network: &Network) {
    println!("Network ID: {}", network.id);
    println!("Name: {}", network.name);
    println!("State: {}", network.state);
    println!("Description: {}", value_or_not_set(&network.description));
}
