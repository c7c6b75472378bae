//! Format `Router` related objects.
use anyhow::Result;

use quasar_client::models::Router;

/// Format a list of [`Router`] objects into a table.
#[derive(Default)]
pub struct RouterList {
    table: comfy_table::Table,
}

impl RouterList {
    pub fn new() -> RouterList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "PRIVATE IP CIDR", "STATE"]);
        RouterList { table }
    }
}

impl crate::formatter::RouterList for RouterList {
    fn append(&mut self, entry: &Router) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.private_ip_cidr.clone(),
            entry.state.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Router`] for users to inspect.
pub fn show(router: &Router) {
    println!("Router ID: {}", router.id);
    println!("Name: {}", router.name);
    println!("Private IP CIDR: {}", router.private_ip_cidr);
    println!("State: {}", router.state);
}
