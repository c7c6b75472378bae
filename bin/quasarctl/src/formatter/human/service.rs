//! Format `Service` related objects.
use anyhow::Result;

use quasar_client::models::Service;

/// Format a list of [`Service`] objects into a table.
#[derive(Default)]
pub struct ServiceList {
    table: comfy_table::Table,
}

impl ServiceList {
    pub fn new() -> ServiceList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "KIND", "STATE", "WORKERS"]);
        ServiceList { table }
    }
}

impl crate::formatter::ServiceList for ServiceList {
    fn append(&mut self, entry: &Service) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.kind.clone(),
            entry.state.to_string(),
            entry.worker_count.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Service`] for users to inspect.
pub fn show(service: &Service) {
    println!("Service ID: {}", service.id);
    println!("Name: {}", service.name);
    println!("Kind: {}", service.kind);
    println!("State: {}", service.state);
    println!("Worker Count: {}", service.worker_count);
}
