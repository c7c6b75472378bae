//! Format `Tenant` related objects.
use anyhow::Result;

use quasar_client::models::Tenant;

/// Format a list of [`Tenant`] objects into a table.
#[derive(Default)]
pub struct TenantList {
    table: comfy_table::Table,
}

impl TenantList {
    pub fn new() -> TenantList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME"]);
        TenantList { table }
    }
}

impl crate::formatter::TenantList for TenantList {
    fn append(&mut self, entry: &Tenant) -> Result<()> {
        self.table.add_row(vec![entry.id.clone(), entry.name.clone()]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Tenant`] for users to inspect.
pub fn show(tenant: &Tenant) {
    println!("Tenant ID: {}", tenant.id);
    println!("Name: {}", tenant.name);
}
