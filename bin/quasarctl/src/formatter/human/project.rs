//! Format `Project` related objects.
use anyhow::Result;

use quasar_client::models::Project;

/// Format a list of [`Project`] objects into a table.
#[derive(Default)]
pub struct ProjectList {
    table: comfy_table::Table,
}

impl ProjectList {
    pub fn new() -> ProjectList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "TENANT"]);
        ProjectList { table }
    }
}

impl crate::formatter::ProjectList for ProjectList {
    fn append(&mut self, entry: &Project) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.tenant_id.clone(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Project`] for users to inspect.
pub fn show(project: &Project) {
    println!("Project ID: {}", project.id);
    println!("Name: {}", project.name);
    println!("Tenant: {}", project.tenant_id);
}
