//! Format `Disk` related objects.
use anyhow::Result;

use quasar_client::models::Disk;

/// Format a list of [`Disk`] objects into a table.
#[derive(Default)]
pub struct DiskList {
    table: comfy_table::Table,
}

impl DiskList {
    pub fn new() -> DiskList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "FLAVOR", "CAPACITY (GB)", "STATE"]);
        DiskList { table }
    }
}

impl crate::formatter::DiskList for DiskList {
    fn append(&mut self, entry: &Disk) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.flavor.clone(),
            entry.capacity_gb.to_string(),
            entry.state.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Disk`] for users to inspect.
pub fn show(disk: &Disk) {
    println!("Disk ID: {}", disk.id);
    println!("Name: {}", disk.name);
    println!("Flavor: {}", disk.flavor);
    println!("Capacity (GB): {}", disk.capacity_gb);
    println!("State: {}", disk.state);
}
