//! Format `Vm` related objects.
use anyhow::Result;

use quasar_client::models::Vm;

use crate::utils::value_or_not_set;

/// Format a list of [`Vm`] objects into a table.
#[derive(Default)]
pub struct VmList {
    table: comfy_table::Table,
}

impl VmList {
    pub fn new() -> VmList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "FLAVOR", "STATE"]);
        VmList { table }
    }
}

impl crate::formatter::VmList for VmList {
    fn append(&mut self, entry: &Vm) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.flavor.clone(),
            entry.state.to_string(),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Vm`] for users to inspect.
pub fn show(vm: &Vm) {
    println!("VM ID: {}", vm.id);
    println!("Name: {}", vm.name);
    println!("Flavor: {}", vm.flavor);
    println!("State: {}", vm.state);
    println!("Source Image: {}", value_or_not_set(&vm.source_image_id));
    match vm.attached_disk_ids.is_empty() {
        true => println!("Attached Disks: None"),
        false => println!("Attached Disks: {}", vm.attached_disk_ids.join(", ")),
    }
}
