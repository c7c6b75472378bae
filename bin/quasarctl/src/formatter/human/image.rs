//! Format `Image` related objects.
use anyhow::Result;

use quasar_client::models::Image;

use crate::utils::value_or_not_set;

/// Format a list of [`Image`] objects into a table.
#[derive(Default)]
pub struct ImageList {
    table: comfy_table::Table,
}

impl ImageList {
    pub fn new() -> ImageList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "NAME", "STATE", "SIZE (BYTES)"]);
        ImageList { table }
    }
}

impl crate::formatter::ImageList for ImageList {
    fn append(&mut self, entry: &Image) -> Result<()> {
        self.table.add_row(vec![
            entry.id.clone(),
            entry.name.clone(),
            entry.state.to_string(),
            value_or_not_set(&entry.size_bytes),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format an [`Image`] for users to inspect.
pub fn show(image: &Image) {
    println!("Image ID: {}", image.id);
    println!("Name: {}", image.name);
    println!("State: {}", image.state);
    println!("Size (bytes): {}", value_or_not_set(&image.size_bytes));
}
