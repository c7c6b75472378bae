//! Format `Task` related objects.
use anyhow::Result;

use quasar_client::models::Task;

use crate::utils::millis_or_not_set;
use crate::wait::bar_cursor;
use crate::wait::find_started_step;
use crate::wait::render_bar;
use crate::wait::sort_steps_by_sequence;

/// Format a list of [`Task`] objects into a table.
#[derive(Default)]
pub struct TaskList {
    table: comfy_table::Table,
}

impl TaskList {
    pub fn new() -> TaskList {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["ID", "OPERATION", "ENTITY", "STATE", "STARTED"]);
        TaskList { table }
    }
}

impl crate::formatter::TaskList for TaskList {
    fn append(&mut self, entry: &Task) -> Result<()> {
        let entity = format!("{} '{}'", entry.entity.kind, entry.entity.id);
        self.table.add_row(vec![
            entry.id.clone(),
            entry.operation.clone(),
            entity,
            entry.state.to_string(),
            millis_or_not_set(entry.started_time),
        ]);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        println!("{}", self.table);
        Ok(())
    }
}

/// Format a [`Task`] for users to inspect, with its steps in sequence order.
pub fn show(task: &Task) {
    println!("Task ID: {}", task.id);
    println!("Operation: {}", task.operation);
    println!("Entity: {} '{}'", task.entity.kind, task.entity.id);
    println!("State: {}", task.state);
    println!("Progress: [{}]", render_bar(task.steps.len(), bar_cursor(task)));
    if let Some(step) = find_started_step(&task.steps) {
        println!("Current Step: {}", step.operation);
    }
    println!("Started: {}", millis_or_not_set(task.started_time));
    println!("Ended: {}", millis_or_not_set(task.end_time));
    if task.steps.is_empty() {
        return;
    }

    let mut steps = task.steps.clone();
    sort_steps_by_sequence(&mut steps);
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["SEQ", "OPERATION", "STATE", "STARTED", "ENDED", "ERRORS"]);
    for step in &steps {
        let errors: Vec<String> = step.errors.iter().map(|error| error.to_string()).collect();
        table.add_row(vec![
            step.sequence.to_string(),
            step.operation.clone(),
            step.state.to_string(),
            millis_or_not_set(step.started_time),
            millis_or_not_set(step.end_time),
            errors.join("; "),
        ]);
    }
    println!();
    println!("{}", table);
}
