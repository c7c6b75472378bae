//! Report the outcome of task-backed mutations.
use crate::formatter::ops::EntityOutcome;

/// Confirm what happened to the affected entity.
pub fn show(outcome: &EntityOutcome) {
    println!("{} '{}' {}.", outcome.kind, outcome.id, outcome.action);
}
