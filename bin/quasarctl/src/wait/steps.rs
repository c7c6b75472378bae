//! Helpers to inspect task steps and render them as a progress bar.
use quasar_client::models::Step;
use quasar_client::models::Task;
use quasar_client::models::TaskState;

/// Find the step currently in the STARTED state, if any.
///
/// Steps are scanned in stored order and the first match wins, so a task
/// erroneously reporting more than one started step still renders sensibly.
pub fn find_started_step(steps: &[Step]) -> Option<&Step> {
    steps.iter().find(|step| step.state == TaskState::Started)
}

/// Sort steps in place by their sequence number.
pub fn sort_steps_by_sequence(steps: &mut [Step]) {
    steps.sort_by_key(|step| step.sequence);
}

/// Render a progress bar with `cursor` filled slots.
///
/// The bar is one slot wider than the number of steps so a task that completed
/// all its steps but is not yet terminal still shows visible headroom.
pub fn render_bar(step_count: usize, cursor: usize) -> String {
    let width = step_count + 1;
    let cursor = cursor.min(width);
    let mut bar = "=".repeat(cursor);
    bar.push_str(&" ".repeat(width - cursor));
    bar
}

/// Number of filled slots to render for the given task snapshot.
pub fn bar_cursor(task: &Task) -> usize {
    if task.state == TaskState::Completed {
        return task.steps.len() + 1;
    }
    match find_started_step(&task.steps) {
        Some(step) => usize::try_from(step.sequence)
            .unwrap_or(usize::MAX)
            .saturating_add(1),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use quasar_client::models::Step;
    use quasar_client::models::Task;
    use quasar_client::models::TaskState;

    use super::bar_cursor;
    use super::find_started_step;
    use super::render_bar;
    use super::sort_steps_by_sequence;

    fn step(sequence: u64, state: TaskState) -> Step {
        Step {
            sequence,
            operation: format!("STEP_{}", sequence),
            state,
            started_time: 0,
            end_time: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn task(state: TaskState, steps: Vec<Step>) -> Task {
        Task {
            id: "task-1".to_string(),
            state,
            operation: "CREATE_VM".to_string(),
            entity: quasar_client::models::EntityRef {
                id: "e-1".to_string(),
                kind: "vm".to_string(),
            },
            steps,
            started_time: 0,
            end_time: 0,
        }
    }

    #[test]
    fn bar_one_of_three() {
        assert_eq!(render_bar(3, 1), "=   ");
    }

    #[test]
    fn bar_full() {
        assert_eq!(render_bar(3, 4), "====");
    }

    #[test]
    fn bar_empty() {
        assert_eq!(render_bar(3, 0), "    ");
    }

    #[test]
    fn bar_no_steps() {
        assert_eq!(render_bar(0, 0), " ");
        assert_eq!(render_bar(0, 1), "=");
    }

    #[test]
    fn bar_cursor_clamped_to_width() {
        assert_eq!(render_bar(2, 9), "===");
    }

    #[test]
    fn cursor_for_completed_task() {
        let task = task(
            TaskState::Completed,
            vec![
                step(0, TaskState::Completed),
                step(1, TaskState::Completed),
                step(2, TaskState::Completed),
            ],
        );
        assert_eq!(bar_cursor(&task), 4);
    }

    #[test]
    fn cursor_follows_started_step() {
        let task = task(
            TaskState::Started,
            vec![
                step(0, TaskState::Completed),
                step(1, TaskState::Started),
                step(2, TaskState::Queued),
            ],
        );
        assert_eq!(bar_cursor(&task), 2);
    }

    #[test]
    fn cursor_without_started_step() {
        let task = task(
            TaskState::Queued,
            vec![step(0, TaskState::Queued), step(1, TaskState::Queued)],
        );
        assert_eq!(bar_cursor(&task), 0);
    }

    #[test]
    fn cursor_saturates_on_oversized_sequence() {
        let task = task(TaskState::Started, vec![step(u64::MAX, TaskState::Started)]);
        assert_eq!(bar_cursor(&task), usize::MAX);
        // The bar itself clamps the cursor back into its width.
        assert_eq!(render_bar(1, bar_cursor(&task)), "==");
    }

    #[test]
    fn first_started_step_wins() {
        let steps = vec![
            step(2, TaskState::Started),
            step(0, TaskState::Completed),
            step(1, TaskState::Started),
        ];
        let found = find_started_step(&steps).expect("a started step");
        assert_eq!(found.sequence, 2);
    }

    #[test]
    fn no_started_step() {
        let steps = vec![step(0, TaskState::Completed), step(1, TaskState::Queued)];
        assert!(find_started_step(&steps).is_none());
    }

    #[test]
    fn sort_out_of_order_steps() {
        let mut steps = vec![
            step(2, TaskState::Queued),
            step(0, TaskState::Completed),
            step(1, TaskState::Started),
        ];
        sort_steps_by_sequence(&mut steps);
        let sequences: Vec<u64> = steps.iter().map(|step| step.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut steps = vec![
            step(0, TaskState::Completed),
            step(1, TaskState::Started),
            step(2, TaskState::Queued),
        ];
        let expected = steps.clone();
        sort_steps_by_sequence(&mut steps);
        assert_eq!(steps, expected);
    }
}
