//! Task and step records tracking asynchronous control plane operations.
use serde::Deserialize;
use serde::Serialize;

/// Error detail reported by the API server, possibly attached to a task step.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Machine readable error code.
    pub code: String,

    /// Human readable description of the error.
    pub message: String,
}

/// Reference to the entity a task operates on.
///
/// The reference is attached to the task as soon as it is created, before the
/// operation completes.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct EntityRef {
    /// Identifier of the entity.
    pub id: String,

    /// Kind of the entity (vm, tenant, service, ...).
    pub kind: String,
}

/// One ordered sub-operation within a [`Task`].
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Position of the step within the task.
    pub sequence: u64,

    /// Human readable name of the sub-operation.
    pub operation: String,

    /// Current state of the step.
    pub state: TaskState,

    /// Millisecond epoch timestamp the step started at, `<= 0` when not yet recorded.
    #[serde(default)]
    pub started_time: i64,

    /// Millisecond epoch timestamp the step ended at, `<= 0` when not yet recorded.
    #[serde(default)]
    pub end_time: i64,

    /// Errors reported while executing the step.
    #[serde(default)]
    pub errors: Vec<ApiError>,

    /// Warnings reported while executing the step.
    #[serde(default)]
    pub warnings: Vec<ApiError>,
}

/// Server-side record of an asynchronous operation and its progress.
///
/// Tasks are created by the server in response to mutating API calls and are
/// read-only for clients: state transitions are only ever observed by polling.
/// Steps are NOT guaranteed to arrive in sequence order.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Identifier of the task, assigned by the server.
    pub id: String,

    /// Current state of the task.
    pub state: TaskState,

    /// Human readable name of the operation (for example `CREATE_VM`).
    pub operation: String,

    /// The entity the task operates on.
    pub entity: EntityRef,

    /// Ordered sub-operations the task is made of.
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Millisecond epoch timestamp the task started at, `<= 0` when not yet recorded.
    #[serde(default)]
    pub started_time: i64,

    /// Millisecond epoch timestamp the task ended at, `<= 0` when not yet recorded.
    #[serde(default)]
    pub end_time: i64,
}

/// Optional filters for task list requests.
#[derive(Clone, Default, Debug)]
pub struct TaskFilter {
    /// Only return tasks operating on the given entity.
    pub entity_id: Option<String>,

    /// Only return tasks in the given state.
    pub state: Option<String>,
}

/// States a task or step moves through while the server executes it.
///
/// `Completed` and `Error` are terminal: no further transitions are expected.
/// Servers may report additional transient values for steps, decoded as
/// [`TaskState::Unknown`] instead of failing the whole response.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Queued,
    Started,
    Completed,
    Error,
    #[serde(other)]
    Unknown,
}

impl TaskState {
    /// Check if the state is terminal (completed or failed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Error)
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TaskState::Queued => write!(f, "QUEUED"),
            TaskState::Started => write!(f, "STARTED"),
            TaskState::Completed => write!(f, "COMPLETED"),
            TaskState::Error => write!(f, "ERROR"),
            TaskState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Task;
    use super::TaskState;

    const TASK_JSON: &str = r#"{
        "id": "t-1",
        "state": "STARTED",
        "operation": "CREATE_VM",
        "entity": {"id": "e-1", "kind": "vm"},
        "startedTime": 1700000000000,
        "endTime": -1,
        "steps": [
            {
                "sequence": 1,
                "operation": "ATTACH_DISK",
                "state": "QUEUED"
            },
            {
                "sequence": 0,
                "operation": "RESERVE_RESOURCE",
                "state": "STARTED",
                "startedTime": 1700000000100,
                "errors": [{"code": "QuotaError", "message": "near quota"}]
            }
        ]
    }"#;

    #[test]
    fn decode_task() {
        let task: Task = serde_json::from_str(TASK_JSON).expect("task to decode");
        assert_eq!(task.id, "t-1");
        assert_eq!(task.state, TaskState::Started);
        assert_eq!(task.entity.id, "e-1");
        assert_eq!(task.end_time, -1);
        // Steps are kept in the order the server sent them.
        assert_eq!(task.steps[0].sequence, 1);
        assert_eq!(task.steps[1].errors[0].code, "QuotaError");
    }

    #[test]
    fn decode_unknown_state() {
        let state: TaskState = serde_json::from_str(r#""SUSPENDED""#).expect("state to decode");
        assert_eq!(state, TaskState::Unknown);
    }

    #[test]
    fn terminal_states() {
        assert!(TaskState::Completed.is_terminal());
        assert!(TaskState::Error.is_terminal());
        assert!(!TaskState::Queued.is_terminal());
        assert!(!TaskState::Started.is_terminal());
    }
}
