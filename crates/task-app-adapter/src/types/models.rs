/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Server-assigned task identifier
pub type TaskId = i64;

/// Canonical task record as the server returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            status,
        }
    }

    /// Copy of this record with the complementary status
    pub fn with_toggled_status(&self) -> Self {
        Self {
            status: self.status.toggled(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_roundtrip_shape() {
        let task = Task::new(1, "Buy milk", TaskStatus::Pending);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "Buy milk", "status": "pending"})
        );
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let task: Task = serde_json::from_str(r#"{"id": 5, "title": "x"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_odd_status_values_do_not_reject_the_list() {
        let raw = r#"[
            {"id": 1, "title": "a", "status": null},
            {"id": 2, "title": "b", "status": "done"},
            {"id": 3, "title": "c", "status": 1},
            {"id": 4, "title": "d", "status": false}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(raw).unwrap();
        let statuses: Vec<_> = tasks.iter().map(|task| task.status).collect();
        assert_eq!(
            statuses,
            vec![
                TaskStatus::Pending,
                TaskStatus::Done,
                TaskStatus::Pending,
                TaskStatus::Pending
            ]
        );
    }

    #[test]
    fn test_with_toggled_status_keeps_identity() {
        let task = Task::new(9, "Walk dog", TaskStatus::Done);
        let toggled = task.with_toggled_status();
        assert_eq!(toggled.id, 9);
        assert_eq!(toggled.title, "Walk dog");
        assert_eq!(toggled.status, TaskStatus::Pending);
    }
}
