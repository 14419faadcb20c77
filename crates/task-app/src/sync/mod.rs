/*
[INPUT]:  Task API handle
[OUTPUT]: Server-confirmed task records for the local list
[POS]:    Task synchronization - server round trips
[UPDATE]: When task operations or their confirmation rules change
*/

mod list;

pub use list::TaskList;

use std::sync::Arc;

use task_app_adapter::{Result, Task, TaskApi, TaskId, TaskStatus};
use tracing::{debug, info};

/// Performs task operations against the server.
///
/// Every method returns only what the server confirmed; callers apply the
/// result to their [`TaskList`] afterwards and leave it untouched on error.
#[derive(Clone)]
pub struct TaskListSynchronizer {
    api: Arc<dyn TaskApi>,
}

impl TaskListSynchronizer {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    /// Fetch the authoritative collection
    pub async fn load(&self) -> Result<Vec<Task>> {
        let tasks = self.api.list_tasks().await?;
        info!(count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }

    /// Create a task; the returned record is always pending
    pub async fn create(&self, title: &str) -> Result<Task> {
        let mut task = self.api.create_task(title).await?;
        if task.status != TaskStatus::Pending {
            debug!(task_id = task.id, status = %task.status, "server returned non-pending status for new task");
        }
        task.status = TaskStatus::Pending;
        info!(task_id = task.id, "task created");
        Ok(task)
    }

    /// Flip the status of `task` on the server, returning the updated record
    pub async fn toggle_status(&self, task: &Task) -> Result<Task> {
        let updated = task.with_toggled_status();
        self.api.update_task(&updated).await?;
        info!(task_id = updated.id, status = %updated.status, "task updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: TaskId) -> Result<()> {
        self.api.delete_task(id).await?;
        info!(task_id = id, "task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use task_app_adapter::TaskAppClient;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn synchronizer(server: &MockServer) -> TaskListSynchronizer {
        let client = TaskAppClient::new(&server.uri()).expect("client init");
        TaskListSynchronizer::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_create_forces_pending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5, "title": "Walk dog", "status": "done",
            })))
            .mount(&server)
            .await;

        let task = assert_ok!(synchronizer(&server).create("Walk dog").await);
        assert_eq!(task, Task::new(5, "Walk dog", TaskStatus::Pending));
    }

    #[tokio::test]
    async fn test_toggle_sends_complement() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/1"))
            .and(body_json(serde_json::json!({
                "id": 1, "title": "Buy milk", "status": "done",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let task = Task::new(1, "Buy milk", TaskStatus::Pending);
        let updated = assert_ok!(synchronizer(&server).toggle_status(&task).await);
        assert_eq!(updated.status, TaskStatus::Done);
        assert_eq!(updated.title, "Buy milk");
    }

    #[tokio::test]
    async fn test_delete_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert_err!(synchronizer(&server).delete(3).await);
    }
}
