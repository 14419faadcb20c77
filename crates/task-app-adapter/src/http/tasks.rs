/*
[INPUT]:  Task titles, task records and ids
[OUTPUT]: Canonical task records and acknowledgments
[POS]:    HTTP layer - task collection endpoints
[UPDATE]: When task endpoints or payloads change
*/

use reqwest::Method;

use crate::http::{Result, TaskAppClient};
use crate::types::{NewTaskRequest, Task, TaskId, TaskStatus};

impl TaskAppClient {
    /// Fetch the whole task collection
    ///
    /// GET /tasks
    /// A `null` or empty body is an empty collection.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.request(Method::GET, "/tasks")?;
        let tasks: Option<Vec<Task>> = self.send_optional_json(builder).await?;
        Ok(tasks.unwrap_or_default())
    }

    /// Create a task; the server assigns the id
    ///
    /// POST /tasks
    pub async fn create_task(&self, title: &str) -> Result<Task> {
        let body = NewTaskRequest {
            title: title.to_string(),
            status: TaskStatus::Pending,
        };
        let builder = self.request(Method::POST, "/tasks")?.json(&body);
        self.send_json(builder).await
    }

    /// Replace a task with the given full record
    ///
    /// PUT /tasks/{id}
    pub async fn update_task(&self, task: &Task) -> Result<()> {
        let endpoint = format!("/tasks/{}", task.id);
        let builder = self.request(Method::PUT, &endpoint)?.json(task);
        self.send_ack(builder).await
    }

    /// Delete a task
    ///
    /// DELETE /tasks/{id}
    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        let endpoint = format!("/tasks/{}", id);
        let builder = self.request(Method::DELETE, &endpoint)?;
        self.send_ack(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{TaskAppClient, TaskAppError};
    use crate::types::{Task, TaskStatus};
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> TaskAppClient {
        TaskAppClient::new(&server.uri()).expect("client init")
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {"id": 1, "title": "Buy groceries", "status": "pending"},
            {"id": 2, "title": "Finish project", "status": "completed"},
            {"id": 3, "title": "Ship it", "status": "done"}
        ]"#;

        Mock::given(method("GET"))
            .and(path("/tasks"))
            .and(header_exists("x-request-id"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tasks = client_for(&server)
            .await
            .list_tasks()
            .await
            .expect("list_tasks failed");

        let expected = vec![
            Task::new(1, "Buy groceries", TaskStatus::Pending),
            Task::new(2, "Finish project", TaskStatus::Pending),
            Task::new(3, "Ship it", TaskStatus::Done),
        ];
        assert_eq!(tasks, expected);
    }

    #[tokio::test]
    async fn test_list_tasks_null_body_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
            .mount(&server)
            .await;

        let tasks = client_for(&server).await.list_tasks().await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_list_tasks_tolerates_non_string_status() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {"id": 1, "title": "Buy groceries", "status": null},
            {"id": 2, "title": "Ship it", "status": "done"},
            {"id": 3, "title": "Call mom", "status": true}
        ]"#;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .mount(&server)
            .await;

        let tasks = client_for(&server).await.list_tasks().await.unwrap();
        let expected = vec![
            Task::new(1, "Buy groceries", TaskStatus::Pending),
            Task::new(2, "Ship it", TaskStatus::Done),
            Task::new(3, "Call mom", TaskStatus::Pending),
        ];
        assert_eq!(tasks, expected);
    }

    #[tokio::test]
    async fn test_list_tasks_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.list_tasks().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        match err {
            TaskAppError::Api { message, .. } => assert_eq!(message, "Internal Server Error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_task() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(body_json(serde_json::json!({
                "title": "Walk dog",
                "status": "pending",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 2,
                "title": "Walk dog",
                "status": "pending",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = client_for(&server)
            .await
            .create_task("Walk dog")
            .await
            .expect("create_task failed");
        assert_eq!(task, Task::new(2, "Walk dog", TaskStatus::Pending));
    }

    #[tokio::test]
    async fn test_create_task_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "message": "title is required",
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.create_task("x").await.unwrap_err();
        match err {
            TaskAppError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "title is required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_task_sends_full_record() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/1"))
            .and(body_json(serde_json::json!({
                "id": 1,
                "title": "Buy milk",
                "status": "done",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 1,
                "title": "Buy milk",
                "status": "done",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = Task::new(1, "Buy milk", TaskStatus::Done);
        client_for(&server)
            .await
            .update_task(&task)
            .await
            .expect("update_task failed");
    }

    #[tokio::test]
    async fn test_update_task_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Task not found",
            })))
            .mount(&server)
            .await;

        let task = Task::new(42, "Ghost", TaskStatus::Pending);
        let err = client_for(&server).await.update_task(&task).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_delete_task() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/tasks/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Task deleted",
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .await
            .delete_task(2)
            .await
            .expect("delete_task failed");
    }
}
