/*
[INPUT]:  Remote task API operations
[OUTPUT]: Object-safe trait consumed by the application layer
[POS]:    HTTP layer - seam between the client and its callers
[UPDATE]: When an endpoint is added to TaskAppClient
*/

use async_trait::async_trait;

use crate::http::{Result, TaskAppClient};
use crate::types::{Task, TaskId};

/// Operations the application needs from the remote task API
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Submit credentials; Ok on any 2xx
    async fn login(&self, email: &str, password: &str) -> Result<()>;

    /// Fetch the authoritative collection
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Create a task and return the canonical record
    async fn create_task(&self, title: &str) -> Result<Task>;

    /// Send a full updated record
    async fn update_task(&self, task: &Task) -> Result<()>;

    /// Delete by id
    async fn delete_task(&self, id: TaskId) -> Result<()>;
}

#[async_trait]
impl TaskApi for TaskAppClient {
    async fn login(&self, email: &str, password: &str) -> Result<()> {
        TaskAppClient::login(self, email, password).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        TaskAppClient::list_tasks(self).await
    }

    async fn create_task(&self, title: &str) -> Result<Task> {
        TaskAppClient::create_task(self, title).await
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        TaskAppClient::update_task(self, task).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        TaskAppClient::delete_task(self, id).await
    }
}
