/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for task-app-adapter tests

use std::path::PathBuf;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mount `GET /tasks` answering with the given JSON body
#[allow(dead_code)]
pub async fn mount_task_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Fresh, not yet created directory under the system temp dir
#[allow(dead_code)]
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("task-app-test-{}", uuid::Uuid::new_v4()))
}
