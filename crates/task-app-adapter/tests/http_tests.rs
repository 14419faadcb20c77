/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{mount_task_list, setup_mock_server};
use task_app_adapter::{ClientConfig, Task, TaskApi, TaskAppClient, TaskAppError, TaskStatus};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(TaskAppClient::new("http://127.0.0.1:5000"));
    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:5000/");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
    };
    let _client = assert_ok!(TaskAppClient::with_config(config, "https://tasks.example.com"));
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let config = ClientConfig {
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    };
    // Port 1 is never served locally.
    let client = assert_ok!(TaskAppClient::with_config(config, "http://127.0.0.1:1"));

    let err = assert_err!(client.list_tasks().await);
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_full_crud_through_trait_object() {
    let server = setup_mock_server().await;
    mount_task_list(
        &server,
        serde_json::json!([{"id": 1, "title": "Buy milk", "status": "pending"}]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 2, "title": "Walk dog", "status": "pending",
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = assert_ok!(TaskAppClient::new(&server.uri()));
    let api: &dyn TaskApi = &client;

    let tasks = assert_ok!(api.list_tasks().await);
    assert_eq!(tasks, vec![Task::new(1, "Buy milk", TaskStatus::Pending)]);

    let created = assert_ok!(api.create_task("Walk dog").await);
    assert_eq!(created.id, 2);

    assert_ok!(api.update_task(&tasks[0].with_toggled_status()).await);
    assert_ok!(api.delete_task(created.id).await);
}

#[tokio::test]
async fn test_unmatched_route_is_api_error() {
    let server = setup_mock_server().await;
    let client = assert_ok!(TaskAppClient::new(&server.uri()));

    match assert_err!(client.delete_task(99).await) {
        TaskAppError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
}
