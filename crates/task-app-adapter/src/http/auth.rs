/*
[INPUT]:  User credentials (email, password)
[OUTPUT]: Login acknowledgment or auth error
[POS]:    HTTP layer - login endpoint
[UPDATE]: When the login contract changes
*/

use reqwest::Method;
use tracing::info;

use crate::http::{Result, TaskAppClient};
use crate::types::LoginRequest;

impl TaskAppClient {
    /// Submit credentials
    ///
    /// POST /login
    /// Any 2xx is a successful login; the response body is not used.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.request(Method::POST, "/login")?.json(&body);
        self.send_ack(builder).await?;
        info!(%email, "login accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{TaskAppClient, TaskAppError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(serde_json::json!({
                "email": "test@example.com",
                "password": "password123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "ok",
                "token": "fake-jwt",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TaskAppClient::new(&server.uri()).expect("client init");
        client
            .login("test@example.com", "password123")
            .await
            .expect("login should succeed");
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "invalid",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TaskAppClient::new(&server.uri()).expect("client init");
        let err = client
            .login("test@example.com", "wrong")
            .await
            .expect_err("login should fail");

        match err {
            TaskAppError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = TaskAppClient::new(&server.uri()).expect("client init");
        assert!(client.login("a@b.c", "pw").await.is_ok());
    }
}
