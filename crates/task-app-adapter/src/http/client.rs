/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::http::{Result, TaskAppError};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task API
#[derive(Debug, Clone)]
pub struct TaskAppClient {
    http_client: Client,
    base_url: Url,
}

impl TaskAppClient {
    /// Create a new client with default configuration
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint, keeping any path prefix of the base URL
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build a request builder tagged with a fresh request id
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        let request_id = Uuid::new_v4().to_string();
        debug!(%method, %url, %request_id, "sending request");
        Ok(self
            .http_client
            .request(method, url)
            .header(REQUEST_ID_HEADER, request_id))
    }

    /// Send a request and decode the JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose body may be empty or `null`
    pub(crate) async fn send_optional_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Option<T>> {
        let body = self.send(builder).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request where only the status matters
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<()> {
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            debug!(status = status.as_u16(), %message, "request rejected");
            return Err(TaskAppError::api_error(status, message));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

fn normalize_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TaskAppError::Config(format!(
            "base url must use http or https, got {}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Pull a human readable message out of an error body.
///
/// The API answers errors with `{"message": "..."}`; anything else is used verbatim.
fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string));
    Some(from_json.unwrap_or_else(|| body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_without_prefix() {
        let client = TaskAppClient::new("http://127.0.0.1:5000").unwrap();
        assert_eq!(
            client.endpoint_url("/tasks").unwrap().as_str(),
            "http://127.0.0.1:5000/tasks"
        );
        assert_eq!(
            client.endpoint_url("tasks/7").unwrap().as_str(),
            "http://127.0.0.1:5000/tasks/7"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_path_prefix() {
        let client = TaskAppClient::new("https://example.com/api/v1").unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/api/v1/");
        assert_eq!(
            client.endpoint_url("/login").unwrap().as_str(),
            "https://example.com/api/v1/login"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = TaskAppClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, TaskAppError::Config(_)));

        let err = TaskAppClient::new("not a url").unwrap_err();
        assert!(matches!(err, TaskAppError::UrlParse(_)));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message": "invalid"}"#),
            Some("invalid".to_string())
        );
        assert_eq!(error_message("boom"), Some("boom".to_string()));
        assert_eq!(error_message("  "), None);
        assert_eq!(
            error_message(r#"{"error": "x"}"#),
            Some(r#"{"error": "x"}"#.to_string())
        );
    }
}
