//! HTTP client for the hobbysync service API.

pub mod accounts;
pub mod catalog;
pub mod events;

use crate::error::{ClientError, Result};

/// HTTP client for the hobbysync service.
#[derive(Debug, Clone)]
pub struct HobbySyncClient {
    client: reqwest::Client,
    base_url: String,
}

impl HobbySyncClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (HOBBYSYNC_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HOBBYSYNC_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle responses carrying a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_detail(&body),
            })
        }
    }

    /// Handle responses where the body, if any, is not needed.
    async fn handle_status_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_detail(&body),
            })
        }
    }
}

/// Extracts the service's `detail` message from a JSON error body, falling
/// back to the raw body text.
fn error_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail")?.as_str().map(String::from));
    match detail {
        Some(detail) => detail,
        None if body.is_empty() => "Unknown error".to_string(),
        None => body.to_string(),
    }
}
