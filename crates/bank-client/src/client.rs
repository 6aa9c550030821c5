//! HTTP client for the banking REST API
//!
//! Provides the single request path every view goes through: attach the
//! bearer token, send, map non-2xx statuses to typed errors, decode JSON.

use bank_auth::Session;
use bank_core::{AppConfig, ClientError};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::request::{ApiRequest, RequestBody};

/// Client for the banking API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
    session: Session,
}

/// Failure body returned by the API
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pull the human-readable `detail` string out of a failure body
///
/// Validation failures carry a list instead of a string; those count as
/// having no detail.
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

impl ApiClient {
    /// Creates a new API client
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin of the API (ej: "http://localhost:8000")
    /// * `session` - Token source for authenticated requests
    /// * `timeout` - Request timeout; `None` waits indefinitely
    pub fn new(
        base_url: &str,
        session: Session,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = ClientBuilder::new()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Creates a client from the application configuration
    pub fn from_config(config: &AppConfig, session: Session) -> Result<Self, ClientError> {
        Self::new(&config.api.base_url, session, config.api.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and decodes the JSON body of a 2xx response
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute<R>(&self, request: ApiRequest) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let response = self.send(request).await?;

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Response body did not match the expected shape");
            ClientError::Decode(format!("{} - Body: {}", e, body))
        })
    }

    /// Sends a request whose response body is not needed
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: ApiRequest) -> Result<Response, ClientError> {
        let mut builder = self
            .http_client
            .request(request.method.into(), self.url(&request.path))
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if request.authenticated {
            match self.session.authorization()? {
                Some(header) => builder = builder.header(AUTHORIZATION, header),
                None => debug!("No session token, sending request without Authorization"),
            }
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Form(fields) => builder.form(fields),
        };

        debug!(query = ?request.query, "API request");

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Network("request timed out".to_string())
            } else {
                ClientError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "API response");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ClientError::from_status(status.as_u16(), extract_detail(&body));
        warn!(
            status = status.as_u16(),
            code = error.error_code(),
            detail = ?error.detail(),
            "API request failed"
        );
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_auth::MemoryTokenStore;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, Session::new(MemoryTokenStore::new()), None).unwrap()
    }

    #[test]
    fn test_client_creation_trims_slash() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/banks"), "http://localhost:8000/banks");
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let config = AppConfig::default();
        let client = ApiClient::from_config(&config, Session::new(MemoryTokenStore::new())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Account not found"}"#).as_deref(),
            Some("Account not found")
        );
        assert_eq!(extract_detail(r#"{"detail":[{"loc":["body"],"msg":"x"}]}"#), None);
        assert_eq!(extract_detail(r#"{"detail":"   "}"#), None);
        assert_eq!(extract_detail(r#"{"message":"nope"}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }
}
