//! HTTP server version discovery.
//!
//! Fetches the `/version` endpoint every Kubernetes API server exposes.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

use super::ServerVersioner;
use crate::error::{GateError, Result};
use crate::version::VersionInfo;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the server version from an API server over HTTP/HTTPS.
///
/// # Example
///
/// ```no_run
/// use kubegate::discovery::HttpVersioner;
/// use kubegate::check_minimum_version;
///
/// let versioner = HttpVersioner::new("https://127.0.0.1:6443")
///     .unwrap()
///     .with_bearer_token("my-token");
/// check_minimum_version(&versioner).unwrap();
/// ```
pub struct HttpVersioner {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
    timeout: Duration,
}

impl HttpVersioner {
    /// Create a versioner with the default 30-second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a versioner with a custom timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .user_agent("kubegate")
            .timeout(timeout)
            .build()
            .map_err(|e| GateError::Retrieval {
                endpoint: base_url.clone(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url,
            bearer_token: None,
            timeout,
        })
    }

    /// Authenticate requests with a bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The full URL of the version endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/version", self.base_url.trim_end_matches('/'))
    }
}

impl ServerVersioner for HttpVersioner {
    fn server_version(&self) -> Result<VersionInfo> {
        let endpoint = self.endpoint();
        tracing::debug!("Fetching server version from {}", endpoint);

        let mut request = self.client.get(&endpoint).header(ACCEPT, "application/json");
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| GateError::Retrieval {
            endpoint: endpoint.clone(),
            message: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(GateError::Retrieval {
                message: format!("HTTP {}", response.status()),
                endpoint,
            });
        }

        response.json().map_err(|e| GateError::Retrieval {
            endpoint,
            message: format!("Failed to parse version response: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn default_timeout_is_30_seconds() {
        let versioner = HttpVersioner::new("https://cluster.local").unwrap();
        assert_eq!(versioner.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let versioner =
            HttpVersioner::with_timeout("https://cluster.local", Duration::from_secs(5)).unwrap();
        assert_eq!(versioner.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let versioner = HttpVersioner::new("https://cluster.local:6443/").unwrap();
        assert_eq!(versioner.endpoint(), "https://cluster.local:6443/version");
    }

    #[test]
    fn fetches_version_descriptor() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/version")
                .header("accept", "application/json");
            then.status(200).json_body(json!({
                "major": "1",
                "minor": "27",
                "gitVersion": "v1.27.3",
                "gitCommit": "25b4e43193bcda6c7328a6d147b1fb73a33f1598",
                "gitTreeState": "clean",
                "buildDate": "2023-06-14T09:47:40Z",
                "goVersion": "go1.20.5",
                "compiler": "gc",
                "platform": "linux/amd64"
            }));
        });

        let versioner = HttpVersioner::new(server.base_url()).unwrap();
        let info = versioner.server_version().unwrap();

        assert_eq!(info.git_version, "v1.27.3");
        assert_eq!(info.minor, "27");
        mock.assert();
    }

    #[test]
    fn sends_bearer_token() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/version")
                .header("Authorization", "Bearer secret-token");
            then.status(200).json_body(json!({ "gitVersion": "v1.20.0" }));
        });

        let versioner = HttpVersioner::new(server.base_url())
            .unwrap()
            .with_bearer_token("secret-token");
        let info = versioner.server_version().unwrap();

        assert_eq!(info.git_version, "v1.20.0");
        mock.assert();
    }

    #[test]
    fn http_error_is_retrieval_failure() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/version");
            then.status(403).body("Forbidden");
        });

        let versioner = HttpVersioner::new(server.base_url()).unwrap();
        let err = versioner.server_version().unwrap_err();

        match err {
            GateError::Retrieval { endpoint, message } => {
                assert!(endpoint.ends_with("/version"));
                assert!(message.contains("403"), "Error should mention 403: {}", message);
            }
            other => panic!("Expected Retrieval, got {:?}", other),
        }
    }

    #[test]
    fn malformed_body_is_retrieval_failure() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/version");
            then.status(200).body("<html>not json</html>");
        });

        let versioner = HttpVersioner::new(server.base_url()).unwrap();
        let err = versioner.server_version().unwrap_err();

        assert!(matches!(err, GateError::Retrieval { .. }));
        assert!(err.to_string().contains("Failed to parse version response"));
    }

    #[test]
    fn unreachable_server_is_retrieval_failure() {
        let versioner =
            HttpVersioner::with_timeout("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = versioner.server_version().unwrap_err();
        assert!(matches!(err, GateError::Retrieval { .. }));
    }
}
