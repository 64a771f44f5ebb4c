//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

use super::{Transport, TransportRequest};
use crate::error::{ClientError, Result};

/// Header carrying an API key
const API_KEY_HEADER: &str = "X-JFrog-Art-Api";

/// How requests authenticate against the server
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP basic authentication
    Basic { username: String, password: String },

    /// API key sent in the `X-JFrog-Art-Api` header
    ApiKey(String),

    /// Access token sent as `Authorization: Bearer`
    Bearer(String),
}

impl Credentials {
    /// Create basic auth credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::ApiKey(key) => request.header(API_KEY_HEADER, key),
            Credentials::Bearer(token) => request.bearer_auth(token),
        }
    }
}

// Secrets stay out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::ApiKey(_) => f.debug_tuple("ApiKey").field(&"***").finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"***").finish(),
        }
    }
}

/// Settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL of the server API (e.g., "http://localhost:8081/artifactory")
    pub base_url: String,

    pub credentials: Option<Credentials>,

    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Reject invalid TLS certificates
    pub verify_tls: bool,

    pub user_agent: Option<String>,
}

impl TransportConfig {
    /// Create a configuration with defaults: no credentials, no timeout, TLS verified
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout: None,
            verify_tls: true,
            user_agent: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// HTTP transport over a reqwest [`Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Base URL without trailing slash
    base_url: String,
    credentials: Option<Credentials>,
    client: Client,
}

impl HttpTransport {
    /// Build a transport and its HTTP client from `config`
    ///
    /// # Example
    /// ```
    /// use depot_client::{Credentials, HttpTransport, TransportConfig};
    /// use std::time::Duration;
    ///
    /// let transport = HttpTransport::new(
    ///     TransportConfig::new("http://localhost:8081/artifactory")
    ///         .with_credentials(Credentials::ApiKey("secret".to_string()))
    ///         .with_timeout(Duration::from_secs(30)),
    /// )?;
    /// assert_eq!(transport.base_url(), "http://localhost:8081/artifactory");
    /// # Ok::<(), depot_client::ClientError>(())
    /// ```
    pub fn new(config: TransportConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        if !config.verify_tls {
            warn!("TLS certificate verification is disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        Ok(Self::with_client(config.base_url, client, config.credentials))
    }

    /// Create a transport around an already configured reqwest client
    pub fn with_client(
        base_url: impl Into<String>,
        client: Client,
        credentials: Option<Credentials>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            client,
        }
    }

    /// Get the base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "Sending request");

        let mut builder = self.client.request(request.method, &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(credentials) = &self.credentials {
            builder = credentials.apply(builder);
        }
        if let Some(body) = request.body {
            if let Some(content_type) = request.content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(status = status.as_u16(), %url, "Request rejected");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
