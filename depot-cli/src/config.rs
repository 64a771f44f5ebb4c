//! Configuration module
//!
//! Connection settings for the CLI, gathered from flags and environment.

use anyhow::Result;
use depot_client::{Credentials, TransportConfig};
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the server API
    pub url: String,

    pub username: Option<String>,

    pub password: Option<String>,

    pub api_key: Option<String>,

    /// Access token
    pub token: Option<String>,

    /// Skip TLS certificate verification
    pub insecure: bool,

    pub timeout: Option<Duration>,
}

impl Config {
    /// Creates a configuration with no credentials
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            api_key: None,
            token: None,
            insecure: false,
            timeout: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("url cannot be empty");
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("url must start with http:// or https://");
        }

        if self.username.is_some() != self.password.is_some() {
            anyhow::bail!("username and password must be given together");
        }

        let methods = [
            self.username.is_some(),
            self.api_key.is_some(),
            self.token.is_some(),
        ];
        if methods.iter().filter(|set| **set).count() > 1 {
            anyhow::bail!("use only one of username/password, api key or token");
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Credentials to authenticate with, if any were configured
    pub fn credentials(&self) -> Option<Credentials> {
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            return Some(Credentials::basic(username, password));
        }
        if let Some(key) = &self.api_key {
            return Some(Credentials::ApiKey(key.clone()));
        }
        self.token.clone().map(Credentials::Bearer)
    }

    /// Transport settings derived from this configuration
    pub fn transport_config(&self) -> TransportConfig {
        let mut config = TransportConfig::new(&self.url)
            .with_verify_tls(!self.insecure)
            .with_user_agent(concat!("depot/", env!("CARGO_PKG_VERSION")));

        if let Some(credentials) = self.credentials() {
            config = config.with_credentials(credentials);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        config
    }
}
