//! Depot HTTP Client
//!
//! A small, type-safe client for the repository management API of a binary
//! repository manager (Artifactory-style `/api/repositories`).
//!
//! The client turns each call into exactly one HTTP round-trip through a
//! [`Transport`]. [`HttpTransport`] talks to a real server; [`MockTransport`]
//! replays canned responses in tests.
//!
//! # Example
//!
//! ```no_run
//! use depot_client::{DepotClient, HttpTransport, TransportConfig};
//! use depot_core::{LocalRepoConfig, RepositoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = HttpTransport::new(TransportConfig::new("http://localhost:8081/artifactory"))?;
//!     let client = DepotClient::new(transport);
//!
//!     let mut config = LocalRepoConfig::new("libs-release-local");
//!     config.base.package_type = Some("maven".to_string());
//!     client
//!         .create_repository("libs-release-local", &config, &Default::default())
//!         .await?;
//!
//!     if let RepositoryConfig::Local(local) = client.get_repository("libs-release-local").await? {
//!         println!("layout: {:?}", local.layout_ref);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod repositories;
pub mod transport;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use repositories::{ALL_REPOSITORIES, REPOSITORIES_PATH};
pub use reqwest::Method;
pub use transport::{
    Credentials, HttpTransport, MockTransport, QueryParams, Transport, TransportConfig,
    TransportRequest,
};

use serde::de::DeserializeOwned;

/// Client for the repository management API
///
/// Holds nothing but its transport; every method is a single request.
#[derive(Debug, Clone)]
pub struct DepotClient<T: Transport = HttpTransport> {
    transport: T,
}

impl<T: Transport> DepotClient<T> {
    /// Create a client that sends its requests through `transport`
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Decode a JSON response body
    fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
        serde_json::from_slice(body).map_err(ClientError::ParseError)
    }
}
