//! Repository configuration endpoints

use depot_core::{RepoConfig, RepositoryConfig, RepositorySummary};
use reqwest::Method;
use tracing::debug;

use crate::DepotClient;
use crate::error::{ClientError, Result};
use crate::transport::{QueryParams, Transport, TransportRequest};

/// Collection path of the repository endpoints
pub const REPOSITORIES_PATH: &str = "/api/repositories";

/// Kind filter that lists every repository
pub const ALL_REPOSITORIES: &str = "all";

impl<T: Transport> DepotClient<T> {
    // =============================================================================
    // Repository Query
    // =============================================================================

    /// List repositories, optionally restricted to one kind
    ///
    /// # Arguments
    /// * `kind_filter` - `"all"` for every repository, otherwise a kind such as
    ///   `"local"`, sent as the `type` query parameter
    ///
    /// # Returns
    /// A summary of each matching repository
    pub async fn list_repositories(&self, kind_filter: &str) -> Result<Vec<RepositorySummary>> {
        let mut query = QueryParams::new();
        if kind_filter != ALL_REPOSITORIES {
            query.insert("type".to_string(), kind_filter.to_string());
        }

        debug!(
            method = %Method::GET,
            path = %REPOSITORIES_PATH,
            kind_filter,
            "Listing repositories"
        );
        let request = TransportRequest::new(Method::GET, REPOSITORIES_PATH).with_query(query);
        let body = self.transport.execute(request).await?;

        Self::decode(&body)
    }

    /// Get the full configuration of a repository
    ///
    /// The response is decoded according to its `rclass`. Kinds without a
    /// dedicated shape come back as [`RepositoryConfig::Generic`].
    ///
    /// # Arguments
    /// * `key` - The repository key
    ///
    /// # Returns
    /// The repository configuration
    ///
    /// # Example
    /// ```no_run
    /// # use depot_client::{DepotClient, HttpTransport, TransportConfig};
    /// # use depot_core::RepositoryConfig;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = DepotClient::new(HttpTransport::new(TransportConfig::new("http://localhost:8081/artifactory"))?);
    /// match client.get_repository("libs").await? {
    ///     RepositoryConfig::Virtual(virt) => println!("members: {:?}", virt.repositories),
    ///     other => println!("{} is {}", other.key(), other.kind()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repository(&self, key: &str) -> Result<RepositoryConfig> {
        let path = repository_path(key)?;

        debug!(method = %Method::GET, path = %path, "Fetching repository configuration");
        let body = self
            .transport
            .execute(TransportRequest::new(Method::GET, path))
            .await?;

        RepositoryConfig::from_slice(&body).map_err(ClientError::ParseError)
    }

    // =============================================================================
    // Repository Management
    // =============================================================================

    /// Create a repository
    ///
    /// # Arguments
    /// * `key` - Key of the new repository
    /// * `config` - Its configuration; the content type follows the config's kind
    /// * `query` - Extra query parameters passed through unchanged
    pub async fn create_repository<C>(&self, key: &str, config: &C, query: &QueryParams) -> Result<()>
    where
        C: RepoConfig + ?Sized,
    {
        self.write_repository(Method::PUT, key, config, query).await
    }

    /// Update a repository
    ///
    /// Same contract as [`create_repository`](Self::create_repository), sent
    /// as a POST. Fields left unset in `config` are not sent.
    pub async fn update_repository<C>(&self, key: &str, config: &C, query: &QueryParams) -> Result<()>
    where
        C: RepoConfig + ?Sized,
    {
        self.write_repository(Method::POST, key, config, query).await
    }

    async fn write_repository<C>(
        &self,
        method: Method,
        key: &str,
        config: &C,
        query: &QueryParams,
    ) -> Result<()>
    where
        C: RepoConfig + ?Sized,
    {
        let path = repository_path(key)?;
        let body = serde_json::to_vec(config).map_err(ClientError::EncodeError)?;

        debug!(%method, path = %path, bytes = body.len(), "Writing repository configuration");
        let request = TransportRequest::new(method, path)
            .with_query(query.clone())
            .with_body(body, config.mime_type());
        self.transport.execute(request).await?;

        Ok(())
    }
}

fn repository_path(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(ClientError::InvalidRequest(
            "repository key must not be empty".to_string(),
        ));
    }
    Ok(format!("{}/{}", REPOSITORIES_PATH, key))
}
