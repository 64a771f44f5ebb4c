//! Depot Core
//!
//! Wire types for the repository management API.
//!
//! This crate contains:
//! - Domain types: repository configurations and their kind tag
//! - DTOs: summaries returned by the listing endpoint

pub mod domain;
pub mod dto;

pub use domain::kind::RepositoryKind;
pub use domain::repository::{
    GenericRepoConfig, LocalRepoConfig, RemoteRepoConfig, RepoConfig, RepositoryConfig,
    VirtualRepoConfig,
};
pub use dto::repository::RepositorySummary;
