//! Repository listing DTOs

use serde::{Deserialize, Serialize};

use crate::domain::kind::RepositoryKind;

/// One entry of the repository listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Unique repository key
    pub key: String,

    /// Kind of the repository; the listing reports it in upper case
    #[serde(
        rename = "type",
        deserialize_with = "RepositoryKind::deserialize_ignore_case"
    )]
    pub kind: RepositoryKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Browse URL of the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
