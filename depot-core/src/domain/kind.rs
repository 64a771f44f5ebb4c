//! Repository kind tag
//!
//! The `rclass` discriminator carried by every repository configuration.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire tag for local repositories
pub const LOCAL: &str = "local";
/// Wire tag for remote repositories
pub const REMOTE: &str = "remote";
/// Wire tag for virtual repositories
pub const VIRTUAL: &str = "virtual";

/// Kind of a repository
///
/// Tags the client does not know about are kept verbatim in `Unknown` so they
/// survive a decode/encode cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepositoryKind {
    /// Physically hosted repository
    Local,

    /// Caching proxy for an upstream repository
    Remote,

    /// Aggregate of other repositories
    Virtual,

    /// Any other tag reported by the server
    Unknown(String),
}

impl RepositoryKind {
    /// Parse a wire tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            LOCAL => RepositoryKind::Local,
            REMOTE => RepositoryKind::Remote,
            VIRTUAL => RepositoryKind::Virtual,
            other => RepositoryKind::Unknown(other.to_string()),
        }
    }

    /// Parse a tag, matching the known kinds without regard to case
    ///
    /// The listing endpoint reports kinds in upper case (`LOCAL`). Unknown
    /// tags are kept as sent.
    pub fn from_tag_ignore_case(tag: &str) -> Self {
        [LOCAL, REMOTE, VIRTUAL]
            .into_iter()
            .find(|known| known.eq_ignore_ascii_case(tag))
            .map_or_else(
                || RepositoryKind::Unknown(tag.to_string()),
                RepositoryKind::from_tag,
            )
    }

    /// Deserialize with [`from_tag_ignore_case`](Self::from_tag_ignore_case),
    /// for use with `#[serde(deserialize_with)]`
    pub fn deserialize_ignore_case<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RepositoryKind::from_tag_ignore_case(&tag))
    }

    /// The wire tag for this kind
    pub fn as_str(&self) -> &str {
        match self {
            RepositoryKind::Local => LOCAL,
            RepositoryKind::Remote => REMOTE,
            RepositoryKind::Virtual => VIRTUAL,
            RepositoryKind::Unknown(tag) => tag,
        }
    }

    /// Whether this is one of the kinds with a dedicated configuration shape
    pub fn is_known(&self) -> bool {
        !matches!(self, RepositoryKind::Unknown(_))
    }
}

impl std::fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for RepositoryKind {
    fn from(tag: &str) -> Self {
        RepositoryKind::from_tag(tag)
    }
}

impl Serialize for RepositoryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RepositoryKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RepositoryKind::from_tag(&tag))
    }
}

impl Default for RepositoryKind {
    fn default() -> Self {
        RepositoryKind::Unknown(String::new())
    }
}
