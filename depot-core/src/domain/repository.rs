//! Repository configuration types
//!
//! A repository configuration is a JSON object whose `rclass` field decides
//! which kind-specific fields it carries. The shared fields live in
//! [`GenericRepoConfig`], which every kind flattens into its own struct.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::kind::RepositoryKind;

/// Content type for local repository payloads
pub const LOCAL_REPO_MIME_TYPE: &str =
    "application/vnd.org.jfrog.artifactory.repositories.LocalRepositoryConfiguration+json";

/// Content type for remote repository payloads
pub const REMOTE_REPO_MIME_TYPE: &str =
    "application/vnd.org.jfrog.artifactory.repositories.RemoteRepositoryConfiguration+json";

/// Content type for virtual repository payloads
pub const VIRTUAL_REPO_MIME_TYPE: &str =
    "application/vnd.org.jfrog.artifactory.repositories.VirtualRepositoryConfiguration+json";

/// Content type for payloads of no particular kind
pub const GENERIC_REPO_MIME_TYPE: &str = "application/json";

/// A payload that can be sent as a repository configuration
///
/// Implemented by every configuration shape. Anything serializable can
/// implement it, which lets callers send hand-built payloads as well.
pub trait RepoConfig: Serialize {
    /// Content type to send the payload with
    fn mime_type(&self) -> &'static str;
}

// =============================================================================
// Shared fields
// =============================================================================

/// Fields common to every repository kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenericRepoConfig {
    /// Repository key
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,

    /// Kind tag
    pub rclass: RepositoryKind,

    /// Package type (maven, npm, docker, generic, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Ant-style include pattern, e.g. `**/*`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub includes_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excludes_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_releases: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_snapshots: Option<bool>,

    /// Number of unique snapshots to keep (0 keeps all)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unique_snapshots: Option<i64>,

    /// The server spells this field with a single `p`
    #[serde(
        rename = "supressPomConsistencyChecks",
        skip_serializing_if = "Option::is_none"
    )]
    pub suppress_pom_consistency_checks: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blacked_out: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_sets: Vec<String>,
}

impl GenericRepoConfig {
    /// Create a configuration with just a key and kind
    pub fn new(key: impl Into<String>, rclass: RepositoryKind) -> Self {
        Self {
            key: key.into(),
            rclass,
            ..Default::default()
        }
    }
}

impl RepoConfig for GenericRepoConfig {
    fn mime_type(&self) -> &'static str {
        match self.rclass {
            RepositoryKind::Local => LOCAL_REPO_MIME_TYPE,
            RepositoryKind::Remote => REMOTE_REPO_MIME_TYPE,
            RepositoryKind::Virtual => VIRTUAL_REPO_MIME_TYPE,
            RepositoryKind::Unknown(_) => GENERIC_REPO_MIME_TYPE,
        }
    }
}

/// Write the shared fields with `kind` as the tag, whatever `base.rclass` says
fn serialize_base_as<S: Serializer>(
    base: &GenericRepoConfig,
    kind: RepositoryKind,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if base.rclass == kind {
        return base.serialize(serializer);
    }
    GenericRepoConfig {
        rclass: kind,
        ..base.clone()
    }
    .serialize(serializer)
}

fn local_base<S: Serializer>(base: &GenericRepoConfig, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_base_as(base, RepositoryKind::Local, serializer)
}

fn remote_base<S: Serializer>(base: &GenericRepoConfig, serializer: S) -> Result<S::Ok, S::Error> {
    serialize_base_as(base, RepositoryKind::Remote, serializer)
}

fn virtual_base<S: Serializer>(
    base: &GenericRepoConfig,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serialize_base_as(base, RepositoryKind::Virtual, serializer)
}

// =============================================================================
// Kind-specific shapes
// =============================================================================

/// Configuration of a local (hosted) repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalRepoConfig {
    /// Shared fields; `rclass` is always sent as `local`
    #[serde(flatten, serialize_with = "local_base")]
    pub base: GenericRepoConfig,

    /// Layout name, e.g. `maven-2-default`
    #[serde(rename = "repoLayoutRef", skip_serializing_if = "Option::is_none")]
    pub layout_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debian_trivial_layout: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_policy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_version_behavior: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_browsing_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculate_yum_metadata: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub yum_root_depth: Option<i64>,
}

impl LocalRepoConfig {
    /// Create a local repository configuration
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            base: GenericRepoConfig::new(key, RepositoryKind::Local),
            ..Default::default()
        }
    }
}

impl RepoConfig for LocalRepoConfig {
    fn mime_type(&self) -> &'static str {
        LOCAL_REPO_MIME_TYPE
    }
}

/// Configuration of a remote (proxying) repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemoteRepoConfig {
    /// Shared fields; `rclass` is always sent as `remote`
    #[serde(flatten, serialize_with = "remote_base")]
    pub base: GenericRepoConfig,

    /// Upstream URL
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Key of a proxy defined on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_repo_checksum_policy_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_fail: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_artifacts_locally: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_timeout_millis: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_cache_period_secs: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_retrieval_cache_period_secs: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub missed_retrieval_cache_period_secs: Option<i64>,

    #[serde(
        rename = "unusedArtifactCleanupEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub unused_artifacts_cleanup_enabled: Option<bool>,

    #[serde(
        rename = "unusedArtifactCleanupPeriodHours",
        skip_serializing_if = "Option::is_none"
    )]
    pub unused_artifacts_cleanup_period_hours: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_jars_eagerly: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_configuration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_properties: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_any_host_auth: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cookie_management: Option<bool>,

    #[serde(rename = "bowerRegistryUrl", skip_serializing_if = "Option::is_none")]
    pub bower_registry_url: Option<String>,

    /// VCS flavour for VCS remotes, e.g. `GIT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_git_provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcs_git_downloader: Option<String>,
}

impl RemoteRepoConfig {
    /// Create a remote repository configuration proxying `url`
    pub fn new(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            base: GenericRepoConfig::new(key, RepositoryKind::Remote),
            url: url.into(),
            ..Default::default()
        }
    }
}

impl RepoConfig for RemoteRepoConfig {
    fn mime_type(&self) -> &'static str {
        REMOTE_REPO_MIME_TYPE
    }
}

/// Configuration of a virtual (aggregating) repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VirtualRepoConfig {
    /// Shared fields; `rclass` is always sent as `virtual`
    #[serde(flatten, serialize_with = "virtual_base")]
    pub base: GenericRepoConfig,

    /// Member repository keys, in resolution order
    pub repositories: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub debian_trivial_layout: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifactory_requests_can_retrieve_remote_artifacts: Option<bool>,

    /// Signing key pair name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom_repository_reference_cleanup_policy: Option<String>,
}

impl VirtualRepoConfig {
    /// Create a virtual repository aggregating `repositories`
    pub fn new(key: impl Into<String>, repositories: Vec<String>) -> Self {
        Self {
            base: GenericRepoConfig::new(key, RepositoryKind::Virtual),
            repositories,
            ..Default::default()
        }
    }
}

impl RepoConfig for VirtualRepoConfig {
    fn mime_type(&self) -> &'static str {
        VIRTUAL_REPO_MIME_TYPE
    }
}

// =============================================================================
// Polymorphic configuration
// =============================================================================

/// A repository configuration of any kind
///
/// Serializes as the flat JSON object of the wrapped shape. Decoding goes
/// through [`RepositoryConfig::from_value`], which reads `rclass` before
/// choosing a shape.
///
/// The variant is the kind. For `Local`, `Remote` and `Virtual` the `rclass`
/// of the embedded base is ignored on the wire and by equality; a `Generic`
/// carrying a known tag is equal to the matching shape with no extra fields.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RepositoryConfig {
    Local(LocalRepoConfig),
    Remote(RemoteRepoConfig),
    Virtual(VirtualRepoConfig),
    /// Kind without a dedicated shape; only the shared fields are kept
    Generic(GenericRepoConfig),
}

impl RepositoryConfig {
    /// Decode a configuration from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// Decode a configuration from a JSON value
    ///
    /// The shared fields are decoded first to learn the kind, then the value
    /// is decoded again into that kind's shape. A kind with no dedicated
    /// shape yields [`RepositoryConfig::Generic`].
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let base = GenericRepoConfig::deserialize(&value)?;

        match base.rclass {
            RepositoryKind::Local => LocalRepoConfig::deserialize(value).map(Self::Local),
            RepositoryKind::Remote => RemoteRepoConfig::deserialize(value).map(Self::Remote),
            RepositoryKind::Virtual => VirtualRepoConfig::deserialize(value).map(Self::Virtual),
            RepositoryKind::Unknown(_) => Ok(Self::Generic(base)),
        }
    }

    /// Shared fields of the configuration
    pub fn base(&self) -> &GenericRepoConfig {
        match self {
            Self::Local(c) => &c.base,
            Self::Remote(c) => &c.base,
            Self::Virtual(c) => &c.base,
            Self::Generic(c) => c,
        }
    }

    /// Mutable access to the shared fields
    pub fn base_mut(&mut self) -> &mut GenericRepoConfig {
        match self {
            Self::Local(c) => &mut c.base,
            Self::Remote(c) => &mut c.base,
            Self::Virtual(c) => &mut c.base,
            Self::Generic(c) => c,
        }
    }

    /// Build the configuration matching a base's tag
    ///
    /// Known tags get their dedicated shape with every kind-specific field
    /// unset; anything else stays [`RepositoryConfig::Generic`].
    pub fn from_base(base: GenericRepoConfig) -> Self {
        match base.rclass {
            RepositoryKind::Local => Self::Local(LocalRepoConfig {
                base,
                ..Default::default()
            }),
            RepositoryKind::Remote => Self::Remote(RemoteRepoConfig {
                base,
                ..Default::default()
            }),
            RepositoryKind::Virtual => Self::Virtual(VirtualRepoConfig {
                base,
                ..Default::default()
            }),
            RepositoryKind::Unknown(_) => Self::Generic(base),
        }
    }

    /// Align the configuration with what it looks like on the wire
    ///
    /// Sets each shape's base tag from its variant and moves a `Generic`
    /// with a known tag into its dedicated shape.
    pub fn normalize(self) -> Self {
        match self {
            Self::Local(mut c) => {
                c.base.rclass = RepositoryKind::Local;
                Self::Local(c)
            }
            Self::Remote(mut c) => {
                c.base.rclass = RepositoryKind::Remote;
                Self::Remote(c)
            }
            Self::Virtual(mut c) => {
                c.base.rclass = RepositoryKind::Virtual;
                Self::Virtual(c)
            }
            Self::Generic(base) => Self::from_base(base),
        }
    }

    pub fn key(&self) -> &str {
        &self.base().key
    }

    /// Kind of the configuration, decided by the variant
    pub fn kind(&self) -> RepositoryKind {
        match self {
            Self::Local(_) => RepositoryKind::Local,
            Self::Remote(_) => RepositoryKind::Remote,
            Self::Virtual(_) => RepositoryKind::Virtual,
            Self::Generic(c) => c.rclass.clone(),
        }
    }
}

impl PartialEq for RepositoryConfig {
    fn eq(&self, other: &Self) -> bool {
        match (self.clone().normalize(), other.clone().normalize()) {
            (Self::Local(a), Self::Local(b)) => a == b,
            (Self::Remote(a), Self::Remote(b)) => a == b,
            (Self::Virtual(a), Self::Virtual(b)) => a == b,
            (Self::Generic(a), Self::Generic(b)) => a == b,
            _ => false,
        }
    }
}

impl RepoConfig for RepositoryConfig {
    fn mime_type(&self) -> &'static str {
        match self {
            Self::Local(c) => c.mime_type(),
            Self::Remote(c) => c.mime_type(),
            Self::Virtual(c) => c.mime_type(),
            Self::Generic(c) => c.mime_type(),
        }
    }
}

impl<'de> Deserialize<'de> for RepositoryConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<LocalRepoConfig> for RepositoryConfig {
    fn from(config: LocalRepoConfig) -> Self {
        Self::Local(config).normalize()
    }
}

impl From<RemoteRepoConfig> for RepositoryConfig {
    fn from(config: RemoteRepoConfig) -> Self {
        Self::Remote(config).normalize()
    }
}

impl From<VirtualRepoConfig> for RepositoryConfig {
    fn from(config: VirtualRepoConfig) -> Self {
        Self::Virtual(config).normalize()
    }
}

impl From<GenericRepoConfig> for RepositoryConfig {
    fn from(config: GenericRepoConfig) -> Self {
        Self::from_base(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn local_fixture(rclass: &str) -> Value {
        json!({
            "key": "libs-release-local",
            "rclass": rclass,
            "packageType": "maven",
            "description": "Local releases",
            "includesPattern": "**/*",
            "handleReleases": true,
            "handleSnapshots": false,
            "maxUniqueSnapshots": 5,
            "supressPomConsistencyChecks": true,
            "propertySets": ["artifactory"],
            "repoLayoutRef": "maven-2-default",
            "checksumPolicyType": "client-checksums",
            "archiveBrowsingEnabled": true,
            "yumRootDepth": 2
        })
    }

    #[test]
    fn test_local_fixture_decodes_local_fields() {
        let config = RepositoryConfig::from_value(local_fixture("local")).unwrap();

        let RepositoryConfig::Local(local) = &config else {
            panic!("expected a local configuration, got {:?}", config);
        };
        assert_eq!(local.base.key, "libs-release-local");
        assert_eq!(local.base.package_type.as_deref(), Some("maven"));
        assert_eq!(local.base.handle_snapshots, Some(false));
        assert_eq!(local.base.max_unique_snapshots, Some(5));
        assert_eq!(local.base.suppress_pom_consistency_checks, Some(true));
        assert_eq!(local.base.property_sets, vec!["artifactory"]);
        assert_eq!(local.layout_ref.as_deref(), Some("maven-2-default"));
        assert_eq!(
            local.checksum_policy_type.as_deref(),
            Some("client-checksums")
        );
        assert_eq!(local.archive_browsing_enabled, Some(true));
        assert_eq!(local.yum_root_depth, Some(2));
        assert_eq!(local.calculate_yum_metadata, None);
    }

    #[test]
    fn test_remote_tag_does_not_pick_up_local_fields() {
        let config = RepositoryConfig::from_value(local_fixture("remote")).unwrap();

        let RepositoryConfig::Remote(remote) = &config else {
            panic!("expected a remote configuration, got {:?}", config);
        };
        assert_eq!(remote.base.key, "libs-release-local");
        assert_eq!(remote.url, "");

        let encoded = serde_json::to_value(&config).unwrap();
        assert!(encoded.get("repoLayoutRef").is_none());
        assert!(encoded.get("checksumPolicyType").is_none());
        assert!(encoded.get("archiveBrowsingEnabled").is_none());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_shared_fields() {
        let config = RepositoryConfig::from_value(local_fixture("unknown")).unwrap();

        let RepositoryConfig::Generic(base) = &config else {
            panic!("expected a generic configuration, got {:?}", config);
        };
        assert_eq!(base.key, "libs-release-local");
        assert_eq!(base.rclass, RepositoryKind::Unknown("unknown".to_string()));
        assert_eq!(config.mime_type(), GENERIC_REPO_MIME_TYPE);
    }

    #[test]
    fn test_missing_rclass_falls_back_to_shared_fields() {
        let config = RepositoryConfig::from_value(json!({ "key": "orphan" })).unwrap();
        assert!(matches!(config, RepositoryConfig::Generic(_)));
        assert_eq!(config.key(), "orphan");
    }

    #[test]
    fn test_mistyped_kind_field_is_an_error() {
        let err = RepositoryConfig::from_value(json!({
            "key": "libs",
            "rclass": "virtual",
            "repositories": "not-a-list"
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(RepositoryConfig::from_slice(b"[1, 2, 3]").is_err());
        assert!(RepositoryConfig::from_slice(b"not json").is_err());
    }

    #[test]
    fn test_virtual_decodes_members_in_order() {
        let config = RepositoryConfig::from_slice(
            br#"{"key":"libs","rclass":"virtual","repositories":["a","b"]}"#,
        )
        .unwrap();

        let RepositoryConfig::Virtual(virt) = config else {
            panic!("expected a virtual configuration");
        };
        assert_eq!(virt.repositories, vec!["a", "b"]);
        assert_eq!(virt.key_pair, None);
    }

    #[test]
    fn test_round_trip_every_kind() {
        let mut local = LocalRepoConfig::new("libs-local");
        local.base.package_type = Some("maven".to_string());
        local.layout_ref = Some("maven-2-default".to_string());
        local.calculate_yum_metadata = Some(false);

        let mut remote = RemoteRepoConfig::new("jcenter", "https://jcenter.bintray.com");
        remote.username = Some("reader".to_string());
        remote.retrieval_cache_period_secs = Some(7200);
        remote.unused_artifacts_cleanup_enabled = Some(true);
        remote.vcs_git_provider = Some("GITHUB".to_string());

        let mut virt = VirtualRepoConfig::new("libs", vec!["libs-local".into(), "jcenter".into()]);
        virt.key_pair = Some("signing".to_string());
        virt.base.blacked_out = Some(true);

        let mut generic = GenericRepoConfig::new("fed", RepositoryKind::from_tag("federated"));
        generic.notes = Some("managed elsewhere".to_string());

        for config in [
            RepositoryConfig::from(local),
            RepositoryConfig::from(remote),
            RepositoryConfig::from(virt),
            RepositoryConfig::from(generic),
        ] {
            let bytes = serde_json::to_vec(&config).unwrap();
            let decoded = RepositoryConfig::from_slice(&bytes).unwrap();
            assert_eq!(decoded, config);
        }
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let encoded = serde_json::to_value(LocalRepoConfig::new("libs-local")).unwrap();
        assert_eq!(encoded, json!({ "key": "libs-local", "rclass": "local" }));
    }

    #[test]
    fn test_required_fields_are_always_sent() {
        let remote = serde_json::to_value(RemoteRepoConfig::new("r", "")).unwrap();
        assert_eq!(remote["url"], json!(""));

        let virt = serde_json::to_value(VirtualRepoConfig::new("v", vec![])).unwrap();
        assert_eq!(virt["repositories"], json!([]));
    }

    #[test]
    fn test_explicit_false_is_sent() {
        let mut local = LocalRepoConfig::new("libs-local");
        local.base.handle_snapshots = Some(false);

        let encoded = serde_json::to_value(&local).unwrap();
        assert_eq!(encoded["handleSnapshots"], json!(false));
    }

    #[test]
    fn test_wire_names_are_verbatim() {
        let mut remote = RemoteRepoConfig::new("r", "https://example.com");
        remote.base.suppress_pom_consistency_checks = Some(true);
        remote.unused_artifacts_cleanup_period_hours = Some(12);
        remote.bower_registry_url = Some("https://registry.bower.io".to_string());

        let encoded = serde_json::to_value(&remote).unwrap();
        assert_eq!(encoded["supressPomConsistencyChecks"], json!(true));
        assert_eq!(encoded["unusedArtifactCleanupPeriodHours"], json!(12));
        assert_eq!(encoded["bowerRegistryUrl"], json!("https://registry.bower.io"));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(LocalRepoConfig::new("a").mime_type(), LOCAL_REPO_MIME_TYPE);
        assert_eq!(
            RepositoryConfig::from(RemoteRepoConfig::new("b", "u")).mime_type(),
            REMOTE_REPO_MIME_TYPE
        );
        assert_eq!(
            RepositoryConfig::from(VirtualRepoConfig::new("c", vec![])).mime_type(),
            VIRTUAL_REPO_MIME_TYPE
        );
    }

    #[test]
    fn test_deserialize_impl_dispatches_on_kind() {
        let configs: Vec<RepositoryConfig> = serde_json::from_value(json!([
            { "key": "a", "rclass": "local", "repoLayoutRef": "simple-default" },
            { "key": "b", "rclass": "remote", "url": "https://example.com" }
        ]))
        .unwrap();

        assert_eq!(configs[0].kind(), RepositoryKind::Local);
        assert_eq!(configs[1].kind(), RepositoryKind::Remote);
    }

    #[test]
    fn test_struct_literal_shape_is_sent_with_its_own_tag() {
        let local = LocalRepoConfig {
            base: GenericRepoConfig {
                key: "libs".to_string(),
                ..Default::default()
            },
            layout_ref: Some("maven-2-default".to_string()),
            ..Default::default()
        };

        let encoded = serde_json::to_value(&local).unwrap();
        assert_eq!(
            encoded,
            json!({ "key": "libs", "rclass": "local", "repoLayoutRef": "maven-2-default" })
        );
        assert_eq!(local.mime_type(), LOCAL_REPO_MIME_TYPE);

        let config = RepositoryConfig::Local(local);
        let decoded = RepositoryConfig::from_slice(&serde_json::to_vec(&config).unwrap()).unwrap();
        let RepositoryConfig::Local(decoded_local) = &decoded else {
            panic!("expected a local configuration, got {:?}", decoded);
        };
        assert_eq!(decoded_local.layout_ref.as_deref(), Some("maven-2-default"));
        assert_eq!(decoded, config);
        assert_eq!(config.kind(), RepositoryKind::Local);
    }

    #[test]
    fn test_shape_tag_overrides_base_tag() {
        let mut remote = RemoteRepoConfig::new("jcenter", "https://jcenter.bintray.com");
        remote.base.rclass = RepositoryKind::Virtual;

        let encoded = serde_json::to_value(&remote).unwrap();
        assert_eq!(encoded["rclass"], json!("remote"));
        assert_eq!(RepositoryConfig::Remote(remote).kind(), RepositoryKind::Remote);
    }

    #[test]
    fn test_generic_with_known_tag_round_trips() {
        let config = RepositoryConfig::Generic(GenericRepoConfig::new("x", RepositoryKind::Local));
        assert_eq!(config.mime_type(), LOCAL_REPO_MIME_TYPE);

        let decoded = RepositoryConfig::from_slice(&serde_json::to_vec(&config).unwrap()).unwrap();
        assert!(matches!(decoded, RepositoryConfig::Local(_)));
        assert_eq!(decoded, config);

        let converted = RepositoryConfig::from(GenericRepoConfig::new("x", RepositoryKind::Local));
        assert!(matches!(converted, RepositoryConfig::Local(_)));
    }

    #[test]
    fn test_different_kinds_are_not_equal() {
        let local = RepositoryConfig::from(LocalRepoConfig::new("libs"));
        let virt = RepositoryConfig::from(VirtualRepoConfig::new("libs", vec![]));
        assert_ne!(local, virt);
    }

    #[test]
    fn test_base_mut_edits_shared_fields() {
        let mut config = RepositoryConfig::from(VirtualRepoConfig::new("libs", vec![]));
        config.base_mut().description = Some("all libraries".to_string());
        assert_eq!(config.base().description.as_deref(), Some("all libraries"));
    }
}
