//! Server version descriptor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version information reported by a Kubernetes API server at `/version`.
///
/// Every field defaults to empty so partial payloads still decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VersionInfo {
    /// Major version, e.g. `"1"`.
    pub major: String,
    /// Minor version, sometimes with a `+` suffix on managed clusters.
    pub minor: String,
    /// Full version string, e.g. `"v1.27.3"`.
    pub git_version: String,
    pub git_commit: String,
    pub git_tree_state: String,
    /// RFC 3339 build timestamp.
    pub build_date: String,
    pub go_version: String,
    pub compiler: String,
    pub platform: String,
}

impl VersionInfo {
    /// Create a descriptor carrying only a git version.
    pub fn new(git_version: impl Into<String>) -> Self {
        Self {
            git_version: git_version.into(),
            ..Self::default()
        }
    }

    /// Parse the build date, if present and well-formed.
    pub fn build_date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.build_date)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.git_version)
    }
}
