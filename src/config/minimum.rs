//! Minimum version resolution.
//!
//! The minimum server version comes from, in priority order:
//! 1. An explicit value supplied by the caller
//! 2. The `KUBERNETES_MIN_VERSION` environment variable, if non-empty
//! 3. [`DEFAULT_MINIMUM_VERSION`]
//!
//! # Example
//!
//! ```
//! use kubegate::config::{minimum_version_with_env, MinimumSource, DEFAULT_MINIMUM_VERSION};
//! use std::env::VarError;
//!
//! let minimum = minimum_version_with_env(|_| Err(VarError::NotPresent));
//! assert_eq!(minimum.value(), DEFAULT_MINIMUM_VERSION);
//! assert_eq!(minimum.source(), MinimumSource::Default);
//! ```

use std::env::VarError;
use std::fmt;

/// Environment variable that overrides the minimum Kubernetes version.
pub const KUBERNETES_MIN_VERSION_KEY: &str = "KUBERNETES_MIN_VERSION";

/// Minimum Kubernetes version used when no override is set.
pub const DEFAULT_MINIMUM_VERSION: &str = "v1.15.0";

/// Where a minimum version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinimumSource {
    /// The compiled-in default.
    Default,
    /// The `KUBERNETES_MIN_VERSION` environment variable.
    Environment,
    /// Supplied directly by the caller.
    Explicit,
}

impl fmt::Display for MinimumSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimumSource::Default => write!(f, "default"),
            MinimumSource::Environment => write!(f, "env {}", KUBERNETES_MIN_VERSION_KEY),
            MinimumSource::Explicit => write!(f, "explicit"),
        }
    }
}

/// A resolved minimum version and its source.
///
/// The value is kept exactly as configured; it is canonicalized only when
/// compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumVersion {
    value: String,
    source: MinimumSource,
}

impl MinimumVersion {
    /// A minimum supplied directly by the caller.
    pub fn explicit(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: MinimumSource::Explicit,
        }
    }

    /// The compiled-in default minimum.
    pub fn default_minimum() -> Self {
        Self {
            value: DEFAULT_MINIMUM_VERSION.to_string(),
            source: MinimumSource::Default,
        }
    }

    /// The configured version string, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Where the value came from.
    pub fn source(&self) -> MinimumSource {
        self.source
    }
}

impl Default for MinimumVersion {
    fn default() -> Self {
        Self::default_minimum()
    }
}

/// Resolve the minimum version from the process environment.
pub fn minimum_version() -> MinimumVersion {
    minimum_version_with_env(|key: &str| std::env::var(key))
}

/// Resolve the minimum version with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn minimum_version_with_env<F>(env_fn: F) -> MinimumVersion
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match env_fn(KUBERNETES_MIN_VERSION_KEY) {
        Ok(value) if !value.is_empty() => MinimumVersion {
            value,
            source: MinimumSource::Environment,
        },
        _ => MinimumVersion::default_minimum(),
    }
}
