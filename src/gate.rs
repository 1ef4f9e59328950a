//! Minimum server version gate.
//!
//! The gate asks a [`ServerVersioner`] for the cluster's version and fails if
//! it is older than the configured minimum.
//!
//! # Example
//!
//! ```
//! use kubegate::discovery::StaticVersioner;
//! use kubegate::VersionGate;
//!
//! let gate = VersionGate::with_minimum("v1.15.0");
//! assert!(gate.check(&StaticVersioner::version("v1.16.2")).is_ok());
//!
//! let err = gate.check(&StaticVersioner::version("v1.10.0")).unwrap_err();
//! assert!(err.to_string().contains("v1.10.0"));
//! ```

use std::env::VarError;

use tracing::{debug, warn};

use crate::config::{
    minimum_version, minimum_version_with_env, MinimumVersion, KUBERNETES_MIN_VERSION_KEY,
};
use crate::discovery::ServerVersioner;
use crate::error::{GateError, Result};
use crate::version::Version;

/// Check that the server reported by `versioner` meets the minimum version.
///
/// The minimum is read from `KUBERNETES_MIN_VERSION`, falling back to
/// [`DEFAULT_MINIMUM_VERSION`](crate::config::DEFAULT_MINIMUM_VERSION).
/// Retrieval failures are returned unchanged.
pub fn check_minimum_version<V>(versioner: &V) -> Result<()>
where
    V: ServerVersioner + ?Sized,
{
    VersionGate::from_env().check(versioner)
}

/// A minimum version requirement.
#[derive(Debug, Clone, Default)]
pub struct VersionGate {
    minimum: MinimumVersion,
}

impl VersionGate {
    /// Gate on the minimum configured in the process environment.
    pub fn from_env() -> Self {
        Self {
            minimum: minimum_version(),
        }
    }

    /// Gate on the minimum resolved through a custom env var lookup.
    pub fn with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        Self {
            minimum: minimum_version_with_env(env_fn),
        }
    }

    /// Gate on an explicit minimum, ignoring the environment.
    pub fn with_minimum(minimum: impl Into<String>) -> Self {
        Self {
            minimum: MinimumVersion::explicit(minimum),
        }
    }

    /// The minimum this gate enforces.
    pub fn minimum(&self) -> &MinimumVersion {
        &self.minimum
    }

    /// Retrieve the server version and compare it against the minimum.
    pub fn check<V>(&self, versioner: &V) -> Result<()>
    where
        V: ServerVersioner + ?Sized,
    {
        let info = versioner.server_version()?;
        self.is_satisfied_by(&info.to_string())
    }

    /// Compare a version string against the minimum without retrieving it.
    ///
    /// Strings that are not semantic versions sort below every valid one, so
    /// an unparsable minimum admits any server and an unparsable server
    /// version fails any valid minimum.
    pub fn is_satisfied_by(&self, current: &str) -> Result<()> {
        let minimum_value = self.minimum.value();
        let minimum = Version::parse(minimum_value);
        if minimum.is_none() {
            warn!(
                "Minimum version {:?} ({}) is not a semantic version; every server will pass",
                minimum_value,
                self.minimum.source()
            );
        }
        let current_version = Version::parse(current);

        debug!(
            "Comparing server version {} against minimum {} ({})",
            current,
            minimum_value,
            self.minimum.source()
        );

        if minimum > current_version {
            let current = current_version
                .map(|v| v.to_string())
                .unwrap_or_else(|| current.to_string());
            warn!(
                "Server version {} is below the required minimum {}",
                current, minimum_value
            );
            return Err(GateError::VersionTooLow {
                current,
                minimum: minimum_value.to_string(),
                key: KUBERNETES_MIN_VERSION_KEY.to_string(),
            });
        }

        Ok(())
    }
}
