//! Gate configuration.
//!
//! The only configurable value is the minimum server version, overridable
//! through the `KUBERNETES_MIN_VERSION` environment variable.

pub mod minimum;

pub use minimum::{
    minimum_version, minimum_version_with_env, MinimumSource, MinimumVersion,
    DEFAULT_MINIMUM_VERSION, KUBERNETES_MIN_VERSION_KEY,
};
