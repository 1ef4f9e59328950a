//! Kubegate - Minimum Kubernetes server version checks.
//!
//! Kubegate asks a cluster which version it is running and refuses to
//! proceed if that version is older than a required minimum. The minimum
//! defaults to `v1.15.0` and can be overridden with the
//! `KUBERNETES_MIN_VERSION` environment variable.
//!
//! # Modules
//!
//! - [`config`] - Minimum version resolution
//! - [`discovery`] - Sources of server version information
//! - [`error`] - Error types and result aliases
//! - [`gate`] - The minimum version check
//! - [`version`] - Version descriptors and semantic version ordering
//!
//! # Example
//!
//! ```
//! use kubegate::discovery::StaticVersioner;
//! use kubegate::{GateError, VersionGate};
//!
//! let gate = VersionGate::with_minimum("v1.15.0");
//! let err = gate.check(&StaticVersioner::version("v1.10.0")).unwrap_err();
//! assert!(matches!(err, GateError::VersionTooLow { .. }));
//! ```
//!
//! For checks against a live API server, see [`discovery::HttpVersioner`].

pub mod config;
pub mod discovery;
pub mod error;
pub mod gate;
pub mod version;

pub use discovery::ServerVersioner;
pub use error::{GateError, Result};
pub use gate::{check_minimum_version, VersionGate};
