//! Server version discovery.
//!
//! A [`ServerVersioner`] reports the version a cluster is running. The gate
//! only depends on this trait, so tests and callers with their own
//! Kubernetes client can plug in whatever source they have.
//!
//! # Modules
//!
//! - [`http`] - Fetches `/version` from an API server over HTTP
//! - [`fixed`] - Returns a preset version or failure

pub mod fixed;
pub mod http;

pub use fixed::StaticVersioner;
pub use http::HttpVersioner;

use crate::error::Result;
use crate::version::VersionInfo;

/// Something that can report a server's version.
pub trait ServerVersioner {
    /// Retrieve the server's current version descriptor.
    fn server_version(&self) -> Result<VersionInfo>;
}

impl<T: ServerVersioner + ?Sized> ServerVersioner for &T {
    fn server_version(&self) -> Result<VersionInfo> {
        (**self).server_version()
    }
}

impl<T: ServerVersioner + ?Sized> ServerVersioner for Box<T> {
    fn server_version(&self) -> Result<VersionInfo> {
        (**self).server_version()
    }
}
