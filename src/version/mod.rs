//! Version descriptors and semantic version ordering.
//!
//! # Modules
//!
//! - [`canonical`] - Canonicalization and comparison of version strings
//! - [`info`] - The descriptor a server reports at `/version`

pub mod canonical;
pub mod info;

pub use canonical::{canonical, compare, is_valid, Version};
pub use info::VersionInfo;
