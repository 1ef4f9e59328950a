//! Error types for version gate operations.
//!
//! This module defines [`GateError`], the error type returned by every
//! operation in the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures reported by a [`ServerVersioner`](crate::discovery::ServerVersioner)
//!   are returned to the caller exactly as produced
//! - Use `anyhow::Error` (via `GateError::Other`) from custom versioners
//! - Messages name the offending versions so operators can act on them

use thiserror::Error;

/// Core error type for version gate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// The cluster reports a version below the required minimum.
    #[error(
        "kubernetes version {current:?} is not compatible, need at least {minimum:?} \
         (this can be overridden with the env var {key:?})"
    )]
    VersionTooLow {
        current: String,
        minimum: String,
        key: String,
    },

    /// The server version could not be retrieved.
    #[error("Failed to retrieve server version from {endpoint}: {message}")]
    Retrieval { endpoint: String, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for version gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
