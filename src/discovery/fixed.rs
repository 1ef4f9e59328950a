//! Fixed-answer versioner.
//!
//! `StaticVersioner` implements [`ServerVersioner`] with a preset answer and
//! records how often it was asked. It is useful in tests and for callers that
//! already know the server version.
//!
//! # Example
//!
//! ```
//! use kubegate::discovery::{ServerVersioner, StaticVersioner};
//!
//! let versioner = StaticVersioner::version("v1.27.3");
//! assert_eq!(versioner.server_version().unwrap().git_version, "v1.27.3");
//! assert_eq!(versioner.calls(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;

use super::ServerVersioner;
use crate::error::Result;
use crate::version::VersionInfo;

#[derive(Debug, Clone)]
enum Answer {
    Version(VersionInfo),
    Failure(String),
}

/// A versioner that always gives the same answer.
#[derive(Debug)]
pub struct StaticVersioner {
    answer: Answer,
    calls: AtomicUsize,
}

impl StaticVersioner {
    /// Report the given git version.
    pub fn version(git_version: impl Into<String>) -> Self {
        Self::info(VersionInfo::new(git_version))
    }

    /// Report the given descriptor.
    pub fn info(info: VersionInfo) -> Self {
        Self {
            answer: Answer::Version(info),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every retrieval with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Answer::Failure(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `server_version` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ServerVersioner for StaticVersioner {
    fn server_version(&self) -> Result<VersionInfo> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        match &self.answer {
            Answer::Version(info) => Ok(info.clone()),
            Answer::Failure(message) => Err(anyhow!("{}", message).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GateError;

    #[test]
    fn reports_configured_version() {
        let versioner = StaticVersioner::version("v1.16.2");
        let info = versioner.server_version().unwrap();
        assert_eq!(info.git_version, "v1.16.2");
    }

    #[test]
    fn reports_full_descriptor() {
        let info = VersionInfo {
            major: "1".into(),
            minor: "27".into(),
            git_version: "v1.27.3".into(),
            ..VersionInfo::default()
        };
        let versioner = StaticVersioner::info(info.clone());
        assert_eq!(versioner.server_version().unwrap(), info);
    }

    #[test]
    fn failing_returns_error_each_time() {
        let versioner = StaticVersioner::failing("connection refused");
        for _ in 0..2 {
            let err = versioner.server_version().unwrap_err();
            assert!(matches!(err, GateError::Other(_)));
            assert_eq!(err.to_string(), "connection refused");
        }
        assert_eq!(versioner.calls(), 2);
    }

    #[test]
    fn counts_calls() {
        let versioner = StaticVersioner::version("v1.0.0");
        assert_eq!(versioner.calls(), 0);
        versioner.server_version().unwrap();
        versioner.server_version().unwrap();
        assert_eq!(versioner.calls(), 2);
    }
}
