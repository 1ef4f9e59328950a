//! Semantic version canonicalization and ordering.
//!
//! Versions reported by Kubernetes look like `v1.27.3`, `v1.16.2-gke.1` or
//! `v1.18.3+k3s1`. Before two of them can be ordered they are brought into a
//! canonical form: a `v` prefix, all three numeric components, the
//! pre-release tag if any, and no build metadata.
//!
//! # Example
//!
//! ```
//! use kubegate::version::{canonical, compare};
//! use std::cmp::Ordering;
//!
//! assert_eq!(canonical("v1.18").as_deref(), Some("v1.18.0"));
//! assert_eq!(canonical("v1.18.3+k3s1").as_deref(), Some("v1.18.3"));
//! assert_eq!(compare("v1.15.0", "v1.16.2"), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A canonical semantic version.
///
/// Ordering follows semantic versioning: numeric comparison of
/// major.minor.patch, then a release sorts after any of its pre-releases,
/// and pre-release identifiers compare numerically or lexically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(semver::Version);

impl Version {
    /// Parse a version string, accepting an optional leading `v` and the
    /// `v1` / `v1.2` shorthands.
    ///
    /// Returns `None` if the input is not a semantic version.
    pub fn parse(input: &str) -> Option<Self> {
        let rest = input.strip_prefix('v').unwrap_or(input);
        if rest.is_empty() {
            return None;
        }

        let split = rest.find(['-', '+']).unwrap_or(rest.len());
        let (core, suffix) = rest.split_at(split);

        let mut parts: Vec<&str> = core.split('.').collect();
        if parts.len() > 3 || !parts.iter().all(|p| is_numeric_component(p)) {
            return None;
        }
        // Shorthand is only valid for plain releases.
        if parts.len() < 3 && !suffix.is_empty() {
            return None;
        }
        parts.resize(3, "0");

        let mut version = semver::Version::parse(&format!("{}{}", parts.join("."), suffix)).ok()?;
        version.build = semver::BuildMetadata::EMPTY;
        Some(Self(version))
    }

    /// Major version number.
    pub fn major(&self) -> u64 {
        self.0.major
    }

    /// Minor version number.
    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    /// Patch version number.
    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release tag without the leading `-`, empty for releases.
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Whether this is a pre-release version.
    pub fn is_pre_release(&self) -> bool {
        !self.0.pre.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

fn is_numeric_component(part: &str) -> bool {
    !part.is_empty()
        && part.bytes().all(|b| b.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'))
}

/// Canonical form of `v`, or `None` if `v` is not a semantic version.
pub fn canonical(v: &str) -> Option<String> {
    Version::parse(v).map(|version| version.to_string())
}

/// Whether `v` is a semantic version.
pub fn is_valid(v: &str) -> bool {
    Version::parse(v).is_some()
}

/// Compare two version strings.
///
/// An invalid version is less than every valid one, and two invalid
/// versions are equal.
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::parse(a).cmp(&Version::parse(b))
}
