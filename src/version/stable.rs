//! Stable version recognition and ordering
//!
//! A version is stable when, after removing one optional leading `v`, it is
//! made only of dot-separated decimal integers (`1`, `1.2`, `v10.0.1`).
//! Anything carrying a pre-release or branch marker (`1.0-rc1`, `dev-main`,
//! `2.x-dev`) is not a candidate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;

static STABLE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)*$").unwrap());

/// Returns true if `version` matches the stable version grammar
pub fn is_stable(version: &str) -> bool {
    STABLE_VERSION.is_match(strip_v(version))
}

fn strip_v(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// A single numeric component of arbitrary size.
///
/// Stored as its decimal digits without leading zeros so that huge
/// date-like components compare correctly without overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Component(String);

impl Component {
    fn new(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parsed stable version: an ordered tuple of non-negative integers.
///
/// Ordering is lexicographic over the components. When one version is a
/// strict prefix of the other, the longer one is greater, so `1.2 < 1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParsedVersion(Vec<Component>);

impl ParsedVersion {
    /// Number of dot-separated components
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_stable(s) {
            return Err(VersionError::Unstable(s.to_string()));
        }
        Ok(Self(strip_v(s).split('.').map(Component::new).collect()))
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{}", first.0)?;
        }
        for component in components {
            write!(f, ".{}", component.0)?;
        }
        Ok(())
    }
}

/// Compare two stable version strings.
///
/// Returns `None` if either side is not stable.
pub fn compare(a: &str, b: &str) -> Option<Ordering> {
    let a = a.parse::<ParsedVersion>().ok()?;
    let b = b.parse::<ParsedVersion>().ok()?;
    Some(a.cmp(&b))
}

/// Pick the greatest stable version from `versions`.
///
/// Unstable entries are ignored. Among versions with equal components
/// (`v1.0` and `1.0`) the first one in input order wins.
pub fn max_stable<S: AsRef<str>>(versions: &[S]) -> Result<&str, VersionError> {
    versions
        .iter()
        .map(|v| v.as_ref())
        .filter_map(|v| v.parse::<ParsedVersion>().ok().map(|parsed| (v, parsed)))
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(original, _)| original)
        .ok_or(VersionError::EmptyInput)
}
