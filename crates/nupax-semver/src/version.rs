//! Version model and parsing

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::comparator::{VersionComparator, VersionComparison};

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,
    #[error("Invalid version string \"{0}\"")]
    Invalid(String),
    #[error("Numeric segment out of range in \"{0}\"")]
    SegmentOverflow(String),
}

lazy_static! {
    /// 2 to 4 dot-separated numeric segments, optional -release and +metadata
    static ref VERSION_BODY: &'static str =
        r"(\d+)\.(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?";

    static ref STRICT_VERSION_RE: Regex =
        Regex::new(&format!(r"^{}$", *VERSION_BODY)).unwrap();

    // Lenient parsing additionally tolerates a leading v prefix
    static ref LENIENT_VERSION_RE: Regex =
        Regex::new(&format!(r"^[vV]?{}$", *VERSION_BODY)).unwrap();
}

/// An immutable four-part version with optional release label and build metadata.
///
/// Ordering compares the numeric parts, then the release label; a version
/// without a label sorts after the same numeric parts with one. Build
/// metadata never participates in ordering, equality, or hashing.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    release: Option<String>,
    metadata: Option<String>,
}

impl Version {
    /// Create a version from its numeric triple; revision defaults to 0
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            revision: 0,
            release: None,
            metadata: None,
        }
    }

    /// Set the revision part
    pub fn with_revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Set the prerelease label, e.g. `beta.1`
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    /// Set the build metadata tag
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Parse a version string.
    ///
    /// The string must carry 2 to 4 dot-separated numeric segments, an
    /// optional `-<release>` label, and an optional `+<metadata>` tag.
    /// Lenient mode additionally trims surrounding whitespace and accepts
    /// a leading `v`.
    pub fn parse(text: &str, lenient: bool) -> Result<Self, VersionError> {
        let text = if lenient { text.trim() } else { text };
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        let re: &Regex = if lenient {
            &*LENIENT_VERSION_RE
        } else {
            &*STRICT_VERSION_RE
        };
        let caps = re
            .captures(text)
            .ok_or_else(|| VersionError::Invalid(text.to_string()))?;

        let major = parse_segment(&caps[1], text)?;
        let minor = parse_segment(&caps[2], text)?;
        let patch = match caps.get(3) {
            Some(m) => parse_segment(m.as_str(), text)?,
            None => 0,
        };
        let revision = match caps.get(4) {
            Some(m) => parse_segment(m.as_str(), text)?,
            None => 0,
        };

        Ok(Version {
            major,
            minor,
            patch,
            revision,
            release: caps.get(5).map(|m| m.as_str().to_string()),
            metadata: caps.get(6).map(|m| m.as_str().to_string()),
        })
    }

    /// Parse a version string, discarding the error
    pub fn try_parse(text: &str, lenient: bool) -> Option<Self> {
        Self::parse(text, lenient).ok()
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The prerelease label, if any
    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    /// The build metadata tag, if any
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// True when the version carries a non-empty prerelease label
    pub fn is_prerelease(&self) -> bool {
        self.release.as_deref().map_or(false, |r| !r.is_empty())
    }

    /// The numeric parts only, with the revision included when non-zero
    pub fn numeric_string(&self) -> String {
        if self.revision != 0 {
            format!("{}.{}.{}.{}", self.major, self.minor, self.patch, self.revision)
        } else {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        }
    }

    /// Compare against another version under the given strategy
    pub fn compare(&self, other: &Version, comparison: VersionComparison) -> Ordering {
        VersionComparator::new(comparison).compare(self, other)
    }
}

fn parse_segment(segment: &str, version: &str) -> Result<u64, VersionError> {
    segment
        .parse()
        .map_err(|_| VersionError::SegmentOverflow(version.to_string()))
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s, false)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numeric_string())?;
        if let Some(release) = &self.release {
            write!(f, "-{}", release)?;
        }
        if let Some(metadata) = &self.metadata {
            write!(f, "+{}", metadata)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        VersionComparator::default().compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

// Consistent with Eq: metadata is excluded, release segments hash in their
// compared form (numeric value, or lowercased text).
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.revision.hash(state);
        match &self.release {
            None => state.write_u8(0),
            Some(release) => {
                state.write_u8(1);
                for segment in release.split('.') {
                    match segment.parse::<u64>() {
                        Ok(number) => {
                            state.write_u8(0);
                            number.hash(state);
                        }
                        Err(_) => {
                            state.write_u8(1);
                            segment.to_ascii_lowercase().hash(state);
                        }
                    }
                }
            }
        }
    }
}
