//! Floating version range parsing, matching, and serialization

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::comparator::{ci_starts_with, VersionComparator};
use crate::{Version, VersionError};

/// Error type for range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FloatRangeError {
    #[error("Wildcard must be the final character in \"{0}\"")]
    MisplacedWildcard(String),
    #[error("Wildcard ranges cannot carry build metadata: \"{0}\"")]
    WildcardWithMetadata(String),
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Which trailing parts of a version are allowed to float.
///
/// Each variant is an independent matching strategy dispatched by
/// [`FloatRange::satisfies`], not a scalar rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatBehavior {
    /// Exact version, nothing floats
    None,
    /// The revision part floats, e.g. `1.2.3.*`
    Revision,
    /// The patch part floats, e.g. `1.2.*`
    Patch,
    /// The minor part floats, e.g. `1.*`
    Minor,
    /// Any stable version matches, i.e. `*`
    Major,
    /// The release label floats over a shared prefix, e.g. `1.0.0-beta*`
    Prerelease,
    /// Anything at all matches, including prereleases
    AbsoluteLatest,
}

/// A floating version range: a float behavior, an optional floor version,
/// and the release-label prefix the specifier was written with.
///
/// Immutable once constructed. Equality and hashing cover the behavior and
/// the floor only; the prefix text is display metadata.
#[derive(Debug, Clone)]
pub struct FloatRange {
    behavior: FloatBehavior,
    min_version: Option<Version>,
    release_prefix: Option<String>,
}

impl FloatRange {
    /// Create a range from a behavior and an optional floor version.
    ///
    /// When the floor carries a release label, the range adopts it as the
    /// prefix to float on.
    pub fn new(behavior: FloatBehavior, min_version: Option<Version>) -> Self {
        Self::with_prefix(behavior, min_version, None)
    }

    /// Create a range with an explicit release-label prefix.
    ///
    /// The prefix is kept verbatim, whether or not it is a valid label on
    /// its own; absent a prefix, the floor's release label is adopted.
    pub fn with_prefix(
        behavior: FloatBehavior,
        min_version: Option<Version>,
        release_prefix: Option<String>,
    ) -> Self {
        let release_prefix = release_prefix.or_else(|| {
            min_version
                .as_ref()
                .and_then(|v| v.release())
                .map(|r| r.to_string())
        });
        FloatRange {
            behavior,
            min_version,
            release_prefix,
        }
    }

    /// Parse a range specifier.
    ///
    /// `lenient` selects lenient parsing of the underlying versions. A
    /// failure never produces a partial range.
    pub fn parse(text: &str, lenient: bool) -> Result<Self, FloatRangeError> {
        let Some(star) = text.find('*') else {
            // no wildcard: the whole string is an exact floor version
            let min = Version::parse(text, lenient)?;
            return Ok(Self::new(FloatBehavior::None, Some(min)));
        };

        if text == "*" {
            let min = Version::parse("0.0", lenient)?;
            return Ok(Self::new(FloatBehavior::Major, Some(min)));
        }

        // the wildcard only floats from the end, and never next to metadata
        if star != text.len() - 1 {
            return Err(FloatRangeError::MisplacedWildcard(text.to_string()));
        }
        if text.contains('+') {
            return Err(FloatRangeError::WildcardWithMetadata(text.to_string()));
        }

        let version_part = &text[..text.len() - 1];

        let Some(dash) = version_part.find('-') else {
            // numeric float: the wildcard stands in for a final `0` digit
            let adjusted = format!("{}0", version_part);
            let behavior = match adjusted.split('.').count() {
                2 => FloatBehavior::Minor,
                3 => FloatBehavior::Patch,
                4 => FloatBehavior::Revision,
                _ => return Err(VersionError::Invalid(text.to_string()).into()),
            };
            let min = Version::parse(&adjusted, lenient)?;
            return Ok(Self::new(behavior, Some(min)));
        };

        // prerelease float: everything after the dash is the label prefix
        let release_prefix = &version_part[dash + 1..];
        let mut adjusted = version_part.to_string();
        if release_prefix.is_empty() || version_part.ends_with('.') {
            // e.g. 1.0.0-* or 1.0.0-beta.*: an empty label segment cannot parse
            adjusted.push('0');
        } else if version_part.ends_with('-') {
            // e.g. 1.0.0--*: keep a floating marker on the next label character
            adjusted.push('-');
        }
        let min = Version::parse(&adjusted, lenient)?;

        Ok(Self::with_prefix(
            FloatBehavior::Prerelease,
            Some(min),
            Some(release_prefix.to_string()),
        ))
    }

    /// Parse a range specifier, discarding the error
    pub fn try_parse(text: &str, lenient: bool) -> Option<Self> {
        Self::parse(text, lenient).ok()
    }

    pub fn behavior(&self) -> FloatBehavior {
        self.behavior
    }

    /// The floor version, if any
    pub fn min_version(&self) -> Option<&Version> {
        self.min_version.as_ref()
    }

    pub fn has_min_version(&self) -> bool {
        self.min_version.is_some()
    }

    /// The release-label prefix as written in the specifier, if any
    pub fn release_prefix(&self) -> Option<&str> {
        self.release_prefix.as_deref()
    }

    /// Check whether a concrete version is an acceptable match.
    ///
    /// Behaviors other than `Major` and `AbsoluteLatest` match nothing
    /// without a floor version. The `Revision` behavior deliberately never
    /// compares the revision part itself.
    pub fn satisfies(&self, version: &Version) -> bool {
        match self.behavior {
            FloatBehavior::AbsoluteLatest => return true,
            FloatBehavior::Major if !version.is_prerelease() => return true,
            _ => {}
        }

        let Some(floor) = &self.min_version else {
            return false;
        };

        match self.behavior {
            FloatBehavior::Prerelease => {
                version.major() == floor.major()
                    && version.minor() == floor.minor()
                    && version.patch() == floor.patch()
                    && self.matches_release_prefix(version)
            }
            FloatBehavior::Revision => {
                version.major() == floor.major()
                    && version.minor() == floor.minor()
                    && version.patch() == floor.patch()
                    && !version.is_prerelease()
            }
            FloatBehavior::Patch => {
                version.major() == floor.major()
                    && version.minor() == floor.minor()
                    && !version.is_prerelease()
            }
            FloatBehavior::Minor => {
                version.major() == floor.major() && !version.is_prerelease()
            }
            FloatBehavior::None | FloatBehavior::Major | FloatBehavior::AbsoluteLatest => false,
        }
    }

    fn matches_release_prefix(&self, version: &Version) -> bool {
        let Some(release) = version.release() else {
            // a stable version of the same numeric parts always matches
            return true;
        };
        match self.release_prefix.as_deref() {
            Some(prefix) => ci_starts_with(release, prefix),
            None => false,
        }
    }
}

impl PartialEq for FloatRange {
    fn eq(&self, other: &Self) -> bool {
        self.behavior == other.behavior
            && VersionComparator::version_release()
                .equals_floor(self.min_version(), other.min_version())
    }
}

impl Eq for FloatRange {}

impl Hash for FloatRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.behavior.hash(state);
        self.min_version.hash(state);
    }
}

impl fmt::Display for FloatRange {
    /// The canonical specifier text.
    ///
    /// `AbsoluteLatest` has no stable textual form and serializes as the
    /// empty string, as does any floor-less behavior other than `Major`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.behavior, &self.min_version) {
            (FloatBehavior::None, Some(floor)) => write!(f, "{}", floor),
            (FloatBehavior::Prerelease, Some(floor)) => write!(
                f,
                "{}-{}*",
                floor.numeric_string(),
                self.release_prefix.as_deref().unwrap_or("")
            ),
            (FloatBehavior::Revision, Some(floor)) => {
                write!(f, "{}.{}.{}.*", floor.major(), floor.minor(), floor.patch())
            }
            (FloatBehavior::Patch, Some(floor)) => {
                write!(f, "{}.{}.*", floor.major(), floor.minor())
            }
            (FloatBehavior::Minor, Some(floor)) => write!(f, "{}.*", floor.major()),
            (FloatBehavior::Major, _) => write!(f, "*"),
            (FloatBehavior::AbsoluteLatest, _) => Ok(()),
            (_, None) => Ok(()),
        }
    }
}
