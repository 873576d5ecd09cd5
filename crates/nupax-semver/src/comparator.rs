//! Version comparison strategies

use std::cmp::Ordering;

use crate::Version;

/// Which parts of a version participate in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionComparison {
    /// Numeric parts only
    Version,
    /// Numeric parts plus the release label; the default relation
    #[default]
    VersionRelease,
    /// Full identity, breaking remaining ties on build metadata
    VersionReleaseMetadata,
}

/// Applies one [`VersionComparison`] strategy to version pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionComparator {
    comparison: VersionComparison,
}

impl VersionComparator {
    /// Create a comparator with the given strategy
    pub fn new(comparison: VersionComparison) -> Self {
        VersionComparator { comparison }
    }

    /// The default comparator: numeric parts plus release label
    pub fn version_release() -> Self {
        Self::new(VersionComparison::VersionRelease)
    }

    /// Compare two versions under this comparator's strategy
    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        let ord = a
            .major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| a.revision().cmp(&b.revision()));
        if ord != Ordering::Equal || self.comparison == VersionComparison::Version {
            return ord;
        }

        let ord = compare_releases(a.release(), b.release());
        if ord != Ordering::Equal || self.comparison == VersionComparison::VersionRelease {
            return ord;
        }

        compare_metadata(a.metadata(), b.metadata())
    }

    /// Check two versions for equality under this comparator's strategy
    pub fn equals(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Equality over optional floor versions.
    ///
    /// Two absent floors are equal; an absent and a present floor are not.
    pub fn equals_floor(&self, a: Option<&Version>, b: Option<&Version>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.equals(a, b),
            _ => false,
        }
    }
}

fn compare_releases(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // a version without a release label sorts after one with a label
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_release_labels(a, b),
    }
}

/// Compare dot-separated release labels segment by segment.
///
/// A shorter label sorts first when all shared segments are equal.
pub(crate) fn compare_release_labels(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match compare_release_segment(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

fn compare_release_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        // numeric segments sort before alphanumeric ones
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => ci_cmp(a, b),
    }
}

fn compare_metadata(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => ci_cmp(a, b),
    }
}

/// Ordinal ASCII case-insensitive comparison
pub(crate) fn ci_cmp(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Ordinal ASCII case-insensitive prefix check
pub(crate) fn ci_starts_with(s: &str, prefix: &str) -> bool {
    let s_bytes = s.as_bytes();
    let p_bytes = prefix.as_bytes();
    if s_bytes.len() < p_bytes.len() {
        return false;
    }
    for i in 0..p_bytes.len() {
        if !s_bytes[i].eq_ignore_ascii_case(&p_bytes[i]) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_only_comparison() {
        let comparator = VersionComparator::new(VersionComparison::Version);
        let release = Version::new(1, 0, 0);
        let prerelease = Version::new(1, 0, 0).with_release("beta");

        assert!(comparator.equals(&release, &prerelease));
        assert_eq!(
            comparator.compare(&Version::new(1, 0, 1), &release),
            Ordering::Greater
        );
    }

    #[test]
    fn test_version_release_comparison() {
        let comparator = VersionComparator::version_release();
        let release = Version::new(1, 0, 0);
        let prerelease = Version::new(1, 0, 0).with_release("beta");

        assert_eq!(comparator.compare(&prerelease, &release), Ordering::Less);
        assert!(comparator.equals(
            &Version::new(1, 0, 0).with_metadata("one"),
            &Version::new(1, 0, 0).with_metadata("two"),
        ));
    }

    #[test]
    fn test_metadata_comparison() {
        let comparator = VersionComparator::new(VersionComparison::VersionReleaseMetadata);
        let bare = Version::new(1, 0, 0);
        let tagged = Version::new(1, 0, 0).with_metadata("build.1");

        assert_eq!(comparator.compare(&bare, &tagged), Ordering::Less);
        assert!(comparator.equals(
            &Version::new(1, 0, 0).with_metadata("BUILD"),
            &Version::new(1, 0, 0).with_metadata("build"),
        ));
    }

    #[test]
    fn test_equals_floor() {
        let comparator = VersionComparator::version_release();
        let floor = Version::new(1, 0, 0);

        assert!(comparator.equals_floor(None, None));
        assert!(comparator.equals_floor(Some(&floor), Some(&floor)));
        assert!(!comparator.equals_floor(Some(&floor), None));
        assert!(!comparator.equals_floor(None, Some(&floor)));
    }

    #[test]
    fn test_release_label_segments() {
        assert_eq!(compare_release_labels("beta.2", "beta.10"), Ordering::Less);
        assert_eq!(compare_release_labels("1", "alpha"), Ordering::Less);
        assert_eq!(compare_release_labels("beta", "beta.1"), Ordering::Less);
        assert_eq!(compare_release_labels("RC", "rc"), Ordering::Equal);
        assert_eq!(compare_release_labels("alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn test_ci_starts_with() {
        assert!(ci_starts_with("beta.1", "BETA"));
        assert!(ci_starts_with("beta", ""));
        assert!(!ci_starts_with("alpha.1", "beta"));
        assert!(!ci_starts_with("b", "beta"));
    }
}
