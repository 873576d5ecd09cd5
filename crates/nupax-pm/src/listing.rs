//! In-memory candidate version listings

use indexmap::IndexMap;
use nupax_semver::Version;

/// Candidate versions per package, kept in the order the source reported them.
///
/// Stands in for a package source listing; the resolver only ever borrows
/// the candidate slices and never retains them.
#[derive(Debug, Clone, Default)]
pub struct VersionListing {
    packages: IndexMap<String, Vec<Version>>,
}

impl VersionListing {
    /// Create an empty listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a candidate version for a package
    pub fn add(&mut self, package: impl Into<String>, version: Version) {
        self.packages.entry(package.into()).or_default().push(version);
    }

    /// The candidate versions reported for a package
    pub fn versions(&self, package: &str) -> Option<&[Version]> {
        self.packages.get(package).map(|v| v.as_slice())
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Number of packages with at least one candidate
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Package names in insertion order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut listing = VersionListing::new();
        assert!(listing.is_empty());

        listing.add("serilog", Version::new(1, 0, 0));
        listing.add("serilog", Version::new(1, 1, 0));
        listing.add("newtonsoft", Version::new(13, 0, 1));

        assert_eq!(listing.len(), 2);
        assert!(listing.contains("serilog"));
        assert!(!listing.contains("polly"));
        assert_eq!(listing.versions("serilog").unwrap().len(), 2);
        assert_eq!(listing.versions("polly"), None);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut listing = VersionListing::new();
        listing.add("b", Version::new(1, 0, 0));
        listing.add("a", Version::new(1, 0, 0));
        let names: Vec<&str> = listing.package_names().collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
