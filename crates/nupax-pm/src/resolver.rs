//! Candidate filtering and best-match selection

use nupax_semver::{FloatRange, Version, VersionComparator, VersionComparison};
use thiserror::Error;

use crate::VersionListing;

/// Error type for version resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Package \"{0}\" not found in the listing")]
    UnknownPackage(String),
    #[error("No version of \"{package}\" satisfies \"{range}\" ({candidates} candidates)")]
    NoMatchingVersion {
        package: String,
        range: String,
        candidates: usize,
    },
}

/// Selects the best-matching version for a range from a candidate set
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionResolver {
    comparator: VersionComparator,
}

impl VersionResolver {
    /// Create a resolver ordering candidates with the default comparator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver ordering candidates with the given strategy
    pub fn with_comparison(comparison: VersionComparison) -> Self {
        VersionResolver {
            comparator: VersionComparator::new(comparison),
        }
    }

    /// The candidates satisfying the range, in input order
    pub fn filter<'a>(&self, range: &FloatRange, candidates: &'a [Version]) -> Vec<&'a Version> {
        candidates.iter().filter(|v| range.satisfies(v)).collect()
    }

    /// The maximum satisfying candidate under this resolver's comparator
    pub fn find_best_match<'a, I>(&self, range: &FloatRange, candidates: I) -> Option<&'a Version>
    where
        I: IntoIterator<Item = &'a Version>,
    {
        candidates
            .into_iter()
            .filter(|v| range.satisfies(v))
            .max_by(|a, b| self.comparator.compare(a, b))
    }

    /// Resolve a package's range against a listing.
    pub fn resolve<'a>(
        &self,
        package: &str,
        range: &FloatRange,
        listing: &'a VersionListing,
    ) -> Result<&'a Version, ResolveError> {
        let candidates = listing
            .versions(package)
            .ok_or_else(|| ResolveError::UnknownPackage(package.to_string()))?;

        log::debug!(
            "Selecting from {} candidate versions of {}",
            candidates.len(),
            package
        );

        match self.find_best_match(range, candidates) {
            Some(version) => {
                log::debug!("Selected {} {} for range \"{}\"", package, version, range);
                Ok(version)
            }
            None => Err(ResolveError::NoMatchingVersion {
                package: package.to_string(),
                range: range.to_string(),
                candidates: candidates.len(),
            }),
        }
    }
}
