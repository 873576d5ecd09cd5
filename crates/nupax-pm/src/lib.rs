//! Version selection over candidate package listings
//!
//! Consumes the range engine from `nupax-semver`: given a parsed range and
//! the versions a package source reports, filter to the satisfying ones and
//! pick the best match under a comparator.

mod listing;
mod resolver;

pub use listing::VersionListing;
pub use resolver::{ResolveError, VersionResolver};
