//! Floating version ranges compatible with NuGet-style package manifests
//!
//! This crate provides the version model, comparison strategies, and
//! floating-range parsing and matching used by the resolver to pick a
//! single best candidate version per dependency.

mod comparator;
mod float_range;
mod version;

pub use comparator::{VersionComparator, VersionComparison};
pub use float_range::{FloatBehavior, FloatRange, FloatRangeError};
pub use version::{Version, VersionError};
