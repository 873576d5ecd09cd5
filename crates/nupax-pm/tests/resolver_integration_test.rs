use nupax_pm::{ResolveError, VersionListing, VersionResolver};
use nupax_semver::{FloatBehavior, FloatRange, Version};

fn listing() -> VersionListing {
    let mut listing = VersionListing::new();
    for text in [
        "1.0.0", "1.1.0", "1.1.0-beta", "1.1.3", "1.2.0", "2.0.0-alpha.1", "2.0.0-beta.2", "2.0.0",
    ] {
        listing.add("serilog", Version::parse(text, false).unwrap());
    }
    listing.add("newtonsoft", Version::parse("13.0.1", false).unwrap());
    listing
}

#[test]
fn resolves_manifest_ranges_end_to_end() {
    let listing = listing();
    let resolver = VersionResolver::new();

    let cases = [
        ("1.1.*", "1.1.3"),
        ("1.*", "1.2.0"),
        ("*", "2.0.0"),
        ("2.0.0-beta*", "2.0.0"),
    ];

    for (specifier, expected) in cases {
        let range = FloatRange::parse(specifier, false).unwrap();
        let resolved = resolver.resolve("serilog", &range, &listing).unwrap();
        assert_eq!(resolved.to_string(), expected, "range {}", specifier);
    }
}

#[test]
fn prerelease_float_prefers_matching_labels() {
    let mut listing = VersionListing::new();
    for text in ["2.0.0-alpha.1", "2.0.0-beta.1", "2.0.0-beta.10", "2.0.0-rc.1"] {
        listing.add("serilog", Version::parse(text, false).unwrap());
    }

    let resolver = VersionResolver::new();
    let range = FloatRange::parse("2.0.0-beta*", false).unwrap();
    let resolved = resolver.resolve("serilog", &range, &listing).unwrap();
    // beta.10 beats beta.1 numerically, rc.1 does not share the prefix
    assert_eq!(resolved.to_string(), "2.0.0-beta.10");
}

#[test]
fn unknown_packages_and_empty_matches_surface_as_errors() {
    let listing = listing();
    let resolver = VersionResolver::new();
    let range = FloatRange::parse("9.*", false).unwrap();

    assert!(matches!(
        resolver.resolve("polly", &range, &listing),
        Err(ResolveError::UnknownPackage(_))
    ));
    assert!(matches!(
        resolver.resolve("serilog", &range, &listing),
        Err(ResolveError::NoMatchingVersion { .. })
    ));
}

#[test]
fn parsed_ranges_round_trip_through_canonical_text() {
    let listing = listing();
    let resolver = VersionResolver::new();

    let range = FloatRange::parse("1.1.*", false).unwrap();
    assert_eq!(range.behavior(), FloatBehavior::Patch);

    let reparsed = FloatRange::parse(&range.to_string(), false).unwrap();
    assert_eq!(range, reparsed);
    assert_eq!(
        resolver.resolve("serilog", &range, &listing).unwrap(),
        resolver.resolve("serilog", &reparsed, &listing).unwrap(),
    );
}
