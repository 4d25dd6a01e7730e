//! Property-based tests for dummytest
//!
//! These tests use proptest to check pattern normalization, placeholder naming and listing decoding
//! across many generated inputs.

use dummytest::{Package, PlaceholderNaming, decode_listing};
use dummytest_core::normalize_pattern;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A `go list` selector: a relative path, optionally with a `/...` wildcard.
fn selector_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9_]{0,8}(/[a-z][a-z0-9_]{0,8}){0,3}", any::<bool>()).prop_map(|(path, recursive)| {
        if recursive {
            format!("./{path}/...")
        } else {
            format!("./{path}")
        }
    })
}

/// A run of whitespace as it shows up in multi-line environment variables.
fn separator_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![" ", "\t", "\n", "\r\n"]), 1..5).prop_map(|parts| parts.concat())
}

/// Go package identifier.
fn package_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

// =============================================================================
// Pattern Properties
// =============================================================================

proptest! {
    /// Property: every selector survives normalization, in order, whatever whitespace joins them
    #[test]
    fn normalization_yields_one_argument_per_selector(
        selectors in prop::collection::vec(selector_strategy(), 0..8),
        separators in prop::collection::vec(separator_strategy(), 9),
        leading in separator_strategy(),
    ) {
        let mut pattern = leading;
        for (selector, separator) in selectors.iter().zip(&separators) {
            pattern.push_str(selector);
            pattern.push_str(separator);
        }

        prop_assert_eq!(normalize_pattern(&pattern), selectors);
    }

    /// Property: normalized arguments are never empty and never contain whitespace
    #[test]
    fn normalized_arguments_are_clean(pattern in "[ \t\r\na-z./]{0,64}") {
        for argument in normalize_pattern(&pattern) {
            prop_assert!(!argument.is_empty());
            prop_assert!(!argument.chars().any(char::is_whitespace));
        }
    }
}

// =============================================================================
// Placeholder Properties
// =============================================================================

proptest! {
    /// Property: placeholders land directly in the package directory with a `_test.go` name
    #[test]
    fn placeholder_path_is_a_test_file_in_package_dir(
        name in package_name_strategy(),
        by_package_name in any::<bool>(),
    ) {
        let package = Package::new("/work/pkg", name.clone());
        let path = package.placeholder_path(PlaceholderNaming::from_flag(by_package_name));

        prop_assert_eq!(path.parent().unwrap(), std::path::Path::new("/work/pkg"));
        let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
        prop_assert!(file_name.ends_with("_test.go"));
        if by_package_name {
            prop_assert_eq!(file_name, format!("{name}_test.go"));
        } else {
            prop_assert_eq!(file_name, "dummy_test.go");
        }
    }
}

// =============================================================================
// Listing Properties
// =============================================================================

proptest! {
    /// Property: a well-formed listing decodes every record; trailing noise never loses any
    #[test]
    fn valid_records_survive_trailing_noise(
        names in prop::collection::vec(package_name_strategy(), 1..6),
        noise in "[a-z:][ a-z:]{0,30}",
    ) {
        let mut listing = String::new();
        for name in &names {
            let record = serde_json::json!({ "Dir": format!("/work/{name}"), "Name": name });
            listing.push_str(&format!("{record:#}\n"));
        }
        listing.push_str(&noise);

        let packages = decode_listing(listing.as_bytes()).unwrap();
        let decoded: Vec<String> = packages.into_iter().map(|p| p.name).collect();
        prop_assert_eq!(decoded, names);
    }

    /// Property: decoding arbitrary bytes never panics
    #[test]
    fn decoding_arbitrary_bytes_does_not_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_listing(&bytes);
    }
}
