//! Placeholder naming and content.

/// File extension of Go sources.
const GO_SOURCE_EXTENSION: &str = "go";

/// File stem used by [`PlaceholderNaming::Fixed`].
const DUMMY_TEST_STEM: &str = "dummy_test";

/// How placeholder test files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderNaming {
    /// `dummy_test.go` in every package.
    #[default]
    Fixed,
    /// `<package>_test.go`, derived from the package name.
    PackageName,
}

impl PlaceholderNaming {
    /// Pick the scheme from the `--pkgnames` toggle.
    pub fn from_flag(use_package_name: bool) -> Self {
        if use_package_name {
            PlaceholderNaming::PackageName
        } else {
            PlaceholderNaming::Fixed
        }
    }

    /// File name of the placeholder for a package called `package_name`.
    pub fn file_name(self, package_name: &str) -> String {
        match self {
            PlaceholderNaming::Fixed => format!("{DUMMY_TEST_STEM}.{GO_SOURCE_EXTENSION}"),
            PlaceholderNaming::PackageName => format!("{package_name}_test.{GO_SOURCE_EXTENSION}"),
        }
    }
}

/// Source of a placeholder test file: the package clause and nothing else.
///
/// The result compiles as an (empty) member of the package, so `go test` picks the package up
/// without running any test logic.
pub fn placeholder_source(package_name: &str) -> String {
    format!("package {package_name}")
}
