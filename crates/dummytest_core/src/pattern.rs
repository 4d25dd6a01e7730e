//! Package-pattern handling.
//!
//! A pattern is a whitespace-separated list of `go list` selectors. It usually comes from the
//! `--tpkgs` flag or from the `GO_TEST_PACKAGES` environment variable, where it may span several
//! lines.

/// Pattern used when nothing else is configured: every package below the working directory.
pub const DEFAULT_PATTERN: &str = "./...";

/// Environment variable that replaces the configured pattern when set (even if empty).
pub const PATTERN_ENV_VAR: &str = "GO_TEST_PACKAGES";

/// Split a pattern into one selector per whitespace-separated token.
///
/// ## Notes
/// - Any whitespace run (spaces, tabs, newlines) separates tokens.
/// - Never yields an empty token; an all-whitespace pattern yields no selectors at all.
///
/// ## Examples
/// ```rust
/// use dummytest_core::normalize_pattern;
/// assert_eq!(normalize_pattern("  ./a/...\n\t./b  "), vec!["./a/...", "./b"]);
/// ```
pub fn normalize_pattern(pattern: &str) -> Vec<String> {
    pattern.split_whitespace().map(str::to_owned).collect()
}
