//! Provide the pure building blocks of `dummytest`: package descriptors, package-pattern handling,
//! placeholder naming/content, and lenient decoding of `go list -json` output.
//!
//! ## Notes
//!
//! - This crate does **no IO**: it never spawns processes or touches the filesystem. The `dummytest`
//!   crate owns those boundaries and feeds bytes and descriptors through the helpers here.
//! - No global state; every option is passed in explicitly.

pub mod package;
pub mod pattern;
pub mod placeholder;
pub mod stream;

pub use package::Package;
pub use pattern::{DEFAULT_PATTERN, PATTERN_ENV_VAR, normalize_pattern};
pub use placeholder::{PlaceholderNaming, placeholder_source};
pub use stream::PackageStream;
