//! dummytest version information.
//!
//! Taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time. Prefer this constant over
//! repeating `env!("CARGO_PKG_VERSION")`.

/// The dummytest version string (for example, `0.1.0`).
pub const DUMMYTEST_VERSION: &str = env!("CARGO_PKG_VERSION");
