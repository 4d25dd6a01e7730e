#![forbid(unsafe_code)]
//! dummytest: placeholder tests for Go packages that have none.
//!
//! Coverage tooling such as `go test -cover ./...` skips packages without test files, so their
//! statements never show up in the report. This crate lists the packages of a workspace, drops a
//! `package <name>` placeholder test file into every package lacking tests, optionally runs a
//! wrapped command, and optionally removes the placeholders again.
//!
//! ## Pipeline
//!
//! Strictly sequential: [`enumerate`] → [`create_placeholders`] → [`WrappedCommand::run`] →
//! [`remove_placeholders`]. The orchestration lives in [`cli::commands::run_session`].
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result`/`Option` with `?`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Known gap
//!
//! Placeholders carry no marker. If the process dies between creation and cleanup they stay on disk
//! and the next run treats them as real test files.

pub mod cli;
pub mod enumerate;
pub mod reconcile;
pub mod version;
pub mod wrapped;

#[cfg(test)]
mod captured_logs;

pub use cli::config::Config;
pub use enumerate::{DiscoveryError, GoListCommand, PackageLister, decode_listing, enumerate};
pub use reconcile::{PlaceholderRecord, ReconcileError, create_placeholders, remove_placeholders, write_placeholder};
pub use wrapped::{WrappedCommand, WrappedCommandError};

pub use dummytest_core::{Package, PlaceholderNaming};
