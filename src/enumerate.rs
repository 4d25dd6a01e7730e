//! Package discovery.
//!
//! The listing itself sits behind the [`PackageLister`] trait so the pipeline can be driven by
//! something other than a real Go toolchain (dry runs, tests). [`GoListCommand`] is the default and
//! shells out to `go list -json`.

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use dummytest_core::{Package, PackageStream, normalize_pattern};
use thiserror::Error;

use crate::wrapped::{combined_output, format_output};

/// Errors that abort discovery. All of them are fatal for the run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{output}, {status}")]
    Failed { status: ExitStatus, output: String },

    #[error("cannot decode package listing: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Produce the raw JSON listing for a set of package selectors.
pub trait PackageLister {
    /// Run the listing for `selectors` and return its stdout.
    ///
    /// Implementations must fail with [`DiscoveryError`] rather than return partial output when the
    /// underlying listing fails.
    fn list(&self, selectors: &[String]) -> Result<Vec<u8>, DiscoveryError>;
}

/// `go list -json <selectors...>` through a Go toolchain binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoListCommand {
    program: OsString,
}

impl GoListCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GoListCommand {
    fn default() -> Self {
        Self::new("go")
    }
}

impl PackageLister for GoListCommand {
    fn list(&self, selectors: &[String]) -> Result<Vec<u8>, DiscoveryError> {
        let output = Command::new(&self.program)
            .args(["list", "-json"])
            .args(selectors)
            .output()
            .map_err(|source| DiscoveryError::Spawn {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(DiscoveryError::Failed {
                status: output.status,
                output: format_output(&combined_output(&output)),
            });
        }

        Ok(output.stdout)
    }
}

/// List the packages matched by `pattern`.
///
/// The pattern is split on whitespace (see [`normalize_pattern`]) and every token becomes one
/// selector argument.
///
/// ## Errors
///
/// Whatever the lister reports, plus [`DiscoveryError::Decode`] when not even the first record of
/// the listing decodes.
#[tracing::instrument(skip_all, fields(pattern = %pattern.trim()))]
pub fn enumerate(lister: &dyn PackageLister, pattern: &str) -> Result<Vec<Package>, DiscoveryError> {
    let selectors = normalize_pattern(pattern);
    tracing::debug!(?selectors, "listing packages");

    let output = lister.list(&selectors)?;
    decode_listing(&output)
}

/// Decode a listing leniently.
///
/// Decoding stops quietly at the first bad record once at least one record has been read; the
/// packages before it are returned. Only a listing whose very first record is bad is an error.
pub fn decode_listing(output: &[u8]) -> Result<Vec<Package>, DiscoveryError> {
    let mut stream = PackageStream::new(output);
    let packages: Vec<Package> = stream.by_ref().collect();

    match stream.into_stop_error() {
        Some(err) if packages.is_empty() => Err(DiscoveryError::Decode(err)),
        Some(err) => {
            tracing::debug!(decoded = packages.len(), error = %err, "stopped reading package listing");
            Ok(packages)
        }
        None => Ok(packages),
    }
}
