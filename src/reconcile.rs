//! Placeholder reconciliation: write placeholders where packages have no tests, remove them later.
//!
//! Every per-file failure is isolated. A file that cannot be written or removed is logged as a
//! warning and the remaining files are still processed.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dummytest_core::{Package, PlaceholderNaming};
use thiserror::Error;

#[cfg(unix)]
const PLACEHOLDER_MODE: u32 = 0o644;

/// Per-file failures. Never fatal for the run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Cannot create dummy test file on path: {}. Cause: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cleanup failed for {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Paths of the placeholders written during this run, in creation order.
///
/// Append-only while placeholders are created; consumed by [`remove_placeholders`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderRecord {
    paths: Vec<PathBuf>,
}

impl PlaceholderRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl IntoIterator for PlaceholderRecord {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl FromIterator<PathBuf> for PlaceholderRecord {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

/// Write a placeholder into every package that has no test files.
///
/// Existing files at the placeholder path are overwritten, so running this twice leaves the same
/// files behind; both runs report every placeholder as created.
#[tracing::instrument(skip_all, fields(package_count = packages.len(), naming = ?naming))]
pub fn create_placeholders(packages: &[Package], naming: PlaceholderNaming) -> PlaceholderRecord {
    let mut record = PlaceholderRecord::new();

    for package in packages.iter().filter(|p| p.needs_placeholder()) {
        match write_placeholder(package, naming) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "created placeholder");
                record.push(path);
            }
            Err(err) => tracing::warn!("{err}"),
        }
    }

    tracing::info!(created = record.len(), "placeholders in place");
    record
}

/// Write the placeholder for a single package and return its path.
pub fn write_placeholder(package: &Package, naming: PlaceholderNaming) -> Result<PathBuf, ReconcileError> {
    let path = package.placeholder_path(naming);
    match write_file(&path, package.placeholder_source().as_bytes()) {
        Ok(()) => Ok(path),
        Err(source) => Err(ReconcileError::Write { path, source }),
    }
}

/// Delete every recorded placeholder. Failures are logged and skipped.
#[tracing::instrument(skip_all, fields(count = record.len()))]
pub fn remove_placeholders(record: PlaceholderRecord) {
    for path in record {
        match fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed placeholder"),
            Err(source) => tracing::warn!("{}", ReconcileError::Delete { path, source }),
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PLACEHOLDER_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)
}
