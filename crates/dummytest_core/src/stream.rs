//! Lenient decoding of `go list -json` output.
//!
//! `go list -json` prints one JSON object per package, back to back, with no enclosing array.
//! [`PackageStream`] walks that output lazily and yields one [`Package`] per object.
//!
//! ## Notes
//!
//! - The stream ends at end of input **or** at the first record that fails to decode. A decode error
//!   is not surfaced as an item: it is kept aside (see [`PackageStream::into_stop_error`]) and the
//!   stream simply stops. Trailing non-JSON noise after the listing therefore never loses the packages
//!   decoded before it.
//! - Once stopped, the stream stays stopped.

use std::iter::FusedIterator;

use serde_json::de::SliceRead;
use serde_json::{Deserializer, StreamDeserializer};

use crate::package::Package;

/// Lazy iterator over the package records in a listing.
pub struct PackageStream<'a> {
    records: StreamDeserializer<'a, SliceRead<'a>, Package>,
    stop_error: Option<serde_json::Error>,
    finished: bool,
}

impl<'a> PackageStream<'a> {
    pub fn new(output: &'a [u8]) -> Self {
        Self {
            records: Deserializer::from_slice(output).into_iter(),
            stop_error: None,
            finished: false,
        }
    }

    /// The decode error that ended the stream, if it did not end at end of input.
    pub fn into_stop_error(self) -> Option<serde_json::Error> {
        self.stop_error
    }
}

impl Iterator for PackageStream<'_> {
    type Item = Package;

    fn next(&mut self) -> Option<Package> {
        if self.finished {
            return None;
        }

        match self.records.next() {
            Some(Ok(package)) => Some(package),
            Some(Err(err)) => {
                self.finished = true;
                self.stop_error = Some(err);
                None
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl FusedIterator for PackageStream<'_> {}
