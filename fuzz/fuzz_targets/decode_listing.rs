#![no_main]

use dummytest::{PlaceholderNaming, decode_listing};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary listing output must decode or fail cleanly
    if let Ok(packages) = decode_listing(data) {
        // Placeholder paths are computed for every decoded package
        for package in &packages {
            let _ = package.placeholder_path(PlaceholderNaming::Fixed);
            let _ = package.placeholder_path(PlaceholderNaming::PackageName);
        }
    }
});
