//! Fuzz target for mammographic CSV parsing.
//!
//! Parsing arbitrary text must return rows or an error, never panic.

#![no_main]

use credal_core::dataset::mammographic;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(rows) = mammographic::parse(text) {
            for row in &rows {
                assert_eq!(row.len(), mammographic::NUM_COLUMNS);
            }
        }
    }
});
