//! Fuzz target for form config parsing.
//!
//! Tests that config parsing and validation handle arbitrary input without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sf_inputs::FormConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = FormConfig::from_json(s) {
            let _ = config.validate();
        }
    }
});
