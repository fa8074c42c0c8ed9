//! Fuzz target for classifier.json parsing.

#![no_main]

use credal_config::validate::validate_classifier;
use credal_config::ClassifierConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(config) = ClassifierConfig::from_json_str(text) {
            let _ = validate_classifier(&config);
            let _ = serde_json::to_string(&config);
        }
    }
});
