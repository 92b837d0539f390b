#![no_main]

use libfuzzer_sys::fuzz_target;
use rastro::config::Toggle;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Option-name lookup must never panic, whatever operators type
        if let Some(toggle) = Toggle::from_name(name) {
            assert_eq!(toggle.name(), name);
        }
    }
});
