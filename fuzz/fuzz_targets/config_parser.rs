#![no_main]

use glnorm::config::ConfigStore;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Arbitrary tables must be rejected with an error, never a panic
        if let Ok(store) = ConfigStore::from_toml_str(input) {
            let _ = store.suffixes().resolve("glFoo");
            let _ = store.reserved().escape("glFoo".to_string());
        }
    }
});
