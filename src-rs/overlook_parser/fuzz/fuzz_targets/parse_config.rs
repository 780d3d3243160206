#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The parser must reject or accept arbitrary input, never panic.
    // A successful parse must also uphold the tree's own invariants.
    if let Ok(config) = overlook_parser::parse_config(data) {
        for server in config.servers() {
            assert!(!server.address().is_empty());
        }
    }
});
