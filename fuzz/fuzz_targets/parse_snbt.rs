#![no_main]
use libfuzzer_sys::fuzz_target;

use dualnbt::{from_snbt, to_snbt};

fuzz_target!(|text: &str| {
    if let Ok(tag) = from_snbt(text) {
        // Parsed trees never hold long arrays, so they always print.
        let printed = to_snbt(&tag).unwrap();
        let _ = from_snbt(&printed);
    }
});
