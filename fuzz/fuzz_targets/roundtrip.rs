#![no_main]
use libfuzzer_sys::fuzz_target;

use dualnbt::{from_bytes, from_snbt, to_bytes, to_snbt, Root, Tag};

fuzz_target!(|tag: Tag| {
    let root = Root::new("", tag);

    // Strings longer than a u16 prefix allows fail to encode.
    if let Ok(bs) = to_bytes(&root) {
        let _ = from_bytes(&bs).unwrap();
    }

    // Long arrays have no SNBT form.
    if let Ok(text) = to_snbt(&root.tag) {
        let _ = from_snbt(&text);
    }
});
