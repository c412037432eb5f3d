#![no_main]
use libfuzzer_sys::fuzz_target;

use dualnbt::binary::{self, DeOpts};

fuzz_target!(|data: &[u8]| {
    let root = binary::decode_with_opts(data, DeOpts::new().max_seq_len(100));
    if let Ok(root) = root {
        // Anything we decoded must encode, and decode again.
        let bs = binary::encode(&root).unwrap();
        let _ = binary::decode(&bs).unwrap();
    }
});
