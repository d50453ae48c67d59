#![no_main]
use libfuzzer_sys::fuzz_target;
use webjson::{Options, encode_to_string, loads};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = loads(s) {
            for max_depth in [1, 8, 100] {
                let opts = Options::default().with_max_depth(max_depth);
                if let Ok(out) = encode_to_string(&value, &opts) {
                    assert!(out.bytes().all(|b| (0x20..=0x7e).contains(&b)), "non-printable output: {:?}", out);
                }
            }
        }
    }
});
