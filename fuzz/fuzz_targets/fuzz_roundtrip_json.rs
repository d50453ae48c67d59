#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(original) = serde_json::from_str::<serde_json::Value>(s) {
            let value = webjson::Value::from(original.clone());
            if let Ok(encoded) = webjson::dumps(&value) {
                let decoded: serde_json::Value = serde_json::from_str(&encoded)
                    .unwrap_or_else(|e| panic!("encoder produced invalid JSON: {}\n{}", e, encoded));
                assert_eq!(original, decoded, "roundtrip mismatch\nEncoded: {}", encoded);
            }
        }
    }
});
