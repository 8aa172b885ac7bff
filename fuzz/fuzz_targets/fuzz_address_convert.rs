#![no_main]

use libfuzzer_sys::fuzz_target;

use consolidate_types::address::decode_payload;
use consolidate_types::convert_address;

// Conversion must never panic, and every successful conversion must keep
// the payload bytes.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(converted) = convert_address(s, "cosmos", "g") {
        let (_, before, _) = decode_payload(s).expect("source decoded once already");
        let (hrp, after, _) = decode_payload(&converted).expect("converted address decodes");
        assert_eq!(hrp, "g");
        assert_eq!(before, after);
    }
});
