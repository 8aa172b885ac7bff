#![no_main]

use libfuzzer_sys::fuzz_target;

use consolidate_types::Decimal;

// Decimal parsing must never panic; parsed values display and parse back
// to the same value.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(value) = s.parse::<Decimal>() {
        let back: Decimal = value.to_string().parse().expect("display output parses");
        assert_eq!(back, value);
        let _ = value.checked_mul(value);
        let _ = value.checked_quo(value);
    }
});
