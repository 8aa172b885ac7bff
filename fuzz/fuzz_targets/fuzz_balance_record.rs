#![no_main]

use libfuzzer_sys::fuzz_target;

use consolidate_ledger::{BalanceRecord, LedgerAggregator};

// Record parsing and whole-stream aggregation must never panic, and any
// record that parses must render back to the same line.
fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Ok(record) = BalanceRecord::parse(line, "ugnot") {
            let rendered = record.to_string();
            let reparsed = BalanceRecord::parse(&rendered, "ugnot").expect("rendered record parses");
            assert_eq!(reparsed.amount, record.amount);
        }
    }

    let _ = LedgerAggregator::new("ugnot").aggregate(data);
});
