use consolidate_types::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("line {line}: malformed record {record:?}")]
    MalformedRecord { line: u64, record: String },

    #[error("line {line}: malformed amount {amount:?}")]
    MalformedAmount { line: u64, amount: String },

    #[error("conservation violated: ledger sums to {computed}, expected {expected}")]
    ConservationMismatch { computed: Decimal, expected: Decimal },

    #[error("line {line}: arithmetic overflow in ledger total")]
    Overflow { line: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
