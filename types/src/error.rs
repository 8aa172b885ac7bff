//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for migration records, amounts and addresses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsolidateError {
    #[error("address {address} has prefix {found:?}, expected {expected:?}")]
    WrongSourcePrefix {
        address: String,
        expected: String,
        found: String,
    },

    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    #[error("arithmetic overflow")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,
}
