//! Distribution-specific errors.

use consolidate_types::ConsolidateError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("no qualifying weight: total weight is zero, nothing to distribute")]
    NoQualifyingWeight,

    #[error("account {address} has malformed amount {amount:?}")]
    MalformedAmount { address: String, amount: String },

    #[error("account {address}: amount {amount:?} overflows the weight range")]
    AmountOverflow { address: String, amount: String },

    #[error("arithmetic overflow in distribution")]
    Overflow,

    #[error(transparent)]
    Types(#[from] ConsolidateError),
}
