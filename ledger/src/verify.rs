//! Conservation check between an aggregated ledger and its expected total.

use consolidate_types::Decimal;
use tracing::{error, info};

use crate::error::LedgerError;

/// Fail with both values unless `computed == expected` exactly.
///
/// A mismatch means account generation dropped, duplicated or mis-mapped a
/// record. It is fatal and never corrected here.
pub fn verify_conservation(computed: Decimal, expected: Decimal) -> Result<(), LedgerError> {
    if computed != expected {
        error!(computed = %computed, expected = %expected, "ledger total mismatch");
        return Err(LedgerError::ConservationMismatch { computed, expected });
    }
    info!(total = %computed, "ledger total verified");
    Ok(())
}
