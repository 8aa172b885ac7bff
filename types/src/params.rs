//! Migration parameters: the constants of one consolidation run.
//!
//! Passed explicitly into every component so the same logic can be exercised
//! against alternate denominations, supplies and prefixes.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::amount::Decimal;
use crate::error::ConsolidateError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationParams {
    /// The only source denomination that contributes to an account's weight.
    /// Related denominations on the same account (e.g. `duatom`) are ignored.
    pub qualifying_denom: String,

    /// Whole target-chain tokens to distribute.
    pub total_supply: u64,

    /// Decimal exponent between one whole token and the smallest unit.
    pub base_unit_exponent: u32,

    /// Bech32 prefix of source-chain addresses.
    pub source_prefix: String,

    /// Bech32 prefix of target-chain addresses.
    pub target_prefix: String,

    /// Suffix naming the target smallest unit on ledger lines.
    pub unit_suffix: String,
}

impl MigrationParams {
    /// Distribution of 700M GNOT to ATOM holders.
    pub fn gno_defaults() -> Self {
        Self {
            qualifying_denom: "uatom".to_string(),
            total_supply: 700_000_000,
            base_unit_exponent: 6,
            source_prefix: "cosmos".to_string(),
            target_prefix: "g".to_string(),
            unit_suffix: "ugnot".to_string(),
        }
    }

    /// `total_supply × 10^base_unit_exponent`, in smallest units.
    pub fn distributable(&self) -> Result<Decimal, ConsolidateError> {
        let units = U256::from(10u8)
            .checked_pow(U256::from(self.base_unit_exponent))
            .and_then(|unit| U256::from(self.total_supply).checked_mul(unit))
            .ok_or(ConsolidateError::Overflow)?;
        Decimal::from_integer(units)
    }
}

impl Default for MigrationParams {
    fn default() -> Self {
        Self::gno_defaults()
    }
}
