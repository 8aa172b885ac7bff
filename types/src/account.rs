//! Account records flowing through the migration pipeline.
//!
//! Each stage derives a new collection from the previous one; nothing here is
//! mutated after construction.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::amount::{Decimal, Weight};

/// A source-chain balance in one denomination. `amount` is a base-10 integer
/// string of arbitrary size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: String,
    pub denom: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            denom: denom.into(),
        }
    }
}

/// A source-chain account as exported from the snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
    /// Governance vote as recorded by the exporter. Carried, never interpreted.
    #[serde(default)]
    pub vote: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedAccount {
    pub address: String,
    pub weight: Weight,
}

/// An account's proportional share of the distributable supply, at full
/// precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub address: String,
    pub weight: Weight,
    pub amount: Decimal,
}

impl Allocation {
    /// The amount in whole smallest units, fractional digits dropped.
    pub fn whole_units(&self) -> U256 {
        self.amount.trunc()
    }
}

/// An allocation paired with the account's target-chain address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenesisBalance {
    pub source_address: String,
    pub target_address: String,
    pub amount: Decimal,
}

impl GenesisBalance {
    pub fn whole_units(&self) -> U256 {
        self.amount.trunc()
    }
}
