//! End-to-end distribution engine.

use consolidate_types::{
    Account, AddressConverter, Allocation, Decimal, GenesisBalance, MigrationParams,
};
use tracing::info;

use crate::distribute::DistributionSummary;
use crate::error::DistributionError;
use crate::qualify::{qualify, Qualified};

/// Result of a full run: balances in input order plus their summary.
#[derive(Clone, Debug)]
pub struct Distribution {
    pub balances: Vec<GenesisBalance>,
    pub summary: DistributionSummary,
}

/// The distribution engine. Qualifies accounts, allocates the supply and
/// maps every allocation to its target-chain address.
///
/// Each stage returns a fresh collection so intermediate results can be
/// inspected or replayed independently.
pub struct DistributionEngine {
    params: MigrationParams,
    converter: AddressConverter,
}

impl DistributionEngine {
    pub fn new(params: MigrationParams) -> Self {
        let converter = AddressConverter::from_params(&params);
        Self { params, converter }
    }

    pub fn params(&self) -> &MigrationParams {
        &self.params
    }

    pub fn qualify(&self, accounts: &[Account]) -> Result<Qualified, DistributionError> {
        qualify(accounts, &self.params.qualifying_denom)
    }

    pub fn distribute(&self, qualified: &Qualified) -> Result<Vec<Allocation>, DistributionError> {
        qualified.distribute(self.distributable()?)
    }

    /// Pair each allocation with its converted address.
    ///
    /// The first address that fails to convert aborts the batch; skipping it
    /// would silently drop a recipient.
    pub fn genesis_balances(
        &self,
        allocations: &[Allocation],
    ) -> Result<Vec<GenesisBalance>, DistributionError> {
        allocations
            .iter()
            .map(|allocation| -> Result<GenesisBalance, DistributionError> {
                Ok(GenesisBalance {
                    target_address: self.converter.convert(&allocation.address)?,
                    source_address: allocation.address.clone(),
                    amount: allocation.amount,
                })
            })
            .collect()
    }

    /// Run the whole pipeline over `accounts`.
    pub fn run(&self, accounts: &[Account]) -> Result<Distribution, DistributionError> {
        let qualified = self.qualify(accounts)?;
        info!(
            accounts = qualified.accounts.len(),
            eligible = qualified.eligible_count(),
            total_weight = %qualified.total_weight,
            denom = %self.params.qualifying_denom,
            "qualified accounts"
        );

        let allocations = self.distribute(&qualified)?;
        let summary = DistributionSummary::from_allocations(self.distributable()?, &allocations)?;
        info!(
            distributable = %summary.distributable,
            allocated = %summary.allocated,
            truncated_total = %summary.truncated_total,
            dust = %summary.dust,
            "distributed supply"
        );

        let balances = self.genesis_balances(&allocations)?;
        Ok(Distribution { balances, summary })
    }

    /// The distributable supply for this engine's parameters.
    pub fn distributable(&self) -> Result<Decimal, DistributionError> {
        Ok(self.params.distributable()?)
    }
}
