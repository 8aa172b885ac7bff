//! Proportional allocation of the distributable supply.

use consolidate_types::{Allocation, Decimal, Weight, WeightedAccount, U256};
use tracing::debug;

use crate::error::DistributionError;
use crate::qualify::Qualified;

/// Allocate `distributable` across `weighted` in proportion to weight.
///
/// Each amount is `distributable × weight / total_weight`: the product is
/// exact, then a single true division rounds at the 18th fractional digit.
/// Amounts are never truncated to whole units here.
pub fn distribute(
    weighted: &[WeightedAccount],
    total_weight: Weight,
    distributable: Decimal,
) -> Result<Vec<Allocation>, DistributionError> {
    if total_weight.is_zero() {
        return Err(DistributionError::NoQualifyingWeight);
    }
    let total = Decimal::from_weight(total_weight)?;

    let allocations = weighted
        .iter()
        .map(|account| -> Result<Allocation, DistributionError> {
            let amount = if account.weight.is_zero() {
                Decimal::ZERO
            } else {
                distributable
                    .checked_mul(Decimal::from_weight(account.weight)?)?
                    .checked_quo(total)?
            };
            Ok(Allocation {
                address: account.address.clone(),
                weight: account.weight,
                amount,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        accounts = allocations.len(),
        total_weight = %total_weight,
        distributable = %distributable,
        "allocated supply"
    );
    Ok(allocations)
}

impl Qualified {
    /// Distribute over this qualified set.
    pub fn distribute(&self, distributable: Decimal) -> Result<Vec<Allocation>, DistributionError> {
        distribute(&self.accounts, self.total_weight, distributable)
    }
}

/// Totals describing how a distribution renders in whole units.
///
/// `dust` is the shortfall left when every allocation is truncated to whole
/// smallest units. It is bounded by one unit per account and is reported,
/// not redistributed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionSummary {
    pub accounts: usize,
    pub funded_accounts: usize,
    pub distributable: Decimal,
    /// Full-precision sum of allocations.
    pub allocated: Decimal,
    /// Sum of allocations truncated to whole units.
    pub truncated_total: Decimal,
    pub dust: Decimal,
}

impl DistributionSummary {
    pub fn from_allocations(
        distributable: Decimal,
        allocations: &[Allocation],
    ) -> Result<Self, DistributionError> {
        let mut allocated = Decimal::ZERO;
        let mut truncated = U256::zero();
        let mut funded_accounts = 0;

        for allocation in allocations {
            allocated = allocated.checked_add(allocation.amount)?;
            let whole = allocation.whole_units();
            if !whole.is_zero() {
                funded_accounts += 1;
            }
            truncated = truncated
                .checked_add(whole)
                .ok_or(DistributionError::Overflow)?;
        }

        let truncated_total = Decimal::from_integer(truncated)?;
        let dust = distributable
            .checked_sub(truncated_total)
            .map_err(|_| DistributionError::Overflow)?;

        Ok(Self {
            accounts: allocations.len(),
            funded_accounts,
            distributable,
            allocated,
            truncated_total,
            dust,
        })
    }
}
