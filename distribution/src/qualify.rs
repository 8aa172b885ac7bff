//! Weight qualification.
//!
//! An account's weight is the sum of its coins in the qualifying
//! denomination. Every other denomination is ignored, including ones that
//! look related (`duatom` next to `uatom`).

use consolidate_types::amount::parse_integer;
use consolidate_types::{Account, ConsolidateError, Weight, WeightedAccount};

use crate::error::DistributionError;

/// Weighted accounts in input order, plus their total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Qualified {
    pub accounts: Vec<WeightedAccount>,
    pub total_weight: Weight,
}

impl Qualified {
    /// Number of accounts with non-zero weight.
    pub fn eligible_count(&self) -> usize {
        self.accounts.iter().filter(|a| !a.weight.is_zero()).count()
    }
}

/// Sum the qualifying-denomination coins of one account.
pub fn account_weight(account: &Account, denom: &str) -> Result<Weight, DistributionError> {
    account
        .coins
        .iter()
        .filter(|coin| coin.denom == denom)
        .try_fold(Weight::ZERO, |acc, coin| -> Result<Weight, DistributionError> {
            let overflow = || DistributionError::AmountOverflow {
                address: account.address.clone(),
                amount: coin.amount.clone(),
            };
            let amount = parse_integer(&coin.amount).map_err(|e| match e {
                ConsolidateError::Overflow => overflow(),
                _ => DistributionError::MalformedAmount {
                    address: account.address.clone(),
                    amount: coin.amount.clone(),
                },
            })?;
            acc.checked_add(Weight::new(amount)).ok_or_else(overflow)
        })
}

/// Derive weights for every account, preserving order. Accounts without a
/// qualifying coin stay in the set with weight zero.
pub fn qualify(accounts: &[Account], denom: &str) -> Result<Qualified, DistributionError> {
    let mut total_weight = Weight::ZERO;
    let mut weighted = Vec::with_capacity(accounts.len());

    for account in accounts {
        let weight = account_weight(account, denom)?;
        total_weight = total_weight
            .checked_add(weight)
            .ok_or(DistributionError::Overflow)?;
        weighted.push(WeightedAccount {
            address: account.address.clone(),
            weight,
        });
    }

    Ok(Qualified {
        accounts: weighted,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use consolidate_types::Coin;

    fn account(address: &str, coins: &[(&str, &str)]) -> Account {
        Account {
            address: address.to_string(),
            coins: coins.iter().map(|(a, d)| Coin::new(*a, *d)).collect(),
            vote: String::new(),
        }
    }

    #[test]
    fn only_qualifying_denom_counts() {
        let a = account("a", &[("455794000000", "uatom"), ("5083895000000", "duatom")]);
        assert_eq!(account_weight(&a, "uatom").unwrap(), Weight::from(455_794_000_000u64));
    }

    #[test]
    fn repeated_qualifying_coins_are_summed() {
        let a = account("a", &[("10", "uatom"), ("7", "ibc/27394FB"), ("5", "uatom")]);
        assert_eq!(account_weight(&a, "uatom").unwrap(), Weight::from(15u64));
    }

    #[test]
    fn unrelated_denoms_do_not_change_weight() {
        let plain = account("a", &[("100", "uatom")]);
        let rich = account("b", &[("100", "uatom"), ("999999", "duatom"), ("1", "uosmo")]);
        let q = qualify(&[plain, rich], "uatom").unwrap();
        assert_eq!(q.accounts[0].weight, q.accounts[1].weight);
        assert_eq!(q.total_weight, Weight::from(200u64));
    }

    #[test]
    fn account_without_qualifying_coin_keeps_zero_weight() {
        let q = qualify(
            &[account("a", &[("5", "duatom")]), account("b", &[("3", "uatom")])],
            "uatom",
        )
        .unwrap();
        assert_eq!(q.accounts.len(), 2);
        assert_eq!(q.accounts[0].address, "a");
        assert!(q.accounts[0].weight.is_zero());
        assert_eq!(q.total_weight, Weight::from(3u64));
        assert_eq!(q.eligible_count(), 1);
    }

    #[test]
    fn preserves_input_order() {
        let accounts: Vec<Account> = ["c", "a", "b"]
            .iter()
            .map(|addr| account(addr, &[("1", "uatom")]))
            .collect();
        let q = qualify(&accounts, "uatom").unwrap();
        let order: Vec<&str> = q.accounts.iter().map(|a| a.address.as_str()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn malformed_qualifying_amount_fails() {
        let a = account("cosmos1bad", &[("12.5", "uatom")]);
        assert_eq!(
            qualify(&[a], "uatom").unwrap_err(),
            DistributionError::MalformedAmount {
                address: "cosmos1bad".to_string(),
                amount: "12.5".to_string(),
            }
        );
    }

    #[test]
    fn oversized_amount_names_the_account() {
        let huge = format!("1{}", "0".repeat(80));
        let a = account("cosmos1huge", &[(huge.as_str(), "uatom")]);
        assert_eq!(
            account_weight(&a, "uatom").unwrap_err(),
            DistributionError::AmountOverflow {
                address: "cosmos1huge".to_string(),
                amount: huge.clone(),
            }
        );
    }

    #[test]
    fn accumulated_overflow_names_the_account() {
        const U256_MAX: &str =
            "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let a = account("cosmos1max", &[(U256_MAX, "uatom"), ("1", "uatom")]);
        assert_eq!(
            account_weight(&a, "uatom").unwrap_err(),
            DistributionError::AmountOverflow {
                address: "cosmos1max".to_string(),
                amount: "1".to_string(),
            }
        );
    }

    #[test]
    fn malformed_non_qualifying_amount_is_ignored() {
        let a = account("a", &[("1", "uatom"), ("garbage", "duatom")]);
        assert_eq!(account_weight(&a, "uatom").unwrap(), Weight::from(1u64));
    }

    #[test]
    fn empty_input_has_zero_total() {
        let q = qualify(&[], "uatom").unwrap();
        assert!(q.accounts.is_empty());
        assert!(q.total_weight.is_zero());
    }
}
