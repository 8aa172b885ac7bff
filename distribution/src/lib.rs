//! Turning source balances into genesis allocations.
//!
//! `Amount(a) = Supply × 10^6 × Weight(a) / Σ Weight`
//!
//! This crate handles:
//! - Weight qualification from a single configured denomination
//! - Proportional allocation at full 18-digit precision
//! - Dust accounting for whole-unit truncation
//! - The end-to-end engine pairing allocations with target-chain addresses

pub mod distribute;
pub mod engine;
pub mod error;
pub mod qualify;

pub use distribute::{distribute, DistributionSummary};
pub use engine::{Distribution, DistributionEngine};
pub use error::DistributionError;
pub use qualify::{account_weight, qualify, Qualified};
