//! Fundamental types for the genesis balance migration.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account records, integer weights, the fixed-point `Decimal`, migration
//! parameters, and bech32 address transcoding.

pub mod account;
pub mod address;
pub mod amount;
pub mod error;
pub mod params;

pub use account::{Account, Allocation, Coin, GenesisBalance, WeightedAccount};
pub use address::{convert_address, AddressConverter};
pub use amount::{Decimal, Weight, DECIMAL_PRECISION};
pub use error::ConsolidateError;
pub use params::MigrationParams;
pub use primitive_types::U256;
