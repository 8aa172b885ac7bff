//! Genesis balance ledger.
//!
//! The ledger is a line-oriented text file, optionally gzip-compressed, with
//! one record per account:
//!
//! ```text
//! cosmos10008uvk6fj3ja05u092ya5sx6fn355wavael4j:g10008uvk6fj3ja05u092ya5sx6fn355walp9u5k=3204884ugnot
//! ```
//!
//! This crate writes that file from computed balances and re-reads it in a
//! single streaming pass to check that the written amounts add up to the
//! expected grand total.

pub mod aggregate;
pub mod error;
pub mod reader;
pub mod record;
pub mod verify;
pub mod writer;

pub use aggregate::{AggregateReport, LedgerAggregator};
pub use error::LedgerError;
pub use reader::{open_ledger, LedgerReader};
pub use record::{BalanceRecord, RecordError};
pub use verify::verify_conservation;
pub use writer::{create_ledger, LedgerSink, LedgerWriter, WriteReport};
