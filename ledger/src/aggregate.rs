//! Streaming aggregation of a ledger into its grand total.

use consolidate_types::{Decimal, MigrationParams};
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

use crate::error::LedgerError;
use crate::reader::open_ledger;
use crate::record::{BalanceRecord, RecordError};

/// Records between progress log lines.
const PROGRESS_INTERVAL: u64 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateReport {
    pub records: u64,
    pub total: Decimal,
}

/// Sums every amount in a ledger stream.
///
/// Reads one line at a time into a reused buffer, so memory stays constant
/// however long the ledger is. The first bad line aborts the pass.
#[derive(Clone, Debug)]
pub struct LedgerAggregator {
    unit_suffix: String,
}

impl LedgerAggregator {
    pub fn new(unit_suffix: impl Into<String>) -> Self {
        Self {
            unit_suffix: unit_suffix.into(),
        }
    }

    pub fn from_params(params: &MigrationParams) -> Self {
        Self::new(params.unit_suffix.clone())
    }

    pub fn aggregate<R: BufRead>(&self, mut reader: R) -> Result<AggregateReport, LedgerError> {
        let mut buf = Vec::new();
        let mut records = 0u64;
        let mut total = Decimal::ZERO;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            records += 1;

            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            let line = std::str::from_utf8(bytes).map_err(|_| LedgerError::MalformedRecord {
                line: records,
                record: String::from_utf8_lossy(bytes).into_owned(),
            })?;
            let record = BalanceRecord::parse(line, &self.unit_suffix).map_err(|e| match e {
                RecordError::MalformedRecord => LedgerError::MalformedRecord {
                    line: records,
                    record: line.to_string(),
                },
                RecordError::MalformedAmount(amount) => LedgerError::MalformedAmount {
                    line: records,
                    amount,
                },
            })?;

            total = Decimal::from_integer(record.amount)
                .and_then(|amount| total.checked_add(amount))
                .map_err(|_| LedgerError::Overflow { line: records })?;

            if records % PROGRESS_INTERVAL == 0 {
                debug!(records, total = %total, "aggregating ledger");
            }
        }

        info!(records, total = %total, "ledger aggregated");
        Ok(AggregateReport { records, total })
    }

    /// Aggregate a ledger file, gzip or plain. The file is closed when this
    /// returns, whether or not aggregation succeeded.
    pub fn aggregate_path(&self, path: &Path) -> Result<AggregateReport, LedgerError> {
        let reader = open_ledger(path)?;
        self.aggregate(reader)
    }
}
