//! Writing genesis balances as ledger lines.

use consolidate_types::{Decimal, GenesisBalance, U256};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::LedgerError;
use crate::reader::is_gzip_path;
use crate::record::BalanceRecord;

/// What a finished writer produced. `total` is the grand total the ledger
/// must sum to when read back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReport {
    pub records: u64,
    pub total: Decimal,
}

/// Streams balances into `out`, one line each, amounts truncated to whole
/// smallest units.
pub struct LedgerWriter<W: Write> {
    out: W,
    unit_suffix: String,
    records: u64,
    total: U256,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(out: W, unit_suffix: impl Into<String>) -> Self {
        Self {
            out,
            unit_suffix: unit_suffix.into(),
            records: 0,
            total: U256::zero(),
        }
    }

    pub fn write_balance(&mut self, balance: &GenesisBalance) -> Result<(), LedgerError> {
        let record = BalanceRecord {
            source_address: &balance.source_address,
            target_address: &balance.target_address,
            amount: balance.whole_units(),
            unit: &self.unit_suffix,
        };
        writeln!(self.out, "{record}")?;
        self.total = self
            .total
            .checked_add(record.amount)
            .ok_or(LedgerError::Overflow {
                line: self.records + 1,
            })?;
        self.records += 1;
        Ok(())
    }

    pub fn write_all(&mut self, balances: &[GenesisBalance]) -> Result<(), LedgerError> {
        balances.iter().try_for_each(|b| self.write_balance(b))
    }

    /// Flush and hand back the underlying writer with the report.
    pub fn finish(mut self) -> Result<(WriteReport, W), LedgerError> {
        self.out.flush()?;
        let report = WriteReport {
            records: self.records,
            total: Decimal::from_integer(self.total).map_err(|_| LedgerError::Overflow {
                line: self.records,
            })?,
        };
        Ok((report, self.out))
    }
}

/// A ledger file destination, gzip-compressed or plain.
pub enum LedgerSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl LedgerSink {
    /// Write the gzip trailer, if any, and flush to disk.
    pub fn close(self) -> io::Result<()> {
        let mut inner = match self {
            Self::Plain(w) => w,
            Self::Gzip(encoder) => encoder.finish()?,
        };
        inner.flush()?;
        inner.get_ref().sync_all()
    }
}

impl Write for LedgerSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// Create a ledger file, gzip-compressed when the path ends in `.gz`.
pub fn create_ledger(
    path: &Path,
    unit_suffix: impl Into<String>,
) -> Result<LedgerWriter<LedgerSink>, LedgerError> {
    let file = BufWriter::new(File::create(path)?);
    let sink = if is_gzip_path(path) {
        LedgerSink::Gzip(GzEncoder::new(file, Compression::default()))
    } else {
        LedgerSink::Plain(file)
    };
    Ok(LedgerWriter::new(sink, unit_suffix))
}

impl LedgerWriter<LedgerSink> {
    /// Finish the file and report what was written.
    pub fn close(self) -> Result<WriteReport, LedgerError> {
        let (report, sink) = self.finish()?;
        sink.close()?;
        info!(records = report.records, total = %report.total, "ledger written");
        Ok(report)
    }
}
