//! Opening ledger files, transparently decompressing `.gz`.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Whether `path` names a gzip-compressed ledger.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// A buffered ledger source. Owns its file handle; dropping it closes the
/// file together with any decoder state.
pub enum LedgerReader {
    Plain(BufReader<File>),
    Gzip(BufReader<MultiGzDecoder<File>>),
}

/// Open a ledger for reading, decompressing when the path ends in `.gz`.
pub fn open_ledger(path: &Path) -> io::Result<LedgerReader> {
    let file = File::open(path)?;
    Ok(if is_gzip_path(path) {
        LedgerReader::Gzip(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        LedgerReader::Plain(BufReader::new(file))
    })
}

impl Read for LedgerReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Plain(r) => r.read(buf),
            Self::Gzip(r) => r.read(buf),
        }
    }
}

impl BufRead for LedgerReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Plain(r) => r.fill_buf(),
            Self::Gzip(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Plain(r) => r.consume(amt),
            Self::Gzip(r) => r.consume(amt),
        }
    }
}
