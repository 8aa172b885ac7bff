//! Balance line codec: `<source>:<target>=<amount><unit>`.

use consolidate_types::amount::parse_integer;
use consolidate_types::U256;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected <source>:<target>=<amount><unit>")]
    MalformedRecord,

    #[error("malformed amount {0:?}")]
    MalformedAmount(String),
}

/// One ledger line, borrowing from the text it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceRecord<'a> {
    pub source_address: &'a str,
    pub target_address: &'a str,
    /// Whole smallest units.
    pub amount: U256,
    pub unit: &'a str,
}

impl<'a> BalanceRecord<'a> {
    /// Parse a line without its terminator.
    ///
    /// The line must split into exactly two fields on `:` and the second into
    /// exactly two on `=`. The amount must carry `unit` and be a plain
    /// unsigned integer.
    pub fn parse(line: &'a str, unit: &'a str) -> Result<Self, RecordError> {
        let mut fields = line.split(':');
        let (source_address, rest) = match (fields.next(), fields.next(), fields.next()) {
            (Some(source), Some(rest), None) => (source, rest),
            _ => return Err(RecordError::MalformedRecord),
        };

        let mut parts = rest.split('=');
        let (target_address, amount_field) = match (parts.next(), parts.next(), parts.next()) {
            (Some(target), Some(amount), None) => (target, amount),
            _ => return Err(RecordError::MalformedRecord),
        };
        if source_address.is_empty() || target_address.is_empty() {
            return Err(RecordError::MalformedRecord);
        }

        let digits = amount_field
            .strip_suffix(unit)
            .ok_or_else(|| RecordError::MalformedAmount(amount_field.to_string()))?;
        let amount = parse_integer(digits)
            .map_err(|_| RecordError::MalformedAmount(amount_field.to_string()))?;

        Ok(Self {
            source_address,
            target_address,
            amount,
            unit,
        })
    }
}

impl fmt::Display for BalanceRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}={}{}",
            self.source_address, self.target_address, self.amount, self.unit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "cosmos10008uvk6fj3ja05u092ya5sx6fn355wavael4j:g10008uvk6fj3ja05u092ya5sx6fn355walp9u5k=3204884ugnot";

    #[test]
    fn parses_reference_line() {
        let record = BalanceRecord::parse(LINE, "ugnot").unwrap();
        assert_eq!(
            record.source_address,
            "cosmos10008uvk6fj3ja05u092ya5sx6fn355wavael4j"
        );
        assert_eq!(
            record.target_address,
            "g10008uvk6fj3ja05u092ya5sx6fn355walp9u5k"
        );
        assert_eq!(record.amount, U256::from(3_204_884u64));
        assert_eq!(record.to_string(), LINE);
    }

    #[test]
    fn rejects_wrong_field_counts() {
        for bad in [
            "no-separators",
            "a:b",
            "a:b=1=2ugnot",
            "a:b:c=1ugnot",
            ":b=1ugnot",
            "a:=1ugnot",
            "",
        ] {
            assert_eq!(
                BalanceRecord::parse(bad, "ugnot"),
                Err(RecordError::MalformedRecord),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn rejects_bad_amounts() {
        for (bad, field) in [
            ("a:b=12ugno", "12ugno"),
            ("a:b=12", "12"),
            ("a:b=ugnot", "ugnot"),
            ("a:b=-5ugnot", "-5ugnot"),
            ("a:b=1.5ugnot", "1.5ugnot"),
        ] {
            assert_eq!(
                BalanceRecord::parse(bad, "ugnot"),
                Err(RecordError::MalformedAmount(field.to_string())),
                "{bad:?}"
            );
        }
    }
}
