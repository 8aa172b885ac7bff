//! Amount types: integer weights and the fixed-point `Decimal`.
//!
//! Both are backed by 256-bit unsigned integers so that whole-ledger sums
//! never overflow a machine word. `Decimal` carries exactly
//! [`DECIMAL_PRECISION`] fractional digits and never touches floating point.

use crate::error::ConsolidateError;
use primitive_types::{U256, U512};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by [`Decimal`].
pub const DECIMAL_PRECISION: usize = 18;

/// `10^DECIMAL_PRECISION`, the number of atto-units in one whole unit.
fn scale() -> U256 {
    U256::exp10(DECIMAL_PRECISION)
}

/// Parse a non-negative base-10 integer with no sign, spaces or separators.
pub fn parse_integer(s: &str) -> Result<U256, ConsolidateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConsolidateError::MalformedAmount(s.to_string()));
    }
    U256::from_dec_str(s).map_err(|_| ConsolidateError::Overflow)
}

/// An account's eligibility weight, in source-chain smallest units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(U256);

impl Weight {
    pub const ZERO: Self = Self(U256([0; 4]));

    pub fn new(raw: U256) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<u64> for Weight {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl From<u128> for Weight {
    fn from(v: u128) -> Self {
        Self(U256::from(v))
    }
}

impl FromStr for Weight {
    type Err = ConsolidateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_integer(s).map(Self)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-point decimal with [`DECIMAL_PRECISION`] fractional digits.
///
/// Stored as an integer count of atto-units (`value × 10^18`). Addition is
/// exact; multiplication and division go through a 512-bit intermediate and
/// round once, half to even, at the last fractional digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(U256);

impl Decimal {
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Build from a raw atto-unit count.
    pub fn from_atto(atto: U256) -> Self {
        Self(atto)
    }

    /// The raw atto-unit count.
    pub fn atto(&self) -> U256 {
        self.0
    }

    /// Build from a whole integer value.
    pub fn from_integer(value: U256) -> Result<Self, ConsolidateError> {
        value
            .checked_mul(scale())
            .map(Self)
            .ok_or(ConsolidateError::Overflow)
    }

    /// Build from a weight, as a whole number of units.
    pub fn from_weight(weight: Weight) -> Result<Self, ConsolidateError> {
        Self::from_integer(weight.raw())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, ConsolidateError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(ConsolidateError::Overflow)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, ConsolidateError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(ConsolidateError::Overflow)
    }

    /// `self × rhs`, rounded half to even at the 18th fractional digit.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, ConsolidateError> {
        let product = self.0.full_mul(rhs.0);
        narrow(div_round_half_even(product, U512::from(scale())))
    }

    /// True division `self / rhs`, rounded half to even at the 18th fractional digit.
    pub fn checked_quo(self, rhs: Self) -> Result<Self, ConsolidateError> {
        if rhs.is_zero() {
            return Err(ConsolidateError::DivisionByZero);
        }
        let numerator = self.0.full_mul(scale());
        narrow(div_round_half_even(numerator, U512::from(rhs.0)))
    }

    /// Whole units, dropping every fractional digit.
    pub fn trunc(&self) -> U256 {
        self.0 / scale()
    }

    /// The fractional part alone.
    pub fn fract(&self) -> Self {
        Self(self.0 % scale())
    }
}

fn div_round_half_even(numerator: U512, denominator: U512) -> U512 {
    let (quotient, remainder) = numerator.div_mod(denominator);
    let twice = remainder + remainder;
    match twice.cmp(&denominator) {
        Ordering::Greater => quotient + U512::one(),
        Ordering::Equal if quotient.bit(0) => quotient + U512::one(),
        _ => quotient,
    }
}

fn narrow(wide: U512) -> Result<Decimal, ConsolidateError> {
    U256::try_from(wide)
        .map(Decimal)
        .map_err(|_| ConsolidateError::Overflow)
}

impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        // u64::MAX × 10^18 fits comfortably in 256 bits.
        Self(U256::from(v) * scale())
    }
}

impl FromStr for Decimal {
    type Err = ConsolidateError;

    /// Accepts `"123"` or `"123.456"` with at most 18 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConsolidateError::MalformedAmount(s.to_string());
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if frac.len() > DECIMAL_PRECISION || (s.contains('.') && frac.is_empty()) {
            return Err(malformed());
        }
        let whole = parse_integer(whole).map_err(|e| match e {
            ConsolidateError::Overflow => e,
            _ => malformed(),
        })?;
        let mut atto = whole.checked_mul(scale()).ok_or(ConsolidateError::Overflow)?;
        if !frac.is_empty() {
            let digits = parse_integer(frac).map_err(|_| malformed())?;
            let frac_atto = digits * U256::exp10(DECIMAL_PRECISION - frac.len());
            atto = atto.checked_add(frac_atto).ok_or(ConsolidateError::Overflow)?;
        }
        Ok(Self(atto))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = (self.0 % scale()).to_string();
        write!(
            f,
            "{}.{}{}",
            self.trunc(),
            "0".repeat(DECIMAL_PRECISION - frac.len()),
            frac
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().expect("valid decimal")
    }

    #[test]
    fn display_always_shows_eighteen_digits() {
        assert_eq!(Decimal::from(0u64).to_string(), "0.000000000000000000");
        assert_eq!(
            Decimal::from(699_999_999_676_645u64).to_string(),
            "699999999676645.000000000000000000"
        );
        assert_eq!(dec("1.5").to_string(), "1.500000000000000000");
        assert_eq!(
            Decimal::from_atto(U256::one()).to_string(),
            "0.000000000000000001"
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "-1", "1.", ".5", "1.2.3", "12a", " 1", "1.0000000000000000001"] {
            assert!(bad.parse::<Decimal>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn parse_integer_rejects_signs_and_blanks() {
        assert!(parse_integer("").is_err());
        assert!(parse_integer("+5").is_err());
        assert!(parse_integer("5 ").is_err());
        assert_eq!(parse_integer("0042").unwrap(), U256::from(42));
    }

    #[test]
    fn quo_is_true_division() {
        let third = Decimal::from(1u64).checked_quo(Decimal::from(3u64)).unwrap();
        assert_eq!(third.to_string(), "0.333333333333333333");
        let two_thirds = Decimal::from(2u64).checked_quo(Decimal::from(3u64)).unwrap();
        assert_eq!(two_thirds.to_string(), "0.666666666666666667");
    }

    #[test]
    fn quo_rounds_half_to_even() {
        let tiny = Decimal::from_atto(U256::from(5));
        // 0.000000000000000005 / 10 = 0.5 atto -> rounds to 0 (even)
        assert_eq!(tiny.checked_quo(Decimal::from(10u64)).unwrap(), Decimal::ZERO);
        let tiny = Decimal::from_atto(U256::from(15));
        // 1.5 atto -> rounds to 2 (even)
        assert_eq!(
            tiny.checked_quo(Decimal::from(10u64)).unwrap(),
            Decimal::from_atto(U256::from(2))
        );
    }

    #[test]
    fn quo_by_zero_fails() {
        assert_eq!(
            Decimal::from(1u64).checked_quo(Decimal::ZERO),
            Err(ConsolidateError::DivisionByZero)
        );
    }

    #[test]
    fn mul_of_integers_is_exact() {
        let product = Decimal::from(700_000_000_000_000u64)
            .checked_mul(Decimal::from(8_537_430_500_001u64))
            .unwrap();
        assert_eq!(product.trunc(), U256::from(5_976_201_350_000_700_000_000_000_000u128));
        assert!(product.fract().is_zero());
    }

    #[test]
    fn trunc_and_fract_split_value() {
        let d = dec("81.999999999999999999");
        assert_eq!(d.trunc(), U256::from(81));
        assert_eq!(d.fract(), dec("0.999999999999999999"));
    }

    #[test]
    fn add_overflow_is_reported() {
        let max = Decimal::from_atto(U256::MAX);
        assert_eq!(
            max.checked_add(Decimal::from_atto(U256::one())),
            Err(ConsolidateError::Overflow)
        );
    }

    #[test]
    fn weight_parses_large_values() {
        let w: Weight = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(w.to_string(), "123456789012345678901234567890");
        assert!("12.5".parse::<Weight>().is_err());
    }
}
