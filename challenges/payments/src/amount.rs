use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use thiserror::Error;

/// A monetary amount held as an integer count of cents.
///
/// Negative values are representable: the search subtracts candidates from
/// the remaining target and the type does not police the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a decimal amount: {0:?}")]
pub struct ParseAmountError(pub String);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Amount {
        Amount(cents)
    }

    /// Scales a decimal value to cents with `round(value * 100)`.
    pub fn from_f64(value: f64) -> Result<Amount, ParseAmountError> {
        let scaled = (value * 100.0).round();
        // the cast below saturates, so reject anything it could not hold exactly.
        if !scaled.is_finite() || scaled.abs() >= i64::MAX as f64 {
            return Err(ParseAmountError(value.to_string()));
        }
        Ok(Amount(scaled as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|_| ParseAmountError(s.to_string()))?;
        Amount::from_f64(value).map_err(|_| ParseAmountError(s.to_string()))
    }
}

// 1210 renders as "12.10", -5 as "-0.05".
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 -= rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_scales_to_cents() {
        assert_eq!(1210, amount("12.10").cents());
        assert_eq!(7406, amount("74.06").cents());
        assert_eq!(10099, amount("100.99").cents());
        assert_eq!(1000000, amount("10000").cents());
        assert_eq!(0, amount("0.00").cents());
        // floats that land just under the cent still round to it
        assert_eq!(1709, amount("17.09").cents());
        assert_eq!(3423, amount("34.23").cents());
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!(1235, amount("12.346").cents());
        assert_eq!(1234, amount("12.344").cents());
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Amount>().is_err());
        assert!("12,10".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("NaN".parse::<Amount>().is_err());
        assert!("inf".parse::<Amount>().is_err());
        assert_eq!(
            Err(ParseAmountError("1e300".to_string())),
            "1e300".parse::<Amount>()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("12.10", Amount::from_cents(1210).to_string());
        assert_eq!("0.00", Amount::ZERO.to_string());
        assert_eq!("0.05", Amount::from_cents(5).to_string());
        assert_eq!("-0.05", Amount::from_cents(-5).to_string());
        assert_eq!("10000.00", Amount::from_cents(1_000_000).to_string());
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = amount("5.00");
        let b = amount("2.00");
        assert_eq!(amount("7.00"), a + b);
        assert_eq!(amount("3.00"), a - b);
        // subtraction may go below zero
        assert!((b - a).is_negative());
        assert!(b < a);
        assert!((a - a).is_zero());

        let mut c = a;
        c += b;
        c -= amount("0.50");
        assert_eq!(amount("6.50"), c);

        let total: Amount = [a, b, c].iter().sum();
        assert_eq!(amount("13.50"), total);
    }
}
