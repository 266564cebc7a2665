//! Money value object (smallest currency unit).

use core::iter::Sum;
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_object::ValueObject;

/// Non-negative amount of money in cents.
///
/// Arithmetic saturates instead of wrapping; a till never gets near `u64::MAX`
/// cents, but a corrupt log must not be able to panic the aggregator.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units at `self` each.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Plain decimal rendering without currency symbol (`6.00`), as persisted.
    pub fn to_decimal_string(self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,
    #[error("amount must not be negative")]
    Negative,
    #[error("amount has more than two decimal places: {0}")]
    TooPrecise(String),
    #[error("not a valid amount: {0}")]
    Invalid(String),
    #[error("amount is too large: {0}")]
    Overflow(String),
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Accepts `4`, `4.5`, `4.50` and `$4.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let digits = raw.strip_prefix('$').unwrap_or(raw).trim();
        if digits.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        if digits.starts_with('-') {
            return Err(MoneyParseError::Negative);
        }

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (digits, None),
        };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) {
            return Err(MoneyParseError::Invalid(raw.to_string()));
        }

        let frac_cents = match frac {
            None => 0,
            Some(f) if !all_digits(f) => return Err(MoneyParseError::Invalid(raw.to_string())),
            Some(f) if f.len() > 2 => return Err(MoneyParseError::TooPrecise(raw.to_string())),
            Some(f) if f.len() == 1 => u64::from(f.as_bytes()[0] - b'0') * 10,
            Some(f) => u64::from(f.as_bytes()[0] - b'0') * 10 + u64::from(f.as_bytes()[1] - b'0'),
        };

        let overflow = || MoneyParseError::Overflow(raw.to_string());
        let whole: u64 = whole.parse().map_err(|_| overflow())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(overflow)?;

        Ok(Money(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_dollar_sign_and_two_decimals() {
        assert_eq!(Money::from_cents(600).to_string(), "$6.00");
        assert_eq!(Money::from_cents(525).to_string(), "$5.25");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(600).to_decimal_string(), "6.00");
    }

    #[test]
    fn parses_common_shapes() {
        assert_eq!("4".parse::<Money>().unwrap(), Money::from_cents(400));
        assert_eq!("4.5".parse::<Money>().unwrap(), Money::from_cents(450));
        assert_eq!("4.50".parse::<Money>().unwrap(), Money::from_cents(450));
        assert_eq!(" $5.75 ".parse::<Money>().unwrap(), Money::from_cents(575));
        assert_eq!("0.05".parse::<Money>().unwrap(), Money::from_cents(5));
    }

    #[test]
    fn rejects_bad_amounts() {
        assert_eq!("".parse::<Money>().unwrap_err(), MoneyParseError::Empty);
        assert_eq!("$".parse::<Money>().unwrap_err(), MoneyParseError::Empty);
        assert_eq!("-1.00".parse::<Money>().unwrap_err(), MoneyParseError::Negative);
        assert!(matches!("4.505".parse::<Money>(), Err(MoneyParseError::TooPrecise(_))));
        assert!(matches!("4.".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(".5".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!("four".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!("1e3".parse::<Money>(), Err(MoneyParseError::Invalid(_))));
        assert!(matches!(
            "999999999999999999999".parse::<Money>(),
            Err(MoneyParseError::Overflow(_))
        ));
    }

    #[test]
    fn arithmetic_saturates() {
        let max = Money::from_cents(u64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(max.times(2), max);
        assert_eq!(Money::from_cents(300).times(2), Money::from_cents(600));
    }

    #[test]
    fn serializes_as_bare_cents() {
        let json = serde_json::to_string(&Money::from_cents(425)).unwrap();
        assert_eq!(json, "425");
    }

    proptest! {
        #[test]
        fn persisted_form_parses_back(cents in 0u64..10_000_000_000) {
            let money = Money::from_cents(cents);
            prop_assert_eq!(money.to_decimal_string().parse::<Money>().unwrap(), money);
            prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }

        #[test]
        fn sum_matches_cent_arithmetic(amounts in proptest::collection::vec(0u64..100_000, 0..50)) {
            let total: Money = amounts.iter().map(|c| Money::from_cents(*c)).sum();
            prop_assert_eq!(total.cents(), amounts.iter().sum::<u64>());
        }
    }
}
