//! Money with precise decimal arithmetic
//!
//! All invoice amounts are US dollars, so `Money` wraps a bare
//! [`rust_decimal::Decimal`] instead of carrying a currency tag. Arithmetic is
//! exact; rounding happens only at the presentation boundary
//! ([`Money::format_currency`]), never inside a calculation, so recomputing
//! derived values from the same inputs is byte-identical.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// A monetary amount in US dollars
///
/// The wrapped decimal is stored exactly as computed. Use
/// [`Money::rounded_to_cents`] or [`Money::format_currency`] when a
/// two-decimal presentation value is needed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates Money from a whole-dollar amount
    pub fn from_major(dollars: i64) -> Self {
        Self(Decimal::new(dollars, 0))
    }

    /// Creates Money from an integer amount of cents
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Rounds to whole cents, half away from zero
    pub fn rounded_to_cents(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Multiplies by a scalar (e.g., for rate calculations)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(self.0 * factor)
    }

    /// Renders the amount as es-EC currency: `$` symbol, dot-grouped
    /// thousands, comma decimal separator, exactly two fraction digits
    /// (`$1.234,56`).
    pub fn format_currency(&self) -> String {
        let rounded = self.rounded_to_cents().0.abs();
        let plain = format!("{:.2}", rounded);
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, ch) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if self.rounded_to_cents().is_negative() {
            "-"
        } else {
            ""
        };
        format!("{sign}${grouped},{fraction}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_currency())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, factor: Decimal) -> Self {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// A percentage rate, e.g. the 15% VAT applied to fees and excess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.15 for 15%)
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage (e.g., 15.0 for 15%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self(percentage / dec!(100))
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Applies this rate to a money amount
    pub fn apply(&self, money: Money) -> Money {
        money.multiply(self.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * dec!(100))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_associative(
            a in -1_000_000i64..1_000_000i64,
            b in -1_000_000i64..1_000_000i64,
            c in -1_000_000i64..1_000_000i64
        ) {
            let ma = Money::from_cents(a);
            let mb = Money::from_cents(b);
            let mc = Money::from_cents(c);

            prop_assert_eq!((ma + mb) + mc, ma + (mb + mc));
        }

        #[test]
        fn formatting_never_mutates(amount in -1_000_000_000i64..1_000_000_000i64) {
            let m = Money::from_cents(amount);
            let before = m.amount();
            let _ = m.format_currency();
            prop_assert_eq!(m.amount(), before);
        }
    }
}
