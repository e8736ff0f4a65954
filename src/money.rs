//! Money in fixed-point minor units.
//!
//! The catalog API serializes prices as decimal strings (`"25.00"`). They are
//! parsed once, rounded to two places and carried as integer céntimos so that
//! cart totals never drift.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;
use utoipa::ToSchema;

/// Display prefix for Peruvian soles, as rendered by `es-PE` currency formatting.
pub const CURRENCY_SYMBOL: &str = "S/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("invalid decimal amount {0:?}")]
    Invalid(String),

    #[error("amount {0} is out of range")]
    OutOfRange(String),
}

/// An amount in céntimos.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Converts a decimal amount, rounding half away from zero to two places.
    pub fn from_decimal(amount: Decimal) -> Result<Self, MoneyError> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.to_i64())
            .map(Self)
            .ok_or_else(|| MoneyError::OutOfRange(amount.to_string()))
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| MoneyError::Invalid(s.to_string()))?;
        Self::from_decimal(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        self.times(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Formats as `S/ 1,234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}{CURRENCY_SYMBOL} {grouped}.{cents:02}")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserializes a wire price given either as a decimal string or a JSON number.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    match DecimalRepr::deserialize(deserializer)? {
        DecimalRepr::Text(text) => text.parse().map_err(de::Error::custom),
        DecimalRepr::Integer(units) => units
            .checked_mul(100)
            .map(Money)
            .ok_or_else(|| de::Error::custom(MoneyError::OutOfRange(units.to_string()))),
        DecimalRepr::Float(value) => Decimal::try_from(value)
            .map_err(|_| de::Error::custom(MoneyError::Invalid(value.to_string())))
            .and_then(|amount| Money::from_decimal(amount).map_err(de::Error::custom)),
    }
}
