use crate::error::PricingError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency amount held as integer cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units. Only meant for constants; use `checked_mul` for
    /// user-driven values.
    pub const fn from_units(units: u64) -> Self {
        Self(units * 100)
    }

    pub fn to_cents(self) -> u64 {
        self.0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }

    /// `self × factor × percent / 100`, rounded half-up to the cent.
    pub fn mul_percent(self, factor: u64, percent: u8) -> Option<Amount> {
        let scaled = self
            .to_decimal()
            .checked_mul(Decimal::from(factor))?
            .checked_mul(Decimal::from(percent))?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Self::from_rounded(scaled, RoundingStrategy::MidpointAwayFromZero)
    }

    /// `self × percent / 100`, floored to the cent.
    pub fn percent_floor(self, percent: u8) -> Option<Amount> {
        let scaled = self
            .to_decimal()
            .checked_mul(Decimal::from(percent))?
            .checked_div(Decimal::ONE_HUNDRED)?;
        Self::from_rounded(scaled, RoundingStrategy::ToZero)
    }

    fn from_rounded(value: Decimal, strategy: RoundingStrategy) -> Option<Amount> {
        if value.is_sign_negative() && !value.is_zero() {
            return None;
        }
        value
            .round_dp_with_strategy(2, strategy)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_u64()
            .map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PricingError;

    /// Digits past the second decimal place round half-up.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PricingError::unit_price(format!("negative amount '{}'", value)));
        }
        Self::from_rounded(value, RoundingStrategy::MidpointAwayFromZero)
            .ok_or_else(|| PricingError::unit_price(format!("amount '{}' too large", value)))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.to_decimal()
    }
}

impl FromStr for Amount {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| PricingError::unit_price(format!("malformed amount '{}': {}", s, e)))?;
        Amount::try_from(value)
    }
}

/// Billing period of a lottery subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Monthly,
    Yearly,
}

impl Period {
    pub fn label(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    /// Periods this one projects onto, with the multiplier, itself first.
    pub fn projections(self) -> &'static [(Period, u64)] {
        match self {
            Period::Daily => &[
                (Period::Daily, 1),
                (Period::Monthly, 30),
                (Period::Yearly, 365),
            ],
            Period::Monthly => &[(Period::Monthly, 1), (Period::Yearly, 12)],
            Period::Yearly => &[(Period::Yearly, 1)],
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
