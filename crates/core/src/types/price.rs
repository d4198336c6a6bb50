//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront prices everything in Litecoin and displays amounts with
//! six fractional digits, so prices never go through floating point.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Currency the amount is denominated in.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::LTC)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Format for display, e.g. `20.000000 Ł`.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.6} {}", self.amount, self.currency_code.symbol())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Currency codes accepted by the payment side of the orders service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    LTC,
    BTC,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::LTC => "Ł",
            Self::BTC => "₿",
        }
    }

    /// The wire code for this currency.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LTC => "LTC",
            Self::BTC => "BTC",
        }
    }
}
