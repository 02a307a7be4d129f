//! Commission calculator.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::number::to_ascii_digits;

/// Amount of money that makes up one unit.
const UNIT_DIVISOR: Decimal = dec!(1600);
/// Share of a unit paid out as commission pool.
const POOL_SHARE: Decimal = dec!(0.04);
/// Exchange multiplier applied to the final figure.
const EXCHANGE_MULTIPLIER: Decimal = dec!(4.7);

/// Commission tier picked from the `/comm` keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommissionKind {
    Killer,
    Deposit,
    M1,
}

impl CommissionKind {
    pub const ALL: [Self; 3] = [Self::Killer, Self::Deposit, Self::M1];

    /// Share of the commission pool for this tier.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Killer => dec!(0.45),
            Self::Deposit => dec!(0.3),
            Self::M1 => dec!(0.25),
        }
    }

    /// Short code used in callback data.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Killer => "killer",
            Self::Deposit => "deposit",
            Self::M1 => "m1",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Name shown in results.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Killer => "Killer",
            Self::Deposit => "Deposit (M2)",
            Self::M1 => "M1",
        }
    }

    /// Commission earned on `amount`.
    #[must_use]
    pub fn commission(self, amount: Decimal) -> Decimal {
        amount / UNIT_DIVISOR * POOL_SHARE * self.rate() * EXCHANGE_MULTIPLIER
    }
}

/// Render a commission with four decimal places.
#[must_use]
pub fn format_commission(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.4}")
}

/// Error returned for input that is not an amount of money.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAmount(pub String);

impl std::fmt::Display for InvalidAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid amount `{}`", self.0)
    }
}

impl std::error::Error for InvalidAmount {}

/// Parse an amount typed by a user. Thousands separators are ignored and
/// Myanmar digits are accepted.
pub fn parse_amount(text: &str) -> Result<Decimal, InvalidAmount> {
    let cleaned = to_ascii_digits(text).replace(',', "");
    let cleaned = cleaned.trim();
    Decimal::from_str(cleaned).map_err(|_| InvalidAmount(text.trim().to_string()))
}
