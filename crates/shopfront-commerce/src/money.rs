//! Money type and display formatting.
//!
//! Amounts are non-negative integers in the smallest unit of the currency,
//! so cart arithmetic never rounds. Formatting is the only place a currency's
//! decimal places and separators matter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₫").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            _ => 2,
        }
    }

    fn group_separator(&self) -> char {
        match self {
            Currency::USD => ',',
            Currency::VND | Currency::EUR => '.',
        }
    }

    fn decimal_separator(&self) -> char {
        match self {
            Currency::USD => '.',
            Currency::VND | Currency::EUR => ',',
        }
    }

    fn symbol_after(&self) -> bool {
        matches!(self, Currency::VND | Currency::EUR)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_uppercase().as_str() {
            "VND" => Ok(Currency::VND),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            _ => Err(CommerceError::InvalidCurrency(code.to_string())),
        }
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: u64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Format as a display string (e.g., "49.000 ₫", "$10.99").
    pub fn display(&self) -> String {
        let currency = self.currency;
        let places = currency.decimal_places();
        let divisor = 10_u64.pow(places);

        let mut amount = group_digits(self.amount_minor / divisor, currency.group_separator());
        if places > 0 {
            amount.push(currency.decimal_separator());
            amount.push_str(&format!(
                "{:0width$}",
                self.amount_minor % divisor,
                width = places as usize
            ));
        }

        if currency.symbol_after() {
            format!("{} {}", amount, currency.symbol())
        } else {
            format!("{}{}", currency.symbol(), amount)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Turns an amount in minor units into display text.
pub trait MoneyFormatter {
    /// Format `amount_minor` for display.
    fn format(&self, amount_minor: u64) -> String;
}

impl MoneyFormatter for Currency {
    fn format(&self, amount_minor: u64) -> String {
        Money::new(amount_minor, *self).display()
    }
}

impl<F> MoneyFormatter for F
where
    F: Fn(u64) -> String,
{
    fn format(&self, amount_minor: u64) -> String {
        self(amount_minor)
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vnd_display() {
        assert_eq!(Money::new(49000, Currency::VND).display(), "49.000 \u{20ab}");
        assert_eq!(Money::new(1_990_000, Currency::VND).display(), "1.990.000 \u{20ab}");
        assert_eq!(Money::new(0, Currency::VND).display(), "0 \u{20ab}");
    }

    #[test]
    fn test_usd_display() {
        assert_eq!(Money::new(1099, Currency::USD).display(), "$10.99");
        assert_eq!(Money::new(100_000, Currency::USD).display(), "$1,000.00");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
    }

    #[test]
    fn test_eur_display() {
        assert_eq!(Money::new(100_050, Currency::EUR).display(), "1.000,50 \u{20ac}");
    }

    #[test]
    fn test_currency_formatter() {
        assert_eq!(Currency::VND.format(10000), "10.000 \u{20ab}");
    }

    #[test]
    fn test_closure_formatter() {
        let plain = |amount: u64| format!("{} units", amount);
        assert_eq!(plain.format(7), "7 units");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("vnd".parse::<Currency>().unwrap(), Currency::VND);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::USD);
        assert!("XYZ".parse::<Currency>().is_err());
    }
}
