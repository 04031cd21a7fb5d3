//! Number and currency text used by KPI tiles, chart axes, tooltips and table rows.
//!
//! Rounding is half-up (midpoint away from zero) everywhere, so `2.5` becomes
//! `3` and `1.25` at one decimal becomes `1.3`. Grouping follows `en-US`:
//! comma thousands separator, at most three fraction digits.

use rust_decimal::prelude::*;
use rusty_money::iso;
use tracing::warn;

use crate::error::{DashboardError, Result};

/// An ISO-4217 currency resolved through the currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    code: &'static str,
}

impl Default for Currency {
    fn default() -> Self {
        Self { code: "RWF" }
    }
}

impl Currency {
    pub fn from_code(code: &str) -> Result<Self> {
        iso::find(&code.trim().to_uppercase())
            .map(|currency| Self {
                code: currency.iso_alpha_code,
            })
            .ok_or_else(|| DashboardError::malformed(format!("unknown currency code: {}", code)))
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// `"RWF 1,250"` style label for an exact amount.
    pub fn amount(&self, value: u64) -> String {
        format!("{} {}", self.code, group_digits(value))
    }

    pub fn prefixed(&self, text: &str) -> String {
        format!("{} {}", self.code, text)
    }
}

pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// `round(part / whole * 100)`, or `None` when `whole` is zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Option<u32> {
    if whole.is_zero() {
        return None;
    }
    round_half_up(part * Decimal::ONE_HUNDRED / whole, 0).to_u32()
}

/// `None` for NaN, infinities and magnitudes beyond the decimal range.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    let decimal = Decimal::from_f64(value);
    if decimal.is_none() {
        warn!("{} is outside the decimal range, formatting as float", value);
    }
    decimal
}

/// `value / divisor` with a fixed number of fraction digits, half-up.
pub fn scaled(value: f64, divisor: u32, decimals: u32) -> String {
    match decimal_from_f64(value) {
        Some(decimal) => fixed(decimal / Decimal::from(divisor), decimals),
        None => format!("{:.*}", decimals as usize, value / f64::from(divisor)),
    }
}

/// Inserts a comma between every group of three integer digits.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Grouped rendering of an arbitrary number, keeping up to three fraction digits.
pub fn grouped_number(value: f64) -> String {
    let Some(decimal) = decimal_from_f64(value) else {
        return value.to_string();
    };
    let rounded = round_half_up(decimal, 3).normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };
    let whole = whole
        .parse::<u64>()
        .map(group_digits)
        .unwrap_or_else(|_| whole.to_string());

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&whole);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Shortest plain rendering of a number: `500`, `12.5`, no grouping.
pub fn plain_number(value: f64) -> String {
    let Some(decimal) = decimal_from_f64(value) else {
        return value.to_string();
    };
    let normalized = decimal.normalize();
    if normalized.is_zero() {
        "0".to_string()
    } else {
        normalized.to_string()
    }
}

/// Fixed-decimal rendering after half-up rounding: `fixed(1.25, 1) == "1.3"`.
pub fn fixed(value: Decimal, decimals: u32) -> String {
    let rounded = round_half_up(value, decimals);
    format!("{:.*}", decimals as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1234567), "1,234,567");
    }

    #[test]
    fn test_grouped_number_keeps_three_fraction_digits() {
        assert_eq!(grouped_number(1234567.0), "1,234,567");
        assert_eq!(grouped_number(1234.5), "1,234.5");
        assert_eq!(grouped_number(0.12345), "0.123");
        assert_eq!(grouped_number(-2500.0), "-2,500");
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(fixed(Decimal::new(25, 1), 0), "3");
        assert_eq!(fixed(Decimal::new(125, 2), 1), "1.3");
        assert_eq!(fixed(Decimal::from(2), 1), "2.0");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(Decimal::from(2), Decimal::from(3)), Some(67));
        assert_eq!(percentage(Decimal::from(1), Decimal::from(8)), Some(13));
        assert_eq!(percentage(Decimal::from(5), Decimal::ZERO), None);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(plain_number(500.0), "500");
        assert_eq!(plain_number(12.5), "12.5");
        assert_eq!(plain_number(0.0), "0");
    }

    #[test]
    fn test_out_of_range_values_fall_back_to_float_text() {
        assert_eq!(decimal_from_f64(f64::NAN), None);
        assert_eq!(scaled(2_500.0, 1_000, 0), "3");

        let huge = scaled(1e30, 1_000_000, 1);
        let parsed: f64 = huge.parse().unwrap();
        assert!((parsed / 1e24 - 1.0).abs() < 1e-9, "got {}", huge);
        assert_eq!(plain_number(f64::INFINITY), "inf");
        assert_ne!(grouped_number(1e30), "0");
    }

    #[test]
    fn test_currency_lookup() {
        let currency = Currency::from_code("rwf").unwrap();
        assert_eq!(currency.code(), "RWF");
        assert_eq!(currency.amount(1250000), "RWF 1,250,000");
        assert!(Currency::from_code("NOPE").is_err());
    }
}
