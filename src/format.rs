//! Display Formatting
//!
//! Currency and date rendering for the payments table.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// `$1,234.50`; negatives as `-$12.00`
pub fn currency(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// `Nov 30, 2026`
pub fn date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(&Decimal::new(123450, 2)), "$1,234.50");
        assert_eq!(currency(&Decimal::new(100000000, 2)), "$1,000,000.00");
        assert_eq!(currency(&Decimal::new(5, 0)), "$5.00");
    }

    #[test]
    fn test_currency_rounding_and_sign() {
        assert_eq!(currency(&Decimal::new(12345, 3)), "$12.35");
        assert_eq!(currency(&Decimal::new(-1200, 2)), "-$12.00");
        assert_eq!(currency(&Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2026, 11, 3).unwrap();
        assert_eq!(date(&d), "Nov 3, 2026");
    }
}
